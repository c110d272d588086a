use hop_dp::error::{BrokenInvariant, Error};
use hop_dp::problems::AbsDiff;
use hop_dp::reconstruct::reconstruct;
use hop_dp::table::{build_table, DpTable};
use hop_dp::{CostModel, Offsets};

fn frog() -> AbsDiff {
    AbsDiff::from_heights(vec![30, 10, 60, 10, 60, 50]).unwrap()
}

#[test]
fn every_reached_entry_is_minimum_over_offsets() {
    let heights = vec![8, 3, 9, 1, 7, 7, 2, 6, 4, 0, 5, 9, 1];
    let model = AbsDiff::from_heights(heights).unwrap();
    for steps in [vec![1, 2], vec![2, 3], vec![1, 3, 6], vec![4]] {
        let offsets = Offsets::new(steps).unwrap();
        let table = build_table(&model, &offsets).unwrap();
        assert_eq!(table.cost(0), Some(0));
        assert_eq!(table.predecessor(0), None);
        for i in 1..table.len() {
            let best = offsets
                .predecessors(i)
                .filter_map(|j| table.cost(j).map(|c| c + model.cost(j, i) as u64))
                .min();
            assert_eq!(table.cost(i), best, "position {i}, offsets {offsets}");
            match table.predecessor(i) {
                Some(j) => {
                    assert!(offsets.as_slice().contains(&(i - j)));
                    assert_eq!(
                        table.cost(j).map(|c| c + model.cost(j, i) as u64),
                        table.cost(i)
                    );
                }
                None => assert!(!table.is_reached(i)),
            }
        }
    }
}

#[test]
fn reconstruct_from_built_table() {
    let table = build_table(&frog(), &Offsets::default()).unwrap();
    let path = reconstruct(table.predecessors(), table.terminal()).unwrap();
    assert_eq!(path, vec![0, 2, 4, 5]);
}

#[test]
fn corrupted_cycle_is_detected() {
    let table = DpTable::from_parts(
        vec![Some(0), Some(1), Some(2), Some(3)],
        vec![None, Some(3), Some(1), Some(2)],
    );
    let err = reconstruct(table.predecessors(), table.terminal()).unwrap_err();
    assert!(matches!(
        err,
        Error::BrokenInvariant(BrokenInvariant::NonDecreasingLink { at: 1, pred: 3 })
    ));
}

#[test]
fn terminal_outside_table_is_detected() {
    let err = reconstruct(&[None, Some(0)], 2).unwrap_err();
    assert!(matches!(
        err,
        Error::BrokenInvariant(BrokenInvariant::PredecessorOutOfRange { len: 2, .. })
    ));
}

#[test]
fn long_chain_reconstructs_without_hitting_bound() {
    let n = 10_000;
    let preds: Vec<Option<usize>> = (0..n).map(|i: usize| i.checked_sub(1)).collect();
    let path = reconstruct(&preds, n - 1).unwrap();
    assert_eq!(path.len(), n);
    assert!(path.windows(2).all(|w| w[0] + 1 == w[1]));
}
