//! Example: a closure-defined cost with wider hops.
//!
//! Run with:
//! `cargo run --example custom_cost`

use hop_dp::{
    problems::{FnCost, Positions},
    rolling, PathSolverBuilder,
};

fn main() {
    let positions = Positions::new(vec![3, 8, 1, 9, 4, 4, 7, 2, 6]).expect("non-empty");

    // Every landing has a fixed toll of 2 on top of the squared height gap.
    let model = FnCost::new(positions, |h, from, to| {
        let gap = h[to] - h[from];
        2 + gap * gap
    });

    let solver = PathSolverBuilder::new(model)
        .with_offsets([1, 2, 4])
        .build()
        .expect("offsets are positive");

    let solution = solver.run().expect("offset 1 reaches every position");
    let rolling_cost =
        rolling::min_cost(solver.model(), solver.offsets()).expect("same instance");

    println!("Offsets: {}", solver.offsets());
    println!("Table cost:   {}", solution.cost);
    println!("Rolling cost: {rolling_cost}");
    print!("{}", solution.report());
}
