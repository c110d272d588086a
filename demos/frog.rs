//! Example: the classic frog hop.
//!
//! Run with:
//! `cargo run --example frog`

use hop_dp::{problems::AbsDiff, utils::one_indexed, PathSolver};

fn main() {
    // Six footholds; the frog may hop one or two footholds forward and pays
    // the height difference for each hop.
    let heights = vec![30, 10, 60, 10, 60, 50];

    let model = AbsDiff::from_heights(heights.clone()).expect("non-empty");
    let solver = PathSolver::new(model);
    let solution = solver.run().expect("offsets {1, 2} reach every foothold");

    println!("Minimum total cost: {}", solution.cost);
    println!("Footholds visited (1-indexed): {:?}", one_indexed(&solution.path));
    for hop in solution.path.windows(2) {
        let (from, to) = (hop[0], hop[1]);
        println!(
            "  {} -> {}: |{} - {}| = {}",
            from + 1,
            to + 1,
            heights[to],
            heights[from],
            (heights[to] - heights[from]).abs()
        );
    }
    println!();
    print!("{}", solution.report());
}
