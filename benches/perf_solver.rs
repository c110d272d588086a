use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use hop_dp::{problems::AbsDiff, Offsets, PathSolver};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_heights(rng: &mut StdRng, len: usize) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(0..10_000)).collect()
}

fn bench_full_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("hop_path_full");
    for &len in &[1_000usize, 100_000, 1_000_000] {
        for steps in [vec![1, 2], vec![1, 2, 3, 4, 5, 6, 7, 8]] {
            let offsets = Offsets::new(steps).unwrap();
            group.bench_with_input(
                BenchmarkId::new(format!("offsets_{offsets}"), len),
                &len,
                |b, &len| {
                    b.iter_batched(
                        || {
                            let mut rng = StdRng::seed_from_u64(42);
                            AbsDiff::from_heights(random_heights(&mut rng, len)).unwrap()
                        },
                        |model| {
                            let solver = PathSolver::with_offsets(model, offsets.clone());
                            let solution = solver.run().unwrap();
                            black_box(solution.cost);
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_full_solver);
criterion_main!(benches);
