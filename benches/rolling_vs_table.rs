use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hop_dp::{problems::SquaredDiff, rolling, table, Offsets};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_cost_only(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155_AA55);
    let len = 500_000;
    let heights: Vec<i64> = (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect();
    let model = SquaredDiff::from_heights(heights).unwrap();
    let offsets = Offsets::new([1, 2, 3]).unwrap();

    let mut group = c.benchmark_group("cost_only");
    group.bench_function("build_table", |b| {
        b.iter(|| {
            let t = table::build_table(black_box(&model), &offsets).unwrap();
            black_box(t.cost(t.terminal()))
        })
    });
    group.bench_function("rolling_min_cost", |b| {
        b.iter(|| black_box(rolling::min_cost(black_box(&model), &offsets).unwrap()))
    });
    group.finish();
}

criterion_group!(benches, bench_cost_only);
criterion_main!(benches);
