use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use rangemin::{BlockRmq, CartesianRmq, DpRmq, NaiveRmq, RangeMinimum, SparseRmq};

mod common;

// the quadratic table blows its memory budget beyond a few thousand elements
const DP_MAX_SIZE: usize = 1 << 12;

fn bench_strategy(
    b: &mut Criterion,
    name: &str,
    sizes: &[usize],
    mut construct: impl FnMut() -> Box<dyn RangeMinimum>,
) {
    let mut rng = rand::thread_rng();

    let mut group = b.benchmark_group(format!("RMQ Benchmark: {}", name));
    group.plot_config(common::plot_config());

    for &l in sizes {
        let mut rmq = construct();
        rmq.preprocess(common::fill_random_vec(&mut rng, l)).unwrap();
        let sample = Uniform::new(0, l);

        group.bench_with_input(BenchmarkId::new("query", l), &l, |b, _| {
            b.iter_batched(
                || {
                    let begin = sample.sample(&mut rng);
                    let end = begin + rng.gen_range(0..l - begin);
                    (begin, end)
                },
                |e| black_box(rmq.query(e.0, e.1).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_rmq(b: &mut Criterion) {
    let dp_sizes: Vec<usize> = common::SIZES
        .iter()
        .copied()
        .filter(|&l| l <= DP_MAX_SIZE)
        .collect();

    bench_strategy(b, "Naive", &common::SIZES, || Box::new(NaiveRmq::new()));
    bench_strategy(b, "DP Table", &dp_sizes, || Box::new(DpRmq::new()));
    bench_strategy(b, "Sparse Table", &common::SIZES, || {
        Box::new(SparseRmq::new())
    });
    bench_strategy(b, "Block Decomposition", &common::SIZES, || {
        Box::new(BlockRmq::new())
    });
    bench_strategy(b, "Cartesian LCA", &common::SIZES, || {
        Box::new(CartesianRmq::new())
    });
}

criterion_group!(benches, bench_rmq);
criterion_main!(benches);
