use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use enumerate_view::{enumerate, for_enumerate};

fn index_weighted_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("index weighted sum");
    for size in [10_000usize, 100_000, 1_000_000] {
        let values: Vec<u64> = (0..size as u64).collect();
        group.bench_with_input(BenchmarkId::new("view", size), &values, |b, values| {
            b.iter(|| {
                enumerate(values)
                    .iter()
                    .fold(0u64, |acc, (i, v)| acc + i as u64 * v)
            })
        });
        group.bench_with_input(BenchmarkId::new("eager", size), &values, |b, values| {
            b.iter(|| {
                let mut acc = 0u64;
                for_enumerate(values, |i, v| acc += i as u64 * v);
                acc
            })
        });
        group.bench_with_input(BenchmarkId::new("hand written", size), &values, |b, values| {
            b.iter(|| {
                let mut acc = 0u64;
                for i in 0..values.len() {
                    acc += i as u64 * values[i];
                }
                acc
            })
        });
    }
    group.finish();
}

criterion_group!(benches, index_weighted_sum);
criterion_main!(benches);
