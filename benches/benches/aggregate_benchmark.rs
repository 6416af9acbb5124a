//! Aggregation throughput benchmarks.
//!
//! Run with: `cargo bench --package barra-bench`

use barra_aggregate::BarAggregator;
use barra_bench::synthetic_ticks;
use chrono::TimeDelta;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

fn aggregation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for &count in &[10_000usize, 100_000] {
        let ticks = synthetic_ticks(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("fold", count), &ticks, |b, ticks| {
            b.iter(|| {
                let mut aggregator = BarAggregator::new(TimeDelta::minutes(1)).unwrap();
                for tick in ticks {
                    aggregator.process(*tick);
                }
                aggregator.finish()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, aggregation_benchmark);
criterion_main!(benches);
