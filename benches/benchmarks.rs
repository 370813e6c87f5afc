//! Benchmarks for runstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use runstats::statistics::{RunningStats, SharedStats};
use runstats::traits::Sketch;

// ============================================================================
// RunningStats Benchmarks
// ============================================================================

fn bench_running_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_stats");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add", |b| {
        let mut stats = RunningStats::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("query_all", |b| {
        let mut stats = RunningStats::new();
        for i in 0..100_000u64 {
            stats.add(i as f64);
        }
        b.iter(|| {
            black_box(stats.mean());
            black_box(stats.variance());
            black_box(stats.stddev());
            black_box(stats.skewness());
            black_box(stats.kurtosis());
        });
    });

    group.bench_function("snapshot", |b| {
        let mut stats = RunningStats::new();
        for i in 0..100_000u64 {
            stats.add(i as f64);
        }
        b.iter(|| black_box(stats.snapshot()));
    });

    group.bench_function("merge", |b| {
        let mut stats1 = RunningStats::new();
        let mut stats2 = RunningStats::new();
        for i in 0..10_000u64 {
            stats1.add(i as f64);
            stats2.add((i + 10_000) as f64);
        }
        b.iter(|| {
            let mut merged = stats1.clone();
            merged.merge(&stats2).unwrap();
            black_box(merged)
        });
    });

    group.finish();
}

// ============================================================================
// SharedStats Benchmarks
// ============================================================================

fn bench_shared_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_stats");
    group.throughput(Throughput::Elements(1));

    group.bench_function("add_uncontended", |b| {
        let stats = SharedStats::new();
        let mut i = 0u64;
        b.iter(|| {
            stats.add(i as f64);
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("snapshot", |b| {
        let stats = SharedStats::new();
        for i in 0..100_000u64 {
            stats.add(i as f64);
        }
        b.iter(|| black_box(stats.snapshot()));
    });

    group.bench_function("merge_batch", |b| {
        let stats = SharedStats::new();
        let mut batch = RunningStats::new();
        for i in 0..1000u64 {
            batch.add(i as f64);
        }
        b.iter(|| stats.merge(&batch));
    });

    group.finish();
}

criterion_group!(benches, bench_running_stats, bench_shared_stats);
criterion_main!(benches);
