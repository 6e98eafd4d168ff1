//! Criterion benchmark untuk Atomic Counters
//!
//! Run dengan: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use linkprobe::{AtomicCounter, LinkProbe};

fn bench_counter_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("atomic_counter");
    group.throughput(Throughput::Elements(1));

    // Benchmark add
    group.bench_function("add", |b| {
        let counter = AtomicCounter::new();
        b.iter(|| counter.add(black_box(1)));
    });

    // Benchmark get
    group.bench_function("get", |b| {
        let counter = AtomicCounter::new();
        counter.add(42);
        b.iter(|| black_box(counter.get()));
    });

    // Benchmark add+get cycle
    group.bench_function("add_get_cycle", |b| {
        let counter = AtomicCounter::new();
        b.iter(|| {
            counter.add(black_box(1));
            black_box(counter.get())
        });
    });

    group.finish();
}

fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("link_probe");
    group.throughput(Throughput::Elements(1));

    group.bench_function("used", |b| {
        let probe = LinkProbe::new();
        b.iter(|| black_box(probe.used()));
    });

    group.finish();
}

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");

    // Batch adds
    for batch_size in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*batch_size as u64));
        group.bench_function(format!("add_batch_{}", batch_size), |b| {
            let counter = AtomicCounter::new();
            b.iter(|| {
                for _ in 0..*batch_size {
                    counter.add(black_box(1));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_counter_ops, bench_probe, bench_throughput);
criterion_main!(benches);
