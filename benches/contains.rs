//! Membership-probe benchmarks across the set kinds.
//!
//! Run with: `cargo bench --bench contains`
//!
//! Containers are populated once per size during setup; the timed region
//! performs ten million probes with key `i % PROBES`, so sets smaller than
//! the probe count see a mix of hits and misses proportional to their size.

mod common;

use std::hint::black_box;

use bigdecimal::BigDecimal;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use setbench::{for_each_set, phase, profile};

const SIZES: &[usize] = &[
    1, 2, 3, 4, 5, 7, 9, 11, 13, 15, 18, 21, 24, 27, 30, 34, 38, 42, 46, 50, 55, 60, 65, 70, 80,
    90, 100,
];
const PROBES: u64 = 10_000_000;

fn bench_contains_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_decimal");
    common::configure(&mut group, profile::CONTAINS);
    group.throughput(Throughput::Elements(PROBES));

    for &size in SIZES {
        for_each_set!(BigDecimal, with |set_id, make_set| {
            let mut set = make_set();
            phase::fill(&mut set, (0..size as i64).map(BigDecimal::from));

            group.bench_function(BenchmarkId::new(set_id, size), |b| {
                b.iter(|| {
                    black_box(phase::probe_hits(&set, PROBES, |k| BigDecimal::from(k as i64)))
                })
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_contains_decimal);
criterion_main!(benches);
