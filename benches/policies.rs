//! Benchmarks for the three replacement policies.
//!
//! Optimal rescans the remaining sequence on every eviction, so it is
//! expected to fall well behind FIFO and LRU as the sequence grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pagesim::{PageId, Policy};

/// Deterministic pseudo-random reference string (LCG) over `pages` pages.
fn reference_string(len: usize, pages: i64) -> Vec<PageId> {
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            PageId(((state >> 33) % pages as u64) as i64)
        })
        .collect()
}

fn bench_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");

    for len in [256usize, 4096] {
        let sequence = reference_string(len, 32);

        for policy in Policy::ALL {
            group.bench_with_input(BenchmarkId::new(policy.name(), len), &sequence, |b, seq| {
                b.iter(|| policy.simulate(black_box(seq), black_box(8)))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
