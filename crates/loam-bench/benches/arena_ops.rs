//! Criterion micro-benchmarks for arena allocation and release.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_arena::{Arena, ArenaConfig};
use loam_bench::arena_workload_sizes;

fn bench_alloc(c: &mut Criterion) {
    let sizes = arena_workload_sizes(1_024);

    c.bench_function("arena_alloc_mixed_1k", |b| {
        b.iter(|| {
            let mut arena = Arena::new();
            for &size in &sizes {
                black_box(arena.alloc(size).unwrap());
            }
            black_box(arena)
        });
    });

    c.bench_function("arena_alloc_small_block", |b| {
        b.iter(|| {
            let mut arena = Arena::with_config(ArenaConfig::new(256));
            for &size in &sizes {
                black_box(arena.alloc(size).unwrap());
            }
            black_box(arena)
        });
    });
}

fn bench_clear_cycle(c: &mut Criterion) {
    let sizes = arena_workload_sizes(256);

    c.bench_function("arena_fill_clear_cycle", |b| {
        let mut arena = Arena::new();
        b.iter(|| {
            for &size in &sizes {
                arena.alloc(size).unwrap();
            }
            arena.clear();
        });
    });
}

criterion_group!(benches, bench_alloc, bench_clear_cycle);
criterion_main!(benches);
