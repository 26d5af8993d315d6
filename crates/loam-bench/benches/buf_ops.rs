//! Criterion micro-benchmarks for container growth and mutation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use loam_bench::{int_workload, text_workload};
use loam_buf::{Buf, StrBuf};

fn bench_push_growth(c: &mut Criterion) {
    c.bench_function("buf_push_10k_from_empty", |b| {
        b.iter(|| black_box(int_workload(10_000)));
    });

    c.bench_function("buf_push_10k_preallocated", |b| {
        b.iter(|| {
            let mut buf = Buf::with_capacity(10_000).unwrap();
            for i in 0..10_000u64 {
                buf.push(i).unwrap();
            }
            black_box(buf)
        });
    });
}

fn bench_insert_front(c: &mut Criterion) {
    c.bench_function("buf_insert_front_1k", |b| {
        b.iter(|| {
            let mut buf = Buf::new();
            for i in 0..1_000u64 {
                buf.insert(0, i).unwrap();
            }
            black_box(buf)
        });
    });
}

fn bench_str_buf_append(c: &mut Criterion) {
    c.bench_function("str_buf_append_4k_words", |b| {
        b.iter(|| black_box(text_workload(4_096)));
    });

    c.bench_function("str_buf_append_preallocated", |b| {
        b.iter(|| {
            let mut sb = StrBuf::with_capacity(64 * 1024).unwrap();
            for _ in 0..4_096 {
                sb.push_str("word,").unwrap();
            }
            black_box(sb)
        });
    });
}

criterion_group!(
    benches,
    bench_push_growth,
    bench_insert_front,
    bench_str_buf_append
);
criterion_main!(benches);
