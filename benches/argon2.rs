use argon2_core::derivation::argon2::{id_key, key};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_id_key(c: &mut Criterion) {
    c.bench_function("id_key 19MiB t=2 p=1", |b| {
        b.iter(|| {
            id_key(
                black_box(b"correct horse battery staple"),
                black_box(b"some random salt"),
                2,
                19 * 1024,
                1,
                32,
            )
        })
    });
}

fn bench_key(c: &mut Criterion) {
    c.bench_function("key 19MiB t=2 p=1", |b| {
        b.iter(|| {
            key(
                black_box(b"correct horse battery staple"),
                black_box(b"some random salt"),
                2,
                19 * 1024,
                1,
                32,
            )
        })
    });
}

fn bench_id_key_parallel(c: &mut Criterion) {
    c.bench_function("id_key 64MiB t=1 p=4", |b| {
        b.iter(|| {
            id_key(
                black_box(b"correct horse battery staple"),
                black_box(b"some random salt"),
                1,
                64 * 1024,
                4,
                32,
            )
        })
    });
}

criterion_group!(benches, bench_id_key, bench_key, bench_id_key_parallel);
criterion_main!(benches);
