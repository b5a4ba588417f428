use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linsys::{generate_with, text};
use rand::{rngs::StdRng, SeedableRng};

fn generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345u64);
    let mut group = c.benchmark_group("generate");
    for size in [16, 64, 256, 1000] {
        group.bench_with_input(BenchmarkId::new("uniform", size), &size, |b, &size| {
            b.iter(|| black_box(generate_with(&mut rng, size)))
        });
    }
    group.finish();
}

fn write(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345u64);
    let mut group = c.benchmark_group("write");
    for size in [16, 64, 256] {
        let Ok(system) = generate_with(&mut rng, size) else {
            unreachable!("size is non-zero");
        };
        let mut out = Vec::new();
        group.bench_with_input(BenchmarkId::new("matrix", size), &size, |b, _| {
            b.iter(|| {
                out.clear();
                black_box(text::write_matrix(&mut out, system.matrix()))
            })
        });
    }
    group.finish();
}

criterion_group!(bench_system, generate, write);
criterion_main!(bench_system);
