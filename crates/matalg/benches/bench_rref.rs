use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matalg::{inverse, red_row_echelon, Matrix};
use rand::Rng;

fn random_invertible(n: usize) -> Matrix<f64> {
    let mut rng = rand::rng();
    let mut m = Matrix::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0));
    for i in 0..n {
        m[(i, i)] += n as f64;
    }
    m
}

fn bench_rref(c: &mut Criterion) {
    let mut group = c.benchmark_group("rref");

    for size in [4, 16, 64, 128].iter() {
        let m = random_invertible(*size);
        group.bench_with_input(BenchmarkId::new("red_row_echelon", size), &m, |b, m| {
            b.iter(|| black_box(red_row_echelon(m)))
        });
    }

    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("inverse");

    for size in [4, 16, 64, 128].iter() {
        let m = random_invertible(*size);
        group.bench_with_input(BenchmarkId::new("inverse", size), &m, |b, m| {
            b.iter(|| black_box(inverse(m).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rref, bench_inverse);
criterion_main!(benches);
