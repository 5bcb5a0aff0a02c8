//! Benchmarks for the overflow-safe product comparator.
//!
//! Run with: cargo bench --bench mul_cmp_benchmark
//!
//! Compares the 32-bit limb-splitting comparison against the two obvious
//! alternatives:
//! - widening to u128 (what the limb comparator exists to avoid)
//! - an arbitrary-precision oracle (num-bigint)
//!
//! Also benchmarks full Rational ordering, where the comparator sits behind
//! the equality and sign fast paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use exact_rational::mul_cmp::is_product_less;
use exact_rational::Rational;
use num_bigint::BigUint;

/// Operand pairs spanning small values, the 2^32 limb boundary and the
/// top of the u64 range.
const OPERANDS: [(u64, u64, u64, u64); 6] = [
    (3, 5, 4, 4),
    (12345, 67890, 67890, 12345),
    ((1 << 32) - 1, (1 << 32) + 1, 1 << 32, 1 << 32),
    (1 << 63, 3, (1 << 63) - 1, 3),
    (u64::MAX - 2, u64::MAX, u64::MAX - 1, u64::MAX),
    (u64::MAX, u64::MAX, u64::MAX, u64::MAX),
];

fn bench_is_product_less(c: &mut Criterion) {
    let mut group = c.benchmark_group("product_compare");

    group.bench_function("limb_split", |b| {
        b.iter(|| {
            for &(x, y, z, w) in &OPERANDS {
                black_box(is_product_less(
                    black_box(x),
                    black_box(y),
                    black_box(z),
                    black_box(w),
                ));
            }
        })
    });

    group.bench_function("u128_widening", |b| {
        b.iter(|| {
            for &(x, y, z, w) in &OPERANDS {
                let lhs = black_box(x) as u128 * black_box(y) as u128;
                let rhs = black_box(z) as u128 * black_box(w) as u128;
                black_box(lhs < rhs);
            }
        })
    });

    group.bench_function("biguint_oracle", |b| {
        b.iter(|| {
            for &(x, y, z, w) in &OPERANDS {
                let lhs = BigUint::from(black_box(x)) * BigUint::from(black_box(y));
                let rhs = BigUint::from(black_box(z)) * BigUint::from(black_box(w));
                black_box(lhs < rhs);
            }
        })
    });

    group.finish();
}

fn bench_rational_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("rational_cmp");

    let near_limit_a = Rational::new(i64::MAX - 2, i64::MAX).unwrap();
    let near_limit_b = Rational::new(i64::MAX - 1, i64::MAX).unwrap();
    let small_a = Rational::new(5, 6).unwrap();
    let small_b = Rational::new(7, 8).unwrap();

    group.bench_function("near_limit", |b| {
        b.iter(|| black_box(black_box(near_limit_a) < black_box(near_limit_b)))
    });

    group.bench_function("small", |b| {
        b.iter(|| black_box(black_box(small_a) < black_box(small_b)))
    });

    group.finish();
}

criterion_group!(benches, bench_is_product_less, bench_rational_ordering);
criterion_main!(benches);
