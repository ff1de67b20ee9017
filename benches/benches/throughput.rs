//! VerusHash Criterion Benchmarks
//!
//! Latency for header-sized inputs, one-shot vs streaming throughput, and
//! baseline comparison against established hashes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot-path latency for small inputs (block headers, share candidates).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(32, "32B"), (64, "64B"), (80, "80B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| verushash::hash(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: STREAMING VS ONE-SHOT
// =============================================================================

/// Streaming overhead relative to the one-shot path.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Streaming");

    let size = MB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(
        criterion::BenchmarkId::new("oneshot", "1MB"),
        &input,
        |b, data| b.iter(|| verushash::hash(black_box(data))),
    );

    group.bench_with_input(
        criterion::BenchmarkId::new("chunked-64KB", "1MB"),
        &input,
        |b, data| {
            b.iter(|| {
                let mut hasher = verushash::Hasher::new();
                for chunk in data.chunks(64 * KB) {
                    hasher.update(black_box(chunk));
                }
                hasher.finalize()
            });
        },
    );
    group.finish();
}

// =============================================================================
// BENCHMARK 3: BASELINES
// =============================================================================

/// Comparison against established hash functions at bulk sizes.
fn bench_baselines(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Baselines");

    let size = 4 * MB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_with_input(
        criterion::BenchmarkId::new("verushash", "4MB"),
        &input,
        |b, data| b.iter(|| verushash::hash(black_box(data))),
    );

    group.bench_with_input(
        criterion::BenchmarkId::new("blake3", "4MB"),
        &input,
        |b, data| b.iter(|| blake3::hash(black_box(data))),
    );

    group.bench_with_input(
        criterion::BenchmarkId::new("sha256", "4MB"),
        &input,
        |b, data| {
            b.iter(|| {
                use sha2::{Digest, Sha256};
                Sha256::digest(black_box(data))
            });
        },
    );
    group.finish();
}

criterion_group!(benches, bench_latency, bench_streaming, bench_baselines);
criterion_main!(benches);
