//! Benchmarks for the percolation pipeline stages.
//!
//! Run with: cargo bench -p percolation
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p percolation -- --save-baseline main
//! 2. After changes: cargo bench -p percolation -- --baseline main

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use percolation::cull::{CullParams, cull};
use percolation::flow::{FlowParams, GenerateParams, generate_lattice, propagate};
use percolation::iso::draw_plan;
use percolation::types::Lattice;

// =============================================================================
// Test Lattice Generation
// =============================================================================

const SIZES: [usize; 3] = [16, 32, 64];

/// Occupancy close to the site percolation threshold, where the filled
/// region is most irregular.
const OCCUPANCY: f64 = 0.3;

fn random_lattice(size: usize) -> Lattice {
    generate_lattice(&GenerateParams::new(size, OCCUPANCY).with_seed(42)).unwrap()
}

fn filled_lattice(size: usize) -> Lattice {
    let mut lattice = random_lattice(size);
    propagate(&mut lattice, &FlowParams::default());
    lattice
}

fn voxels(size: usize) -> u64 {
    u64::try_from(size.pow(3)).unwrap()
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Generate");

    for size in SIZES {
        group.throughput(Throughput::Elements(voxels(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| random_lattice(black_box(size)));
        });
    }

    group.finish();
}

fn bench_propagate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Propagate");

    for size in SIZES {
        let lattice = random_lattice(size);
        group.throughput(Throughput::Elements(voxels(size)));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lattice, |b, lattice| {
            b.iter_batched(
                || lattice.clone(),
                |mut l| propagate(&mut l, &FlowParams::default()),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_cull(c: &mut Criterion) {
    let mut group = c.benchmark_group("Cull");

    for size in SIZES {
        let lattice = filled_lattice(size);
        group.throughput(Throughput::Elements(voxels(size)));

        for (name, params) in [
            ("ray_scan", CullParams::default()),
            ("ray_scan_parallel", CullParams::default().with_parallel(true)),
            ("region_flood", CullParams::region_flood()),
        ] {
            group.bench_with_input(BenchmarkId::new(name, size), &lattice, |b, lattice| {
                b.iter_batched(
                    || lattice.clone(),
                    |mut l| cull(&mut l, &params),
                    criterion::BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_draw_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("DrawPlan");

    for size in SIZES {
        let mut lattice = filled_lattice(size);
        cull(&mut lattice, &CullParams::default());

        group.bench_with_input(BenchmarkId::new("culled", size), &lattice, |b, lattice| {
            b.iter(|| draw_plan(black_box(lattice), true));
        });
        group.bench_with_input(BenchmarkId::new("all", size), &lattice, |b, lattice| {
            b.iter(|| draw_plan(black_box(lattice), false));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_propagate,
    bench_cull,
    bench_draw_plan
);
criterion_main!(benches);
