//! Criterion benchmarks for the tree and cluster builders.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sharegen_bench::{bench_rng, reference_cluster, reference_tree, stress_cluster, stress_tree};
use sharegen_cluster::{generate_cluster_tree, NodeAllocator};
use sharegen_core::{random_guest_pages, PageUniverse};
use sharegen_tree::generate_tree;

/// Benchmark: random guest page assignment for 1000 pages, 500 guests.
fn bench_guest_pages(c: &mut Criterion) {
    let mut rng = bench_rng(1);
    c.bench_function("guest_pages_1000x500", |b| {
        b.iter(|| black_box(random_guest_pages(&mut rng, 1000, 500)));
    });
}

fn bench_tree(c: &mut Criterion) {
    let reference = reference_tree();
    let stress = stress_tree();
    let mut rng = bench_rng(10);

    c.bench_function("tree_reference", |b| {
        b.iter(|| black_box(generate_tree(&reference, &mut rng).unwrap()));
    });
    c.bench_function("tree_stress", |b| {
        b.iter(|| black_box(generate_tree(&stress, &mut rng).unwrap()));
    });
}

fn bench_cluster(c: &mut Criterion) {
    let reference = reference_cluster();
    let stress = stress_cluster();
    let mut rng = bench_rng(10);

    c.bench_function("cluster_reference", |b| {
        b.iter(|| black_box(generate_cluster_tree(&reference, &mut rng).unwrap()));
    });
    c.bench_function("cluster_stress", |b| {
        b.iter(|| black_box(generate_cluster_tree(&stress, &mut rng).unwrap()));
    });
}

/// Benchmark: a root allocation over a 10K-page universe.
fn bench_root_allocation(c: &mut Criterion) {
    let allocator = NodeAllocator::new(PageUniverse::new(10_000));
    let mut rng = bench_rng(3);
    c.bench_function("allocate_root_10k", |b| {
        b.iter(|| black_box(allocator.allocate(&mut rng, &[], 5_000)));
    });
}

criterion_group!(
    benches,
    bench_guest_pages,
    bench_tree,
    bench_cluster,
    bench_root_allocation
);
criterion_main!(benches);
