//! Construction and traversal performance benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use csrgraph::{
    bfs_preordering, dfs_postordering, dfs_preordering, topological_sorted_list, CsrGraph, Edge,
};

/// A layered DAG: every vertex points at up to `fanout` of its successors.
/// The edge list comes out sorted by construction.
fn layered_dag_edges(n: usize, fanout: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(n * fanout);
    for v in 0..n {
        for d in 1..=fanout {
            if v + d < n {
                edges.push(Edge::new(v, v + d));
            }
        }
    }
    edges
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [1_000, 10_000, 100_000] {
        let edges = layered_dag_edges(n, 4);
        group.throughput(Throughput::Elements(edges.len() as u64));
        group.bench_function(format!("vertices_{n}"), |b| {
            b.iter(|| {
                let g = CsrGraph::from_sorted_edges(black_box(edges.clone()), n, true).unwrap();
                black_box(g)
            })
        });
    }
    group.finish();
}

fn bench_traversals(c: &mut Criterion) {
    let mut group = c.benchmark_group("traversal");
    for n in [1_000, 10_000, 100_000] {
        let g = CsrGraph::from_sorted_edges(layered_dag_edges(n, 4), n, true).unwrap();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("bfs_preordering_{n}"), |b| {
            b.iter(|| black_box(bfs_preordering(black_box(&g), &[0]).unwrap()))
        });
        group.bench_function(format!("dfs_preordering_{n}"), |b| {
            b.iter(|| black_box(dfs_preordering(black_box(&g), &[0]).unwrap()))
        });
        group.bench_function(format!("dfs_postordering_{n}"), |b| {
            b.iter(|| black_box(dfs_postordering(black_box(&g), &[0]).unwrap()))
        });
    }
    group.finish();
}

fn bench_topological_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("topological_sort");
    for n in [1_000, 10_000, 100_000] {
        let g = CsrGraph::from_sorted_edges(layered_dag_edges(n, 4), n, true).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("vertices_{n}"), |b| {
            b.iter(|| black_box(topological_sorted_list(black_box(&g)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_traversals, bench_topological_sort);
criterion_main!(benches);
