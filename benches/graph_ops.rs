//! Benchmarks for graph construction and lookup
//!
//! Lookups are linear scans, so these track how vertex count affects
//! edge insertion and rendering on level-sized graphs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use waygraph::Graph;

/// Create a grid-shaped level graph with `side * side` rooms
fn create_grid(side: usize) -> Graph<String> {
    let mut graph = Graph::with_capacity(side * side);

    for row in 0..side {
        for col in 0..side {
            graph.add_vertex(format!("room-{}-{}", row, col));
        }
    }

    for row in 0..side {
        for col in 0..side {
            let here = format!("room-{}-{}", row, col);
            if col + 1 < side {
                let right = format!("room-{}-{}", row, col + 1);
                let _ = graph.add_undirected_edge(here.as_str(), right.as_str(), 1);
            }
            if row + 1 < side {
                let down = format!("room-{}-{}", row + 1, col);
                let _ = graph.add_undirected_edge(here.as_str(), down.as_str(), 1);
            }
        }
    }

    graph
}

/// Benchmark name lookup of the last-added vertex
fn bench_find_vertex(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_vertex");

    for side in [10, 20, 40].iter() {
        let graph = create_grid(*side);
        let last = format!("room-{}-{}", side - 1, side - 1);

        group.bench_with_input(BenchmarkId::new("vertices", side * side), &last, |b, name| {
            b.iter(|| black_box(graph.find_vertex(name.as_str())));
        });
    }

    group.finish();
}

/// Benchmark building a full grid including edge wiring
fn bench_build_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_grid");

    for side in [10, 20].iter() {
        group.bench_with_input(BenchmarkId::new("vertices", side * side), side, |b, &side| {
            b.iter(|| black_box(create_grid(side)));
        });
    }

    group.finish();
}

/// Benchmark rendering and petgraph export
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let graph = create_grid(20);

    group.bench_function("display", |b| b.iter(|| black_box(graph.to_string())));
    group.bench_function("to_digraph", |b| b.iter(|| black_box(graph.to_digraph())));

    group.finish();
}

criterion_group!(benches, bench_find_vertex, bench_build_grid, bench_render);
criterion_main!(benches);
