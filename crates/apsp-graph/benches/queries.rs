use apsp_core::rng::RngHandle;
use apsp_core::{VertexId, WeightedDigraph};
use apsp_graph::gen_random_digraph;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn queries_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let graph = gen_random_digraph(2_000, 8_000, 50, &mut rng).unwrap();
    let vertices: Vec<_> = (0..graph.vertex_count()).map(VertexId::from_index).collect();

    c.bench_function("out_edge_scan", |b| {
        b.iter(|| {
            for vertex in &vertices {
                black_box(graph.out_edges(*vertex).count());
            }
        });
    });

    c.bench_function("augmented_edge_scan", |b| {
        let augmented = graph.with_synthetic_source();
        b.iter(|| black_box(augmented.edges().map(|edge| edge.weight).sum::<f64>()));
    });
}

criterion_group!(benches, queries_bench);
criterion_main!(benches);
