use criterion::{black_box, criterion_group, criterion_main, Criterion};
use topo_core::rng::RngHandle;
use topo_graph::{connected_components, gen_gnm, largest_component, AdjacencyGraph};

fn components_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(42);
    let graph: AdjacencyGraph = gen_gnm(5_000, 4_000, &mut rng).unwrap();

    c.bench_function("connected_components_5k", |b| {
        b.iter(|| black_box(connected_components(&graph).unwrap()));
    });

    c.bench_function("largest_component_5k", |b| {
        b.iter(|| black_box(largest_component(&graph).unwrap()));
    });
}

criterion_group!(benches, components_bench);
criterion_main!(benches);
