use rand::Rng;
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::UndirectedGraph;

use crate::ids::vertex;

/// Builds the cycle `0 - 1 - ... - (n-1) - 0`.
///
/// Fewer than three vertices would need a loop or a multi-edge, so those
/// sizes are rejected.
pub fn gen_cycle<G: UndirectedGraph>(n_vertices: usize) -> Result<G, TopoError> {
    if n_vertices < 3 {
        return Err(TopoError::Graph(
            ErrorInfo::new("cycle-too-small", "a simple cycle needs at least three vertices")
                .with_context("vertices", n_vertices),
        ));
    }
    let mut graph = G::with_vertices(n_vertices);
    for idx in 0..n_vertices {
        graph.add_edge(
            vertex(idx),
            vertex((idx + 1) % n_vertices),
            G::EdgeData::default(),
        )?;
    }
    Ok(graph)
}

/// Builds disjoint cliques with the given sizes, numbered consecutively.
pub fn gen_disjoint_cliques<G: UndirectedGraph>(sizes: &[usize]) -> Result<G, TopoError> {
    let mut graph = G::with_vertices(sizes.iter().sum());
    let mut offset = 0;
    for &size in sizes {
        for u in offset..offset + size {
            for v in u + 1..offset + size {
                graph.add_edge(vertex(u), vertex(v), G::EdgeData::default())?;
            }
        }
        offset += size;
    }
    Ok(graph)
}

/// Samples a simple graph with `n_vertices` vertices and exactly `n_edges`
/// edges, uniformly among such graphs.
pub fn gen_gnm<G, R>(n_vertices: usize, n_edges: usize, rng: &mut R) -> Result<G, TopoError>
where
    G: UndirectedGraph,
    R: Rng + ?Sized,
{
    let capacity = n_vertices.saturating_mul(n_vertices.saturating_sub(1)) / 2;
    if n_edges > capacity {
        return Err(TopoError::Graph(
            ErrorInfo::new("too-many-edges", "requested more edges than a simple graph holds")
                .with_context("vertices", n_vertices)
                .with_context("edges", n_edges)
                .with_context("capacity", capacity),
        ));
    }
    let mut graph = G::with_vertices(n_vertices);
    let mut placed = 0;
    while placed < n_edges {
        let u = rng.gen_range(0..n_vertices);
        let v = rng.gen_range(0..n_vertices);
        if u == v || graph.has_edge(vertex(u), vertex(v))? {
            continue;
        }
        graph.add_edge(vertex(u), vertex(v), G::EdgeData::default())?;
        placed += 1;
    }
    Ok(graph)
}
