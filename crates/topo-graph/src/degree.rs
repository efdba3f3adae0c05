use topo_core::errors::TopoError;
use topo_core::{DegreeBounds, UndirectedGraph};

/// Returns the degree of every vertex, indexed by vertex id.
pub fn degree_sequence<G: UndirectedGraph>(graph: &G) -> Result<Vec<usize>, TopoError> {
    graph.vertices().map(|v| graph.degree(v)).collect()
}

/// Returns the minimum and maximum vertex degree of the graph.
pub fn degree_bounds<G: UndirectedGraph>(graph: &G) -> Result<DegreeBounds, TopoError> {
    let mut bounds = DegreeBounds::unknown();
    for degree in degree_sequence(graph)? {
        bounds.observe(degree);
    }
    Ok(bounds)
}
