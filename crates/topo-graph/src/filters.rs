use topo_core::errors::TopoError;
use topo_core::{UndirectedGraph, VertexId};
use tracing::{debug, instrument};

use crate::components::connected_components;
use crate::ids::vertex;
use crate::subgraph::subgraph;

/// Builds a new graph keeping only components with at least `min_size` vertices.
///
/// Kept vertices retain their original relative order. A `min_size` of 0 or 1
/// keeps every vertex.
#[instrument(
    level = "debug",
    skip_all,
    fields(vertices = graph.vertex_count(), min_size = min_size)
)]
pub fn filter_components<G: UndirectedGraph>(graph: &G, min_size: usize) -> Result<G, TopoError> {
    let components = connected_components(graph)?;
    let sizes = components.sizes();
    let keep: Vec<VertexId> = components
        .labels()
        .iter()
        .enumerate()
        .filter(|(_, label)| sizes[**label] >= min_size)
        .map(|(idx, _)| vertex(idx))
        .collect();
    debug!(
        kept = keep.len(),
        dropped = graph.vertex_count() - keep.len(),
        "filtered components by size"
    );
    subgraph(graph, &keep)
}

/// Returns the vertices of the largest component in increasing id order.
///
/// Ties go to the component with the lowest label, that is the one whose
/// lowest vertex id is smallest. An empty graph yields an empty list.
pub fn largest_component_indices<G: UndirectedGraph>(
    graph: &G,
) -> Result<Vec<VertexId>, TopoError> {
    let components = connected_components(graph)?;
    let sizes = components.sizes();
    let mut largest: Option<(usize, usize)> = None;
    for (label, &size) in sizes.iter().enumerate() {
        match largest {
            Some((_, best)) if size <= best => {}
            _ => largest = Some((label, size)),
        }
    }
    Ok(match largest {
        Some((label, _)) => components.members(label),
        None => Vec::new(),
    })
}

/// Builds a new graph holding only the largest connected component.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn largest_component<G: UndirectedGraph>(graph: &G) -> Result<G, TopoError> {
    let indices = largest_component_indices(graph)?;
    debug!(size = indices.len(), "selected largest component");
    subgraph(graph, &indices)
}
