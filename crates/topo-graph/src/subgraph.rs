use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{UndirectedGraph, VertexId};
use tracing::{debug, instrument};

use crate::edges::list_edges;
use crate::ids::vertex;

/// Bijection between a vertex subset of a source graph and the dense ids
/// `0..k` of the graph extracted from it.
///
/// New ids follow the order in which the subset was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexIndexMap {
    forward: Vec<Option<VertexId>>,
    backward: Vec<VertexId>,
}

impl VertexIndexMap {
    /// Builds the map for `subset` drawn from a graph with `vertex_count` vertices.
    ///
    /// Fails with [`TopoError::IndexOutOfRange`] for ids outside the source
    /// graph and [`TopoError::InvalidSubset`] when an id repeats.
    pub fn new(subset: &[VertexId], vertex_count: usize) -> Result<Self, TopoError> {
        let mut forward = vec![None; vertex_count];
        for (position, old) in subset.iter().enumerate() {
            let slot = forward
                .get_mut(old.index())
                .ok_or_else(|| TopoError::index_out_of_range(old.index(), vertex_count))?;
            if let Some(previous) = *slot {
                return Err(TopoError::InvalidSubset(
                    ErrorInfo::new("duplicate-vertex", "vertex appears twice in the subset")
                        .with_context("vertex", old)
                        .with_context("first_position", previous)
                        .with_context("repeat_position", position),
                ));
            }
            *slot = Some(vertex(position));
        }
        Ok(Self {
            forward,
            backward: subset.to_vec(),
        })
    }

    /// Returns the new id assigned to `old`, if it belongs to the subset.
    pub fn new_id(&self, old: VertexId) -> Option<VertexId> {
        self.forward.get(old.index()).copied().flatten()
    }

    /// Returns the source-graph id behind the new id `new`.
    pub fn old_id(&self, new: VertexId) -> Option<VertexId> {
        self.backward.get(new.index()).copied()
    }

    /// Returns the number of mapped vertices.
    pub fn len(&self) -> usize {
        self.backward.len()
    }

    /// Returns whether the subset was empty.
    pub fn is_empty(&self) -> bool {
        self.backward.is_empty()
    }
}

/// Extracts the subgraph induced by `subset`.
///
/// Vertex `i` of the result corresponds to `subset[i]` and carries a copy of
/// its data. The whole-graph data is copied unchanged. An edge is copied, with
/// its data, exactly when both endpoints lie in the subset. The source graph
/// is never modified and nothing is built when validation fails.
pub fn subgraph<G: UndirectedGraph>(graph: &G, subset: &[VertexId]) -> Result<G, TopoError> {
    subgraph_with_map(graph, subset).map(|(extracted, _)| extracted)
}

/// Same as [`subgraph`], also returning the index map used for relabelling.
#[instrument(
    level = "debug",
    skip_all,
    fields(vertices = graph.vertex_count(), kept = subset.len())
)]
pub fn subgraph_with_map<G: UndirectedGraph>(
    graph: &G,
    subset: &[VertexId],
) -> Result<(G, VertexIndexMap), TopoError> {
    let map = VertexIndexMap::new(subset, graph.vertex_count())?;
    let edges = list_edges(graph)?;

    let mut out = G::with_vertices(map.len());
    out.set_graph_data(graph.graph_data().clone());
    for (position, old) in subset.iter().enumerate() {
        out.set_vertex_data(vertex(position), graph.vertex_data(*old)?.clone())?;
    }

    let mut copied = 0usize;
    for (u, v) in edges {
        let (Some(i), Some(j)) = (map.new_id(u), map.new_id(v)) else {
            continue;
        };
        let data = graph.edge_data(u, v)?.cloned().unwrap_or_default();
        out.add_edge(i, j, data)?;
        copied += 1;
    }
    debug!(edges = copied, "extracted induced subgraph");
    Ok((out, map))
}
