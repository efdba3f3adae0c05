use topo_core::errors::TopoError;
use topo_core::{EdgePair, UndirectedGraph, VertexId};
use tracing::{debug, instrument};

/// Lists every undirected edge exactly once.
///
/// Each edge `{u, v}` is reported as `(u, v)` with `u <= v`, from the
/// adjacency of its lower endpoint only. Pairs come out in increasing order of
/// their first endpoint, following the collaborator's neighbour order within a
/// vertex.
pub fn list_edges<G: UndirectedGraph>(graph: &G) -> Result<Vec<EdgePair>, TopoError> {
    let mut edges = Vec::new();
    for u in graph.vertices() {
        for v in graph.neighbors(u)? {
            if u <= v {
                edges.push((u, v));
            }
        }
    }
    Ok(edges)
}

/// Inserts every pair as an edge carrying default data.
///
/// No deduplication happens here; repeated pairs are subject to the
/// collaborator's own duplicate policy. Returns how many insertions the
/// collaborator reported as new edges.
pub fn install_edges<G: UndirectedGraph>(
    pairs: &[EdgePair],
    graph: &mut G,
) -> Result<usize, TopoError> {
    let mut inserted = 0;
    for &(u, v) in pairs {
        if graph.add_edge(u, v, G::EdgeData::default())? {
            inserted += 1;
        }
    }
    Ok(inserted)
}

/// Returns whether `u` and `v` share an edge, regardless of argument order.
pub fn is_adjacent<G: UndirectedGraph>(
    graph: &G,
    u: VertexId,
    v: VertexId,
) -> Result<bool, TopoError> {
    graph.has_edge(u, v)
}

/// Deletes every self-loop and returns how many were removed.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn remove_self_loops<G: UndirectedGraph>(graph: &mut G) -> Result<usize, TopoError> {
    let mut looped = Vec::new();
    for v in graph.vertices() {
        if graph.neighbors(v)?.any(|w| w == v) {
            looped.push(v);
        }
    }
    for &v in &looped {
        graph.remove_edge(v, v)?;
    }
    debug!(removed = looped.len(), "self-loops removed");
    Ok(looped.len())
}
