use topo_core::{EdgePair, VertexId};

/// Creates a [`VertexId`] from an index.
pub(crate) fn vertex(index: usize) -> VertexId {
    VertexId::from_index(index)
}

/// Orders the endpoints of an undirected edge so the smaller id comes first.
pub(crate) fn normalized(u: VertexId, v: VertexId) -> EdgePair {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
