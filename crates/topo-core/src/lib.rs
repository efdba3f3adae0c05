#![deny(missing_docs)]

//! Core traits and data types for the topo graph toolkit.
//!
//! Algorithms in `topo-graph` never touch a concrete storage layout. They
//! consume the narrow [`UndirectedGraph`] capability contract defined here, so
//! adjacency-list and adjacency-matrix backends are interchangeable.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, TopoError};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::DegreeBounds;

/// Identifier for a vertex within an [`UndirectedGraph`].
///
/// Vertex ids are dense: a graph with `n` vertices uses exactly `0..n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates an identifier from its dense index.
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the dense index of the identifier.
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Unordered vertex pair describing an undirected edge.
pub type EdgePair = (VertexId, VertexId);

/// Structural contract every graph collaborator must satisfy.
///
/// Edges are undirected: `{u, v}` and `{v, u}` name the same edge, and
/// [`neighbors`](UndirectedGraph::neighbors) reports every partner regardless
/// of insertion direction. Every method taking a vertex id fails with
/// [`TopoError::IndexOutOfRange`] when the id is not below
/// [`vertex_count`](UndirectedGraph::vertex_count).
pub trait UndirectedGraph {
    /// Data attached to each vertex.
    type VertexData: Clone + Default;
    /// Data attached to each edge.
    type EdgeData: Clone + Default;
    /// Data attached to the graph as a whole.
    type GraphData: Clone + Default;

    /// Creates a graph with `count` isolated vertices carrying default data.
    fn with_vertices(count: usize) -> Self
    where
        Self: Sized;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns every vertex sharing an edge with `vertex`.
    fn neighbors(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn Iterator<Item = VertexId> + '_>, TopoError>;

    /// Inserts the edge `{u, v}`. Returns `false` when the collaborator's
    /// duplicate policy left an existing edge in place.
    fn add_edge(&mut self, u: VertexId, v: VertexId, data: Self::EdgeData)
        -> Result<bool, TopoError>;

    /// Removes the edge `{u, v}`, returning its data when it existed.
    fn remove_edge(&mut self, u: VertexId, v: VertexId)
        -> Result<Option<Self::EdgeData>, TopoError>;

    /// Returns the data attached to edge `{u, v}`, if the edge exists.
    fn edge_data(&self, u: VertexId, v: VertexId) -> Result<Option<&Self::EdgeData>, TopoError>;

    /// Returns the data attached to `vertex`.
    fn vertex_data(&self, vertex: VertexId) -> Result<&Self::VertexData, TopoError>;

    /// Replaces the data attached to `vertex`.
    fn set_vertex_data(&mut self, vertex: VertexId, data: Self::VertexData)
        -> Result<(), TopoError>;

    /// Returns the whole-graph data.
    fn graph_data(&self) -> &Self::GraphData;

    /// Replaces the whole-graph data.
    fn set_graph_data(&mut self, data: Self::GraphData);

    /// Returns an iterator over all vertex identifiers in increasing order.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        Box::new((0..self.vertex_count()).map(VertexId::from_index))
    }

    /// Returns whether `vertex` lies in `0..vertex_count`.
    fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }

    /// Fails with [`TopoError::IndexOutOfRange`] unless `vertex` exists.
    fn check_vertex(&self, vertex: VertexId) -> Result<(), TopoError> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(TopoError::index_out_of_range(
                vertex.index(),
                self.vertex_count(),
            ))
        }
    }

    /// Returns the number of edges incident to `vertex`.
    ///
    /// A self-loop counts once, not twice: the degree equals the number of
    /// entries [`neighbors`](UndirectedGraph::neighbors) yields.
    /// Backends overriding this method must keep that convention.
    fn degree(&self, vertex: VertexId) -> Result<usize, TopoError> {
        Ok(self.neighbors(vertex)?.count())
    }

    /// Returns whether the edge `{u, v}` exists.
    ///
    /// Scans the adjacency of whichever endpoint has the lower degree.
    fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool, TopoError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let (scanned, target) = if self.degree(u)? <= self.degree(v)? {
            (u, v)
        } else {
            (v, u)
        };
        let found = self.neighbors(scanned)?.any(|candidate| candidate == target);
        Ok(found)
    }
}
