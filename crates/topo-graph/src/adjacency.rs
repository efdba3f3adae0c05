use std::collections::{BTreeMap, BTreeSet};

use topo_core::errors::TopoError;
use topo_core::{EdgePair, UndirectedGraph, VertexId};

use crate::ids::{normalized, vertex};

/// Adjacency-list implementation of [`UndirectedGraph`].
///
/// Neighbour sets are ordered so every traversal is deterministic. Edge data
/// is stored once per undirected edge, keyed by the normalized `(min, max)`
/// endpoint pair. Self-loops are permitted and appear once in their vertex's
/// neighbour set. Inserting an edge that already exists leaves the original
/// edge and its data untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph<V = (), E = (), G = ()> {
    adjacency: Vec<BTreeSet<VertexId>>,
    vertex_data: Vec<V>,
    edge_data: BTreeMap<EdgePair, E>,
    graph_data: G,
}

impl<V, E, G> AdjacencyGraph<V, E, G>
where
    V: Clone + Default,
    E: Clone + Default,
    G: Clone + Default,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Creates a graph with `count` vertices and the listed edges, all carrying
    /// default data.
    pub fn from_edges(count: usize, edges: &[(usize, usize)]) -> Result<Self, TopoError> {
        let mut graph = Self::with_vertices(count);
        for &(u, v) in edges {
            graph.add_edge(vertex(u), vertex(v), E::default())?;
        }
        Ok(graph)
    }

    /// Appends a vertex carrying `data` and returns its identifier.
    pub fn add_vertex(&mut self, data: V) -> VertexId {
        let id = vertex(self.adjacency.len());
        self.adjacency.push(BTreeSet::new());
        self.vertex_data.push(data);
        id
    }

    /// Returns the number of undirected edges, self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edge_data.len()
    }

    /// Iterates the stored edges in normalized `(min, max)` order.
    pub fn edge_pairs(&self) -> impl Iterator<Item = EdgePair> + '_ {
        self.edge_data.keys().copied()
    }
}

impl<V, E, G> UndirectedGraph for AdjacencyGraph<V, E, G>
where
    V: Clone + Default,
    E: Clone + Default,
    G: Clone + Default,
{
    type VertexData = V;
    type EdgeData = E;
    type GraphData = G;

    fn with_vertices(count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); count],
            vertex_data: vec![V::default(); count],
            edge_data: BTreeMap::new(),
            graph_data: G::default(),
        }
    }

    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(
        &self,
        vertex: VertexId,
    ) -> Result<Box<dyn Iterator<Item = VertexId> + '_>, TopoError> {
        self.check_vertex(vertex)?;
        Ok(Box::new(self.adjacency[vertex.index()].iter().copied()))
    }

    fn add_edge(&mut self, u: VertexId, v: VertexId, data: E) -> Result<bool, TopoError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let key = normalized(u, v);
        if self.edge_data.contains_key(&key) {
            return Ok(false);
        }
        self.adjacency[u.index()].insert(v);
        self.adjacency[v.index()].insert(u);
        self.edge_data.insert(key, data);
        Ok(true)
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<Option<E>, TopoError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let removed = self.edge_data.remove(&normalized(u, v));
        if removed.is_some() {
            self.adjacency[u.index()].remove(&v);
            self.adjacency[v.index()].remove(&u);
        }
        Ok(removed)
    }

    fn edge_data(&self, u: VertexId, v: VertexId) -> Result<Option<&E>, TopoError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.edge_data.get(&normalized(u, v)))
    }

    fn vertex_data(&self, vertex: VertexId) -> Result<&V, TopoError> {
        self.check_vertex(vertex)?;
        Ok(&self.vertex_data[vertex.index()])
    }

    fn set_vertex_data(&mut self, vertex: VertexId, data: V) -> Result<(), TopoError> {
        self.check_vertex(vertex)?;
        self.vertex_data[vertex.index()] = data;
        Ok(())
    }

    fn graph_data(&self) -> &G {
        &self.graph_data
    }

    fn set_graph_data(&mut self, data: G) {
        self.graph_data = data;
    }

    fn degree(&self, vertex: VertexId) -> Result<usize, TopoError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex.index()].len())
    }

    fn has_edge(&self, u: VertexId, v: VertexId) -> Result<bool, TopoError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        Ok(self.edge_data.contains_key(&normalized(u, v)))
    }
}
