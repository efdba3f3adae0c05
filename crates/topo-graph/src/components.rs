use topo_core::errors::TopoError;
use topo_core::{UndirectedGraph, VertexId};
use tracing::{debug, instrument};

use crate::ids::vertex;

const UNASSIGNED: usize = usize::MAX;

/// Connected-component assignment for every vertex of a graph.
///
/// Labels form the dense range `0..count`. Label 0 belongs to the component
/// of vertex 0, and each later label goes to the component of the lowest
/// vertex id not covered by an earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentLabels {
    labels: Vec<usize>,
    count: usize,
}

impl ComponentLabels {
    /// Returns the component label of `vertex`, or `None` for unknown ids.
    pub fn label_of(&self, vertex: VertexId) -> Option<usize> {
        self.labels.get(vertex.index()).copied()
    }

    /// Returns the label of every vertex, indexed by vertex id.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Returns the number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the population of each component, indexed by label.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.count];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Returns the vertices carrying `label`, in increasing id order.
    pub fn members(&self, label: usize) -> Vec<VertexId> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, assigned)| **assigned == label)
            .map(|(idx, _)| vertex(idx))
            .collect()
    }
}

/// Partitions the vertices of `graph` into connected components.
///
/// Uses an explicit stack so deep paths cannot overflow the call stack.
/// Isolated vertices become singleton components.
#[instrument(level = "debug", skip_all, fields(vertices = graph.vertex_count()))]
pub fn connected_components<G: UndirectedGraph>(graph: &G) -> Result<ComponentLabels, TopoError> {
    let mut labels = vec![UNASSIGNED; graph.vertex_count()];
    let mut count = 0;
    let mut stack = Vec::new();
    for seed in graph.vertices() {
        if labels[seed.index()] != UNASSIGNED {
            continue;
        }
        labels[seed.index()] = count;
        stack.push(seed);
        while let Some(current) = stack.pop() {
            for next in graph.neighbors(current)? {
                let slot = labels.get_mut(next.index()).ok_or_else(|| {
                    TopoError::index_out_of_range(next.index(), graph.vertex_count())
                        .with_context("reported_by", current)
                })?;
                if *slot == UNASSIGNED {
                    *slot = count;
                    stack.push(next);
                }
            }
        }
        count += 1;
    }
    debug!(components = count, "labelled connected components");
    Ok(ComponentLabels { labels, count })
}
