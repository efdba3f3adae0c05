use rand::Rng;
use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::rng::RngHandle;
use topo_core::{EdgePair, UndirectedGraph};
use tracing::{debug, instrument, trace, warn};

use crate::config::RewireConfig;
use crate::edges::list_edges;

/// Summary of a rewiring run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewireOutcome {
    /// Number of accepted double-edge swaps.
    pub swaps: usize,
    /// Total attempts drawn, accepted or not.
    pub attempts: usize,
    /// Attempts that drew the same edge slot twice.
    pub rejected_same_slot: usize,
    /// Attempts whose four endpoints were not pairwise distinct.
    pub rejected_overlap: usize,
    /// Attempts that would have recreated an existing edge.
    pub rejected_duplicate: usize,
    /// Whether the attempt budget ran out before the requested swap count.
    pub exhausted: bool,
}

/// Performs `swaps` degree-preserving double-edge swaps on `graph` in place.
///
/// Each attempt picks two distinct edges `(a1, a2)` and `(b1, b2)` with random
/// orientation and replaces them by `(a1, b2)` and `(b1, a2)`. Attempts that
/// would create a self-loop or a multi-edge are rejected without touching the
/// graph. Every vertex keeps its degree. Each new edge inherits the data of
/// the edge it replaced.
///
/// The edge list is materialized once and kept in step with the graph after
/// every accepted swap. Swaps accepted before an error stay applied.
#[instrument(
    level = "debug",
    skip_all,
    fields(vertices = graph.vertex_count(), requested = swaps)
)]
pub fn randomize_endpoints<G, R>(
    graph: &mut G,
    swaps: usize,
    config: &RewireConfig,
    rng: &mut R,
) -> Result<RewireOutcome, TopoError>
where
    G: UndirectedGraph,
    R: Rng + ?Sized,
{
    config.validate()?;
    let mut outcome = RewireOutcome::default();
    if swaps == 0 {
        return Ok(outcome);
    }

    let mut edges = list_edges(graph)?;
    if edges.len() < 2 {
        return Err(TopoError::EmptyGraph(
            ErrorInfo::new("empty-graph", "rewiring needs at least two edges")
                .with_context("edges", edges.len())
                .with_context("requested", swaps),
        ));
    }

    let budget = config.attempt_budget(swaps);
    while outcome.swaps < swaps {
        if outcome.attempts >= budget {
            warn!(
                accepted = outcome.swaps,
                requested = swaps,
                attempts = outcome.attempts,
                "rewire attempt budget exhausted"
            );
            if config.fail_on_exhaustion {
                return Err(TopoError::SwapBudgetExhausted(
                    ErrorInfo::new(
                        "swap-budget-exhausted",
                        "ran out of attempts before reaching the requested swap count",
                    )
                    .with_context("accepted", outcome.swaps)
                    .with_context("requested", swaps)
                    .with_context("attempts", outcome.attempts)
                    .with_hint("raise attempts_per_swap or request fewer swaps"),
                ));
            }
            outcome.exhausted = true;
            break;
        }
        outcome.attempts += 1;

        let e1 = rng.gen_range(0..edges.len());
        let e2 = rng.gen_range(0..edges.len());
        if e1 == e2 {
            outcome.rejected_same_slot += 1;
            continue;
        }

        let (a1, a2) = orient(edges[e1], rng);
        let (b1, b2) = orient(edges[e2], rng);
        if a1 == a2 || b1 == b2 || a1 == b1 || a1 == b2 || a2 == b1 || a2 == b2 {
            trace!(%a1, %a2, %b1, %b2, "rejected swap with shared endpoints");
            outcome.rejected_overlap += 1;
            continue;
        }
        if graph.has_edge(a1, b2)? || graph.has_edge(b1, a2)? {
            trace!(%a1, %a2, %b1, %b2, "rejected swap creating a multi-edge");
            outcome.rejected_duplicate += 1;
            continue;
        }

        swap_edges(graph, (a1, a2), (b1, b2))?;
        edges[e1] = (a1, b2);
        edges[e2] = (b1, a2);
        outcome.swaps += 1;
    }

    debug!(
        accepted = outcome.swaps,
        attempts = outcome.attempts,
        exhausted = outcome.exhausted,
        "rewiring finished"
    );
    Ok(outcome)
}

/// Runs [`randomize_endpoints`] with the default configuration and an
/// entropy-seeded RNG.
pub fn randomize_endpoints_with_entropy<G: UndirectedGraph>(
    graph: &mut G,
    swaps: usize,
) -> Result<RewireOutcome, TopoError> {
    let mut rng = RngHandle::from_entropy();
    randomize_endpoints(graph, swaps, &RewireConfig::default(), &mut rng)
}

fn orient<R: Rng + ?Sized>((u, v): EdgePair, rng: &mut R) -> EdgePair {
    if rng.gen_bool(0.5) {
        (u, v)
    } else {
        (v, u)
    }
}

/// Replaces `(a1, a2)` and `(b1, b2)` by `(a1, b2)` and `(b1, a2)`.
///
/// Restores the original pair of edges if the collaborator fails midway.
fn swap_edges<G: UndirectedGraph>(
    graph: &mut G,
    (a1, a2): EdgePair,
    (b1, b2): EdgePair,
) -> Result<(), TopoError> {
    let first = graph.remove_edge(a1, a2)?.unwrap_or_default();
    let second = match graph.remove_edge(b1, b2) {
        Ok(data) => data.unwrap_or_default(),
        Err(err) => {
            let _ = graph.add_edge(a1, a2, first);
            return Err(err);
        }
    };
    if let Err(err) = graph.add_edge(a1, b2, first.clone()) {
        let _ = graph.add_edge(a1, a2, first);
        let _ = graph.add_edge(b1, b2, second);
        return Err(err);
    }
    if let Err(err) = graph.add_edge(b1, a2, second.clone()) {
        let _ = graph.remove_edge(a1, b2);
        let _ = graph.add_edge(a1, a2, first);
        let _ = graph.add_edge(b1, b2, second);
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjacency::AdjacencyGraph;
    use crate::ids::{normalized, vertex};
    use topo_core::VertexId;

    /// Backend that refuses to insert one chosen edge.
    struct RefusingGraph {
        inner: AdjacencyGraph<(), u32>,
        refused: Option<EdgePair>,
    }

    impl RefusingGraph {
        fn with_edges(edges: &[(usize, usize, u32)], refused: (usize, usize)) -> Self {
            let mut inner = AdjacencyGraph::with_vertices(4);
            for &(u, v, data) in edges {
                inner.add_edge(vertex(u), vertex(v), data).unwrap();
            }
            Self {
                inner,
                refused: Some(normalized(vertex(refused.0), vertex(refused.1))),
            }
        }
    }

    impl UndirectedGraph for RefusingGraph {
        type VertexData = ();
        type EdgeData = u32;
        type GraphData = ();

        fn with_vertices(count: usize) -> Self {
            Self {
                inner: AdjacencyGraph::with_vertices(count),
                refused: None,
            }
        }

        fn vertex_count(&self) -> usize {
            self.inner.vertex_count()
        }

        fn neighbors(
            &self,
            vertex: VertexId,
        ) -> Result<Box<dyn Iterator<Item = VertexId> + '_>, TopoError> {
            self.inner.neighbors(vertex)
        }

        fn add_edge(&mut self, u: VertexId, v: VertexId, data: u32) -> Result<bool, TopoError> {
            if self.refused == Some(normalized(u, v)) {
                return Err(TopoError::Graph(
                    ErrorInfo::new("refused-edge", "backend rejected the insertion")
                        .with_context("u", u)
                        .with_context("v", v),
                ));
            }
            self.inner.add_edge(u, v, data)
        }

        fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<Option<u32>, TopoError> {
            self.inner.remove_edge(u, v)
        }

        fn edge_data(&self, u: VertexId, v: VertexId) -> Result<Option<&u32>, TopoError> {
            self.inner.edge_data(u, v)
        }

        fn vertex_data(&self, vertex: VertexId) -> Result<&(), TopoError> {
            self.inner.vertex_data(vertex)
        }

        fn set_vertex_data(&mut self, vertex: VertexId, data: ()) -> Result<(), TopoError> {
            self.inner.set_vertex_data(vertex, data)
        }

        fn graph_data(&self) -> &() {
            self.inner.graph_data()
        }

        fn set_graph_data(&mut self, data: ()) {
            self.inner.set_graph_data(data)
        }
    }

    fn assert_restored(graph: &RefusingGraph) {
        let pairs: Vec<_> = graph.inner.edge_pairs().collect();
        assert_eq!(pairs, vec![(vertex(0), vertex(1)), (vertex(2), vertex(3))]);
        assert_eq!(graph.edge_data(vertex(0), vertex(1)).unwrap(), Some(&1));
        assert_eq!(graph.edge_data(vertex(2), vertex(3)).unwrap(), Some(&2));
    }

    #[test]
    fn swap_moves_edge_data_with_slots() {
        let mut graph: AdjacencyGraph<(), u32> = AdjacencyGraph::with_vertices(4);
        graph.add_edge(vertex(0), vertex(1), 1).unwrap();
        graph.add_edge(vertex(2), vertex(3), 2).unwrap();

        swap_edges(&mut graph, (vertex(0), vertex(1)), (vertex(2), vertex(3))).unwrap();

        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_data(vertex(0), vertex(3)).unwrap(), Some(&1));
        assert_eq!(graph.edge_data(vertex(2), vertex(1)).unwrap(), Some(&2));
        assert!(!graph.has_edge(vertex(0), vertex(1)).unwrap());
    }

    #[test]
    fn failed_first_insertion_restores_both_edges() {
        let mut graph = RefusingGraph::with_edges(&[(0, 1, 1), (2, 3, 2)], (0, 3));

        let err =
            swap_edges(&mut graph, (vertex(0), vertex(1)), (vertex(2), vertex(3))).unwrap_err();

        assert_eq!(err.info().code, "refused-edge");
        assert_restored(&graph);
    }

    #[test]
    fn failed_second_insertion_restores_both_edges() {
        let mut graph = RefusingGraph::with_edges(&[(0, 1, 1), (2, 3, 2)], (1, 2));

        let err =
            swap_edges(&mut graph, (vertex(0), vertex(1)), (vertex(2), vertex(3))).unwrap_err();

        assert_eq!(err.info().code, "refused-edge");
        assert!(!graph.has_edge(vertex(0), vertex(3)).unwrap());
        assert_restored(&graph);
    }

    #[test]
    fn orientation_keeps_endpoints() {
        let mut rng = RngHandle::from_seed(3);
        for _ in 0..32 {
            let (u, v) = orient((vertex(4), vertex(9)), &mut rng);
            assert!((u, v) == (vertex(4), vertex(9)) || (u, v) == (vertex(9), vertex(4)));
        }
    }
}
