use topo_core::errors::TopoError;
use topo_core::{UndirectedGraph, VertexId};
use topo_graph::{install_edges, is_adjacent, list_edges, remove_self_loops, AdjacencyGraph};

fn v(index: usize) -> VertexId {
    VertexId::from_index(index)
}

#[test]
fn each_edge_listed_once() {
    let graph: AdjacencyGraph =
        AdjacencyGraph::from_edges(4, &[(1, 0), (2, 1), (3, 0), (3, 3)]).unwrap();
    assert_eq!(
        list_edges(&graph).unwrap(),
        vec![(v(0), v(1)), (v(0), v(3)), (v(1), v(2)), (v(3), v(3))]
    );
}

#[test]
fn install_reports_new_edges_only() {
    let mut graph: AdjacencyGraph = AdjacencyGraph::with_vertices(3);
    let pairs = [(v(0), v(1)), (v(1), v(0)), (v(1), v(2))];
    assert_eq!(install_edges(&pairs, &mut graph).unwrap(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn install_propagates_range_errors() {
    let mut graph: AdjacencyGraph = AdjacencyGraph::with_vertices(2);
    let err = install_edges(&[(v(0), v(1)), (v(1), v(4))], &mut graph).unwrap_err();
    assert!(matches!(err, TopoError::IndexOutOfRange(_)));
}

#[test]
fn adjacency_is_symmetric() {
    let graph: AdjacencyGraph = AdjacencyGraph::from_edges(3, &[(2, 0)]).unwrap();
    assert!(is_adjacent(&graph, v(0), v(2)).unwrap());
    assert!(is_adjacent(&graph, v(2), v(0)).unwrap());
    assert!(!is_adjacent(&graph, v(1), v(2)).unwrap());
    assert!(is_adjacent(&graph, v(0), v(3)).is_err());
}

#[test]
fn self_loops_are_stripped() {
    let mut graph: AdjacencyGraph =
        AdjacencyGraph::from_edges(3, &[(0, 0), (0, 1), (2, 2)]).unwrap();
    assert_eq!(remove_self_loops(&mut graph).unwrap(), 2);
    assert_eq!(list_edges(&graph).unwrap(), vec![(v(0), v(1))]);
    assert_eq!(remove_self_loops(&mut graph).unwrap(), 0);
}
