use topo_graph::{degree_bounds, degree_sequence, AdjacencyGraph};

#[test]
fn star_degrees() {
    let graph: AdjacencyGraph = AdjacencyGraph::from_edges(5, &[(0, 1), (0, 2), (0, 3)]).unwrap();
    assert_eq!(degree_sequence(&graph).unwrap(), vec![3, 1, 1, 1, 0]);

    let bounds = degree_bounds(&graph).unwrap();
    assert_eq!(bounds.min_degree, Some(0));
    assert_eq!(bounds.max_degree, Some(3));
}

#[test]
fn empty_graph_bounds_are_unknown() {
    let graph: AdjacencyGraph = AdjacencyGraph::new();
    assert!(degree_sequence(&graph).unwrap().is_empty());

    let bounds = degree_bounds(&graph).unwrap();
    assert_eq!(bounds.min_degree, None);
    assert_eq!(bounds.max_degree, None);
}
