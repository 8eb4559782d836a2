use std::collections::HashSet;
use weighted_graph::graph::generators::generate_random_connected;
use weighted_graph::graph::{Graph, MutableGraph, UndirectedGraph};
use weighted_graph::{DepthFirstSearch, Error, NeighborOrder};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Two components: {1, 2, 3, 4} and {10, 11}
fn two_components() -> UndirectedGraph<u32> {
    let mut graph = UndirectedGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 3, 1.0);
    graph.add_edge(3, 1, 1.0);
    graph.add_edge(3, 4, 2.0);
    graph.add_edge(10, 11, 1.0);
    graph
}

#[test]
fn test_dfs_visits_exactly_the_reachable_component() {
    init_logging();
    let graph = two_components();

    let order = graph.depth_first_search(&1);
    let unique: HashSet<u32> = order.iter().copied().collect();

    assert_eq!(order.len(), unique.len(), "no vertex appears twice");
    assert_eq!(unique, HashSet::from([1, 2, 3, 4]));
    assert_eq!(order[0], 1, "start comes first");

    let other = graph.depth_first_search(&11);
    assert_eq!(other, vec![11, 10]);
}

#[test]
fn test_dfs_sorted_order_is_deterministic() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("a", "c", 1.0);
    graph.add_edge("a", "b", 1.0);
    graph.add_edge("b", "d", 1.0);
    graph.add_edge("c", "d", 1.0);

    let dfs = DepthFirstSearch::new().with_neighbor_order(NeighborOrder::Sorted);
    let order = dfs.traverse(&graph, &"a").unwrap();
    assert_eq!(order, vec!["a", "b", "d", "c"]);

    // Same result on every run
    for _ in 0..5 {
        assert_eq!(dfs.traverse(&graph, &"a").unwrap(), order);
    }
}

#[test]
fn test_dfs_follows_a_chain() {
    let mut graph = UndirectedGraph::new();
    for i in 0..9u32 {
        graph.add_edge(i, i + 1, 1.0);
    }
    let order = graph.depth_first_search(&0);
    assert_eq!(order, (0..10).collect::<Vec<u32>>());
}

#[test]
fn test_dfs_unknown_start_is_isolated() {
    let graph = two_components();
    let before = graph.vertex_count();

    assert_eq!(graph.depth_first_search(&42), vec![42]);
    assert_eq!(graph.vertex_count(), before, "traversal does not mutate the graph");
}

#[test]
fn test_dfs_strict_lookup_rejects_unknown_start() {
    let graph = two_components();
    let dfs = DepthFirstSearch::new().with_strict_lookup(true);

    match dfs.traverse(&graph, &42) {
        Err(Error::VertexNotFound(id)) => assert_eq!(id, "42"),
        other => panic!("expected VertexNotFound, got {:?}", other),
    }
    assert!(dfs.traverse(&graph, &1).is_ok());
}

#[test]
fn test_dfs_reaches_every_vertex_of_connected_graph() {
    let graph = generate_random_connected(200, 300, 42);
    let order = graph.depth_first_search(&0);
    let unique: HashSet<usize> = order.iter().copied().collect();
    assert_eq!(order.len(), 200);
    assert_eq!(unique.len(), 200);
}
