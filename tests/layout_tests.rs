use std::f64::consts::PI;
use weighted_graph::graph::{MutableGraph, UndirectedGraph};

const EPS: f64 = 1e-9;

fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
    assert!(
        (actual.0 - expected.0).abs() < EPS && (actual.1 - expected.1).abs() < EPS,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

fn sample_graph() -> UndirectedGraph<&'static str> {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "B", 4.0);
    graph.add_edge("A", "B", 1.5);
    graph.add_edge("B", "C", 2.0);
    graph.get_or_create_vertex("D");
    graph
}

#[test]
fn test_matrix_diagonal_sentinel_and_minimum() {
    let graph = sample_graph();
    let matrix = graph.adjacency_matrix();

    assert_eq!(matrix.len(), 4);
    for (i, row) in matrix.iter().enumerate() {
        assert_eq!(row.len(), 4);
        assert_eq!(row[i], 0.0, "diagonal must be zero");
    }

    // Order is A, B, C, D
    assert_eq!(matrix[0][1], 1.5, "parallel edges resolve to the minimum");
    assert_eq!(matrix[1][0], 1.5);
    assert_eq!(matrix[1][2], 2.0);
    assert_eq!(matrix[0][2], f64::INFINITY);
    assert_eq!(matrix[3][0], f64::INFINITY);
    assert_eq!(matrix[2][3], f64::INFINITY);
}

#[test]
fn test_matrix_is_a_stable_snapshot() {
    let mut graph = sample_graph();
    let first = graph.adjacency_matrix();
    let second = graph.adjacency_matrix();
    assert_eq!(first, second);

    graph.add_edge("C", "D", 7.0);
    assert_eq!(first[2][3], f64::INFINITY, "snapshot does not update live");
    assert_eq!(graph.adjacency_matrix()[2][3], 7.0);
}

#[test]
fn test_positions_spread_around_first_vertex() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "B", 1.0);
    graph.add_edge("A", "C", 2.0);
    graph.add_edge("A", "D", 3.0);
    graph.add_edge("A", "E", 4.0);

    let positions = graph.approximate_positions();
    assert_eq!(positions.len(), 5);
    assert_close(positions[0], (0.0, 0.0));
    assert_close(positions[1], (1.0, 0.0));
    assert_close(positions[2], (0.0, 2.0));
    assert_close(positions[3], (-3.0, 0.0));
    assert_close(positions[4], (0.0, -4.0));
}

#[test]
fn test_positions_place_unconnected_vertices_on_outer_ring() {
    let mut graph = UndirectedGraph::new();
    graph.add_edge("A", "B", 2.0);
    graph.add_edge("C", "D", 1.0);

    let positions = graph.approximate_positions();
    assert_eq!(positions.len(), 4);
    assert_close(positions[1], (2.0, 0.0));

    let angle = 2.0 * PI / 3.0;
    assert_close(positions[2], (3.0 * angle.cos(), 3.0 * angle.sin()));
    for &(x, y) in &positions {
        assert!(x.is_finite() && y.is_finite());
    }
}

#[test]
fn test_positions_of_tiny_graphs() {
    let empty: UndirectedGraph<u8> = UndirectedGraph::new();
    assert!(empty.approximate_positions().is_empty());
    assert!(empty.adjacency_matrix().is_empty());

    let mut single: UndirectedGraph<u8> = UndirectedGraph::new();
    single.get_or_create_vertex(1);
    assert_eq!(single.approximate_positions(), vec![(0.0, 0.0)]);
}

#[test]
fn test_layout_with_f32_weights() {
    let mut graph: UndirectedGraph<u8, f32> = UndirectedGraph::new();
    graph.add_edge(1, 2, 2.5);
    let matrix = graph.adjacency_matrix();
    assert_eq!(matrix[0][1], 2.5_f32);
    assert_eq!(graph.approximate_positions()[1], (2.5_f32, 0.0_f32));
}
