use crate::graph::{MutableGraph, UndirectedGraph};
use rand::prelude::*;
use std::collections::HashSet;

/// Generates a random connected graph with `n` vertices labelled `0..n`
///
/// A random spanning tree keeps every vertex reachable from `0`, then
/// `extra_edges` further edges are drawn between random distinct pairs.
/// Weights are uniform in `1.0..100.0`. The same `seed` always yields the
/// same graph.
pub fn generate_random_connected(n: usize, extra_edges: usize, seed: u64) -> UndirectedGraph<usize> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    if n == 0 {
        return graph;
    }
    graph.get_or_create_vertex(0);

    // Attach each new vertex to one already in the tree
    for v in 1..n {
        let parent = rng.gen_range(0..v);
        let weight = rng.gen_range(1.0..100.0);
        graph.add_edge(parent, v, weight);
    }

    if n < 2 {
        return graph;
    }

    for _ in 0..extra_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1.0..100.0);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights
///
/// Vertex `(x, y)` is labelled `y * width + x`. Cells listed in `blocked`
/// get no edges at all, though they still exist as isolated vertices.
pub fn generate_grid(width: usize, height: usize, blocked: &[(usize, usize)]) -> UndirectedGraph<usize> {
    let mut graph = UndirectedGraph::with_capacity(width * height);
    let blocked: HashSet<(usize, usize)> = blocked.iter().copied().collect();

    for y in 0..height {
        for x in 0..width {
            graph.get_or_create_vertex(y * width + x);
        }
    }

    for y in 0..height {
        for x in 0..width {
            if blocked.contains(&(x, y)) {
                continue;
            }
            let vertex = y * width + x;

            // Only look right and down; the graph is undirected
            if x + 1 < width && !blocked.contains(&(x + 1, y)) {
                graph.add_edge(vertex, vertex + 1, 1.0);
            }
            if y + 1 < height && !blocked.contains(&(x, y + 1)) {
                graph.add_edge(vertex, vertex + width, 1.0);
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn random_graph_is_reproducible() {
        let a = generate_random_connected(50, 100, 7);
        let b = generate_random_connected(50, 100, 7);
        assert_eq!(a.vertex_count(), 50);
        assert_eq!(a.edge_count(), b.edge_count());
        assert_eq!(a.adjacency_matrix(), b.adjacency_matrix());
    }

    #[test]
    fn grid_edge_count() {
        let graph = generate_grid(4, 3, &[]);
        assert_eq!(graph.vertex_count(), 12);
        // 3 rows of 3 horizontal edges, 2 rows of 4 vertical edges
        assert_eq!(graph.edge_count(), 17);
    }
}
