//! Derived views of a graph: the dense adjacency matrix and a coarse 2-D
//! layout built from it.
//!
//! Both are snapshots; rows, columns and positions follow the graph's vertex
//! enumeration order.

use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;

/// Builds the dense matrix of minimum pairwise weights
///
/// Diagonal entries are zero and pairs without an edge hold positive infinity.
pub fn adjacency_matrix<K, W, G>(graph: &G) -> Vec<Vec<W>>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<K, W>,
{
    let n = graph.vertex_count();
    let mut matrix = vec![vec![W::infinity(); n]; n];

    for (i, vertex) in graph.vertices().enumerate() {
        matrix[i][i] = W::zero();
        for (neighbor, weights) in vertex.neighbors() {
            if let Some(min) = weights.min() {
                matrix[i][neighbor.index()] = min;
            }
        }
    }

    matrix
}

/// Estimates a 2-D position for every vertex
///
/// The first vertex sits at the origin. Vertex `i` (for `i >= 1`) is placed at
/// angle `2π(i - 1) / (n - 1)` and at a radius equal to its direct edge weight
/// from the first vertex, i.e. its entry in row 0 of [`adjacency_matrix`].
///
/// Vertices with no edge to the first vertex have an infinite matrix
/// distance. Using that as a radius would yield infinite and NaN coordinates,
/// so such vertices are instead placed on a ring one unit beyond the farthest
/// adjacent vertex (radius `1` if none is adjacent). This is the one case
/// where the radius is not the matrix distance; the origin and the evenly
/// spread angles are unaffected.
pub fn approximate_positions<K, W, G>(graph: &G) -> Vec<(W, W)>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<K, W>,
{
    let n = graph.vertex_count();
    if n == 0 {
        return Vec::new();
    }

    let matrix = adjacency_matrix(graph);
    let origin = &matrix[0];

    let farthest = origin
        .iter()
        .copied()
        .filter(|d| d.is_finite())
        .fold(W::zero(), W::max);
    let outer_ring = farthest + W::one();

    let mut positions = Vec::with_capacity(n);
    positions.push((W::zero(), W::zero()));

    let full_turn = W::from(2.0 * std::f64::consts::PI).unwrap_or_else(W::zero);
    let slots = W::from(n - 1).unwrap_or_else(W::one);

    for (i, &distance) in origin.iter().enumerate().skip(1) {
        let radius = if distance.is_finite() {
            distance
        } else {
            outer_ring
        };
        let step = W::from(i - 1).unwrap_or_else(W::zero);
        let angle = full_turn * step / slots;
        positions.push((radius * angle.cos(), radius * angle.sin()));
    }

    positions
}
