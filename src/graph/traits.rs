use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::WeightSet;
use crate::graph::vertex::{Vertex, VertexId};

/// Trait representing a weighted graph whose vertices carry caller-chosen
/// identities of type `K`
pub trait Graph<K, W>: Debug
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of recorded edges, parallel edges included
    fn edge_count(&self) -> usize;

    /// Resolves an identity to its handle without creating anything
    fn lookup(&self, id: &K) -> Option<VertexId>;

    /// Returns the vertex behind a handle
    fn vertex(&self, handle: VertexId) -> Option<&Vertex<K, W>>;

    /// Iterates over all vertices in handle order, which is insertion order
    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex<K, W>> + '_>;

    /// Returns true if a vertex with this identity exists
    fn has_vertex(&self, id: &K) -> bool {
        self.lookup(id).is_some()
    }

    /// Iterates over the neighbors of a vertex with the weights recorded
    /// towards each of them
    fn neighbors<'a>(
        &'a self,
        handle: VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, &'a WeightSet<W>)> + 'a>
    where
        K: 'a,
    {
        match self.vertex(handle) {
            Some(vertex) => Box::new(vertex.neighbors()),
            None => Box::new(std::iter::empty()),
        }
    }

    /// Smallest weight recorded between two vertices
    fn min_weight(&self, a: VertexId, b: VertexId) -> Option<W> {
        self.vertex(a)
            .and_then(|vertex| vertex.weights_to(b))
            .and_then(|weights| weights.min())
    }

    /// Returns the first weight that is negative or NaN, if any
    fn find_invalid_weight(&self) -> Option<W> {
        self.vertices()
            .flat_map(|vertex| vertex.neighbors())
            .flat_map(|(_, weights)| weights.iter())
            .find(|w| w.is_nan() || *w < W::zero())
    }
}

/// Trait for graph mutation
pub trait MutableGraph<K, W>: Graph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    /// Returns the handle for `id`, creating an isolated vertex if needed
    fn get_or_create_vertex(&mut self, id: K) -> VertexId;

    /// Records an edge of the given weight between `a` and `b`, creating
    /// either endpoint if needed
    ///
    /// Returns false when nothing was recorded (self-loops).
    fn add_edge(&mut self, a: K, b: K, weight: W) -> bool;
}
