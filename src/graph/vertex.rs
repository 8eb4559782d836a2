use num_traits::Float;
use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::data_structures::WeightSet;

/// Stable handle to a vertex stored in a graph's arena
///
/// Handles are assigned in insertion order starting at zero and never reused,
/// since vertices are only ever added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Position of the vertex in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A vertex: its caller-chosen identity and the weights recorded towards
/// each neighbor
#[derive(Debug, Clone)]
pub struct Vertex<K, W>
where
    W: Float + Debug,
{
    id: K,
    handle: VertexId,
    adjacency: HashMap<VertexId, WeightSet<W>>,
}

impl<K, W> Vertex<K, W>
where
    W: Float + Debug,
{
    pub(crate) fn new(id: K, handle: VertexId) -> Self {
        Vertex {
            id,
            handle,
            adjacency: HashMap::new(),
        }
    }

    /// Caller-chosen identity
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Arena handle of this vertex
    pub fn handle(&self) -> VertexId {
        self.handle
    }

    /// Number of distinct neighbors
    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// Weights recorded between this vertex and `neighbor`, if any
    pub fn weights_to(&self, neighbor: VertexId) -> Option<&WeightSet<W>> {
        self.adjacency.get(&neighbor)
    }

    /// Iterates over neighbors in the (unordered) adjacency order
    pub fn neighbors(&self) -> impl Iterator<Item = (VertexId, &WeightSet<W>)> + '_ {
        self.adjacency.iter().map(|(&v, weights)| (v, weights))
    }

    pub(crate) fn weights_mut(&mut self, neighbor: VertexId) -> &mut WeightSet<W> {
        self.adjacency.entry(neighbor).or_default()
    }
}
