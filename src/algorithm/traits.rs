use log::warn;
use num_traits::Float;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::Graph;
use crate::Result;

/// Result of a shortest path algorithm execution
///
/// Covers every vertex the graph held at call time, plus the start and target
/// identities even when they were never inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Distance from the source to each vertex; infinity when unreached
    pub distances: HashMap<K, W>,

    /// Vertex the shortest path arrives from; `None` for the source and for
    /// unreached vertices
    pub predecessors: HashMap<K, Option<K>>,

    /// Source vertex identity
    pub source: K,

    /// Target the search was allowed to stop at, if any
    pub target: Option<K>,
}

impl<K, W> ShortestPathResult<K, W>
where
    K: Clone + Eq + Hash + Debug,
    W: Float + Debug,
{
    /// Distance to `vertex`, `None` if the vertex is not covered by the result
    pub fn distance(&self, vertex: &K) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn predecessor(&self, vertex: &K) -> Option<&K> {
        self.predecessors.get(vertex).and_then(|p| p.as_ref())
    }

    pub fn is_reachable(&self, vertex: &K) -> bool {
        self.distance(vertex).map_or(false, |d| d.is_finite())
    }

    /// Splits the result into its distance and predecessor mappings
    pub fn into_parts(self) -> (HashMap<K, W>, HashMap<K, Option<K>>) {
        (self.distances, self.predecessors)
    }

    /// Reconstructs the vertex sequence from the source to `target` by
    /// following predecessor links
    ///
    /// Returns `None` if `target` was not reached.
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        while current != self.source {
            if !visited.insert(current.clone()) {
                warn!("cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }

            match self.predecessor(&current) {
                Some(pred) => {
                    path.push(current);
                    current = pred.clone();
                }
                None => {
                    warn!("broken predecessor chain at vertex {:?}", current);
                    return None;
                }
            }
        }

        path.push(self.source.clone());
        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<K, W>,
{
    /// Compute shortest paths from `source`, optionally stopping once
    /// `target` is settled
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: &K,
        target: Option<&K>,
    ) -> Result<ShortestPathResult<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<K, W>, target: &K) -> Option<Vec<K>> {
        result.path_to(target)
    }
}
