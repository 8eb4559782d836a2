use log::{debug, trace};
use num_traits::Float;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Order in which a vertex's neighbors are pushed onto the DFS stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighborOrder {
    /// Whatever order the adjacency map yields; not stable across runs
    #[default]
    Adjacency,
    /// Smallest identity explored first; deterministic
    Sorted,
}

/// Stack-based depth-first traversal
#[derive(Debug, Default, Clone)]
pub struct DepthFirstSearch {
    order: NeighborOrder,
    strict_lookup: bool,
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        DepthFirstSearch::default()
    }

    /// Sets the neighbor push order
    pub fn with_neighbor_order(mut self, order: NeighborOrder) -> Self {
        self.order = order;
        self
    }

    /// Fail on a start identity that is not in the graph instead of treating
    /// it as an isolated vertex
    pub fn with_strict_lookup(mut self, strict: bool) -> Self {
        self.strict_lookup = strict;
        self
    }

    /// Returns the visitation order from `start`
    ///
    /// Fails only with strict lookup enabled and an unknown `start`.
    pub fn traverse<K, W, G>(&self, graph: &G, start: &K) -> Result<Vec<K>>
    where
        K: Clone + Eq + Hash + Ord + Debug,
        W: Float + Debug,
        G: Graph<K, W>,
    {
        if self.strict_lookup && !graph.has_vertex(start) {
            return Err(Error::VertexNotFound(format!("{:?}", start)));
        }
        Ok(self.visit::<K, W, G>(graph, start))
    }

    /// Returns the visitation order from `start`, treating an unknown start
    /// as an isolated vertex
    pub fn visit<K, W, G>(&self, graph: &G, start: &K) -> Vec<K>
    where
        K: Clone + Eq + Hash + Ord + Debug,
        W: Float + Debug,
        G: Graph<K, W>,
    {
        let start_handle = match graph.lookup(start) {
            Some(handle) => handle,
            None => {
                debug!("dfs start {:?} not in graph", start);
                return vec![start.clone()];
            }
        };

        let mut stack = vec![start_handle];
        let mut visited: HashSet<VertexId> = HashSet::with_capacity(graph.vertex_count());
        let mut result = Vec::new();

        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            let vertex = match graph.vertex(current) {
                Some(vertex) => vertex,
                None => continue,
            };
            trace!("dfs visiting {:?}", vertex.id());
            result.push(vertex.id().clone());

            match self.order {
                NeighborOrder::Adjacency => {
                    stack.extend(
                        vertex
                            .neighbors()
                            .map(|(v, _)| v)
                            .filter(|v| !visited.contains(v)),
                    );
                }
                NeighborOrder::Sorted => {
                    let mut next: Vec<(&K, VertexId)> = vertex
                        .neighbors()
                        .map(|(v, _)| v)
                        .filter(|v| !visited.contains(v))
                        .filter_map(|v| graph.vertex(v).map(|n| (n.id(), v)))
                        .collect();
                    // Largest first so the smallest identity is popped next
                    next.sort_unstable_by(|a, b| b.0.cmp(a.0));
                    stack.extend(next.into_iter().map(|(_, v)| v));
                }
            }
        }

        debug!("dfs from {:?} visited {} vertices", start, result.len());
        result
    }
}
