use log::trace;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::dfs::DepthFirstSearch;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::layout;
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::{Vertex, VertexId};
use crate::Result;

/// What happens when an edge is inserted between a pair that already has one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Keep every inserted weight; single-scalar views use the minimum
    #[default]
    Multigraph,
    /// Replace whatever was recorded for the pair
    Overwrite,
}

/// An undirected weighted graph backed by a vertex arena
///
/// Vertices live in insertion order in a `Vec` and refer to each other by
/// [`VertexId`]. The adjacency relation is kept symmetric: every edge is
/// recorded on both endpoints.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<K, W = f64>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    /// Vertex arena, indexed by `VertexId`
    vertices: Vec<Vertex<K, W>>,

    /// Identity -> arena handle
    index: HashMap<K, VertexId>,

    /// Number of recorded edges, parallel edges included
    edge_count: usize,

    policy: EdgePolicy,
}

impl<K, W> Default for UndirectedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        UndirectedGraph::new()
    }
}

impl<K, W> UndirectedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    /// Creates a new empty multigraph
    pub fn new() -> Self {
        UndirectedGraph::with_policy(EdgePolicy::default())
    }

    /// Creates a new empty graph with the given edge policy
    pub fn with_policy(policy: EdgePolicy) -> Self {
        UndirectedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
            policy,
        }
    }

    /// Creates a new empty multigraph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        UndirectedGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edge_count: 0,
            policy: EdgePolicy::default(),
        }
    }

    pub fn policy(&self) -> EdgePolicy {
        self.policy
    }

    /// Vertex identities in enumeration order
    pub fn vertex_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.vertices.iter().map(|v| v.id())
    }

    /// Dense matrix of minimum pairwise weights, see [`layout::adjacency_matrix`]
    pub fn adjacency_matrix(&self) -> Vec<Vec<W>> {
        layout::adjacency_matrix(self)
    }

    /// Rough 2-D layout, see [`layout::approximate_positions`]
    pub fn approximate_positions(&self) -> Vec<(W, W)> {
        layout::approximate_positions(self)
    }

    /// Depth-first visitation order from `start`, exploring neighbors in
    /// adjacency order
    ///
    /// An unknown `start` yields a single-element sequence.
    pub fn depth_first_search(&self, start: &K) -> Vec<K> {
        DepthFirstSearch::new().visit::<K, W, Self>(self, start)
    }

    /// Shortest distances and predecessors from `start`, stopping once `end`
    /// is settled
    ///
    /// Fails only when the graph holds a negative or NaN weight.
    pub fn shortest_paths(
        &self,
        start: &K,
        end: &K,
    ) -> Result<(HashMap<K, W>, HashMap<K, Option<K>>)> {
        let dijkstra = Dijkstra::new();
        let result = ShortestPathAlgorithm::<K, W, Self>::compute_shortest_paths(
            &dijkstra,
            self,
            start,
            Some(end),
        )?;
        Ok(result.into_parts())
    }
}

impl<K, W> Graph<K, W> for UndirectedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn lookup(&self, id: &K) -> Option<VertexId> {
        self.index.get(id).copied()
    }

    fn vertex(&self, handle: VertexId) -> Option<&Vertex<K, W>> {
        self.vertices.get(handle.0)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &Vertex<K, W>> + '_> {
        Box::new(self.vertices.iter())
    }
}

impl<K, W> MutableGraph<K, W> for UndirectedGraph<K, W>
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
{
    fn get_or_create_vertex(&mut self, id: K) -> VertexId {
        if let Some(&handle) = self.index.get(&id) {
            return handle;
        }

        let handle = VertexId(self.vertices.len());
        trace!("creating vertex {:?} as {}", id, handle);
        self.index.insert(id.clone(), handle);
        self.vertices.push(Vertex::new(id, handle));
        handle
    }

    fn add_edge(&mut self, a: K, b: K, weight: W) -> bool {
        let u = self.get_or_create_vertex(a);
        let v = self.get_or_create_vertex(b);

        if u == v {
            trace!("ignoring self-loop on {}", u);
            return false;
        }

        if self.policy == EdgePolicy::Overwrite {
            let previous = self.vertices[u.0].weights_mut(v).len();
            self.edge_count -= previous;
            self.vertices[u.0].weights_mut(v).clear();
            self.vertices[v.0].weights_mut(u).clear();
        }

        self.vertices[u.0].weights_mut(v).insert(weight);
        self.vertices[v.0].weights_mut(u).insert(weight);
        self.edge_count += 1;
        true
    }
}
