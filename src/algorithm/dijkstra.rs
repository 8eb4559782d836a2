use log::{debug, trace};
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over non-negative weights
///
/// Where several weights are recorded between a pair of vertices only the
/// smallest one is relaxed. The graph is checked for negative and NaN weights
/// before the search starts.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Fail on start/target identities that are not in the graph instead of
    /// treating them as isolated vertices
    strict_lookup: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Enables or disables strict lookup of the start and target vertices
    pub fn with_strict_lookup(mut self, strict: bool) -> Self {
        self.strict_lookup = strict;
        self
    }
}

/// Maps a bad weight to the matching error
pub(crate) fn weight_error<W: Float>(weight: W) -> Error {
    if weight.is_nan() {
        Error::InvalidWeight
    } else {
        Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NEG_INFINITY))
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: &K,
        target: Option<&K>,
    ) -> Result<ShortestPathResult<K, W>> {
        let start = graph.lookup(source);
        let end = target.and_then(|t| graph.lookup(t));

        if self.strict_lookup {
            if start.is_none() {
                return Err(Error::VertexNotFound(format!("{:?}", source)));
            }
            if let (Some(t), None) = (target, end) {
                return Err(Error::VertexNotFound(format!("{:?}", t)));
            }
        }

        if let Some(weight) = graph.find_invalid_weight() {
            return Err(weight_error(weight));
        }

        let n = graph.vertex_count();
        debug!(
            "dijkstra from {:?} to {:?} over {} vertices",
            source, target, n
        );

        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<VertexId>> = vec![None; n];

        if let Some(start) = start {
            let settled = search::<K, W, G>(graph, start, end, &mut distances, &mut predecessors);
            debug!("dijkstra settled {} of {} vertices", settled, n);
        }

        let mut result = ShortestPathResult {
            distances: HashMap::with_capacity(n + 2),
            predecessors: HashMap::with_capacity(n + 2),
            source: source.clone(),
            target: target.cloned(),
        };

        for vertex in graph.vertices() {
            let i = vertex.handle().index();
            let pred = predecessors[i]
                .and_then(|p| graph.vertex(p))
                .map(|p| p.id().clone());
            result.distances.insert(vertex.id().clone(), distances[i]);
            result.predecessors.insert(vertex.id().clone(), pred);
        }

        // Identities the graph has never seen behave as isolated vertices
        if let Some(t) = target {
            result.distances.entry(t.clone()).or_insert_with(W::infinity);
            result.predecessors.entry(t.clone()).or_insert(None);
        }
        result.distances.insert(source.clone(), W::zero());
        result.predecessors.insert(source.clone(), None);

        Ok(result)
    }
}

/// Runs the search loop, filling `distances` and `predecessors`
///
/// Returns the number of vertices settled before the frontier emptied or the
/// target was settled.
fn search<K, W, G>(
    graph: &G,
    start: VertexId,
    end: Option<VertexId>,
    distances: &mut [W],
    predecessors: &mut [Option<VertexId>],
) -> usize
where
    K: Clone + Eq + Hash + Ord + Debug,
    W: Float + Debug,
    G: Graph<K, W>,
{
    let mut frontier = Frontier::seeded(graph.vertices().map(|vertex| vertex.handle()));
    distances[start.index()] = W::zero();
    frontier.push(start, W::zero());

    let mut settled = 0;
    while let Some((u, dist_u)) = frontier.pop() {
        // Stale entry: a shorter path to u was already recorded
        if dist_u > distances[u.index()] {
            continue;
        }
        // Everything left is unreachable
        if dist_u.is_infinite() {
            break;
        }

        settled += 1;
        trace!("settled {} at distance {:?}", u, dist_u);

        if Some(u) == end {
            let done = match frontier.min_distance() {
                None => true,
                Some(next) => dist_u <= next,
            };
            if done {
                debug!("target {} settled at distance {:?}", u, dist_u);
                break;
            }
        }

        for (v, weights) in graph.neighbors(u) {
            let weight = match weights.min() {
                Some(weight) => weight,
                None => continue,
            };
            let new_dist = dist_u + weight;

            if new_dist < distances[v.index()] {
                distances[v.index()] = new_dist;
                predecessors[v.index()] = Some(u);
                frontier.push(v, new_dist);
            }
        }
    }

    settled
}
