use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::graph::VertexId;

/// Min-ordered Dijkstra frontier of `(vertex, tentative distance)` entries
///
/// A vertex may sit in the frontier several times at different distances.
/// Nothing is decreased in place; the caller skips entries whose distance is
/// worse than the one it has recorded.
#[derive(Debug, Clone)]
pub struct Frontier<W>
where
    W: Float + Debug,
{
    entries: BinaryHeap<Reverse<(OrderedFloat<W>, VertexId)>>,
}

impl<W> Default for Frontier<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Frontier::with_capacity(0)
    }
}

impl<W> Frontier<W>
where
    W: Float + Debug,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            entries: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Seeds the frontier with every vertex at infinite distance
    pub fn seeded<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut frontier = Frontier::default();
        frontier.entries.extend(
            vertices
                .into_iter()
                .map(|v| Reverse((OrderedFloat(W::infinity()), v))),
        );
        frontier
    }

    pub fn push(&mut self, vertex: VertexId, distance: W) {
        self.entries.push(Reverse((OrderedFloat(distance), vertex)));
    }

    /// Removes the closest entry; ties go to the smaller handle
    pub fn pop(&mut self) -> Option<(VertexId, W)> {
        self.entries
            .pop()
            .map(|Reverse((distance, vertex))| (vertex, distance.into_inner()))
    }

    /// Distance of the closest entry, if any
    pub fn min_distance(&self) -> Option<W> {
        self.entries
            .peek()
            .map(|Reverse((distance, _))| distance.into_inner())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
