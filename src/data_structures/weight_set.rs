use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Ordered multiset of the weights recorded between one pair of vertices
///
/// Parallel edges are kept rather than collapsed, so the same weight may be
/// recorded more than once. Anything that needs a single scalar for the pair
/// uses [`WeightSet::min`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightSet<W>
where
    W: Float + Debug,
{
    /// weight -> number of times it was recorded
    counts: BTreeMap<OrderedFloat<W>, usize>,

    /// Total number of recorded weights
    len: usize,
}

impl<W> Default for WeightSet<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        WeightSet::new()
    }
}

impl<W> WeightSet<W>
where
    W: Float + Debug,
{
    /// Creates an empty weight set
    pub fn new() -> Self {
        WeightSet {
            counts: BTreeMap::new(),
            len: 0,
        }
    }

    /// Records one more occurrence of `weight`
    pub fn insert(&mut self, weight: W) {
        *self.counts.entry(OrderedFloat(weight)).or_insert(0) += 1;
        self.len += 1;
    }

    /// Removes every recorded weight
    pub fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }

    /// Smallest recorded weight
    pub fn min(&self) -> Option<W> {
        self.counts.keys().next().map(|w| w.into_inner())
    }

    /// Largest recorded weight
    pub fn max(&self) -> Option<W> {
        self.counts.keys().next_back().map(|w| w.into_inner())
    }

    pub fn contains(&self, weight: W) -> bool {
        self.counts.contains_key(&OrderedFloat(weight))
    }

    /// Number of times `weight` was recorded
    pub fn count(&self, weight: W) -> usize {
        self.counts.get(&OrderedFloat(weight)).copied().unwrap_or(0)
    }

    /// Number of recorded weights, duplicates included
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct recorded weights
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates over the recorded weights in ascending order, repeating
    /// duplicates
    pub fn iter(&self) -> impl Iterator<Item = W> + '_ {
        self.counts
            .iter()
            .flat_map(|(w, &n)| std::iter::repeat(w.into_inner()).take(n))
    }
}
