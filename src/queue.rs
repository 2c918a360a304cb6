use std::fmt;

use derivative::Derivative;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::{
    sift::{heapify, sift_down, sift_up},
    BuildStrategy, Comparator, NaturalOrder, QueueConfig, SortedIter,
};

/// A priority queue that dequeues the minimal element under its comparator
/// first.
///
/// Ties between elements that compare equal are broken arbitrarily. For a
/// max-heap, use [`Reversed`](crate::Reversed) around the comparator.
///
/// Cloning copies the storage as it is, in O(n). The clone shares nothing
/// with the original except a copy of the comparator.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "T: Clone, C: Clone"),
    Debug(bound = "T: fmt::Debug")
)]
pub struct PriorityQueue<T, C = NaturalOrder> {
    heap: Vec<T>,
    #[derivative(Debug = "ignore")]
    cmp: C,
}

impl<T: Ord> PriorityQueue<T> {
    /// Create a new, empty queue in natural order.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// Create a queue in natural order holding `initial`.
    pub fn from_vec(initial: Vec<T>) -> Self {
        Self::from_vec_with(initial, NaturalOrder)
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            heap: Vec::new(),
            cmp,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Create a queue holding `initial`, ordered by `cmp`.
    ///
    /// Every element goes through the enqueue path in sequence order, so
    /// this is O(n log n). [`BuildStrategy::Heapify`] through
    /// [`from_config`](Self::from_config) builds in O(n) instead.
    pub fn from_vec_with(initial: Vec<T>, cmp: C) -> Self {
        let mut queue = Self { heap: initial, cmp };
        // Sifting each prefix in place is the same as enqueuing one by one.
        for index in 1..queue.heap.len() {
            sift_up(&mut queue.heap, &queue.cmp, index);
        }
        debug!("built priority queue of {} elements", queue.len());
        queue
    }

    pub fn from_config(config: &QueueConfig, mut initial: Vec<T>, cmp: C) -> Self {
        initial.reserve(config.initial_capacity.saturating_sub(initial.len()));
        match config.build {
            BuildStrategy::Sequential => Self::from_vec_with(initial, cmp),
            BuildStrategy::Heapify => {
                heapify(&mut initial, &cmp);
                debug!("heapified priority queue of {} elements", initial.len());
                Self { heap: initial, cmp }
            }
        }
    }

    /// Insert each of `values` in order. Returns the resulting length.
    pub fn enqueue(&mut self, values: impl IntoIterator<Item = T>) -> usize {
        for value in values {
            self.push(value);
        }
        self.len()
    }

    /// Insert a single value. Returns the resulting length.
    pub fn push(&mut self, value: T) -> usize {
        self.heap.push(value);
        let last = self.heap.len() - 1;
        sift_up(&mut self.heap, &self.cmp, last);
        self.len()
    }

    /// Remove and return a minimal element.
    ///
    /// Returns `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.heap.len() < 2 {
            return self.heap.pop();
        }
        // Moves the last leaf to the root.
        let root = self.heap.swap_remove(0);
        sift_down(&mut self.heap, &self.cmp, 0);
        Some(root)
    }

    /// Drain the queue into a vector in non-decreasing order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// A minimal element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }
}

impl<T: Clone, C: Comparator<T> + Clone> PriorityQueue<T, C> {
    /// Iterate over a snapshot of the queue in non-decreasing order.
    ///
    /// The queue itself is left untouched.
    pub fn iter(&self) -> SortedIter<T, C> {
        SortedIter::new(self.clone())
    }

    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.iter().collect()
    }
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue(iter);
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec_with(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Comparator<T>> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = SortedIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        SortedIter::new(self)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> IntoIterator for &PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = SortedIter<T, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sorted elements separated by `,`.
impl<T, C> fmt::Display for PriorityQueue<T, C>
where
    T: fmt::Display + Clone,
    C: Comparator<T> + Clone,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Serializes as the sorted sequence of elements.
impl<T, C> Serialize for PriorityQueue<T, C>
where
    T: Serialize + Clone,
    C: Comparator<T> + Clone,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T, C> Deserialize<'de> for PriorityQueue<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::deserialize(deserializer).map(|initial| Self::from_vec_with(initial, C::default()))
    }
}
