use std::iter::FusedIterator;

use derivative::Derivative;

use crate::{Comparator, NaturalOrder, PriorityQueue};

/// Yields the elements of a queue in non-decreasing order by repeatedly
/// dequeuing from a queue it owns.
///
/// Created by [`PriorityQueue::iter`], which hands it a snapshot of the
/// queue, or by [`PriorityQueue::into_iter`], which hands it the queue
/// itself. Each instance is single-pass.
#[derive(Derivative)]
#[derivative(Debug(bound = "T: std::fmt::Debug"))]
pub struct SortedIter<T, C = NaturalOrder> {
    queue: PriorityQueue<T, C>,
}

impl<T, C> SortedIter<T, C> {
    pub(crate) fn new(queue: PriorityQueue<T, C>) -> Self {
        Self { queue }
    }

    /// The elements not yet yielded.
    pub fn remaining(&self) -> &PriorityQueue<T, C> {
        &self.queue
    }
}

impl<T, C: Comparator<T>> Iterator for SortedIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for SortedIter<T, C> {}

impl<T, C: Comparator<T>> FusedIterator for SortedIter<T, C> {}
