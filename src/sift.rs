//! Heap repair primitives over a flat slice.
//!
//! Uses 0-indexed storage with parent = (i-1)/2, children = 2i+1, 2i+2.

use std::cmp::Ordering;

use crate::Comparator;

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn children(index: usize) -> (usize, usize) {
    let left = 2 * index + 1;
    (left, left + 1)
}

/// Moves the element at `index` towards the root while it is strictly
/// smaller than its parent.
pub(crate) fn sift_up<T, C>(heap: &mut [T], cmp: &C, mut index: usize)
where
    C: Comparator<T> + ?Sized,
{
    while index > 0 {
        let parent = parent(index);
        if cmp.compare(&heap[index], &heap[parent]) == Ordering::Less {
            heap.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
}

/// Index of the minimum of `index`, `left` and, if present, `right`.
///
/// A candidate only replaces the current minimum when the current one
/// compares strictly greater, so ties keep the earlier candidate.
fn min_index<T, C>(heap: &[T], cmp: &C, index: usize, left: usize, right: Option<usize>) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let min = if cmp.compare(&heap[index], &heap[left]) == Ordering::Greater {
        left
    } else {
        index
    };
    match right {
        Some(right) if cmp.compare(&heap[min], &heap[right]) == Ordering::Greater => right,
        _ => min,
    }
}

/// Moves the element at `index` towards the leaves until neither child is
/// smaller than it.
pub(crate) fn sift_down<T, C>(heap: &mut [T], cmp: &C, mut index: usize)
where
    C: Comparator<T> + ?Sized,
{
    let len = heap.len();
    loop {
        let (left, right) = children(index);
        if left >= len {
            break;
        }
        let min = min_index(heap, cmp, index, left, (right < len).then_some(right));
        if min == index {
            break;
        }
        heap.swap(index, min);
        index = min;
    }
}

/// Bottom-up heap construction in O(n).
pub(crate) fn heapify<T, C>(heap: &mut [T], cmp: &C)
where
    C: Comparator<T> + ?Sized,
{
    if heap.len() < 2 {
        return;
    }
    for index in (0..=parent(heap.len() - 1)).rev() {
        sift_down(heap, cmp, index);
    }
}

#[cfg(test)]
pub(crate) fn is_heap<T, C>(heap: &[T], cmp: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    (1..heap.len()).all(|child| cmp.compare(&heap[parent(child)], &heap[child]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64;
    use rstest::rstest;

    use super::*;
    use crate::{NaturalOrder, Reversed};

    #[test]
    fn index_helpers() {
        assert_eq!(parent(1), 0);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(5), 2);
        assert_eq!(parent(6), 2);
        assert_eq!(children(0), (1, 2));
        assert_eq!(children(2), (5, 6));
    }

    #[test]
    fn sift_up_stops_at_equal_parent() {
        let mut heap = vec![1, 3, 3];
        sift_up(&mut heap, &NaturalOrder, 2);
        assert_eq!(heap, vec![1, 3, 3]);
    }

    #[test]
    fn sift_up_to_root() {
        let mut heap = vec![2, 4, 3, 5, 0];
        sift_up(&mut heap, &NaturalOrder, 4);
        assert_eq!(heap[0], 0);
        assert!(is_heap(&heap, &NaturalOrder));
    }

    #[test]
    fn sift_down_prefers_left_on_tie() {
        let mut heap = vec![9, 1, 1];
        sift_down(&mut heap, &NaturalOrder, 0);
        assert_eq!(heap, vec![1, 9, 1]);
    }

    #[test]
    fn sift_down_picks_smaller_right() {
        let mut heap = vec![9, 2, 1, 3];
        sift_down(&mut heap, &NaturalOrder, 0);
        assert_eq!(heap, vec![1, 2, 9, 3]);
    }

    #[test]
    fn sift_down_single_child() {
        let mut heap = vec![5, 4];
        sift_down(&mut heap, &NaturalOrder, 0);
        assert_eq!(heap, vec![4, 5]);
    }

    #[rstest]
    fn heapify_random(#[values(0, 1, 2, 3, 7, 8, 100, 1000)] len: usize) {
        let mut rng = Pcg64::seed_from_u64(len as u64);
        let mut heap: Vec<u32> = (0..len).map(|_| rng.gen_range(0..50)).collect();
        heapify(&mut heap, &NaturalOrder);
        assert!(is_heap(&heap, &NaturalOrder));

        heapify(&mut heap, &Reversed(NaturalOrder));
        assert!(is_heap(&heap, &Reversed(NaturalOrder)));
    }

    #[test]
    fn is_heap_detects_violation() {
        assert!(is_heap::<u8, _>(&[], &NaturalOrder));
        assert!(is_heap(&[1, 2, 3], &NaturalOrder));
        assert!(!is_heap(&[1, 2, 0], &NaturalOrder));
    }
}
