//! Ordering rules used by [`PriorityQueue`](crate::PriorityQueue).
//!
//! A comparator is a three-way function over two elements. Any closure of
//! the shape `Fn(&T, &T) -> Ordering` is a comparator; [`NaturalOrder`] is
//! the default for `Ord` element types and [`Reversed`] flips an existing
//! rule, which is how a max-heap is obtained.

use std::cmp::Ordering;

/// A three-way ordering rule over `T`.
///
/// `compare(a, b)` returns `Less` when `a` should leave the queue before
/// `b`. The queue never checks that the rule is a total order; an
/// inconsistent rule only produces a wrongly ordered result.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rstest::rstest;

    use super::{Comparator, NaturalOrder, Reversed};

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn natural(#[case] a: i32, #[case] b: i32, #[case] expected: Ordering) {
        assert_eq!(NaturalOrder.compare(&a, &b), expected);
        assert_eq!(Reversed(NaturalOrder).compare(&a, &b), expected.reverse());
    }

    #[test]
    fn closure() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"ab", &"abc"), Ordering::Less);
        assert_eq!(by_len.compare(&"ab", &"cd"), Ordering::Equal);
        assert_eq!(Reversed(by_len).compare(&"ab", &"abc"), Ordering::Greater);
    }

    #[test]
    fn reversed_into_inner() {
        let reversed = Reversed(NaturalOrder);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
        assert_eq!(reversed.into_inner().compare(&1, &2), Ordering::Less);
    }

    #[test]
    fn unsized_elements() {
        assert_eq!(NaturalOrder.compare("a", "b"), Ordering::Less);
    }
}
