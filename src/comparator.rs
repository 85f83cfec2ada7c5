use core::cmp::Ordering;

/// A total order over `T`, fixed when a [`TreeSet`](crate::TreeSet) is built.
///
/// The comparator decides both placement and membership: two elements for which
/// [`compare`](Comparator::compare) returns [`Ordering::Equal`] are the same element as far as the
/// set is concerned.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator, so a closure or a plain function can be handed to
/// [`TreeSet::with_comparator`](crate::TreeSet::with_comparator) directly. [`Natural`] orders by
/// [`Ord`].
///
/// It is a logic error for the comparator to stop being a total order, or to change its answer for
/// elements already in the set. The set will not become memory-unsafe, but its contents and query
/// results are then unspecified.
///
/// # Examples
///
/// ```
/// use core::cmp::Ordering;
/// use rb_treeset::{Comparator, Natural};
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"aa", &"b"), Ordering::Greater);
/// assert_eq!(Natural.compare(&"aa", &"b"), Ordering::Less);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Returns how `a` orders relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders elements by their [`Ord`] implementation.
///
/// This is the comparator behind [`TreeSet::new`](crate::TreeSet::new).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}
