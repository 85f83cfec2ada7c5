use super::TreeSet;
use crate::comparator::Natural;
use crate::raw::RawTree;

impl<T> TreeSet<T> {
    /// Creates an empty set, ordered by [`Ord`], with room for at least `capacity` elements
    /// before its node arena reallocates.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set: TreeSet<i32> = TreeSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1), plus the allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        TreeSet {
            raw: RawTree::with_capacity(Natural, capacity),
        }
    }
}

impl<T, C> TreeSet<T, C> {
    /// Creates an empty set ordered by `comparator`, with room for at least `capacity` elements.
    #[must_use]
    pub fn with_comparator_and_capacity(comparator: C, capacity: usize) -> Self {
        TreeSet {
            raw: RawTree::with_capacity(comparator, capacity),
        }
    }

    /// Returns how many elements the set can hold before its node arena reallocates.
    ///
    /// Slots freed by removals are reused, so the capacity never shrinks.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
