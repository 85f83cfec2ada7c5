use alloc::vec::Vec;
use core::cmp::Ordering::{Greater, Less};

use super::TreeSet;
use crate::comparator::Comparator;

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Returns the smallest element strictly greater than `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3, 4, 5]);
    /// assert_eq!(set.first_above(&3), Some(&4));
    /// assert_eq!(set.first_above(&5), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first_above(&self, element: &T) -> Option<&T> {
        self.raw.ceiling(element, false)
    }

    /// Returns `element` itself if present, otherwise the smallest element greater than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([10, 20, 30]);
    /// assert_eq!(set.first_above_equal(&20), Some(&20));
    /// assert_eq!(set.first_above_equal(&21), Some(&30));
    /// assert_eq!(set.first_above_equal(&31), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first_above_equal(&self, element: &T) -> Option<&T> {
        self.raw.ceiling(element, true)
    }

    /// Returns the largest element strictly less than `element`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first_below(&self, element: &T) -> Option<&T> {
        self.raw.floor(element, false)
    }

    /// Returns `element` itself if present, otherwise the largest element less than it.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first_below_equal(&self, element: &T) -> Option<&T> {
        self.raw.floor(element, true)
    }

    /// Returns a new set, with the same comparator, of the elements strictly greater than
    /// `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set: TreeSet<_> = (1..=9).collect();
    /// assert_eq!(set.above(&6).to_vec(), [7, 8, 9]);
    /// assert_eq!(set.above_equal(&6).to_vec(), [6, 7, 8, 9]);
    /// assert!(set.above(&9).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k log k + log n) for a result of k elements.
    #[must_use]
    pub fn above(&self, element: &T) -> Self
    where
        T: Clone,
        C: Clone,
    {
        self.collect_suffix(|candidate| self.raw.compare(candidate, element) == Greater)
    }

    /// Returns a new set of the elements greater than or equal to `element`.
    ///
    /// # Complexity
    ///
    /// O(k log k + log n) for a result of k elements.
    #[must_use]
    pub fn above_equal(&self, element: &T) -> Self
    where
        T: Clone,
        C: Clone,
    {
        self.collect_suffix(|candidate| self.raw.compare(candidate, element) != Less)
    }

    /// Returns a new set of the elements strictly less than `element`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set: TreeSet<_> = (1..=9).collect();
    /// assert_eq!(set.below(&4).to_vec(), [1, 2, 3]);
    /// assert_eq!(set.below_equal(&4).to_vec(), [1, 2, 3, 4]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k log k + log n) for a result of k elements.
    #[must_use]
    pub fn below(&self, element: &T) -> Self
    where
        T: Clone,
        C: Clone,
    {
        self.collect_prefix(|candidate| self.raw.compare(candidate, element) == Less)
    }

    /// Returns a new set of the elements less than or equal to `element`.
    ///
    /// # Complexity
    ///
    /// O(k log k + log n) for a result of k elements.
    #[must_use]
    pub fn below_equal(&self, element: &T) -> Self
    where
        T: Clone,
        C: Clone,
    {
        self.collect_prefix(|candidate| self.raw.compare(candidate, element) != Greater)
    }

    fn collect_prefix<A>(&self, accept: A) -> Self
    where
        T: Clone,
        C: Clone,
        A: Fn(&T) -> bool,
    {
        let mut result = Self::with_comparator(self.comparator().clone());
        self.raw.walk_prefix(self.raw.root(), &accept, &mut |element: &T| {
            result.raw.insert(element.clone());
        });
        result
    }

    fn collect_suffix<A>(&self, accept: A) -> Self
    where
        T: Clone,
        C: Clone,
        A: Fn(&T) -> bool,
    {
        let mut result = Self::with_comparator(self.comparator().clone());
        self.raw.walk_suffix(self.raw.root(), &accept, &mut |element: &T| {
            result.raw.insert(element.clone());
        });
        result
    }
}

impl<T, C> TreeSet<T, C> {
    /// Returns the `k` smallest elements, in ascending order.
    ///
    /// Fewer than `k` elements are returned when the set is smaller than `k`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([3, 9, 1, 7, 5]);
    /// assert_eq!(set.top_k(3), [&1, &3, &5]);
    /// assert!(set.top_k(0).is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k + log n)
    #[must_use]
    pub fn top_k(&self, k: usize) -> Vec<&T> {
        self.iter().take(k).collect()
    }

    /// Returns the `k` largest elements, in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([3, 9, 1, 7, 5]);
    /// assert_eq!(set.bottom_k(3), [&9, &7, &5]);
    /// assert_eq!(set.bottom_k(10).len(), 5);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(k + log n)
    #[must_use]
    pub fn bottom_k(&self, k: usize) -> Vec<&T> {
        self.iter().rev().take(k).collect()
    }
}
