use core::cmp::Ordering::{Equal, Greater, Less};
use core::ops::{BitAnd, BitOr, Sub};

use super::TreeSet;
use crate::comparator::Comparator;

impl<T: Clone, C: Clone + Comparator<T>> TreeSet<T, C> {
    /// Returns a new set holding a clone of every element, ordered by a clone of the comparator.
    ///
    /// Elements are cloned one by one, so a set of `Rc`s or references shares its elements with
    /// the copy.
    ///
    /// # Complexity
    ///
    /// O(n log n)
    #[must_use]
    pub fn copy(&self) -> Self {
        let mut result = self.empty_like();
        result.absorb(self);
        result
    }

    /// Returns a new set holding the elements of both `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2]);
    /// let b = TreeSet::from([2, 3]);
    /// assert_eq!(a.union(&b).to_vec(), [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O((n + m) log (n + m))
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.empty_like();
        result.absorb(self);
        result.absorb(other);
        result
    }

    /// Returns a new set holding the elements present in both `self` and `other`.
    ///
    /// The smaller operand is walked and every element is looked up in the larger one.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([2, 3, 4]);
    /// assert_eq!(a.intersection(&b).to_vec(), [2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(min(n, m) log max(n, m))
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        let mut result = self.empty_like();
        small.raw.walk_pre_order(small.raw.root(), &mut |element: &T| {
            if large.contains(element) {
                result.raw.insert(element.clone());
            }
        });
        result
    }

    /// Returns a new set holding the elements of `self` that are not in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([2]);
    /// assert_eq!(a.difference(&b).to_vec(), [1, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n log m + n log n)
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut result = self.empty_like();
        self.raw.walk_pre_order(self.raw.root(), &mut |element: &T| {
            if !other.contains(element) {
                result.raw.insert(element.clone());
            }
        });
        result
    }

    fn empty_like(&self) -> Self {
        Self::with_comparator(self.comparator().clone())
    }

    /// Inserts every element of `source`, in pre-order so the rebuilt tree needs few rotations.
    fn absorb(&mut self, source: &Self) {
        let raw = &mut self.raw;
        source.raw.walk_pre_order(source.raw.root(), &mut |element: &T| {
            raw.insert(element.clone());
        });
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Returns `true` if every element of `other` is also in `self`.
    ///
    /// Both sets are walked side by side with two cursors, so the check costs a linear number of
    /// comparisons and stops at the first element of `other` that `self` lacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let sup = TreeSet::from([1, 2, 3]);
    /// let mut set = TreeSet::new();
    ///
    /// assert!(sup.is_superset(&set));
    /// set.insert(2);
    /// assert!(sup.is_superset(&set));
    /// set.insert(4);
    /// assert!(!sup.is_superset(&set));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m)
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        if other.is_empty() {
            return true;
        }
        if self.len() < other.len() {
            return false;
        }

        let mut mine = self.iter();
        'wanted: for wanted in other {
            for candidate in mine.by_ref() {
                match self.raw.compare(candidate, wanted) {
                    Less => {}
                    Equal => continue 'wanted,
                    Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let sup = TreeSet::from([1, 2, 3]);
    /// assert!(TreeSet::from([1, 3]).is_subset(&sup));
    /// assert!(!TreeSet::from([0]).is_subset(&sup));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n + m)
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }
}

impl<T, C: Comparator<T>> PartialEq for TreeSet<T, C> {
    /// Two sets are equal when they hold the same elements under `self`'s comparator.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let same = |a: &T, b: &T| self.raw.compare(a, b) == Equal;
        match (self.first(), other.first(), self.last(), other.last()) {
            (Some(min), Some(other_min), Some(max), Some(other_max)) => {
                same(min, other_min) && same(max, other_max) && self.iter().zip(other).all(|(a, b)| same(a, b))
            }
            // Equal lengths, so both are empty.
            _ => true,
        }
    }
}

impl<T, C: Comparator<T>> Eq for TreeSet<T, C> {}

impl<T: Clone, C: Clone + Comparator<T>> BitOr<&TreeSet<T, C>> for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    /// Returns the union of `self` and `rhs` as a new `TreeSet<T, C>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let a = TreeSet::from([1, 2, 3]);
    /// let b = TreeSet::from([3, 4, 5]);
    /// assert_eq!(&a | &b, TreeSet::from([1, 2, 3, 4, 5]));
    /// ```
    fn bitor(self, rhs: &TreeSet<T, C>) -> TreeSet<T, C> {
        self.union(rhs)
    }
}

impl<T: Clone, C: Clone + Comparator<T>> BitAnd<&TreeSet<T, C>> for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    /// Returns the intersection of `self` and `rhs` as a new `TreeSet<T, C>`.
    fn bitand(self, rhs: &TreeSet<T, C>) -> TreeSet<T, C> {
        self.intersection(rhs)
    }
}

impl<T: Clone, C: Clone + Comparator<T>> Sub<&TreeSet<T, C>> for &TreeSet<T, C> {
    type Output = TreeSet<T, C>;

    /// Returns the difference of `self` and `rhs` as a new `TreeSet<T, C>`.
    fn sub(self, rhs: &TreeSet<T, C>) -> TreeSet<T, C> {
        self.difference(rhs)
    }
}
