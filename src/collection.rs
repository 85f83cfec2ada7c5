//! The capability contract shared by every set flavor, plus generic helpers built on it.
//!
//! Code that only needs to insert, test membership, count, and iterate can be written once
//! against [`Collection`] and run unchanged over a [`TreeSet`] or a standard
//! [`BTreeSet`](alloc::collections::BTreeSet).

use alloc::collections::BTreeSet;
use alloc::vec::Vec;

use crate::comparator::Comparator;
use crate::tree_set::TreeSet;

/// Minimal interface implemented by all set flavors.
///
/// Iteration order is whatever the implementation defines; for [`TreeSet`] it is ascending
/// under the set's comparator.
pub trait Collection<T> {
    /// Inserts `element`. Returns whether the collection changed.
    fn insert(&mut self, element: T) -> bool;

    /// Returns `true` if an element equal to `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Number of elements.
    fn len(&self) -> usize;

    /// Calls `visit` on each element until it returns `false`.
    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T) -> bool;

    /// Returns `true` if there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a clone of each element of `items`. Returns whether the collection changed.
    fn insert_slice(&mut self, items: &[T]) -> bool
    where
        T: Clone,
    {
        items.iter().fold(false, |modified, item| self.insert(item.clone()) | modified)
    }

    /// Inserts a clone of each element of `other`. Returns whether the collection changed.
    fn insert_set<O>(&mut self, other: &O) -> bool
    where
        T: Clone,
        O: Collection<T> + ?Sized,
    {
        let mut modified = false;
        other.for_each(|item| {
            modified |= self.insert(item.clone());
            true
        });
        modified
    }

    /// Clones every element into a `Vec`, in iteration order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        to_vec_with(self, T::clone)
    }
}

/// Inserts `transform(item)` for each of `items` into `set`.
///
/// # Examples
///
/// ```
/// use rb_treeset::{TreeSet, collection};
///
/// let mut lengths: TreeSet<usize> = TreeSet::new();
/// collection::insert_slice_with(&mut lengths, &["a", "bb", "cc"], |s| s.len());
/// assert_eq!(lengths.to_vec(), [1, 2]);
/// ```
pub fn insert_slice_with<T, E, S, F>(set: &mut S, items: &[E], mut transform: F)
where
    S: Collection<T> + ?Sized,
    F: FnMut(&E) -> T,
{
    for item in items {
        set.insert(transform(item));
    }
}

/// Inserts `transform(element)` for each element of `source` into `target`. Returns whether
/// `target` changed.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
/// use rb_treeset::{TreeSet, collection};
///
/// let source = TreeSet::from([1, 2, 3]);
/// let mut doubled: BTreeSet<i32> = BTreeSet::new();
/// assert!(collection::insert_set_with(&source, &mut doubled, |n| n * 2));
/// assert_eq!(doubled.into_iter().collect::<Vec<_>>(), [2, 4, 6]);
/// ```
pub fn insert_set_with<T, E, A, B, F>(source: &A, target: &mut B, mut transform: F) -> bool
where
    A: Collection<T> + ?Sized,
    B: Collection<E> + ?Sized,
    F: FnMut(&T) -> E,
{
    let mut modified = false;
    source.for_each(|element| {
        modified |= target.insert(transform(element));
        true
    });
    modified
}

/// Collects `transform(element)` for each element of `set`, in iteration order.
pub fn to_vec_with<T, E, S, F>(set: &S, mut transform: F) -> Vec<E>
where
    S: Collection<T> + ?Sized,
    F: FnMut(&T) -> E,
{
    let mut out = Vec::with_capacity(set.len());
    set.for_each(|element| {
        out.push(transform(element));
        true
    });
    out
}

impl<T, C: Comparator<T>> Collection<T> for TreeSet<T, C> {
    fn insert(&mut self, element: T) -> bool {
        TreeSet::insert(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        TreeSet::contains(self, element)
    }

    fn len(&self) -> usize {
        TreeSet::len(self)
    }

    fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        TreeSet::for_each(self, visit);
    }
}

impl<T: Ord> Collection<T> for BTreeSet<T> {
    fn insert(&mut self, element: T) -> bool {
        BTreeSet::insert(self, element)
    }

    fn contains(&self, element: &T) -> bool {
        BTreeSet::contains(self, element)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        for element in self {
            if !visit(element) {
                break;
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};
    use alloc::vec;

    fn fill<S: Collection<u32>>(set: &mut S) -> Vec<String> {
        set.insert_slice(&[30, 10, 20, 10]);
        to_vec_with(&*set, |n| n.to_string())
    }

    #[test]
    fn helpers_agree_across_backings() {
        let mut tree = TreeSet::new();
        let mut btree = BTreeSet::new();
        assert_eq!(fill(&mut tree), fill(&mut btree));
        assert_eq!(Collection::len(&tree), 3);
        assert_eq!(Collection::to_vec(&tree), Collection::to_vec(&btree));
    }

    #[test]
    fn insert_set_crosses_backings() {
        let tree = TreeSet::from([1, 2, 3]);
        let mut btree = BTreeSet::from([3]);
        assert!(Collection::insert_set(&mut btree, &tree));
        assert!(!Collection::insert_set(&mut btree, &tree));
        assert_eq!(btree.len(), 3);
    }

    #[test]
    fn for_each_stops_early_on_both() {
        let tree = TreeSet::from([1, 2, 3, 4]);
        let btree = BTreeSet::from([1, 2, 3, 4]);
        let mut seen = vec![];
        Collection::for_each(&tree, |&n| {
            seen.push(n);
            n < 2
        });
        Collection::for_each(&btree, |&n| {
            seen.push(n);
            n < 2
        });
        assert_eq!(seen, vec![1, 2, 1, 2]);
    }

    #[test]
    fn transforms_change_element_type() {
        let mut tree: TreeSet<usize> = TreeSet::new();
        insert_slice_with(&mut tree, &["x", "yy", "zz"], |s: &&str| s.len());
        assert_eq!(tree.to_vec(), vec![1, 2]);
        assert!(!Collection::is_empty(&tree));
    }
}
