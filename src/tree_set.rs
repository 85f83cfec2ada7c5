use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::iter::FusedIterator;

use crate::comparator::{Comparator, Natural};
use crate::error::EmptyError;
use crate::raw::{RawTree, Side, Spine};

mod algebra;
mod bounds;
mod capacity;
#[cfg(feature = "serde")]
mod serialize;

/// An ordered set based on a red-black tree.
///
/// Elements are kept sorted by the set's [`Comparator`], which is fixed when the set is built.
/// Two elements the comparator reports as [`Equal`](core::cmp::Ordering::Equal) are the same
/// element: inserting the second one leaves the set unchanged.
///
/// Point operations ([`insert`], [`remove`], [`contains`], [`first_above`], ...) cost O(log n).
/// Ordered traversal uses an explicit cursor ([`iter`]) or a visitor with early exit
/// ([`for_each`]).
///
/// It is a logic error for an element to be modified in such a way that its ordering relative to
/// any other element, as determined by the comparator, changes while it is in the set. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `TreeSet` that observed it and not result in undefined behavior.
///
/// [`insert`]: TreeSet::insert
/// [`remove`]: TreeSet::remove
/// [`contains`]: TreeSet::contains
/// [`first_above`]: TreeSet::first_above
/// [`iter`]: TreeSet::iter
/// [`for_each`]: TreeSet::for_each
///
/// # Examples
///
/// ```
/// use rb_treeset::TreeSet;
///
/// let mut set = TreeSet::new();
/// for n in [4, 7, 1, 5, 2, 8, 9, 3] {
///     set.insert(n);
/// }
///
/// assert_eq!(set.to_vec(), [1, 2, 3, 4, 5, 7, 8, 9]);
/// assert_eq!(set.min(), Ok(&1));
/// assert_eq!(set.max(), Ok(&9));
///
/// assert!(!set.insert(4));
/// assert!(set.remove(&4));
/// assert!(!set.contains(&4));
/// ```
///
/// A set ordered by a custom comparator:
///
/// ```
/// use rb_treeset::TreeSet;
///
/// let mut words = TreeSet::with_comparator(|a: &&str, b: &&str| {
///     a.len().cmp(&b.len()).then_with(|| a.cmp(b))
/// });
/// words.insert_slice(&["pear", "fig", "banana", "kiwi"]);
/// assert_eq!(words.to_vec(), ["fig", "kiwi", "pear", "banana"]);
/// ```
pub struct TreeSet<T, C = Natural> {
    raw: RawTree<T, C>,
}

/// A cursor over the elements of a [`TreeSet`], in ascending order.
///
/// The cursor keeps its own stack of pending nodes, so it can be advanced one element at a time,
/// from either end, and simply dropped when no longer needed.
///
/// This `struct` is created by the [`iter`](TreeSet::iter) method on [`TreeSet`].
///
/// # Examples
///
/// ```
/// use rb_treeset::TreeSet;
///
/// let set = TreeSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T, C> {
    tree: &'a RawTree<T, C>,
    front: Spine,
    back: Spine,
    remaining: usize,
}

/// An owning iterator over the elements of a [`TreeSet`], in ascending order.
///
/// This `struct` is created by the `into_iter` method on [`TreeSet`] (provided by the
/// [`IntoIterator`] trait).
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> TreeSet<T> {
    /// Makes a new, empty `TreeSet` ordered by [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set: TreeSet<i32> = TreeSet::new();
    /// set.insert(1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn new() -> Self {
        Self {
            raw: RawTree::new(Natural),
        }
    }
}

impl<T, C> TreeSet<T, C> {
    /// Makes a new, empty `TreeSet` ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set = TreeSet::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// set.insert_slice(&[1, 3, 2]);
    /// assert_eq!(set.to_vec(), [3, 2, 1]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            raw: RawTree::new(comparator),
        }
    }

    /// Returns the comparator the set was built with.
    #[must_use]
    pub const fn comparator(&self) -> &C {
        self.raw.comparator()
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut v = TreeSet::new();
    /// assert_eq!(v.len(), 0);
    /// v.insert(1);
    /// assert_eq!(v.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the set, removing all elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut v = TreeSet::from([1, 2]);
    /// v.clear();
    /// assert!(v.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the smallest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::{EmptyError, TreeSet};
    ///
    /// let mut set = TreeSet::new();
    /// assert_eq!(set.min(), Err(EmptyError));
    /// set.insert_slice(&[3, 1, 2]);
    /// assert_eq!(set.min(), Ok(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn min(&self) -> Result<&T, EmptyError> {
        self.raw.first().ok_or(EmptyError)
    }

    /// Returns the largest element.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn max(&self) -> Result<&T, EmptyError> {
        self.raw.last().ok_or(EmptyError)
    }

    /// Returns the smallest element, or `None` if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last()
    }

    /// Removes and returns the smallest element.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set = TreeSet::from([2, 1]);
    /// assert_eq!(set.pop_first(), Some(1));
    /// assert_eq!(set.pop_first(), Some(2));
    /// assert_eq!(set.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_first(&mut self) -> Option<T> {
        self.raw.pop_first()
    }

    /// Removes and returns the largest element.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn pop_last(&mut self) -> Option<T> {
        self.raw.pop_last()
    }

    /// Calls `visit` on each element in ascending order, stopping as soon as it returns `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([5, 1, 4, 2, 3]);
    /// let mut seen = Vec::new();
    /// set.for_each(|&n| {
    ///     seen.push(n);
    ///     n < 3
    /// });
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n), or O(k + log n) when stopped after k elements.
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.raw.walk_in_order(self.raw.root(), &mut visit);
    }

    /// Gets a cursor that visits the elements in ascending order.
    ///
    /// # Complexity
    ///
    /// O(log n) to create; each step is O(1) amortized.
    pub fn iter(&self) -> Iter<'_, T, C> {
        Iter::new(&self.raw)
    }

    /// Returns the elements in ascending order.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns, in ascending order, the elements that satisfy `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set: TreeSet<_> = (1..=10).collect();
    /// assert_eq!(set.filter(|n| n % 3 == 0), [3, 6, 9]);
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|element| predicate(element)).cloned().collect()
    }

    /// Renders the set as `[a b c]`, formatting each element through `render`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([2, 1]);
    /// assert_eq!(set.to_string_with(|n| n * 10), "[10 20]");
    /// assert_eq!(set.to_string(), "[1 2]");
    /// ```
    ///
    /// # Panics
    ///
    /// If `Display` for `D` returns an error, as [`ToString`](alloc::string::ToString) does.
    pub fn to_string_with<F, D>(&self, render: F) -> String
    where
        F: FnMut(&T) -> D,
        D: fmt::Display,
    {
        let mut out = String::new();
        write_bracketed(&mut out, self.iter().map(render))
            .expect("`TreeSet::to_string_with()` - a `Display` implementation returned an error!");
        out
    }
}

impl<T, C: Comparator<T>> TreeSet<T, C> {
    /// Makes a set ordered by `comparator` holding each element of `items`.
    ///
    /// Elements that compare equal collapse to the first one seen.
    ///
    /// # Complexity
    ///
    /// O(m log m) for m items.
    #[must_use]
    pub fn from_slice_with(items: &[T], comparator: C) -> Self
    where
        T: Clone,
    {
        let mut set = Self::with_comparator(comparator);
        set.insert_slice(items);
        set
    }

    /// Adds `element` to the set.
    ///
    /// Returns whether the set changed: `false` means an equal element was already present, in
    /// which case it is kept and `element` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set = TreeSet::new();
    /// assert!(set.insert(2));
    /// assert!(!set.insert(2));
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn insert(&mut self, element: T) -> bool {
        self.raw.insert(element)
    }

    /// Inserts a clone of each element of `items`. Returns whether any of them was new.
    ///
    /// # Complexity
    ///
    /// O(m log (n + m))
    pub fn insert_slice(&mut self, items: &[T]) -> bool
    where
        T: Clone,
    {
        items.iter().fold(false, |modified, item| self.raw.insert(item.clone()) | modified)
    }

    /// Inserts a clone of each element of `other`. Returns whether any of them was new.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut a = TreeSet::from([1, 2]);
    /// assert!(a.insert_set(&TreeSet::from([2, 3])));
    /// assert!(!a.insert_set(&TreeSet::from([1])));
    /// assert_eq!(a.to_vec(), [1, 2, 3]);
    /// ```
    pub fn insert_set<D>(&mut self, other: &TreeSet<T, D>) -> bool
    where
        T: Clone,
    {
        other.iter().fold(false, |modified, item| self.raw.insert(item.clone()) | modified)
    }

    /// Removes the element equal to `element`. Returns whether one was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set = TreeSet::from([1, 2]);
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&2));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn remove(&mut self, element: &T) -> bool {
        self.raw.take(element).is_some()
    }

    /// Removes the element equal to `element` and returns it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set = TreeSet::with_comparator(|a: &(u8, &str), b: &(u8, &str)| a.0.cmp(&b.0));
    /// set.insert((1, "one"));
    /// assert_eq!(set.take(&(1, "")), Some((1, "one")));
    /// assert!(set.is_empty());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn take(&mut self, element: &T) -> Option<T> {
        self.raw.take(element)
    }

    /// Removes each element of `items`. Returns whether any of them was present.
    pub fn remove_slice(&mut self, items: &[T]) -> bool {
        items.iter().fold(false, |modified, item| self.raw.take(item).is_some() | modified)
    }

    /// Removes each element of `other`. Returns whether any of them was present.
    pub fn remove_set<D>(&mut self, other: &TreeSet<T, D>) -> bool {
        other.iter().fold(false, |modified, item| self.raw.take(item).is_some() | modified)
    }

    /// Removes every element satisfying `predicate`. Returns whether any was removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let mut set: TreeSet<_> = (1..=6).collect();
    /// assert!(set.remove_if(|n| n % 2 == 0));
    /// assert_eq!(set.to_vec(), [1, 3, 5]);
    /// ```
    pub fn remove_if<F>(&mut self, predicate: F) -> bool
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        let doomed = self.filter(predicate);
        self.remove_slice(&doomed)
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn contains(&self, element: &T) -> bool {
        self.raw.locate(element).is_some()
    }

    /// Returns the stored element equal to `element`, if any.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[must_use]
    pub fn get(&self, element: &T) -> Option<&T> {
        self.raw.get(element)
    }

    /// Returns `true` if every element of `items` is in the set. `items` may repeat elements.
    ///
    /// # Complexity
    ///
    /// O(m log n)
    #[must_use]
    pub fn contains_slice(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.contains(item))
    }

    /// Returns `true` if `items`, taken as a set, holds exactly the elements of this set.
    ///
    /// Items that compare equal count once, so repeats neither help nor hurt a match.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([1, 2, 3]);
    /// assert!(set.equal_slice(&[3, 1, 2]));
    /// assert!(set.equal_slice(&[3, 1, 2, 1]));
    /// assert!(!set.equal_slice(&[1, 1, 2]));
    /// assert!(!set.equal_slice(&[1, 2]));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(m log n + m log m)
    #[must_use]
    pub fn equal_slice(&self, items: &[T]) -> bool {
        items.len() >= self.len() && self.raw.count_distinct(items) == Some(self.len())
    }
}

impl<'a, T, C> Iter<'a, T, C> {
    fn new(tree: &'a RawTree<T, C>) -> Self {
        let mut front = Spine::new();
        let mut back = Spine::new();
        tree.push_spine(&mut front, tree.root(), Side::Left);
        tree.push_spine(&mut back, tree.root(), Side::Right);
        Self {
            tree,
            front,
            back,
            remaining: tree.len(),
        }
    }
}

impl<'a, T, C> Iterator for Iter<'a, T, C> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let node = tree.node(self.front.pop()?);
        tree.push_spine(&mut self.front, node.right, Side::Left);
        self.remaining -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T, C> DoubleEndedIterator for Iter<'a, T, C> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let node = tree.node(self.back.pop()?);
        tree.push_spine(&mut self.back, node.left, Side::Right);
        self.remaining -= 1;
        Some(&node.element)
    }
}

impl<T, C> ExactSizeIterator for Iter<'_, T, C> {}

impl<T, C> FusedIterator for Iter<'_, T, C> {}

impl<T, C> Clone for Iter<'_, T, C> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            front: self.front.clone(),
            back: self.back.clone(),
            remaining: self.remaining,
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for Iter<'_, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T, C> IntoIterator for TreeSet<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the set's contents in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set = TreeSet::from([3, 1, 2]);
    /// let v: Vec<_> = set.into_iter().collect();
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_sorted().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a TreeSet<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, C>;

    fn into_iter(self) -> Iter<'a, T, C> {
        self.iter()
    }
}

impl<T, C: Default> Default for TreeSet<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T: Clone, C: Clone + Comparator<T>> Clone for TreeSet<T, C> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<T: fmt::Debug, C> fmt::Debug for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, C> fmt::Display for TreeSet<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bracketed(f, self.iter())
    }
}

fn write_bracketed<W, I>(out: &mut W, items: I) -> fmt::Result
where
    W: fmt::Write,
    I: Iterator,
    I::Item: fmt::Display,
{
    out.write_char('[')?;
    for (index, item) in items.enumerate() {
        if index > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{item}")?;
    }
    out.write_char(']')
}

impl<T: Ord> FromIterator<T> for TreeSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = TreeSet::new();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.raw.insert(element);
        }
    }
}

impl<'a, T: 'a + Copy, C: Comparator<T>> Extend<&'a T> for TreeSet<T, C> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for TreeSet<T> {
    /// Converts a `[T; N]` into a `TreeSet<T>`.
    ///
    /// ```
    /// use rb_treeset::TreeSet;
    ///
    /// let set1 = TreeSet::from([1, 2, 3, 4]);
    /// let set2: TreeSet<_> = [1, 2, 3, 4].into();
    /// assert_eq!(set1, set2);
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}
