use core::fmt;

/// The error returned by [`TreeSet::min`](crate::TreeSet::min) and
/// [`TreeSet::max`](crate::TreeSet::max) when the set has no elements.
///
/// # Examples
///
/// ```
/// use rb_treeset::{EmptyError, TreeSet};
///
/// let set: TreeSet<u8> = TreeSet::new();
/// assert_eq!(set.min(), Err(EmptyError));
/// assert_eq!(EmptyError.to_string(), "collection is empty");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("collection is empty")
    }
}

impl core::error::Error for EmptyError {}
