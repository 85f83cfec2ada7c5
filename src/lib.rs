//! Ordered sets for Rust, backed by a red-black tree.
//!
//! This crate provides [`TreeSet`], a mutable set that keeps its elements sorted under a
//! [`Comparator`] chosen at construction. Besides the usual insert/remove/lookup it answers
//! order questions directly:
//!
//! - [`min`](TreeSet::min) / [`max`](TreeSet::max) - extremes, with an explicit [`EmptyError`]
//! - [`first_above`](TreeSet::first_above) / [`first_below`](TreeSet::first_below) - nearest
//!   neighbours of any value, present or not
//! - [`above`](TreeSet::above) / [`below`](TreeSet::below) - the elements on one side of a value
//! - [`top_k`](TreeSet::top_k) / [`bottom_k`](TreeSet::bottom_k) - the k smallest or largest
//!
//! # Example
//!
//! ```
//! use rb_treeset::TreeSet;
//!
//! let mut set = TreeSet::new();
//! set.insert_slice(&[3, 9, 1, 7, 5]);
//!
//! assert_eq!(set.top_k(3), [&1, &3, &5]);
//! assert_eq!(set.bottom_k(3), [&9, &7, &5]);
//! assert_eq!(set.first_above(&5), Some(&7));
//! assert_eq!(set.below(&5).to_vec(), [1, 3]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **Pluggable ordering** - any `Fn(&T, &T) -> Ordering` is a [`Comparator`]
//! - **`serde`** - (cargo feature) serializes a set as its ordered element sequence
//!
//! # Implementation
//!
//! Nodes live in a dense arena and link to each other by index, parent links included, so the
//! tree needs no `unsafe` and no reference counting. Every mutation finishes with the classic
//! red-black recoloring/rotation pass, which bounds the height by `2 log2(n + 1)`.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparator;
mod error;
mod raw;

pub mod collection;
pub mod tree_set;

pub use collection::Collection;
pub use comparator::{Comparator, Natural};
pub use error::EmptyError;
pub use tree_set::TreeSet;
