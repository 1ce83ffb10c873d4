//! An ordered map backed by an AVL tree.
//!
//! This crate provides [`AvlTreeMap`], a map whose keys are kept in the order of a
//! [`Comparator`] chosen at construction (the keys' own [`Ord`] by default). Every insertion
//! restores the AVL balance condition, so lookups and insertions stay O(log n) whatever order the
//! keys arrive in.
//!
//! # Example
//!
//! ```
//! use avl_map::{AvlTreeMap, Error};
//!
//! let mut scores = AvlTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Inserting an existing key updates its value.
//! scores.insert("Bob", 88);
//! assert_eq!(scores.get(&"Bob"), Some(&88));
//! assert_eq!(scores.len(), 3);
//!
//! // Checked lookups report absent keys as errors.
//! assert_eq!(scores.try_get(&"Dave"), Err(Error::KeyNotFound));
//!
//! // Iteration is in key order.
//! let names: Vec<_> = scores.keys().copied().collect();
//! assert_eq!(names, ["Alice", "Bob", "Carol"]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Lookups, iterators and trait impls mirror `std::collections::BTreeMap`
//! - **Custom ordering** - Any [`Comparator`], including closures via [`FnComparator`]
//! - **Insert-only** - Removal returns [`Error::NotSupported`]
//!
//! # Implementation
//!
//! Nodes are stored in a single arena and linked by index: two child links and a parent link per
//! node. After a new leaf is attached, heights are recomputed on the way back up to the root and a
//! single or double rotation is applied at any node whose subtrees differ in height by two.
//! Iterators step between in-order neighbours through the same links, without an auxiliary stack.
//!
//! Rotations and node creation are reported at `trace` level through the [`log`] facade.

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

pub mod avl_tree_map;

pub use avl_tree_map::AvlTreeMap;
pub use comparator::{Comparator, FnComparator, Natural};
pub use error::Error;
