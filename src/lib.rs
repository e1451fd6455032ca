//! AVL order-statistic collections for Rust.
//!
//! This crate provides [`AvlTreeMap`] and [`AvlTreeSet`], ordered collections backed by a
//! height-balanced binary search tree whose nodes also cache their subtree sizes. Besides
//! the usual membership and lookup operations they answer order-statistic queries in
//! O(log n):
//!
//! - [`loc`](AvlTreeMap::loc) - Get the entry at a given sorted position
//! - [`rank_of`](AvlTreeMap::rank_of) - Get the sorted position of a key
//! - [`at_most`](AvlTreeMap::at_most) / [`at_least`](AvlTreeMap::at_least) - Floor and ceiling
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the first value
//!
//! # Example
//!
//! ```
//! use avl_ost::{AvlTreeMap, Error, Rank};
//!
//! let mut scores = AvlTreeMap::new();
//! scores.set("Alice", 100);
//! scores.set("Bob", 85);
//! scores.set("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // The median entry (rank 1 = second element in sorted order).
//! assert_eq!(scores.loc(1), Ok((&"Bob", &85)));
//! assert_eq!(scores.rank_of(&"Carol"), Some(2));
//! assert_eq!(scores[Rank(0)], 100);
//!
//! // Strict operations report what went wrong.
//! assert_eq!(scores.delete(&"Dave"), Err(Error::KeyNotFound));
//! assert_eq!(scores.loc(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`serde`** - Optional `Serialize`/`Deserialize` for both collections
//!
//! # Implementation
//!
//! Nodes live in an arena and link to their children by index, so the tree owns every
//! node outright and removed slots are recycled through a free-list. Insertions and
//! removals record their descent path and retrace it bottom-up, refreshing each
//! ancestor's cached height and size and rotating wherever the AVL balance breaks.
//! Removing a node with two children moves its in-order successor's entry into it and
//! unlinks the successor instead.
//!
//! The library emits `tracing` events (rotations at `trace`, bulk loads and clears at
//! `debug`) but never installs a subscriber.

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
#[cfg(test)]
extern crate std;

mod error;
mod order_statistic;
mod raw;
#[cfg(feature = "serde")]
mod serde;

pub mod avl_tree_map;
pub mod avl_tree_set;

pub use avl_tree_map::AvlTreeMap;
pub use avl_tree_set::AvlTreeSet;
pub use error::{Error, Result};
pub use order_statistic::Rank;
