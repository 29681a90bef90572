//! A hash-indexed ordered map for Rust.
//!
//! This crate provides [`OrderedMap`], an associative container that answers
//! membership, lookup and size queries in average O(1) *and* enumerates its
//! entries in ascending key order:
//!
//! - [`contains_key`](OrderedMap::contains_key), [`get`](OrderedMap::get) and
//!   [`len`](OrderedMap::len) go straight to a hash index
//! - [`iter`](OrderedMap::iter) and [`for_each`](OrderedMap::for_each) walk a
//!   binary search tree that mirrors the index's key set
//! - [`insert`](OrderedMap::insert) keeps the first value written for a key
//!
//! # Example
//!
//! ```
//! use ordered_hash_tree::OrderedMap;
//!
//! let mut map = OrderedMap::new();
//! for key in [10, 5, 15, 2, 4, 12, 14] {
//!     map.insert(key, key);
//! }
//!
//! assert_eq!(map.len(), 7);
//! assert!(map.contains_key(&4));
//! assert!(!map.contains_key(&3));
//!
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, [2, 4, 5, 10, 12, 14, 15]);
//!
//! for key in [15, 14, 2] {
//!     map.erase(&key);
//! }
//! let keys: Vec<_> = map.keys().copied().collect();
//! assert_eq!(keys, [4, 5, 10, 12]);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **First write wins** - Inserting an existing key never replaces its value
//! - **No `unsafe`** - Nodes own their children through `Box`; teardown is iterative
//!
//! # Implementation
//!
//! Values live in a [`hashbrown`] map; keys are cloned into an unbalanced binary
//! search tree. The tree is never rebalanced, so its height, and with it the cost
//! of insertion, erasure and the start of an ordered walk, depends on insertion
//! order. Sorted insertion degenerates the tree into a list.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
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

mod raw;

pub mod ordered_map;

pub use hashbrown::DefaultHashBuilder;
pub use ordered_map::OrderedMap;
