//! An ordered map backed by an unbalanced binary search tree.
//!
//! This crate provides [`TreeMap`], a map whose entries live one per node in a
//! plain binary search tree. Lookups and insertions walk a single root-to-leaf
//! path; the tree never rebalances, so its shape (and its [`height`]) is fixed by
//! the order keys were first inserted in.
//!
//! - Keys are enumerated in ascending order by [`keys`](TreeMap::keys) and
//!   [`key_set`](TreeMap::key_set).
//! - Values are enumerated by [`values`](TreeMap::values), or de-duplicated by
//!   [`value_set`](TreeMap::value_set).
//! - Removing a single key and an entry-set view are not provided; both fail
//!   with [`MapError::Unsupported`].
//!
//! # Example
//!
//! ```
//! use bst_map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! for (key, value) in [("08", 8), ("03", 3), ("10", 10), ("01", 1), ("06", 6)] {
//!     map.insert(key, value);
//! }
//!
//! assert_eq!(map.get("06"), Some(&6));
//! assert_eq!(map.key_set(), [&"01", &"03", &"06", &"08", &"10"]);
//! assert_eq!(map.height(), 3);
//! ```
//!
//! # Nullable keys
//!
//! `TreeMap`'s own methods take keys by value or reference, so a key can never
//! be absent. Code that works with possibly-absent keys goes through the
//! [`OrderedMap`] trait instead, where an absent key is rejected with
//! [`MapError::InvalidArgument`].
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **No recursion** - Every traversal uses an explicit stack, so sorted
//!   insertions that degrade the tree into a chain are still safe to walk
//! - **`test-util`** - Exposes `TreeMap::make_node` and friends for building
//!   exact tree shapes in tests, bypassing every invariant
//!
//! [`height`]: TreeMap::height

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

mod error;
mod ordered_map;
mod raw;

pub mod tree_map;

pub use error::MapError;
pub use ordered_map::OrderedMap;
pub use tree_map::TreeMap;
