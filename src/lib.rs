//! # uniset
//!
//! A generic, in-memory unordered set with fluent bulk mutation and set
//! algebra.
//!
//! ## Overview
//!
//! [`Set<T>`] stores each distinct value of `T` at most once. Elements must
//! implement [`Hash`](std::hash::Hash) and [`Eq`], and the two must agree:
//! equal values hash equally. Types without these capabilities are rejected
//! at compile time.
//!
//! - **Construction**: [`Set::new`], [`Set::of`], the [`set!`] macro,
//!   [`Set::try_from_unique`] for inputs that must not repeat
//! - **Queries**: [`Set::contains`], [`Set::len`], [`Set::is_subset`], [`Set::to_vec`]
//! - **Mutation**: [`Set::add`] and [`Set::remove`], chainable
//! - **Algebra**: [`Set::union`], [`Set::intersection`], [`Set::difference`],
//!   [`Set::symmetric_difference`], [`Set::filter`]
//!
//! Iteration order is unspecified and may differ between runs. Sort the
//! output of [`Set::to_vec`] when an order is needed.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Set`]
//! - `rayon`: parallel iteration and collection
//! - `tracing`: `trace`/`debug` events from the set algebra
//! - `fxhash`: hash with `rustc-hash`'s `FxBuildHasher`
//! - `ahash`: hash with `ahash::RandomState`
//! - `full`: `serde`, `rayon` and `tracing`
//!
//! ## Example
//!
//! ```rust
//! use uniset::prelude::*;
//!
//! let mut evens = set![2, 4, 6];
//! evens.add([8, 10]).remove([2]);
//!
//! let small = Set::of(1..=6);
//! let both = evens.intersection(&small);
//!
//! assert_eq!(both, set![4, 6]);
//! assert!(both.is_subset(&evens));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

#[macro_use]
mod macros;

pub mod error;
pub mod hash_set;
pub mod hasher;

pub use error::DuplicateElementError;
pub use hash_set::Set;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use uniset::prelude::*;
///
/// let set: Set<u8> = set![1, 2, 3];
/// assert_eq!(set.len(), 3);
/// ```
pub mod prelude {
    pub use crate::error::DuplicateElementError;
    pub use crate::hash_set::Set;
    pub use crate::set;
}
