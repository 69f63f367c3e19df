//! Hash builder selection.
//!
//! [`Set`](crate::Set) hashes its elements with [`DefaultHashBuilder`], chosen
//! at compile time through Cargo features:
//!
//! | Feature  | Hash builder                    |
//! |----------|---------------------------------|
//! | (none)   | [`std::hash::RandomState`]      |
//! | `fxhash` | `rustc_hash::FxBuildHasher`     |
//! | `ahash`  | `ahash::RandomState`            |
//!
//! `fxhash` takes precedence when both are enabled.
//!
//! The standard builder is randomly seeded per process and resists
//! hash-flooding. The Fx hasher is unseeded and faster for small keys such as
//! integers; it makes iteration order repeatable between runs, which callers
//! still must not rely on.

/// The hash builder used by every [`Set`](crate::Set).
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hash builder used by every [`Set`](crate::Set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hash builder used by every [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::hash::RandomState;

/// Name of the selected hash builder.
///
/// # Examples
///
/// ```rust
/// assert!(["std", "fxhash", "ahash"].contains(&uniset::hasher::HASHER_NAME));
/// ```
#[cfg(feature = "fxhash")]
pub const HASHER_NAME: &str = "fxhash";

/// Name of the selected hash builder.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub const HASHER_NAME: &str = "ahash";

/// Name of the selected hash builder.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub const HASHER_NAME: &str = "std";

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::hash::BuildHasher;

    #[rstest]
    fn test_same_builder_hashes_equal_values_equally() {
        let builder = DefaultHashBuilder::default();
        assert_eq!(builder.hash_one("key"), builder.hash_one("key"));
        assert_eq!(builder.hash_one(42_u64), builder.hash_one(42_u64));
    }

    #[cfg(feature = "fxhash")]
    #[rstest]
    fn test_fxhash_is_selected() {
        assert_eq!(HASHER_NAME, "fxhash");
        let first = DefaultHashBuilder::default();
        let second = DefaultHashBuilder::default();
        assert_eq!(first.hash_one(7_i32), second.hash_one(7_i32));
    }

    #[cfg(not(any(feature = "fxhash", feature = "ahash")))]
    #[rstest]
    fn test_std_is_selected_by_default() {
        assert_eq!(HASHER_NAME, "std");
    }
}
