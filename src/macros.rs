//! Macros.
//!
//! [`set!`](crate::set) builds a [`Set`](crate::Set) from a list of
//! elements. The `trace!` and `debug!` shims forward to `tracing` when the
//! `tracing` feature is enabled and expand to nothing otherwise.

/// Creates a [`Set`](crate::Set) containing the given elements.
///
/// Repeated elements collapse into a single membership. `set![]` creates an
/// empty set, which needs a type annotation like [`Set::new`](crate::Set::new).
///
/// # Examples
///
/// ```rust
/// use uniset::{set, Set};
///
/// let primes = set![2, 3, 5, 7, 7, 7];
/// assert_eq!(primes.len(), 4);
/// assert!(primes.contains(&5));
///
/// let empty: Set<char> = set![];
/// assert!(empty.is_empty());
/// ```
///
/// Element types must be hashable and comparable for equality:
///
/// ```compile_fail
/// use uniset::set;
///
/// // f64 implements neither Hash nor Eq
/// let weights = set![0.5_f64, 1.5];
/// ```
///
/// The bound applies to the empty form as well:
///
/// ```compile_fail
/// use uniset::{set, Set};
///
/// let weights: Set<f64> = set![];
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Set::of([$($element),+])
    };
}

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($argument:tt)*) => {
        ::tracing::trace!(target: "uniset", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($argument:tt)*) => {
        ::tracing::debug!(target: "uniset", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($argument:tt)*) => {};
}

#[cfg(test)]
mod tests {
    use crate::Set;
    use rstest::rstest;

    #[rstest]
    fn test_set_macro_empty() {
        let set: Set<i32> = set![];
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_set_macro_collapses_duplicates() {
        let set = set![1, 1, 2, 2, 2, 3];
        assert_eq!(set.len(), 3);
        assert!(set.contains(&1));
        assert!(set.contains(&2));
        assert!(set.contains(&3));
    }

    #[rstest]
    fn test_set_macro_trailing_comma() {
        let set = set!["alpha", "beta",];
        assert_eq!(set.len(), 2);
    }
}
