//! Rayon support for [`Set`].
//!
//! Parallel traversal borrows the set shared, so it can only read. Parallel
//! collection builds a new set.
//!
//! ```rust
//! use rayon::prelude::*;
//! use uniset::Set;
//!
//! let set = Set::of(1..=1000);
//! let total: i64 = set.par_iter().map(|&element| i64::from(element)).sum();
//! assert_eq!(total, 500_500);
//!
//! let squares: Set<i32> = (1..=4).into_par_iter().map(|value| value * value).collect();
//! assert_eq!(squares, Set::of([1, 4, 9, 16]));
//! ```

use std::hash::Hash;

use rayon::collections::hash_set;
use rayon::iter::{FromParallelIterator, IntoParallelIterator, ParallelExtend, ParallelIterator};

use super::Set;

impl<'a, T: Hash + Eq + Sync> IntoParallelIterator for &'a Set<T> {
    type Iter = hash_set::Iter<'a, T>;
    type Item = &'a T;

    fn into_par_iter(self) -> Self::Iter {
        (&self.inner).into_par_iter()
    }
}

impl<T: Hash + Eq + Send> IntoParallelIterator for Set<T> {
    type Iter = hash_set::IntoIter<T>;
    type Item = T;

    fn into_par_iter(self) -> Self::Iter {
        self.inner.into_par_iter()
    }
}

impl<T: Hash + Eq + Send> FromParallelIterator<T> for Set<T> {
    fn from_par_iter<I>(iter: I) -> Self
    where
        I: IntoParallelIterator<Item = T>,
    {
        Self {
            inner: iter.into_par_iter().collect(),
        }
    }
}

impl<T: Hash + Eq + Send> ParallelExtend<T> for Set<T> {
    fn par_extend<I>(&mut self, iter: I)
    where
        I: IntoParallelIterator<Item = T>,
    {
        self.inner.par_extend(iter);
    }
}

impl<T: Hash + Eq + Clone + Send + Sync> Set<T> {
    /// Returns a new set of the elements for which `predicate` returns
    /// `true`, evaluating the predicate in parallel.
    ///
    /// The parallel counterpart of [`filter`](Self::filter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::of(1..=10);
    /// assert_eq!(set.par_filter(|element| element % 5 == 0), Set::of([5, 10]));
    /// ```
    #[must_use]
    pub fn par_filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Sync + Send,
    {
        let result: Self = self
            .into_par_iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect();
        trace!(source = self.len(), result = result.len(), "par_filter");
        result
    }

    /// Returns the elements present in both `self` and `other`, probing the
    /// larger set from parallel tasks over the smaller one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set_a = Set::of(0..100);
    /// let set_b = Set::of(50..150);
    /// assert_eq!(set_a.par_intersection(&set_b), Set::of(50..100));
    /// ```
    #[must_use]
    pub fn par_intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        let result: Self = smaller
            .into_par_iter()
            .filter(|&element| larger.contains(element))
            .cloned()
            .collect();
        trace!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "par_intersection"
        );
        result
    }
}
