//! Unordered set with set algebra.
//!
//! This module provides [`Set`], a hash set of unique elements that is
//! mutated in place and combined into new sets.
//!
//! # Overview
//!
//! - O(1) expected `contains`, `insert` and `discard`
//! - O(1) `len` and `is_empty`
//! - `add` and `remove` take any number of elements and return the receiver,
//!   so calls chain
//! - `union`, `intersection`, `difference`, `symmetric_difference` and
//!   `filter` return new sets and leave both operands untouched
//!
//! Iteration order is unspecified. It is not stable across runs and may
//! change after any mutation.
//!
//! # Examples
//!
//! ```rust
//! use uniset::Set;
//!
//! let mut set = Set::new();
//! set.add([1, 2, 3]).add([3, 4]).remove([1]);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(&4));
//! assert!(!set.contains(&1));
//! ```
//!
//! # Set Operations
//!
//! ```rust
//! use uniset::Set;
//!
//! let set_a = Set::of(1..=8);
//! let set_b = Set::of(5..=12);
//!
//! assert_eq!(set_a.difference(&set_b), Set::of([1, 2, 3, 4]));
//! assert_eq!(set_b.difference(&set_a), Set::of([9, 10, 11, 12]));
//! assert_eq!(set_a.intersection(&set_b), Set::of([5, 6, 7, 8]));
//! assert_eq!(set_a.union(&set_b), Set::of(1..=12));
//! ```

mod iter;
mod ops;
#[cfg(feature = "rayon")]
mod parallel;
#[cfg(feature = "serde")]
mod serde;

use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::ops::ControlFlow;

use crate::error::DuplicateElementError;
use crate::hasher::DefaultHashBuilder;

pub use iter::{IntoIter, Iter};

/// Upper bound on the capacity preallocated from a size hint.
const MAXIMUM_PREALLOCATION: usize = 4096;

// =============================================================================
// Set Definition
// =============================================================================

/// An unordered collection of unique elements.
///
/// Two elements are the same member when they compare equal; which of two
/// equal instances ends up stored is unspecified. Elements must implement
/// [`Hash`] and [`Eq`] consistently. Every constructor requires that bound,
/// so a set of an unhashable type cannot be built.
///
/// # Time Complexity
///
/// | Operation              | Complexity         |
/// |------------------------|--------------------|
/// | `new`                  | O(1)               |
/// | `of`                   | O(k)               |
/// | `contains`             | O(1) expected      |
/// | `add` / `remove`       | O(k) expected      |
/// | `len` / `is_empty`     | O(1)               |
/// | `is_subset`            | O(n)               |
/// | `union`                | O(n + m)           |
/// | `intersection`         | O(min(n, m))       |
/// | `difference`           | O(n)               |
/// | `symmetric_difference` | O(n + m)           |
/// | `filter` / `for_each`  | O(n)               |
///
/// where `n = self.len()`, `m = other.len()` and `k` is the number of
/// supplied elements.
///
/// # Examples
///
/// ```rust
/// use uniset::Set;
///
/// let set = Set::of(["apple", "pear", "apple"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("pear"));
/// ```
#[derive(Clone)]
pub struct Set<T> {
    inner: HashSet<T, DefaultHashBuilder>,
}

static_assertions::assert_impl_all!(Set<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(Set<String>: Send, Sync);
static_assertions::assert_not_impl_any!(Set<std::rc::Rc<i32>>: Send, Sync);

impl<T> Set<T> {
    /// Returns the number of elements in the set (its cardinality).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// assert_eq!(Set::of([1, 1, 2]).len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// assert!(Set::<i32>::new().is_empty());
    /// assert!(!Set::of([1]).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns an iterator over the elements, in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::of([1, 2, 3]);
    /// let mut elements: Vec<i32> = set.iter().copied().collect();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 2, 3]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.inner.iter())
    }

    /// Removes every element, keeping the allocated capacity.
    ///
    /// Returns the receiver for chaining.
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.inner.clear();
        self
    }

    /// Consumes the set, returning its elements in unspecified order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut elements = Set::of(["b", "a", "b"]).into_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_iter().collect()
    }

    /// Calls `action` once for every element, in unspecified order.
    ///
    /// The set is borrowed for the whole traversal, so the callback cannot
    /// mutate it. Use [`try_for_each`](Self::try_for_each) to stop early.
    ///
    /// Returns the receiver for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut sum = 0;
    /// Set::of([1, 2, 3, 4, 4, 3, 2, 1]).for_each(|element| sum += element);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn for_each<F>(&self, mut action: F) -> &Self
    where
        F: FnMut(&T),
    {
        for element in &self.inner {
            action(element);
        }
        self
    }

    /// Calls `action` for each element until it returns
    /// [`ControlFlow::Break`].
    ///
    /// Returns the break value, or `ControlFlow::Continue(())` once every
    /// element has been visited. Which elements are visited before the break
    /// depends on the unspecified iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::ops::ControlFlow;
    /// use uniset::Set;
    ///
    /// let set = Set::of([3, 8, 15, 4]);
    /// let found = set.try_for_each(|&element| {
    ///     if element > 10 {
    ///         ControlFlow::Break(element)
    ///     } else {
    ///         ControlFlow::Continue(())
    ///     }
    /// });
    /// assert_eq!(found, ControlFlow::Break(15));
    /// ```
    pub fn try_for_each<B, F>(&self, mut action: F) -> ControlFlow<B>
    where
        F: FnMut(&T) -> ControlFlow<B>,
    {
        self.inner.iter().try_for_each(|element| action(element))
    }
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set: Set<i32> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    ///
    /// The element type must be hashable and comparable for equality, even
    /// for an empty set:
    ///
    /// ```compile_fail
    /// use uniset::Set;
    ///
    /// let weights = Set::<f64>::new();
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: HashSet::default(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set: Set<u64> = Set::with_capacity(64);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 64);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Creates a set from the distinct values of `elements`.
    ///
    /// Repeated values collapse into one membership. An empty input gives an
    /// empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::of([1, 1, 2, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    ///
    /// let empty = Set::of(Vec::<i32>::new());
    /// assert!(empty.is_empty());
    /// ```
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::new();
        set.add(elements);
        set
    }

    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::singleton('x');
    /// assert_eq!(set.len(), 1);
    /// assert!(set.contains(&'x'));
    /// ```
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut set = Self::with_capacity(1);
        set.inner.insert(element);
        set
    }

    /// Creates a set from `elements`, rejecting input that repeats a value.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateElementError`] carrying the first element that
    /// equals an earlier one, together with its position in the input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let unique = Set::try_from_unique([1, 2, 3]).unwrap();
    /// assert_eq!(unique.len(), 3);
    ///
    /// let error = Set::try_from_unique([1, 2, 1, 2]).unwrap_err();
    /// assert_eq!(error.element, 1);
    /// assert_eq!(error.position, 2);
    /// ```
    pub fn try_from_unique<I>(elements: I) -> Result<Self, DuplicateElementError<T>>
    where
        I: IntoIterator<Item = T>,
        T: fmt::Debug,
    {
        let elements = elements.into_iter();
        let mut set = Self::with_capacity(elements.size_hint().0.min(MAXIMUM_PREALLOCATION));
        for (position, element) in elements.enumerate() {
            if set.inner.contains(&element) {
                debug!(position, "rejected duplicate element");
                return Err(DuplicateElementError { element, position });
            }
            set.inner.insert(element);
        }
        Ok(set)
    }

    /// Returns `true` if the set contains an element equal to `element`.
    ///
    /// The element may be any borrowed form of the set's element type, but
    /// `Hash` and `Eq` on the borrowed form must match those for the element
    /// type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::of([String::from("hello")]);
    /// assert!(set.contains("hello"));
    /// assert!(!set.contains("world"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(element)
    }

    /// Inserts a single element.
    ///
    /// Returns `true` if the element was not present before.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        self.inner.insert(element)
    }

    /// Removes a single element.
    ///
    /// Returns `true` if the element was present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::of([1, 2]);
    /// assert!(set.discard(&1));
    /// assert!(!set.discard(&1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn discard<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(element)
    }

    /// Inserts every element of `elements`.
    ///
    /// Elements already present are left as they are. Returns the receiver
    /// for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::new();
    /// set.add([1]).add([2, 3]).add(Vec::new());
    /// assert_eq!(set, Set::of([1, 2, 3]));
    /// ```
    pub fn add<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.extend(elements);
        self
    }

    /// Removes every element of `elements` that is present.
    ///
    /// Absent elements are ignored. Accepts owned elements or references.
    /// Returns the receiver for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::of(1..=5);
    /// set.remove([1]).remove(&[2, 3, 42]);
    /// assert_eq!(set, Set::of([4, 5]));
    /// ```
    pub fn remove<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Borrow<T>,
    {
        for element in elements {
            let element: &T = element.borrow();
            self.inner.remove(element);
        }
        self
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// This is the in-place counterpart of [`filter`](Self::filter). Returns
    /// the receiver for chaining.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let mut set = Set::of(1..=6);
    /// set.retain(|element| element % 3 == 0);
    /// assert_eq!(set, Set::of([3, 6]));
    /// ```
    pub fn retain<P>(&mut self, predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.retain(predicate);
        self
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }

    /// Returns `true` if every element of `self` is in `other`.
    ///
    /// The empty set is a subset of every set, and every set is a subset of
    /// itself.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let small = Set::of([1]);
    /// let large = Set::of([1, 2, 3]);
    ///
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// assert!(large.is_subset(&large));
    /// assert!(Set::new().is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.inner.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if every element of `other` is in `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// assert!(Set::of([1, 2, 3]).is_superset(&Set::of([2, 3])));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns `true` if `self` and `other` have no elements in common.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// assert!(Set::of([1, 2]).is_disjoint(&Set::of([3, 4])));
    /// assert!(!Set::of([1, 2]).is_disjoint(&Set::of([2, 3])));
    /// ```
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (smaller, larger) = smaller_first(self, other);
        !smaller.inner.iter().any(|element| larger.contains(element))
    }
}

impl<T: Hash + Eq + Clone> Set<T> {
    /// Returns the elements as a vector, in unspecified order.
    ///
    /// The order may differ between calls. Sort the result when a
    /// deterministic order is needed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::of([5, 1, 4, 1]);
    /// let mut elements = set.to_vec();
    /// elements.sort_unstable();
    /// assert_eq!(elements, vec![1, 4, 5]);
    /// assert_eq!(Set::of(set.to_vec()), set);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.inner.iter().cloned().collect()
    }

    /// Returns a new set of the elements for which `predicate` returns `true`.
    ///
    /// The receiver is not modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set = Set::of([1, 2, 3, 4]);
    /// let evens = set.filter(|element| element % 2 == 0);
    ///
    /// assert_eq!(evens, Set::of([2, 4]));
    /// assert_eq!(set.len(), 4);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        let result: Self = self
            .inner
            .iter()
            .filter(|&element| predicate(element))
            .cloned()
            .collect();
        trace!(source = self.len(), result = result.len(), "filter");
        result
    }

    /// Returns the elements present in both `self` and `other`.
    ///
    /// Iterates the smaller operand, so the stored instances come from
    /// whichever set is smaller.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set_a = Set::of([1, 2, 3]);
    /// let set_b = Set::of([2, 3, 4]);
    ///
    /// assert_eq!(set_a.intersection(&set_b), Set::of([2, 3]));
    /// assert_eq!(set_a.intersection(&set_a), set_a);
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let result: Self = smaller
            .inner
            .iter()
            .filter(|&element| larger.contains(element))
            .cloned()
            .collect();
        trace!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "intersection"
        );
        result
    }

    /// Returns the elements present in `self`, `other`, or both.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set_a = Set::of([1, 2]);
    /// let set_b = Set::of([2, 3]);
    ///
    /// assert_eq!(set_a.union(&set_b), Set::of([1, 2, 3]));
    /// assert_eq!(set_a.union(&set_a), set_a);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let (smaller, larger) = smaller_first(self, other);
        let mut result = larger.clone();
        result.inner.extend(smaller.inner.iter().cloned());
        trace!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "union"
        );
        result
    }

    /// Returns the elements present in `self` but not in `other`.
    ///
    /// Unlike union and intersection this is not commutative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set_a = Set::of([1, 2, 3]);
    /// let set_b = Set::of([2, 3, 4]);
    ///
    /// assert_eq!(set_a.difference(&set_b), Set::of([1]));
    /// assert_eq!(set_b.difference(&set_a), Set::of([4]));
    /// assert!(set_a.difference(&set_a).is_empty());
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let result: Self = self
            .inner
            .iter()
            .filter(|&element| !other.contains(element))
            .cloned()
            .collect();
        trace!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "difference"
        );
        result
    }

    /// Returns the elements present in exactly one of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uniset::Set;
    ///
    /// let set_a = Set::of([1, 2, 3]);
    /// let set_b = Set::of([2, 3, 4]);
    ///
    /// assert_eq!(set_a.symmetric_difference(&set_b), Set::of([1, 4]));
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let result: Self = self
            .inner
            .symmetric_difference(&other.inner)
            .cloned()
            .collect();
        trace!(
            left = self.len(),
            right = other.len(),
            result = result.len(),
            "symmetric_difference"
        );
        result
    }
}

/// Orders two sets by cardinality, smaller first.
fn smaller_first<'a, T>(left: &'a Set<T>, right: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if left.len() <= right.len() {
        (left, right)
    } else {
        (right, left)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// An empty set.
///
/// ```compile_fail
/// use uniset::Set;
///
/// let weights: Set<f64> = Set::default();
/// ```
impl<T: Hash + Eq> Default for Set<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Hash + Eq> Eq for Set<T> {}

impl<T: fmt::Debug> fmt::Debug for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.inner.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in &self.inner {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Tests
// =============================================================================
