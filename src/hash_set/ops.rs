//! Operator overloads and conversions for [`Set`].
//!
//! The binary operators work on references and return new sets:
//!
//! | Operator  | Method                                               |
//! |-----------|------------------------------------------------------|
//! | `&a \| &b` | [`union`](Set::union)                               |
//! | `&a & &b` | [`intersection`](Set::intersection)                  |
//! | `&a - &b` | [`difference`](Set::difference)                      |
//! | `&a ^ &b` | [`symmetric_difference`](Set::symmetric_difference)  |
//!
//! The assigning forms (`|=`, `&=`, `-=`, `^=`) update the left operand in
//! place.
//!
//! ```rust
//! use uniset::Set;
//!
//! let set_a = Set::of([1, 2, 3]);
//! let set_b = Set::of([2, 3, 4]);
//!
//! assert_eq!(&set_a | &set_b, Set::of([1, 2, 3, 4]));
//! assert_eq!(&set_a & &set_b, Set::of([2, 3]));
//! assert_eq!(&set_a - &set_b, Set::of([1]));
//! assert_eq!(&set_a ^ &set_b, Set::of([1, 4]));
//!
//! let mut accumulated = Set::new();
//! accumulated |= &set_a;
//! accumulated -= &set_b;
//! assert_eq!(accumulated, Set::of([1]));
//! ```

use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Set;

impl<T: Hash + Eq + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, other: &Set<T>) -> Set<T> {
        self.union(other)
    }
}

impl<T: Hash + Eq + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, other: &Set<T>) -> Set<T> {
        self.intersection(other)
    }
}

impl<T: Hash + Eq + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, other: &Set<T>) -> Set<T> {
        self.difference(other)
    }
}

impl<T: Hash + Eq + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, other: &Set<T>) -> Set<T> {
        self.symmetric_difference(other)
    }
}

impl<T: Hash + Eq + Clone> BitOrAssign<&Set<T>> for Set<T> {
    fn bitor_assign(&mut self, other: &Self) {
        self.add(other.iter().cloned());
    }
}

impl<T: Hash + Eq> BitAndAssign<&Set<T>> for Set<T> {
    fn bitand_assign(&mut self, other: &Self) {
        self.retain(|element| other.contains(element));
    }
}

impl<T: Hash + Eq> SubAssign<&Set<T>> for Set<T> {
    fn sub_assign(&mut self, other: &Self) {
        if other.len() < self.len() {
            self.remove(other);
        } else {
            self.retain(|element| !other.contains(element));
        }
    }
}

impl<T: Hash + Eq + Clone> BitXorAssign<&Set<T>> for Set<T> {
    fn bitxor_assign(&mut self, other: &Self) {
        for element in other {
            if !self.discard(element) {
                self.insert(element.clone());
            }
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: Hash + Eq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T: Hash + Eq + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(elements: [T; N]) -> Self {
        let mut set = Self::with_capacity(N);
        set.add(elements);
        set
    }
}

impl<T: Hash + Eq> From<Vec<T>> for Set<T> {
    fn from(elements: Vec<T>) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.add(elements);
        set
    }
}

impl<T> From<Set<T>> for Vec<T> {
    fn from(set: Set<T>) -> Self {
        set.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sorted(set: &Set<i32>) -> Vec<i32> {
        let mut elements = set.to_vec();
        elements.sort_unstable();
        elements
    }

    #[rstest]
    #[case(&[1, 2, 3], &[2, 3, 4], &[1, 2, 3, 4])]
    #[case(&[], &[1], &[1])]
    #[case(&[], &[], &[])]
    fn test_bitor(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        let union = &Set::of(left.iter().copied()) | &Set::of(right.iter().copied());
        assert_eq!(sorted(&union), expected);
    }

    #[rstest]
    #[case(&[1, 2, 3], &[2, 3, 4], &[2, 3])]
    #[case(&[1, 2], &[3, 4], &[])]
    fn test_bitand(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        let intersection = &Set::of(left.iter().copied()) & &Set::of(right.iter().copied());
        assert_eq!(sorted(&intersection), expected);
    }

    #[rstest]
    #[case(&[1, 2, 3], &[2, 3, 4], &[1])]
    #[case(&[2, 3, 4], &[1, 2, 3], &[4])]
    fn test_sub(#[case] left: &[i32], #[case] right: &[i32], #[case] expected: &[i32]) {
        let difference = &Set::of(left.iter().copied()) - &Set::of(right.iter().copied());
        assert_eq!(sorted(&difference), expected);
    }

    #[rstest]
    fn test_bitxor() {
        let symmetric = &Set::of([1, 2, 3]) ^ &Set::of([3, 4]);
        assert_eq!(sorted(&symmetric), vec![1, 2, 4]);
    }

    #[rstest]
    fn test_assigning_operators() {
        let mut set = Set::of([1, 2, 3]);
        set |= &Set::of([4]);
        assert_eq!(sorted(&set), vec![1, 2, 3, 4]);
        set &= &Set::of([2, 3, 4, 5]);
        assert_eq!(sorted(&set), vec![2, 3, 4]);
        set -= &Set::of([4]);
        assert_eq!(sorted(&set), vec![2, 3]);
        set ^= &Set::of([3, 6]);
        assert_eq!(sorted(&set), vec![2, 6]);
    }

    #[rstest]
    fn test_sub_assign_with_larger_operand() {
        let mut set = Set::of([1, 2]);
        set -= &Set::of(0..100);
        assert!(set.is_empty());
    }

    #[rstest]
    fn test_extend_by_value_and_reference() {
        let mut set = Set::of([1]);
        set.extend(vec![2, 3]);
        set.extend(&[3, 4]);
        assert_eq!(sorted(&set), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_conversions() {
        let from_array = Set::from([3, 1, 3]);
        let from_vec = Set::from(vec![1, 3]);
        assert_eq!(from_array, from_vec);

        let mut back: Vec<i32> = from_array.into();
        back.sort_unstable();
        assert_eq!(back, vec![1, 3]);
    }

    #[rstest]
    fn test_collect() {
        let set: Set<i32> = (0..10).map(|value| value % 3).collect();
        assert_eq!(sorted(&set), vec![0, 1, 2]);
    }
}
