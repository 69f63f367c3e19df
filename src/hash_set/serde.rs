//! Serde support for [`Set`].
//!
//! A set serializes as a sequence in iteration order and deserializes from
//! any sequence. Repeated elements in the input collapse, as with
//! [`Set::of`].

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use ::serde::de::{SeqAccess, Visitor};
use ::serde::ser::SerializeSeq;
use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{MAXIMUM_PREALLOCATION, Set};

impl<T: Serialize> Serialize for Set<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

struct SetVisitor<T> {
    marker: PhantomData<T>,
}

impl<T> SetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for SetVisitor<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    type Value = Set<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let capacity = sequence.size_hint().unwrap_or(0).min(MAXIMUM_PREALLOCATION);
        let mut set = Set::with_capacity(capacity);
        while let Some(element) = sequence.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for Set<T>
where
    T: Deserialize<'de> + Hash + Eq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SetVisitor::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let set: Set<i32> = Set::new();
        assert_eq!(serde_json::to_string(&set).unwrap(), "[]");
    }

    #[rstest]
    fn test_serialize_single_element() {
        let set = Set::singleton("solo");
        assert_eq!(serde_json::to_string(&set).unwrap(), "[\"solo\"]");
    }

    #[rstest]
    fn test_roundtrip() {
        let set = Set::of(1..=20);
        let json = serde_json::to_string(&set).unwrap();
        let restored: Set<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(set, restored);
    }

    #[rstest]
    fn test_deserialize_collapses_duplicates() {
        let set: Set<i32> = serde_json::from_str("[1, 2, 2, 3, 1]").unwrap();
        assert_eq!(set, Set::of([1, 2, 3]));
    }

    #[rstest]
    fn test_deserialize_rejects_non_sequence() {
        let result: Result<Set<i32>, _> = serde_json::from_str("{\"a\": 1}");
        assert!(result.is_err());
    }
}
