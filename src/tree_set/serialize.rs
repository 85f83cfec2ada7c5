//! Serde support.
//!
//! Only the ordered element sequence goes over the wire; decoding re-inserts each element, so
//! duplicates in the input collapse and the tree shape is rebuilt locally.

use core::fmt;
use core::marker::PhantomData;

use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, SerializeSeq, Serializer};

use super::TreeSet;
use crate::comparator::Comparator;

impl<T: Serialize, C> Serialize for TreeSet<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

struct TreeSetVisitor<T, C> {
    marker: PhantomData<fn() -> TreeSet<T, C>>,
}

impl<'de, T, C> Visitor<'de> for TreeSetVisitor<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    type Value = TreeSet<T, C>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of set elements")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = TreeSet::with_comparator(C::default());
        while let Some(element) = access.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

impl<'de, T, C> Deserialize<'de> for TreeSet<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    /// Decodes a sequence into a fresh set. On error no set is produced.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TreeSetVisitor { marker: PhantomData })
    }
}
