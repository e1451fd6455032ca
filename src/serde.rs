//! `serde` support, enabled by the `serde` feature.
//!
//! Maps serialize as maps and sets as sequences, both in ascending order.
//! Deserialization goes through `set`/`add`, so a repeated map key keeps its
//! last value and a repeated set element is stored once.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::{AvlTreeMap, AvlTreeSet};

/// Upper bound on storage reserved up front from an untrusted size hint.
const PREALLOCATE_LIMIT: usize = 4096;

impl<K: Serialize, V: Serialize> Serialize for AvlTreeMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self)
    }
}

impl<T: Serialize> Serialize for AvlTreeSet<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

struct MapVisitor<K, V>(PhantomData<fn() -> AvlTreeMap<K, V>>);

impl<'de, K, V> Visitor<'de> for MapVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = AvlTreeMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = AvlTreeMap::with_capacity(access.size_hint().unwrap_or(0).min(PREALLOCATE_LIMIT));
        while let Some((key, value)) = access.next_entry()? {
            map.set(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for AvlTreeMap<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

struct SetVisitor<T>(PhantomData<fn() -> AvlTreeSet<T>>);

impl<'de, T> Visitor<'de> for SetVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = AvlTreeSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut set = AvlTreeSet::with_capacity(access.size_hint().unwrap_or(0).min(PREALLOCATE_LIMIT));
        while let Some(item) = access.next_element()? {
            set.add(item);
        }
        Ok(set)
    }
}

impl<'de, T> Deserialize<'de> for AvlTreeSet<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SetVisitor(PhantomData))
    }
}
