//! String-keyed map whose key equality ignores letter case.
//!
//! Keys are normalized with Unicode lower-casing for lookup, while the spelling
//! used by the first insertion is kept for display and serialization:
//!
//! ```
//! use pantry_contracts::utils::case_insensitive::CaseInsensitiveMap;
//!
//! let mut totals = CaseInsensitiveMap::new();
//! totals.insert("Food", 10);
//! totals.insert("FOOD", 12);
//!
//! assert_eq!(totals.len(), 1);
//! assert_eq!(totals.get("food"), Some(&12));
//! assert_eq!(totals.keys().next(), Some("Food"));
//! ```

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_with::de::DeserializeAsWrap;
use serde_with::ser::SerializeAsWrap;
use serde_with::{DeserializeAs, SerializeAs};

fn normalize(key: &str) -> String {
    key.to_lowercase()
}

/// Map with case-insensitive `String` keys.
///
/// Iteration order follows the normalized key, so output is deterministic.
#[derive(Clone)]
pub struct CaseInsensitiveMap<V> {
    // normalized key -> (display key, value)
    entries: BTreeMap<String, (String, V)>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts a value, overwriting any value stored under a key that differs
    /// only in case. Returns the previous value, if any.
    ///
    /// The display spelling of an existing key is not changed.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.entry(normalize(&key)) {
            btree_map::Entry::Occupied(mut slot) => {
                Some(std::mem::replace(&mut slot.get_mut().1, value))
            }
            btree_map::Entry::Vacant(slot) => {
                slot.insert((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&normalize(key)).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(&normalize(key)).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize(key))
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.remove(&normalize(key)).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(display key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.values(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }
}

pub struct Iter<'a, V> {
    inner: btree_map::Values<'a, String, (String, V)>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, V> IntoIterator for &'a CaseInsensitiveMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V> IntoIterator for CaseInsensitiveMap<V> {
    type Item = (String, V);
    type IntoIter = btree_map::IntoValues<String, (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for CaseInsensitiveMap<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for CaseInsensitiveMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

/// Two maps are equal when they hold equal values under the same keys,
/// ignoring how the keys are cased.
impl<V: PartialEq> PartialEq for CaseInsensitiveMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(other.entries.iter())
                .all(|((ka, (_, va)), (kb, (_, vb)))| ka == kb && va == vb)
    }
}

impl<V: Eq> Eq for CaseInsensitiveMap<V> {}

impl<V: fmt::Debug> fmt::Debug for CaseInsensitiveMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V: Serialize> Serialize for CaseInsensitiveMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Colliding keys in the input resolve last-wins, same as [`CaseInsensitiveMap::insert`].
impl<'de, V: Deserialize<'de>> Deserialize<'de> for CaseInsensitiveMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for MapVisitor<V> {
            type Value = CaseInsensitiveMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut map = CaseInsensitiveMap::new();
                while let Some((k, v)) = access.next_entry::<String, V>()? {
                    map.insert(k, v);
                }
                Ok(map)
            }
        }

        deserializer.deserialize_map(MapVisitor(PhantomData))
    }
}

/// Lets `serde_as` convert values, e.g. `CaseInsensitiveMap<DisplayFromStr>`.
impl<V, U> SerializeAs<CaseInsensitiveMap<V>> for CaseInsensitiveMap<U>
where
    U: SerializeAs<V>,
{
    fn serialize_as<S: Serializer>(
        source: &CaseInsensitiveMap<V>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(source.len()))?;
        for (k, v) in source {
            map.serialize_entry(k, &SerializeAsWrap::<V, U>::new(v))?;
        }
        map.end()
    }
}

impl<'de, V, U> DeserializeAs<'de, CaseInsensitiveMap<V>> for CaseInsensitiveMap<U>
where
    U: DeserializeAs<'de, V>,
{
    fn deserialize_as<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<CaseInsensitiveMap<V>, D::Error> {
        let wrapped = CaseInsensitiveMap::<DeserializeAsWrap<V, U>>::deserialize(deserializer)?;
        Ok(wrapped
            .into_iter()
            .map(|(k, v)| (k, v.into_inner()))
            .collect())
    }
}
