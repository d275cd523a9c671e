use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// An ordered dictionary that maintains insertion order.
///
/// Iteration and serialization follow insertion order. Equality does not:
/// two dictionaries are equal when they hold the same key/value pairs.
#[derive(Debug, Clone)]
pub struct OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    keys: Vec<K>,
    map: HashMap<K, V>,
}

impl<K, V> OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    /// Creates a new empty OrderedDictionary
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            map: HashMap::new(),
        }
    }

    /// Creates a new OrderedDictionary with the specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a key-value pair. Re-inserting an existing key keeps its position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if !self.map.contains_key(&key) {
            self.keys.push(key.clone());
        }
        self.map.insert(key, value)
    }

    /// Gets a value by key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.map.get_mut(key)
    }

    /// Removes a key-value pair from the dictionary
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.map.remove(key)?;
        self.keys.retain(|k| k != key);
        Some(value)
    }

    /// Checks if the dictionary contains a key
    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.map.clear();
    }

    /// Returns an iterator over the keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    /// Returns an iterator over the values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.keys.iter().filter_map(move |k| self.map.get(k))
    }

    /// Returns an iterator over key-value pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys
            .iter()
            .filter_map(move |k| self.map.get(k).map(|v| (k, v)))
    }
}

impl<V: Clone> OrderedDictionary<String, V> {
    /// Looks up a string key without allocating.
    pub fn get_str(&self, key: &str) -> Option<&V> {
        self.map.get(key)
    }

    pub fn contains_str(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }
}

impl<K, V> Default for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> PartialEq for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> std::ops::Index<&K> for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        &self.map[key]
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, value) in iter {
            dict.insert(key, value);
        }
        dict
    }
}

impl<K, V> IntoIterator for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
{
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(mut self) -> Self::IntoIter {
        let mut pairs = Vec::with_capacity(self.keys.len());
        for key in self.keys.drain(..) {
            if let Some(value) = self.map.remove(&key) {
                pairs.push((key, value));
            }
        }
        pairs.into_iter()
    }
}

impl<K, V> Serialize for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash + Serialize,
    V: Clone + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedDictionaryVisitor<K, V> {
    marker: PhantomData<fn() -> (K, V)>,
}

impl<'de, K, V> Visitor<'de> for OrderedDictionaryVisitor<K, V>
where
    K: Clone + Eq + Hash + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
{
    type Value = OrderedDictionary<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
        let mut dict = OrderedDictionary::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry()? {
            dict.insert(key, value);
        }
        Ok(dict)
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedDictionary<K, V>
where
    K: Clone + Eq + Hash + Deserialize<'de>,
    V: Clone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedDictionaryVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_dictionary_basic() {
        let mut dict = OrderedDictionary::new();

        dict.insert("first", 1);
        dict.insert("second", 2);
        dict.insert("third", 3);

        assert_eq!(dict.len(), 3);
        assert_eq!(dict.get(&"second"), Some(&2));

        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec![&"first", &"second", &"third"]);
    }

    #[test]
    fn test_ordered_dictionary_remove() {
        let mut dict = OrderedDictionary::new();

        dict.insert("a", 1);
        dict.insert("b", 2);
        dict.insert("c", 3);

        assert_eq!(dict.remove(&"b"), Some(2));
        assert_eq!(dict.remove(&"b"), None);
        assert_eq!(dict.len(), 2);

        let keys: Vec<_> = dict.keys().collect();
        assert_eq!(keys, vec![&"a", &"c"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut dict = OrderedDictionary::new();
        dict.insert("a", 1);
        dict.insert("b", 2);
        assert_eq!(dict.insert("a", 10), Some(1));

        let pairs: Vec<_> = dict.into_iter().collect();
        assert_eq!(pairs, vec![("a", 10), ("b", 2)]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left: OrderedDictionary<&str, i32> = [("x", 1), ("y", 2)].into_iter().collect();
        let right: OrderedDictionary<&str, i32> = [("y", 2), ("x", 1)].into_iter().collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let dict: OrderedDictionary<String, u32> = [("zeta".to_string(), 1), ("alpha".to_string(), 2)]
            .into_iter()
            .collect();
        let text = serde_json::to_string(&dict).unwrap();
        assert_eq!(text, r#"{"zeta":1,"alpha":2}"#);

        let back: OrderedDictionary<String, u32> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
    }
}
