//! Insertion-ordered string-keyed map and the raw CSV record built on it
//!
//! CSV rows, customer segments and the LTV analysis all need a mapping whose
//! iteration order is the order keys were first seen. `OrderedMap` keeps its
//! entries in a `Vec` and serializes as a JSON object in that order.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Raw CSV row: column name to unparsed value, in header order
pub type Record = OrderedMap<String>;

/// String-keyed map preserving first-insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> OrderedMap<V> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Insert a value, replacing an existing one in place
    ///
    /// A replaced key keeps its original position.
    pub fn insert(&mut self, key: String, value: V) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get a mutable reference to the value for `key`, appending `make()` if absent
    pub fn get_or_insert_with<F>(&mut self, key: &str, make: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let index = match self.entries.iter().position(|(existing, _)| existing == key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), make()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        // Later duplicates of a header overwrite earlier ones
        while let Some((key, value)) = access.next_entry::<String, V>()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_preserves_insertion_order() {
        let map = record(&[("zeta", "1"), ("alpha", "2"), ("mid", "3")]);
        let keys: Vec<_> = map.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut map = record(&[("a", "1"), ("b", "2")]);
        map.insert("a".to_string(), "9".to_string());

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a").map(String::as_str), Some("9"));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_get_or_insert_with_appends_once() {
        let mut map: OrderedMap<Vec<u32>> = OrderedMap::new();
        map.get_or_insert_with("vip", Vec::new).push(1);
        map.get_or_insert_with("new", Vec::new).push(2);
        map.get_or_insert_with("vip", Vec::new).push(3);

        assert_eq!(map.get("vip"), Some(&vec![1, 3]));
        assert_eq!(map.get("new"), Some(&vec![2]));
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["vip", "new"]);
    }

    #[test]
    fn test_serializes_as_object_in_order() {
        let map = record(&[("customer_id", "C002"), ("name", "Layla"), ("segment", "VIP")]);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"customer_id":"C002","name":"Layla","segment":"VIP"}"#
        );
    }

    #[test]
    fn test_deserializes_from_csv_row_in_header_order() {
        let data = "segment,customer_id,ltv\nVIP,C001,1000\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<Record> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .expect("row should deserialize");

        assert_eq!(rows.len(), 1);
        assert_eq!(
            rows[0].iter().collect::<Vec<_>>(),
            vec![
                ("segment", &"VIP".to_string()),
                ("customer_id", &"C001".to_string()),
                ("ltv", &"1000".to_string()),
            ]
        );
    }
}
