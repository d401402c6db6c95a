//! Flat request parameter set

use std::collections::btree_map::{self, BTreeMap};

use crate::utils::encoding::form_encode;

/// Flat `name -> value` parameters of one MWS call.
///
/// Keys are kept in ascending byte order, which is the order both the
/// string-to-sign and the wire encoding use. Insertion order never matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters(BTreeMap<String, String>);

impl Parameters {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Sets `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Sets `key` only when a value is present. `None` adds no key at all.
    pub fn insert_opt<V: Into<String>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.0.insert(key.into(), value.into());
        }
    }

    /// Writes `items` as `{list_name}.1`, `{list_name}.2`, ...
    ///
    /// `list_name` is the dotted logical name, e.g. `ASINList.ASIN`.
    pub fn insert_indexed<I, V>(&mut self, list_name: &str, items: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        for (i, item) in items.into_iter().enumerate() {
            self.0.insert(indexed_key(list_name, i + 1), item.into());
        }
    }

    pub fn extend(&mut self, other: Parameters) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `application/x-www-form-urlencoded` rendering with keys and values escaped
    pub fn to_form_encoded(&self) -> String {
        form_encode(self.iter())
    }
}

/// `{list_name}.{index}` with a 1-based index
pub fn indexed_key(list_name: &str, index: usize) -> String {
    format!("{list_name}.{index}")
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for Parameters {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
