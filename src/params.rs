//! Request parameter sets.
//!
//! The projectors on [`User`](crate::models::User) and
//! [`Contact`](crate::models::Contact) produce a [`Params`]: an ordered list of
//! `(wire key, value)` pairs with unique keys. Order is preserved so that
//! encodings that care about it see the parameters in the order they were
//! added.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered, key-unique request parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set `key` to `value`.
    ///
    /// An existing key keeps its position and has its value replaced.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
    }

    /// Set `key` to `value` unless the value is empty.
    pub fn insert_non_empty(&mut self, key: &'static str, value: &str) {
        if !value.is_empty() {
            self.insert(key, value);
        }
    }

    /// Look up the value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The parameter keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Encode as `application/x-www-form-urlencoded` text.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl IntoIterator for Params {
    type Item = (&'static str, String);
    type IntoIter = std::vec::IntoIter<(&'static str, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

impl<V: Into<String>> FromIterator<(&'static str, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

// Serialize as a JSON object, keys in insertion order
impl Serialize for Params {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
