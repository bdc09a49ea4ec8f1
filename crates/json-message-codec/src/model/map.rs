//! Ordered map of values.

use crate::model::Value;

/// Ordered sequence of key/value pairs.
///
/// Keys may be any [`Value`]. Insertion order is preserved; setting a key
/// that is already present replaces its value in place.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValueMap {
    entries: Vec<(Value, Value)>,
}

impl ValueMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Sets `key` to `value`.
    ///
    /// If an equal key exists its value is replaced and its position kept,
    /// otherwise the pair is appended.
    pub fn set(&mut self, key: Value, value: Value) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Sets a string key.
    pub fn set_string(&mut self, key: &str, value: impl Into<Value>) {
        match self.position_of_string(key) {
            Some(i) => self.entries[i].1 = value.into(),
            None => self.entries.push((Value::String(key.to_owned()), value.into())),
        }
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns the value stored under the string key `key`.
    pub fn lookup_string(&self, key: &str) -> Option<&Value> {
        self.position_of_string(key).map(|i| &self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over pairs in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Appends a pair without checking for an existing key.
    ///
    /// The caller must know `key` is absent.
    pub(crate) fn push_unique(&mut self, key: Value, value: Value) {
        self.entries.push((key, value));
    }

    /// Replaces the value of the entry at `index`.
    pub(crate) fn replace_value_at(&mut self, index: usize, value: Value) {
        self.entries[index].1 = value;
    }

    fn position_of_string(&self, key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|(k, _)| matches!(k, Value::String(s) if s == key))
    }
}

impl FromIterator<(Value, Value)> for ValueMap {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut map = ValueMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}

impl IntoIterator for ValueMap {
    type Item = (Value, Value);
    type IntoIter = std::vec::IntoIter<(Value, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
