//! The Mapping shape.

use std::fmt;

use indexmap::IndexMap;

use super::{Value, ValueError};

/// A collection of unique string keys mapped to values.
///
/// Keys enumerate in insertion order. Equality ignores that order, so two maps
/// holding the same pairs are equal however they were built.
///
/// ```
/// # use colltools::{Map, Value};
/// let map = Map::new().with("name", "Alice").with("age", 30);
///
/// assert_eq!(map.get_as::<&str>("name"), Some("Alice"));
/// assert_eq!(map.keys().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of keys.
    ///
    /// Keys holding [`Value::Undefined`] count: the key exists.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if the map contains the given key
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Gets a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Gets a mutable reference to a value by key
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Gets a value by key with automatic type conversion using TryFrom
    ///
    /// Returns None if the key doesn't exist or type conversion fails.
    pub fn get_as<'a, T>(&'a self, key: &str) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = ValueError>,
    {
        T::try_from(self.get(key)?).ok()
    }

    /// Gets a value by key, failing when it is missing or of the wrong type
    pub fn try_get_as<'a, T>(&'a self, key: &str) -> Result<T, ValueError>
    where
        T: TryFrom<&'a Value, Error = ValueError>,
    {
        let value = self.get(key).ok_or_else(|| ValueError::ElementNotFound {
            key: key.to_string(),
        })?;
        T::try_from(value)
    }

    /// Sets a value, returning the old value if present
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Returns a mutable reference to the value under `key`, inserting
    /// [`Value::Undefined`] first if the key is new.
    pub fn slot(&mut self, key: impl Into<String>) -> &mut Value {
        self.entries.entry(key.into()).or_default()
    }

    /// Removes a key, returning its value. Later keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    /// Removes all keys
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over all key-value pairs
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over all key-value pairs
    pub fn iter_mut(&mut self) -> indexmap::map::IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over all keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over all values
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Returns a mutable iterator over all values
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.values_mut()
    }
}

// Builder pattern methods
impl Map {
    /// Builder method to set a value and return self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder method to set a nested map
    pub fn with_map(self, key: impl Into<String>, value: Map) -> Self {
        self.with(key, Value::Map(value))
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
