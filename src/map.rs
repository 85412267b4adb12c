//! Ordered key/value storage.
//!
//! [`ValueMap`] is the plain keyed structure behind both [`Value::Array`] and
//! [`Collection`](crate::Collection). It wraps an [`IndexMap`] over [`Key`] so
//! integer and string keys can live side by side while insertion order is kept
//! explicitly.
//!
//! Besides the map itself it tracks the next free integer index, which is what
//! makes [`ValueMap::push`] behave like appending to a list:
//!
//! ```rust
//! use keyed_collection::{Key, Value, ValueMap};
//!
//! let mut map = ValueMap::new();
//! map.push(Value::from("apple"));
//! map.insert(Key::from("color"), Value::from("red"));
//! map.insert(Key::Int(10), Value::from("pear"));
//!
//! assert_eq!(map.push(Value::from("plum")), Some(Key::Int(11)));
//! ```

use crate::{Key, Value};
use indexmap::IndexMap;
use tracing::debug;

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// Overwriting an existing key keeps its position. Equality is strict: two
/// maps are equal only if they hold equal entries in the same order.
#[derive(Debug, Clone)]
pub struct ValueMap {
    entries: IndexMap<Key, Value>,
    /// `None` once `i64::MAX` has been used as a key.
    next_index: Option<i64>,
}

impl ValueMap {
    /// Creates an empty `ValueMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::ValueMap;
    ///
    /// let map = ValueMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        ValueMap {
            entries: IndexMap::new(),
            next_index: Some(0),
        }
    }

    /// Creates an empty `ValueMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueMap {
            entries: IndexMap::with_capacity(capacity),
            next_index: Some(0),
        }
    }

    /// Builds a list-shaped map with keys `0..values.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Key, Value, ValueMap};
    ///
    /// let map = ValueMap::list(vec![Value::from("a"), Value::from("b")]);
    /// assert_eq!(map.get(&Key::Int(1)), Some(&Value::from("b")));
    /// ```
    #[must_use]
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut map = ValueMap::new();
        for value in values {
            map.push(value);
        }
        map
    }

    /// Inserts a key-value pair.
    ///
    /// An existing key keeps its position and the old value is returned; a new
    /// key is appended at the end.
    pub fn insert(&mut self, key: Key, value: Value) -> Option<Value> {
        if let (Key::Int(i), Some(next)) = (&key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
        self.entries.insert(key, value)
    }

    /// Appends `value` under the next free integer key and returns that key.
    ///
    /// The next free key is one past the largest integer key ever inserted,
    /// or `0` when there has been none. Once `i64::MAX` has been used there is
    /// no free key left: the map is left unchanged and `None` is returned.
    pub fn push(&mut self, value: Value) -> Option<Key> {
        let Some(next) = self.next_index else {
            debug!("push dropped a value, no integer key is left after i64::MAX");
            return None;
        };
        let key = Key::Int(next);
        self.insert(key.clone(), value);
        Some(key)
    }

    /// The key the next [`push`](Self::push) will use.
    #[inline]
    #[must_use]
    pub fn next_index(&self) -> Option<i64> {
        self.next_index
    }

    #[must_use]
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&Key, &Value)> {
        self.entries.get_index(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }

    /// Returns `true` when the keys are exactly `0, 1, 2, ...` in order.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(i, key)| *key == Key::Int(i as i64))
    }
}

impl Default for ValueMap {
    fn default() -> Self {
        ValueMap::new()
    }
}

impl PartialEq for ValueMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl From<Vec<Value>> for ValueMap {
    fn from(values: Vec<Value>) -> Self {
        ValueMap::list(values)
    }
}

impl IntoIterator for ValueMap {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueMap {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(Key, Value)> for ValueMap {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        let mut map = ValueMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<(Key, Value)> for ValueMap {
    fn extend<T: IntoIterator<Item = (Key, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
