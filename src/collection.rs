//! The [`Collection`] type.
//!
//! A collection wraps an ordered [`ValueMap`] and layers array-style
//! operations on top of it. Operations fall into two groups, and the
//! signatures say which is which:
//!
//! - `&mut self` operations change the receiver in place and return it for
//!   chaining: [`push`](Collection::push), [`put`](Collection::put),
//!   [`sort`](Collection::sort), [`rsort`](Collection::rsort), plus the
//!   cursor moves [`next`](Collection::next) and [`rewind`](Collection::rewind).
//! - `&self` operations leave the receiver untouched and build a new
//!   collection: [`map`](Collection::map), [`filter`](Collection::filter),
//!   [`flatten`](Collection::flatten), [`pluck`](Collection::pluck),
//!   [`group_by`](Collection::group_by), [`merge`](Collection::merge) and
//!   friends.
//!
//! ## Examples
//!
//! ```rust
//! use keyed_collection::{collection, Value};
//!
//! let fruits = collection!(["apple", "pear", "orange"]);
//!
//! let with_p = fruits
//!     .filter(|fruit, _| fruit.as_str().map_or(false, |f| f.contains('p')))
//!     .map(|fruit, _| format!("{}s", fruit));
//!
//! assert_eq!(with_p.all(), vec![Value::from("apples"), Value::from("pears")]);
//! ```
//!
//! ## External Iteration
//!
//! Besides native iteration over `&Collection`, every collection carries a
//! cursor for step-wise consumption. Transformations never read or move it.
//!
//! ```rust
//! use keyed_collection::{collection, Key, Value};
//!
//! let mut c = collection!({"a": 1, "b": 2});
//! assert_eq!(c.current(), Some(&Value::from(1)));
//! c.next();
//! assert_eq!(c.key(), Some(&Key::from("b")));
//! c.next();
//! assert!(!c.valid());
//! c.rewind();
//! assert!(c.valid());
//! ```

use crate::accessor::resolve;
use crate::{Key, SortOptions, Value, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::debug;

/// Depth used by [`Collection::flatten`].
pub const DEFAULT_FLATTEN_DEPTH: usize = 500;

/// An ordered, key-preserving container of [`Value`]s.
///
/// Equality compares the stored entries only; the iteration cursor is ignored.
/// The cursor is an index into the entries, so reordering them moves what it sees.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    data: ValueMap,
    cursor: usize,
}

impl Collection {
    /// Creates a collection over `initial`, with the cursor on its first entry.
    #[must_use]
    pub fn new(initial: ValueMap) -> Self {
        Collection {
            data: initial,
            cursor: 0,
        }
    }

    /// Creates an empty collection.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(ValueMap::new())
    }

    /// The backing map.
    #[inline]
    #[must_use]
    pub fn data(&self) -> &ValueMap {
        &self.data
    }

    /// Consumes the collection and returns its backing map as is.
    #[must_use]
    pub fn into_data(self) -> ValueMap {
        self.data
    }

    /// Iterates over `(key, value)` pairs in order, independently of the cursor.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.data.iter()
    }

    // Inspection

    /// Returns the values in order, discarding keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Value};
    ///
    /// let c = collection!({"a": 1, "b": 2});
    /// assert_eq!(c.all(), vec![Value::from(1), Value::from(2)]);
    /// ```
    #[must_use]
    pub fn all(&self) -> Vec<Value> {
        self.data.values().cloned().collect()
    }

    /// Projects the collection onto plain nested data.
    ///
    /// Values that are collections are expanded through their own
    /// `to_array`, so nested collections turn into nested arrays all the way
    /// down. Every other value is copied unchanged.
    #[must_use]
    pub fn to_array(&self) -> ValueMap {
        self.data
            .iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::Collection(nested) => Value::Array(nested.to_array()),
                    other => other.clone(),
                };
                (key.clone(), value)
            })
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_not_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns `true` if some value is strictly equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::collection;
    ///
    /// let c = collection!(["apple", 1]);
    /// assert!(c.contains("apple"));
    /// assert!(!c.contains(1.0));
    /// ```
    #[must_use]
    pub fn contains<V>(&self, value: V) -> bool
    where
        V: Into<Value>,
    {
        let needle = value.into();
        self.data.values().any(|item| *item == needle)
    }

    /// Returns `true` if `key` is present. This looks at keys, never values.
    #[must_use]
    pub fn has<K>(&self, key: K) -> bool
    where
        K: Into<Key>,
    {
        self.data.contains_key(&key.into())
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get<K>(&self, key: K) -> Option<&Value>
    where
        K: Into<Key>,
    {
        self.data.get(&key.into())
    }

    /// Returns the value stored under `key`, or `default` when it is missing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Value};
    ///
    /// let c = collection!({"a": "apple"});
    /// assert_eq!(c.get_or("a", Value::Null), Value::from("apple"));
    /// assert_eq!(c.get_or("banana", "apple"), Value::from("apple"));
    /// ```
    #[must_use]
    pub fn get_or<K, V>(&self, key: K, default: V) -> Value
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.get(key).cloned().unwrap_or_else(|| default.into())
    }

    /// Returns a new list of the keys, as values.
    #[must_use]
    pub fn keys(&self) -> Collection {
        self.data.keys().map(Key::to_value).collect()
    }

    /// The first value in insertion order.
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.data.get_index(0).map(|(_, value)| value)
    }

    /// Keeps the first occurrence of each distinct value, re-indexed from 0.
    ///
    /// Distinct means not strictly equal, so `1` and `1.0` both survive.
    #[must_use]
    pub fn unique(&self) -> Collection {
        let mut seen: Vec<&Value> = Vec::with_capacity(self.count());
        for value in self.data.values() {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen.into_iter().cloned().collect()
    }

    // In-place mutation

    /// Appends `value` under the next integer key. Nothing is appended once
    /// `i64::MAX` has been used as a key.
    pub fn push<V>(&mut self, value: V) -> &mut Self
    where
        V: Into<Value>,
    {
        self.data.push(value.into());
        self
    }

    /// Inserts or overwrites the entry at `key`. Existing keys keep their position.
    pub fn put<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<Key>,
        V: Into<Value>,
    {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Sorts the values in natural ascending order and re-indexes from 0.
    pub fn sort(&mut self) -> &mut Self {
        self.sort_with(SortOptions::new())
    }

    /// Sorts the values in natural descending order and re-indexes from 0.
    pub fn rsort(&mut self) -> &mut Self {
        self.sort_with(SortOptions::new().descending())
    }

    /// Sorts the values as configured by `options` and re-indexes from 0.
    ///
    /// The sort is stable.
    pub fn sort_with(&mut self, options: SortOptions) -> &mut Self {
        let mut values: Vec<Value> = std::mem::take(&mut self.data)
            .into_iter()
            .map(|(_, value)| value)
            .collect();
        values.sort_by(|a, b| options.compare(a, b));
        self.data = ValueMap::list(values);
        self
    }

    // Transformations

    /// Builds a list of `callback(value, key)` results, re-indexed from 0.
    #[must_use]
    pub fn map<F, R>(&self, mut callback: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.data
            .iter()
            .map(|(key, value)| -> Value { callback(value, key).into() })
            .collect()
    }

    /// [`map`](Self::map) with an optional callback; `None` yields an equal copy.
    #[must_use]
    pub fn map_opt<F, R>(&self, callback: Option<F>) -> Collection
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        match callback {
            Some(callback) => self.map(callback),
            None => {
                debug!("map without a callback, returning the collection unchanged");
                self.clone()
            }
        }
    }

    /// Keeps the entries for which `callback` returns exactly `true`.
    ///
    /// Original keys are preserved. Results that are merely truthy, such as
    /// a non-empty string, reject the entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Key, Value};
    ///
    /// let c = collection!(["apple", "pear", "orange"]);
    ///
    /// let kept = c.filter(|v, _| v.as_str().map_or(false, |s| s.len() > 4));
    /// assert_eq!(kept.keys().all(), vec![Value::from(0), Value::from(2)]);
    ///
    /// let none = c.filter(|v, _| v.clone());
    /// assert!(none.is_empty());
    /// ```
    #[must_use]
    pub fn filter<F, R>(&self, mut callback: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        self.data
            .iter()
            .filter(|&(key, value)| {
                let verdict: Value = callback(value, key).into();
                matches!(verdict, Value::Bool(true))
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// [`filter`](Self::filter) with an optional callback; `None` yields an equal copy.
    #[must_use]
    pub fn filter_opt<F, R>(&self, callback: Option<F>) -> Collection
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        match callback {
            Some(callback) => self.filter(callback),
            None => {
                debug!("filter without a callback, returning the collection unchanged");
                self.clone()
            }
        }
    }

    /// Calls `callback` on every entry in order.
    ///
    /// Iteration stops as soon as a call returns exactly `false`; any other
    /// result, including `()` or null, continues.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::collection;
    ///
    /// let mut seen = Vec::new();
    /// collection!([1, 2, 3]).each(|v, _| {
    ///     seen.push(v.clone());
    ///     seen.len() < 2
    /// });
    /// assert_eq!(seen.len(), 2);
    /// ```
    pub fn each<F, R>(&self, mut callback: F) -> &Self
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        for (key, value) in self.data.iter() {
            let verdict: Value = callback(value, key).into();
            if matches!(verdict, Value::Bool(false)) {
                break;
            }
        }
        self
    }

    /// [`each`](Self::each) with an optional callback; `None` does nothing.
    pub fn each_opt<F, R>(&self, callback: Option<F>) -> &Self
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        match callback {
            Some(callback) => self.each(callback),
            None => {
                debug!("each without a callback, nothing to do");
                self
            }
        }
    }

    /// Flattens nested arrays and collections up to [`DEFAULT_FLATTEN_DEPTH`] levels.
    #[must_use]
    pub fn flatten(&self) -> Collection {
        self.flatten_depth(DEFAULT_FLATTEN_DEPTH)
    }

    /// Flattens nested arrays and collections into a single list.
    ///
    /// A depth of `1` splices nested values one level deep; larger depths
    /// recurse one level less each time. Keys are discarded at every level.
    /// A depth of `0` places no limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, value, Value};
    ///
    /// let c = collection!(["a", ["b", ["c", ["d"]]]]);
    ///
    /// assert_eq!(
    ///     c.flatten_depth(1).all(),
    ///     vec![Value::from("a"), Value::from("b"), value!(["c", ["d"]])]
    /// );
    /// assert_eq!(c.flatten().count(), 4);
    /// ```
    #[must_use]
    pub fn flatten_depth(&self, depth: usize) -> Collection {
        let mut result = ValueMap::new();

        for item in self.data.values() {
            let nested = match item {
                Value::Collection(collection) => ValueMap::list(collection.all()),
                Value::Array(map) => map.clone(),
                other => {
                    result.push(other.clone());
                    continue;
                }
            };

            if depth == 1 {
                for (_, value) in nested {
                    result.push(value);
                }
            } else {
                let flattened = Collection::new(nested).flatten_depth(depth.saturating_sub(1));
                for (_, value) in flattened.to_array() {
                    result.push(value);
                }
            }
        }

        Collection::new(result)
    }

    /// Collects the field `name` of every item, dropping nulls, re-indexed from 0.
    ///
    /// Fields are resolved as described in [`accessor`](crate::accessor).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Value};
    ///
    /// let c = collection!(["a", {"name": "d"}, {"name": "e"}]);
    /// assert_eq!(c.pluck("name").all(), vec![Value::from("d"), Value::from("e")]);
    /// ```
    #[must_use]
    pub fn pluck(&self, name: &str) -> Collection {
        if self.is_empty() {
            return Collection::empty();
        }

        self.data
            .values()
            .map(|item| resolve(item, name))
            .filter(|value| !value.is_null())
            .collect()
    }

    /// Collects the field `name` of every item under the item's field `key`.
    ///
    /// Only items whose `key` field is a string or a number take part. Null
    /// plucked values are dropped after all items have been stored, so a
    /// later null can erase an earlier value under the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Value};
    ///
    /// let users = collection!([
    ///     {"id": 7, "name": "ada"},
    ///     {"id": "x", "name": "bob"},
    ///     {"id": [1], "name": "eve"}
    /// ]);
    ///
    /// let names = users.pluck_keyed("name", "id");
    /// assert_eq!(names.get(7), Some(&Value::from("ada")));
    /// assert_eq!(names.get("x"), Some(&Value::from("bob")));
    /// assert_eq!(names.count(), 2);
    /// ```
    #[must_use]
    pub fn pluck_keyed(&self, name: &str, key: &str) -> Collection {
        if self.is_empty() {
            return Collection::empty();
        }

        let mut result = ValueMap::with_capacity(self.count());
        for item in self.data.values() {
            let derived = resolve(item, key);
            if !(derived.is_string() || derived.is_number()) {
                debug!(
                    key,
                    found = derived.type_name(),
                    "pluck skipped an item without a scalar key"
                );
                continue;
            }
            if let Some(key) = Key::from_value(&derived) {
                result.insert(key, resolve(item, name));
            }
        }

        result
            .into_iter()
            .filter(|(_, value)| !value.is_null())
            .collect()
    }

    /// Re-keys the items by their field `name`.
    ///
    /// Later items overwrite earlier ones that derive the same key.
    #[must_use]
    pub fn key_by(&self, name: &str) -> Collection {
        self.key_by_fn(|item, _| resolve(item, name))
    }

    /// Re-keys the items by `selector(value, key)`.
    ///
    /// Selector results are turned into keys with [`Key::from_value`]; items
    /// whose result cannot be a key are skipped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Value};
    ///
    /// let c = collection!(["apple", "avocado", "pear"]);
    /// let by_initial = c.key_by_fn(|v, _| v.as_str().and_then(|s| s.get(..1)).map(String::from));
    ///
    /// assert_eq!(by_initial.count(), 2);
    /// assert_eq!(by_initial.get("a"), Some(&Value::from("avocado")));
    /// ```
    #[must_use]
    pub fn key_by_fn<F, R>(&self, mut selector: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        let mut result = ValueMap::with_capacity(self.count());
        for (key, value) in self.data.iter() {
            let derived: Value = selector(value, key).into();
            match Key::from_value(&derived) {
                Some(new_key) => {
                    result.insert(new_key, value.clone());
                }
                None => debug!(
                    %key,
                    found = derived.type_name(),
                    "key_by skipped an item with a non-scalar key"
                ),
            }
        }
        Collection::new(result)
    }

    /// Buckets the items into nested collections keyed by their field `name`.
    #[must_use]
    pub fn group_by(&self, name: &str) -> Collection {
        self.group_by_fn(|item, _| resolve(item, name))
    }

    /// Buckets the items into nested collections keyed by `selector(value, key)`.
    ///
    /// Each group lives under the string form of its selector result and
    /// keeps its items in encounter order. Items whose result is null, or
    /// not a scalar, are pushed ungrouped at the next integer key of the
    /// result, so they share the key sequence with integer-like group names.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Key};
    ///
    /// let c = collection!([
    ///     {"key": "me", "some": "thing"},
    ///     "banana",
    ///     {"key": "me", "thing": "some"}
    /// ]);
    /// let groups = c.group_by("key");
    ///
    /// let keys: Vec<Key> = groups.data().keys().cloned().collect();
    /// assert_eq!(keys, vec![Key::from("me"), Key::Int(0)]);
    /// assert_eq!(groups.get("me").and_then(|g| g.as_collection()).map(|g| g.count()), Some(2));
    /// ```
    #[must_use]
    pub fn group_by_fn<F, R>(&self, mut selector: F) -> Collection
    where
        F: FnMut(&Value, &Key) -> R,
        R: Into<Value>,
    {
        let mut result = ValueMap::new();

        for (key, item) in self.data.iter() {
            let group: Value = selector(item, key).into();
            let group_key = if group.is_null() {
                None
            } else {
                let name = group.scalar_string();
                if name.is_none() {
                    debug!(
                        %key,
                        found = group.type_name(),
                        "group_by left an item with a non-scalar group ungrouped"
                    );
                }
                name.map(Key::from)
            };

            let Some(group_key) = group_key else {
                result.push(item.clone());
                continue;
            };

            match result.get_mut(&group_key) {
                Some(Value::Collection(bucket)) => {
                    bucket.push(item.clone());
                }
                _ => {
                    let mut bucket = Collection::empty();
                    bucket.push(item.clone());
                    result.insert(group_key, Value::from(bucket));
                }
            }
        }

        Collection::new(result)
    }

    /// Shallow union with `other`.
    ///
    /// Integer keys from both sides are renumbered in sequence, so list-like
    /// data is concatenated. String keys from `other` overwrite the
    /// receiver's in place. `other` contributes its [`to_array`](Self::to_array)
    /// projection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, Value};
    ///
    /// let first = collection!(["apple", "pear"]);
    /// let second = collection!(["orange"]);
    ///
    /// assert_eq!(first.merge(&second).all().len(), 3);
    /// assert_eq!(second.merge(&first).first(), Some(&Value::from("orange")));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Collection) -> Collection {
        let mut result = ValueMap::with_capacity(self.count() + other.count());
        for (key, value) in self.data.iter() {
            append_or_overwrite(&mut result, key.clone(), value.clone());
        }
        for (key, value) in other.to_array() {
            append_or_overwrite(&mut result, key, value);
        }
        Collection::new(result)
    }

    /// Deep union with `other`.
    ///
    /// Integer keys are appended. When both sides hold a string key, nested
    /// arrays or collections are merged recursively; otherwise both values
    /// are gathered into an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{collection, value};
    ///
    /// let first = collection!({"a": {"fruits": ["apple"], "color": "red"}});
    /// let second = collection!({"a": {"fruits": ["ananas"], "color": "yellow"}});
    ///
    /// assert_eq!(
    ///     first.merge_recursive(&second).get("a"),
    ///     Some(&value!({"fruits": ["apple", "ananas"], "color": ["red", "yellow"]}))
    /// );
    /// ```
    #[must_use]
    pub fn merge_recursive(&self, other: &Collection) -> Collection {
        let mut result = ValueMap::with_capacity(self.count() + other.count());
        for (key, value) in self.data.iter() {
            append_or_overwrite(&mut result, key.clone(), value.clone());
        }
        merge_recursive_into(&mut result, other.to_array());
        Collection::new(result)
    }

    // External iteration

    /// The value under the cursor, or `None` once the cursor is exhausted.
    ///
    /// The cursor is a position into the live entries, not a handle on one
    /// entry. After [`sort`](Self::sort) it points at whatever now sits at that
    /// position, and [`put`](Self::put) or [`push`](Self::push) on an exhausted
    /// cursor makes the new entry current.
    #[must_use]
    pub fn current(&self) -> Option<&Value> {
        self.data.get_index(self.cursor).map(|(_, value)| value)
    }

    /// The key under the cursor. Follows the same positional rules as [`current`](Self::current).
    #[must_use]
    pub fn key(&self) -> Option<&Key> {
        self.data.get_index(self.cursor).map(|(key, _)| key)
    }

    /// Advances the cursor by one entry.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.cursor < self.data.len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor back to the first entry.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Returns `true` while the cursor points at an entry.
    #[must_use]
    pub fn valid(&self) -> bool {
        self.cursor < self.data.len()
    }
}

/// Integer keys are appended at the next index, string keys are inserted or overwritten.
fn append_or_overwrite(map: &mut ValueMap, key: Key, value: Value) {
    match key {
        Key::Int(_) => {
            map.push(value);
        }
        Key::Str(_) => {
            map.insert(key, value);
        }
    }
}

fn merge_recursive_into(dest: &mut ValueMap, src: ValueMap) {
    for (key, value) in src {
        if key.is_int() {
            dest.push(value);
            continue;
        }

        let Some(existing) = dest.get_mut(&key) else {
            dest.insert(key, value);
            continue;
        };

        let mut combined = match std::mem::take(existing) {
            Value::Null => ValueMap::new(),
            Value::Array(map) => map,
            Value::Collection(collection) => collection.to_array(),
            scalar => ValueMap::list(vec![scalar]),
        };
        match value {
            Value::Array(map) => merge_recursive_into(&mut combined, map),
            Value::Collection(collection) => merge_recursive_into(&mut combined, collection.to_array()),
            scalar => {
                combined.push(scalar);
            }
        }
        *existing = Value::Array(combined);
    }
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::value::write_map(f, &self.data)
    }
}

impl Serialize for Collection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::value::serialize_map(&self.data, serializer)
    }
}

impl<'de> Deserialize<'de> for Collection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        ValueMap::deserialize(deserializer).map(Collection::new)
    }
}

impl From<ValueMap> for Collection {
    fn from(data: ValueMap) -> Self {
        Collection::new(data)
    }
}

impl From<Vec<Value>> for Collection {
    fn from(values: Vec<Value>) -> Self {
        Collection::new(ValueMap::list(values))
    }
}

impl FromIterator<Value> for Collection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Collection::new(ValueMap::list(iter))
    }
}

impl FromIterator<(Key, Value)> for Collection {
    fn from_iter<T: IntoIterator<Item = (Key, Value)>>(iter: T) -> Self {
        Collection::new(iter.into_iter().collect())
    }
}

impl Extend<Value> for Collection {
    fn extend<T: IntoIterator<Item = Value>>(&mut self, iter: T) {
        for value in iter {
            self.data.push(value);
        }
    }
}

impl IntoIterator for Collection {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
