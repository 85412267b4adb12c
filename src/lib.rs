//! # keyed_collection
//!
//! An ordered, key-preserving collection of dynamic values with a fluent
//! toolkit for filtering, mapping, grouping, plucking, sorting and merging.
//!
//! ## What is a Collection?
//!
//! A [`Collection`] wraps a [`ValueMap`]: an insertion-ordered map whose keys
//! are either integers or strings. Integer-like string keys such as `"7"` are
//! normalized to integers, and appending without a key uses the next integer
//! after the largest one ever inserted, so list data and keyed records share
//! one container.
//!
//! ## Key Features
//!
//! - **Order Preserving**: Every operation keeps insertion order unless it sorts
//! - **Key Normalization**: `"5"` and `5` address the same entry
//! - **Field Access**: Items can be arrays, nested collections or user objects
//!   implementing [`FieldAccessible`]
//! - **Serde Compatible**: Convert any `T: Serialize` into a [`Value`] and back
//!
//! ## Quick Start
//!
//! ```rust
//! use keyed_collection::collection;
//!
//! let people = collection!([
//!     {"name": "Alice", "team": "core"},
//!     {"name": "Bob", "team": "web"},
//!     {"name": "Carol", "team": "core"}
//! ]);
//!
//! let names = people.pluck("name");
//! assert_eq!(names, collection!(["Alice", "Bob", "Carol"]));
//!
//! let teams = people.group_by("team");
//! assert_eq!(teams.keys(), collection!(["core", "web"]));
//! ```
//!
//! ### Dynamic Values with value! Macro
//!
//! ```rust
//! use keyed_collection::{value, Key, Value};
//!
//! let data = value!({
//!     "name": "Alice",
//!     "age": 30,
//!     "tags": ["rust", "serde"]
//! });
//!
//! if let Value::Array(map) = data {
//!     assert_eq!(map.get(&Key::from("name")).and_then(|v| v.as_str()), Some("Alice"));
//! }
//! ```
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`basics.rs`** - Building collections and reading entries
//! - **`grouping.rs`** - group_by, key_by and pluck over records
//! - **`dynamic_values.rs`** - Objects exposing fields and getters
//!
//! Run any example with: `cargo run --example <name>`

pub mod accessor;
pub mod collection;
pub mod de;
pub mod error;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

pub use accessor::FieldAccessible;
pub use collection::{Collection, DEFAULT_FLATTEN_DEPTH};
pub use de::ValueDeserializer;
pub use error::{Error, Result};
pub use key::Key;
pub use map::ValueMap;
pub use options::{SortFlag, SortOptions, SortOrder};
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Convert any `T: Serialize` to a [`Value`].
///
/// Structs and maps become keyed arrays, sequences become lists.
///
/// # Examples
///
/// ```rust
/// use keyed_collection::{to_value, Collection};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let points = vec![Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
/// let value = to_value(&points).unwrap();
/// let collection = Collection::from(value.as_array().cloned().unwrap());
/// assert_eq!(collection.pluck("x").count(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented, for example a map
/// whose keys are not scalars.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Deserialize an instance of type `T` from a [`Value`].
///
/// # Examples
///
/// ```rust
/// use keyed_collection::{from_value, value};
/// use serde::Deserialize;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_value(value!({"x": 1, "y": 2})).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the value does not have the shape `T` expects or
/// contains object values.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(ValueDeserializer::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    #[test]
    fn test_to_value_point() {
        let value = to_value(&Point { x: 1, y: 2 }).unwrap();

        match value {
            Value::Array(map) => {
                assert_eq!(map.get(&Key::from("x")), Some(&Value::Number(Number::Integer(1))));
                assert_eq!(map.get(&Key::from("y")), Some(&Value::Number(Number::Integer(2))));
            }
            _ => panic!("Expected array"),
        }
    }

    #[test]
    fn test_user_roundtrip() {
        let user = User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        };

        let value = to_value(&user).unwrap();
        let user_back: User = from_value(value).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_collection_roundtrip_through_value() {
        let collection = collection!({"a": 1, "b": [1, 2]});
        let value = to_value(&collection).unwrap();
        let back: Collection = from_value(value).unwrap();
        assert_eq!(back, collection);
    }

    #[test]
    fn test_arrays() {
        let numbers = vec![1, 2, 3, 4, 5];
        let value = to_value(&numbers).unwrap();
        assert!(value.as_array().map_or(false, ValueMap::is_list));
        let numbers_back: Vec<i32> = from_value(value).unwrap();
        assert_eq!(numbers, numbers_back);
    }

    #[test]
    fn test_objects_do_not_deserialize() {
        #[derive(Debug)]
        struct Opaque;
        impl FieldAccessible for Opaque {}

        let result: Result<Point> = from_value(Value::object(Opaque));
        assert!(matches!(result, Err(Error::UnsupportedType(_))));
    }
}
