//! Field lookup by name.
//!
//! [`pluck`](crate::Collection::pluck), [`key_by`](crate::Collection::key_by)
//! and [`group_by`](crate::Collection::group_by) read a named field out of each
//! item. For arrays and nested collections that is a key lookup. Object values
//! opt in through [`FieldAccessible`], which exposes zero-argument methods and
//! readable fields by name.
//!
//! Lookup of `name` on an object tries, in order:
//!
//! 1. a method called `name`,
//! 2. a getter called `get` + `name` with its first letter upper-cased,
//! 3. a field called `name`.
//!
//! Anything unresolved reads as [`Value::Null`].
//!
//! ```rust
//! use keyed_collection::{FieldAccessible, Value};
//!
//! #[derive(Debug)]
//! struct User {
//!     name: String,
//! }
//!
//! impl FieldAccessible for User {
//!     fn call(&self, method: &str) -> Option<Value> {
//!         match method {
//!             "getName" => Some(Value::from(self.name.as_str())),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let user = Value::object(User { name: "chindit".to_string() });
//! assert_eq!(keyed_collection::accessor::resolve(&user, "name"), Value::from("chindit"));
//! ```

use crate::{Key, Value};
use std::fmt;

/// Capability of object-like values to expose methods and fields by name.
///
/// Both hooks default to "not found", so implementors only override what
/// they actually expose.
pub trait FieldAccessible: fmt::Debug {
    /// Invokes the zero-argument method `method`, if there is one.
    fn call(&self, method: &str) -> Option<Value> {
        let _ = method;
        None
    }

    /// Reads the field `name`, if there is one.
    fn property(&self, name: &str) -> Option<Value> {
        let _ = name;
        None
    }
}

/// Reads the field `name` from `item`, or [`Value::Null`] when it cannot be resolved.
#[must_use]
pub fn resolve(item: &Value, name: &str) -> Value {
    match item {
        Value::Array(map) => map.get(&Key::from(name)).cloned().unwrap_or_default(),
        Value::Collection(collection) => collection.get(name).cloned().unwrap_or_default(),
        Value::Object(object) => object
            .call(name)
            .or_else(|| object.call(&getter_name(name)))
            .or_else(|| object.property(name))
            .unwrap_or_default(),
        _ => Value::Null,
    }
}

fn getter_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => format!("get{}{}", first.to_ascii_uppercase(), chars.as_str()),
        None => "get".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueMap;

    #[derive(Debug)]
    struct Both;

    impl FieldAccessible for Both {
        fn call(&self, method: &str) -> Option<Value> {
            match method {
                "name" => Some(Value::from("method")),
                "getName" => Some(Value::from("getter")),
                _ => None,
            }
        }

        fn property(&self, name: &str) -> Option<Value> {
            (name == "name" || name == "size").then(|| Value::from("field"))
        }
    }

    #[test]
    fn test_method_wins_over_getter_and_field() {
        assert_eq!(resolve(&Value::object(Both), "name"), Value::from("method"));
    }

    #[test]
    fn test_field_is_last_resort() {
        assert_eq!(resolve(&Value::object(Both), "size"), Value::from("field"));
        assert_eq!(resolve(&Value::object(Both), "missing"), Value::Null);
    }

    #[test]
    fn test_array_lookup_normalizes_key() {
        let map = ValueMap::list(vec![Value::from("zero"), Value::from("one")]);
        assert_eq!(resolve(&Value::Array(map), "1"), Value::from("one"));
    }

    #[test]
    fn test_scalars_resolve_to_null() {
        assert_eq!(resolve(&Value::from("banana"), "key"), Value::Null);
        assert_eq!(resolve(&Value::Null, "key"), Value::Null);
    }

    #[test]
    fn test_getter_name() {
        assert_eq!(getter_name("name"), "getName");
        assert_eq!(getter_name(""), "get");
    }
}
