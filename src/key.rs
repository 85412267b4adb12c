//! Keys of a [`ValueMap`](crate::ValueMap).
//!
//! A key is either an integer index or a string. Strings that spell a canonical
//! decimal integer are folded into [`Key::Int`] on conversion, so `"5"` and `5`
//! always address the same entry:
//!
//! ```rust
//! use keyed_collection::Key;
//!
//! assert_eq!(Key::from("5"), Key::Int(5));
//! assert_eq!(Key::from("05"), Key::Str("05".to_string()));
//! assert_eq!(Key::from("name"), Key::Str("name".to_string()));
//! ```

use crate::{Number, Value};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A map key: an integer index or a dictionary-style string.
///
/// Build keys through the `From` conversions rather than the `Str` variant
/// directly; the conversions keep integer-looking strings normalized.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    /// Returns `true` for integer keys.
    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Key::Int(_))
    }

    /// Returns `true` for string keys.
    #[inline]
    #[must_use]
    pub const fn is_str(&self) -> bool {
        matches!(self, Key::Str(_))
    }

    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(i) => Some(*i),
            Key::Str(_) => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Str(s) => Some(s),
            Key::Int(_) => None,
        }
    }

    /// Derives a key from a scalar value.
    ///
    /// Integers map to themselves, floats are truncated, strings are
    /// normalized, booleans become `0`/`1` and null becomes the empty string.
    /// Arrays, collections and objects cannot be keys and yield `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::{Key, Value};
    ///
    /// assert_eq!(Key::from_value(&Value::from(2.9)), Some(Key::Int(2)));
    /// assert_eq!(Key::from_value(&Value::from("12")), Some(Key::Int(12)));
    /// assert_eq!(Key::from_value(&Value::Bool(true)), Some(Key::Int(1)));
    /// assert_eq!(Key::from_value(&Value::Null), Some(Key::Str(String::new())));
    /// assert_eq!(Key::from_value(&Value::array(vec![])), None);
    /// ```
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::Null => Some(Key::Str(String::new())),
            Value::Bool(b) => Some(Key::Int(i64::from(*b))),
            Value::Number(Number::Integer(i)) => Some(Key::Int(*i)),
            Value::Number(Number::Float(f)) => {
                if f.is_finite() {
                    Some(Key::Int(f.trunc() as i64))
                } else {
                    Some(Key::Int(0))
                }
            }
            Value::String(s) => Some(Key::from(s.as_str())),
            Value::Array(_) | Value::Collection(_) | Value::Object(_) => None,
        }
    }

    /// Converts the key back into a value: integers become numbers, strings stay strings.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Key::Int(i) => Value::Number(Number::Integer(*i)),
            Key::Str(s) => Value::String(s.clone()),
        }
    }
}

/// Parses `s` as an integer key when it is written canonically: an optional
/// minus sign, no leading zeros, no `+`, no whitespace, and no `-0`.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    let bytes = digits.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes[0] == b'0' && (bytes.len() > 1 || digits.len() != s.len()) {
        return None;
    }
    s.parse::<i64>().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{}", i),
            Key::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        match canonical_int(value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        match canonical_int(&value) {
            Some(i) => Key::Int(i),
            None => Key::Str(value),
        }
    }
}

impl From<&String> for Key {
    fn from(value: &String) -> Self {
        Key::from(value.as_str())
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<u32> for Key {
    fn from(value: u32) -> Self {
        Key::Int(i64::from(value))
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Int(value as i64)
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Key::Int(i) => serializer.serialize_i64(*i),
            Key::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or string key")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Key, E> {
                Ok(Key::Int(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Key, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Key::Int)
                    .map_err(|_| E::custom(format!("integer key {} out of range", value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Key, E> {
                Ok(Key::from(value))
            }

            fn visit_string<E>(self, value: String) -> Result<Key, E> {
                Ok(Key::from(value))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
