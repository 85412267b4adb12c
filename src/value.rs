//! Dynamic value representation.
//!
//! This module provides the [`Value`] enum, the element type stored in every
//! [`Collection`]. A value can be a scalar, a plain keyed array, a nested
//! collection, or an object-like value that exposes fields by name through the
//! [`FieldAccessible`](crate::FieldAccessible) capability.
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, array, collection or object
//! - [`Number`]: an integer or a float, kept apart so `1` and `1.0` stay distinct
//!
//! ## Creating Values
//!
//! ```rust
//! use keyed_collection::{value, Value};
//!
//! let null = Value::Null;
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! let fruit = value!({
//!     "name": "apple",
//!     "tags": ["red", "sweet"]
//! });
//! assert!(fruit.is_array());
//! ```
//!
//! ## Equality and Ordering
//!
//! `==` is strict: the variants must match, so `Value::from(1) != Value::from(1.0)`,
//! arrays must hold the same entries in the same order, and objects are equal
//! only to themselves. Sorting uses [`Value::natural_cmp`], a total order that
//! ranks by type first and then by content.

use crate::{Collection, FieldAccessible, Key, ValueMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

/// A dynamically-typed value held by a [`Collection`].
///
/// # Examples
///
/// ```rust
/// use keyed_collection::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// assert!(Value::Null.is_null());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(ValueMap),
    Collection(Box<Collection>),
    Object(Rc<dyn FieldAccessible>),
}

/// A numeric value: an integer or a float.
///
/// # Examples
///
/// ```rust
/// use keyed_collection::Number;
///
/// let integer = Number::Integer(42);
/// let float = Number::Float(3.5);
///
/// assert!(integer.is_integer());
/// assert_eq!(integer.as_i64(), Some(42));
/// assert_eq!(float.as_f64(), 3.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some(i64)` for integers and for floats with no fractional part
    /// that fit in i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    /// Exact numeric comparison. `-0.0` equals `0.0`; NaNs sort outside
    /// every real number according to their sign bit.
    fn cmp_numeric(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => a.cmp(b),
            (Number::Integer(a), Number::Float(b)) => cmp_int_float(*a, *b),
            (Number::Float(a), Number::Integer(b)) => cmp_int_float(*b, *a).reverse(),
            (Number::Float(a), Number::Float(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
            }
        }
    }
}

/// 2^63, the first float above every `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= I64_UPPER {
        return Ordering::Less;
    }
    if f < -I64_UPPER {
        return Ordering::Greater;
    }

    // In range, so the truncation converts exactly.
    let whole = f.trunc();
    i.cmp(&(whole as i64)).then_with(|| {
        let fraction = f - whole;
        if fraction > 0.0 {
            Ordering::Less
        } else if fraction < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl Value {
    /// Builds a list-shaped array with keys `0..n`.
    #[must_use]
    pub fn array<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Array(ValueMap::list(values))
    }

    /// Wraps an object-like value.
    #[must_use]
    pub fn object<T>(object: T) -> Self
    where
        T: FieldAccessible + 'static,
    {
        Value::Object(Rc::new(object))
    }

    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a plain array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a nested collection.
    #[inline]
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Value::Collection(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` for null, booleans, numbers and strings.
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(
            self,
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_)
        )
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&ValueMap> {
        match self {
            Value::Array(map) => Some(map),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Value::Collection(c) => Some(c),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Rc<dyn FieldAccessible>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(Number::Integer(_)) => "integer",
            Value::Number(Number::Float(_)) => "float",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Collection(_) => "collection",
            Value::Object(_) => "object",
        }
    }

    /// The string form of a scalar: `true` is `"1"`, `false` and null are `""`.
    ///
    /// Arrays, collections and objects have no string form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Value;
    ///
    /// assert_eq!(Value::from(2.0).scalar_string().as_deref(), Some("2"));
    /// assert_eq!(Value::Bool(true).scalar_string().as_deref(), Some("1"));
    /// assert_eq!(Value::array(vec![]).scalar_string(), None);
    /// ```
    #[must_use]
    pub fn scalar_string(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::Bool(true) => Some("1".to_string()),
            Value::Bool(false) => Some(String::new()),
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Array(_) | Value::Collection(_) | Value::Object(_) => None,
        }
    }

    /// Numeric projection used by numeric sorting.
    ///
    /// Strings contribute their leading numeric prefix (or `0`), containers
    /// count as `1` when non-empty.
    #[must_use]
    pub fn numeric_projection(&self) -> f64 {
        match self {
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) => n.as_f64(),
            Value::String(s) => leading_number(s),
            Value::Array(map) => f64::from(u8::from(!map.is_empty())),
            Value::Collection(c) => f64::from(u8::from(c.is_not_empty())),
            Value::Object(_) => 1.0,
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Number(_) => 2,
            Value::String(_) => 3,
            Value::Array(_) => 4,
            Value::Collection(_) => 5,
            Value::Object(_) => 6,
        }
    }

    /// Total "natural" order over values.
    ///
    /// Values of different types are ordered by type (null, bool, number,
    /// string, array, collection, object). Numbers compare numerically,
    /// strings lexically, arrays and collections by length and then
    /// entry by entry. Objects all compare equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keyed_collection::Value;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(Value::from(2).natural_cmp(&Value::from(10)), Ordering::Less);
    /// assert_eq!(Value::from(2.5).natural_cmp(&Value::from(2)), Ordering::Greater);
    /// assert_eq!(Value::from("b").natural_cmp(&Value::from("a")), Ordering::Greater);
    /// assert_eq!(Value::from(99).natural_cmp(&Value::from("1")), Ordering::Less);
    /// ```
    #[must_use]
    pub fn natural_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Null, Value::Null) => Ordering::Equal,
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Number(a), Value::Number(b)) => a.cmp_numeric(b),
            (Value::String(a), Value::String(b)) => a.cmp(b),
            (Value::Array(a), Value::Array(b)) => cmp_maps(a, b),
            (Value::Collection(a), Value::Collection(b)) => cmp_maps(a.data(), b.data()),
            (Value::Object(_), Value::Object(_)) => Ordering::Equal,
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

fn cmp_maps(a: &ValueMap, b: &ValueMap) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        a.iter()
            .zip(b.iter())
            .map(|((ka, va), (kb, vb))| ka.cmp(kb).then_with(|| va.natural_cmp(vb)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Parses the longest numeric prefix of `s` after leading whitespace.
fn leading_number(s: &str) -> f64 {
    let trimmed = s.trim_start();
    let mut end = 0;
    let mut best = 0.0;
    for (i, c) in trimmed.char_indices() {
        if !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')) {
            break;
        }
        end = i + c.len_utf8();
        if let Ok(parsed) = trimmed[..end].parse::<f64>() {
            best = parsed;
        }
    }
    if end == 0 {
        0.0
    } else {
        best
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Collection(a), Value::Collection(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => {
                Rc::as_ptr(a) as *const () == Rc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Array(map) => write_map(f, map),
            Value::Collection(c) => write_map(f, c.data()),
            Value::Object(_) => write!(f, "{{object}}"),
        }
    }
}

pub(crate) fn write_map(f: &mut fmt::Formatter<'_>, map: &ValueMap) -> fmt::Result {
    if map.is_list() {
        write!(f, "[")?;
        for (i, value) in map.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    } else {
        write!(f, "{{")?;
        for (i, (key, value)) in map.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

pub(crate) fn serialize_map<S>(map: &ValueMap, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if map.is_list() {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(map.len()))?;
        for element in map.values() {
            seq.serialize_element(element)?;
        }
        seq.end()
    } else {
        use serde::ser::SerializeMap;
        let mut state = serializer.serialize_map(Some(map.len()))?;
        for (k, v) in map.iter() {
            state.serialize_entry(k, v)?;
        }
        state.end()
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(map) => serialize_map(map, serializer),
            Value::Collection(c) => serialize_map(c.data(), serializer),
            Value::Object(obj) => Err(serde::ser::Error::custom(format!(
                "object values cannot be serialized: {:?}",
                obj
            ))),
        }
    }
}

impl Serialize for ValueMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_map(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                match i64::try_from(value) {
                    Ok(i) => Ok(Value::Number(Number::Integer(i))),
                    Err(_) => Ok(Value::Number(Number::Float(value as f64))),
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut map = ValueMap::new();
                while let Some(elem) = seq.next_element()? {
                    map.push(elem);
                }
                Ok(Value::Array(map))
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut map = ValueMap::new();
                while let Some((key, value)) = access.next_entry::<Key, Value>()? {
                    map.insert(key, value);
                }
                Ok(Value::Array(map))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for ValueMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(map) => Ok(map),
            other => Err(serde::de::Error::custom(format!(
                "expected array, found {}",
                other.type_name()
            ))),
        }
    }
}

// TryFrom implementations for extracting scalars from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| crate::Error::custom(format!("cannot convert float {} to i64", n))),
            other => Err(crate::Error::type_mismatch("integer", other.type_name())),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            other => Err(crate::Error::type_mismatch("number", other.type_name())),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(crate::Error::type_mismatch("bool", other.type_name())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(crate::Error::type_mismatch("string", other.type_name())),
        }
    }
}

// From implementations for creating Value from primitives
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(i64::from(value)))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        match i64::try_from(value) {
            Ok(i) => Value::Number(Number::Integer(i)),
            Err(_) => Value::Number(Number::Float(value as f64)),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::array(value)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Value::Array(value)
    }
}

impl From<Collection> for Value {
    fn from(value: Collection) -> Self {
        Value::Collection(Box::new(value))
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Marker;

    impl FieldAccessible for Marker {}

    #[test]
    fn test_strict_equality_separates_int_and_float() {
        assert_ne!(Value::from(1), Value::from(1.0));
        assert_ne!(Value::from("1"), Value::from(1));
        assert_eq!(Value::from(1), Value::from(1i64));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
    }

    #[test]
    fn test_objects_compare_by_identity() {
        let a = Value::object(Marker);
        let b = Value::object(Marker);
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
    }

    #[test]
    fn test_tryfrom_scalars() {
        assert_eq!(i64::try_from(Value::from(42)).unwrap(), 42);
        assert_eq!(i64::try_from(Value::from(42.0)).unwrap(), 42);
        assert!(i64::try_from(Value::from(4.2)).is_err());
        assert_eq!(f64::try_from(Value::from(3)).unwrap(), 3.0);
        assert!(bool::try_from(Value::from(1)).is_err());
        assert_eq!(String::try_from(Value::from("x")).unwrap(), "x");
    }

    #[test]
    fn test_natural_order_ranks_types() {
        let mut values = vec![
            Value::from("b"),
            Value::from(3),
            Value::Null,
            Value::Bool(true),
            Value::from(1.5),
            Value::from("a"),
        ];
        values.sort_by(Value::natural_cmp);
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Bool(true),
                Value::from(1.5),
                Value::from(3),
                Value::from("a"),
                Value::from("b"),
            ]
        );
    }

    #[test]
    fn test_integer_float_order_is_exact() {
        let two_53 = 1i64 << 53;
        let a = Value::from(two_53);
        let b = Value::from(two_53 as f64);
        let c = Value::from(two_53 + 1);

        assert_eq!(a.natural_cmp(&b), Ordering::Equal);
        assert_eq!(b.natural_cmp(&c), Ordering::Less);
        assert_eq!(c.natural_cmp(&b), Ordering::Greater);
        assert_eq!(a.natural_cmp(&c), Ordering::Less);

        assert_eq!(Value::from(i64::MAX).natural_cmp(&Value::from(i64::MAX as f64)), Ordering::Less);
        assert_eq!(Value::from(i64::MIN).natural_cmp(&Value::from(i64::MIN as f64)), Ordering::Equal);
        assert_eq!(Value::from(2).natural_cmp(&Value::from(2.5)), Ordering::Less);
        assert_eq!(Value::from(-2).natural_cmp(&Value::from(-2.5)), Ordering::Greater);
        assert_eq!(Value::from(0).natural_cmp(&Value::from(-0.0)), Ordering::Equal);
        assert_eq!(Value::from(0.0).natural_cmp(&Value::from(-0.0)), Ordering::Equal);
        assert_eq!(Value::from(i64::MAX).natural_cmp(&Value::from(f64::INFINITY)), Ordering::Less);
        assert_eq!(Value::from(i64::MIN).natural_cmp(&Value::from(f64::NEG_INFINITY)), Ordering::Greater);
        assert_eq!(Value::from(5).natural_cmp(&Value::from(f64::NAN)), Ordering::Less);
        assert_eq!(Value::from(f64::NAN).natural_cmp(&Value::from(f64::INFINITY)), Ordering::Greater);
    }

    #[test]
    fn test_numeric_order_is_transitive() {
        let two_53 = 1i64 << 53;
        let numbers = [
            Value::from(two_53 - 1),
            Value::from(two_53),
            Value::from(two_53 + 1),
            Value::from(two_53 as f64),
            Value::from((two_53 + 2) as f64),
            Value::from(i64::MAX),
            Value::from(i64::MAX as f64),
            Value::from(i64::MIN),
            Value::from(-0.0),
            Value::from(0),
            Value::from(0.5),
            Value::from(f64::INFINITY),
            Value::from(f64::NEG_INFINITY),
            Value::from(f64::NAN),
        ];

        for a in &numbers {
            for b in &numbers {
                assert_eq!(a.natural_cmp(b), b.natural_cmp(a).reverse());
                for c in &numbers {
                    let ab = a.natural_cmp(b);
                    if ab == b.natural_cmp(c) {
                        assert_eq!(a.natural_cmp(c), ab, "{} {} {}", a, b, c);
                    }
                }
            }
        }

        let mut sorted = numbers.to_vec();
        sorted.sort_by(Value::natural_cmp);
        for pair in sorted.windows(2) {
            assert!(pair[0].natural_cmp(&pair[1]).is_le());
        }
    }

    #[test]
    fn test_numeric_projection() {
        assert_eq!(Value::from("12abc").numeric_projection(), 12.0);
        assert_eq!(Value::from("  3.5").numeric_projection(), 3.5);
        assert_eq!(Value::from("abc").numeric_projection(), 0.0);
        assert_eq!(Value::Bool(true).numeric_projection(), 1.0);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::array(vec![Value::from(1), Value::from("a")]).to_string(), "[1, a]");

        let mut map = ValueMap::new();
        map.insert(Key::from("k"), Value::Bool(false));
        assert_eq!(Value::Array(map).to_string(), "{k: false}");
    }
}
