//! Conversion of Rust data into [`Value`]s.
//!
//! [`ValueSerializer`] is a serde `Serializer` whose output is a [`Value`]
//! rather than text. Structs and maps become keyed arrays, sequences become
//! list-shaped arrays, and enum variants with data become single-entry arrays
//! keyed by the variant name.
//!
//! Most users should go through [`to_value`](crate::to_value):
//!
//! ```rust
//! use keyed_collection::{to_value, Collection};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Fruit { name: &'static str, price: u32 }
//!
//! let basket = to_value(&vec![
//!     Fruit { name: "apple", price: 3 },
//!     Fruit { name: "pear", price: 4 },
//! ]).unwrap();
//!
//! let basket = Collection::new(basket.as_array().unwrap().clone());
//! assert_eq!(basket.pluck("name").count(), 2);
//! ```

use crate::{Error, Key, Number, Result, Value, ValueMap};
use serde::{ser, Serialize};

pub struct ValueSerializer;

pub struct SerializeVec {
    vec: ValueMap,
}

pub struct SerializeMap {
    map: ValueMap,
    current_key: Option<Key>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: ValueMap,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: ValueMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(i64::from(v))))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(i64::from(v))))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(i64::from(v))))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(i64::from(v))))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(i64::from(v))))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(i64::from(v))))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(i) => Ok(Value::Number(Number::Integer(i))),
            Err(_) => Ok(Value::Number(Number::Float(v as f64))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(f64::from(v))))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::array(v.iter().map(|&b| Value::from(u32::from(b)))))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value_inner(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: ValueMap::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len.unwrap_or(0)))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: ValueMap::with_capacity(len),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: ValueMap::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new(capacity: usize) -> Self {
        SerializeMap {
            map: ValueMap::with_capacity(capacity),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = to_value_inner(key)?;
        match Key::from_value(&key) {
            Some(key) => {
                self.current_key = Some(key);
                Ok(())
            }
            None => Err(Error::invalid_key(key.type_name())),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(Key::from(key), to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(Key::from(key), to_value_inner(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.variant, Value::Array(self.map)))
    }
}

fn to_value_inner<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// `{variant: value}`, the externally tagged shape of an enum variant with data.
fn tagged(variant: &str, value: Value) -> Value {
    let mut map = ValueMap::with_capacity(1);
    map.insert(Key::from(variant), value);
    Value::Array(map)
}

#[cfg(test)]
mod tests {
    use crate::{to_value, value, Error, Value};
    use serde::Serialize;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize)]
    enum Shape {
        Empty,
        Circle(f64),
        Line(Point, Point),
        Rect { w: u32, h: u32 },
    }

    #[test]
    fn test_struct_becomes_keyed_array() {
        assert_eq!(to_value(&Point { x: 1, y: 2 }).unwrap(), value!({"x": 1, "y": 2}));
    }

    #[test]
    fn test_sequences_become_lists() {
        assert_eq!(to_value(&vec!["a", "b"]).unwrap(), value!(["a", "b"]));
        assert_eq!(to_value(&(1, true)).unwrap(), value!([1, true]));
    }

    #[test]
    fn test_enum_variants_are_externally_tagged() {
        assert_eq!(to_value(&Shape::Empty).unwrap(), value!("Empty"));
        assert_eq!(to_value(&Shape::Circle(1.5)).unwrap(), value!({"Circle": 1.5}));
        assert_eq!(
            to_value(&Shape::Line(Point { x: 0, y: 0 }, Point { x: 1, y: 1 })).unwrap(),
            value!({"Line": [{"x": 0, "y": 0}, {"x": 1, "y": 1}]})
        );
        assert_eq!(
            to_value(&Shape::Rect { w: 2, h: 3 }).unwrap(),
            value!({"Rect": {"w": 2, "h": 3}})
        );
    }

    #[test]
    fn test_map_keys_are_normalized() {
        let mut map = BTreeMap::new();
        map.insert("10", "ten");
        map.insert("name", "n");
        let value = to_value(&map).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.get(&crate::Key::Int(10)), Some(&Value::from("ten")));
    }

    #[test]
    fn test_non_scalar_map_keys_are_rejected() {
        let mut map = BTreeMap::new();
        map.insert(vec![1], "x");
        assert!(matches!(to_value(&map), Err(Error::InvalidKey(_))));
    }
}
