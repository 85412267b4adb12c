//! Conversion of [`Value`]s back into Rust data.
//!
//! [`ValueDeserializer`] feeds a [`Value`] to any `Deserialize` type.
//! List-shaped arrays read as sequences, other arrays read as maps, and
//! nested collections read like their backing data. Object values have no
//! data model and fail to deserialize.
//!
//! ```rust
//! use keyed_collection::{collection, from_value, Value};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, PartialEq)]
//! struct Fruit { name: String, price: u32 }
//!
//! let basket = collection!([{"name": "apple", "price": 3}, {"name": "pear", "price": 4}]);
//! let fruits: Vec<Fruit> = from_value(Value::from(basket)).unwrap();
//! assert_eq!(fruits[1], Fruit { name: "pear".to_string(), price: 4 });
//! ```

use crate::{Error, Key, Number, Result, Value, ValueMap};
use serde::de::{self, IntoDeserializer};
use serde::forward_to_deserialize_any;

pub struct ValueDeserializer {
    value: Value,
}

impl ValueDeserializer {
    #[must_use]
    pub fn new(value: Value) -> Self {
        ValueDeserializer { value }
    }
}

/// Unwraps nested collections so only arrays need handling below.
fn into_map(value: Value) -> std::result::Result<ValueMap, Value> {
    match value {
        Value::Array(map) => Ok(map),
        Value::Collection(collection) => Ok(collection.into_data()),
        other => Err(other),
    }
}

fn unexpected(expected: &str, value: &Value) -> Error {
    Error::type_mismatch(expected, value.type_name())
}

impl<'de> de::Deserializer<'de> for ValueDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(Number::Integer(i)) => visitor.visit_i64(i),
            Value::Number(Number::Float(f)) => visitor.visit_f64(f),
            Value::String(s) => visitor.visit_string(s),
            Value::Object(_) => Err(Error::unsupported_type("object values")),
            container => match into_map(container) {
                Ok(map) if map.is_list() => visitor.visit_seq(SeqDeserializer::new(map)),
                Ok(map) => visitor.visit_map(MapDeserializer::new(map)),
                Err(other) => Err(unexpected("array", &other)),
            },
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            value => visitor.visit_some(ValueDeserializer::new(value)),
        }
    }

    fn deserialize_seq<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match into_map(self.value) {
            Ok(map) => visitor.visit_seq(SeqDeserializer::new(map)),
            Err(other) => Err(unexpected("sequence", &other)),
        }
    }

    fn deserialize_tuple<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_tuple_struct<V>(
        self,
        _name: &'static str,
        _len: usize,
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_seq(visitor)
    }

    fn deserialize_map<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match into_map(self.value) {
            Ok(map) => visitor.visit_map(MapDeserializer::new(map)),
            Err(other) => Err(unexpected("map", &other)),
        }
    }

    fn deserialize_struct<V>(
        self,
        _name: &'static str,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        self.deserialize_map(visitor)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Value::String(variant) => visitor.visit_enum(EnumDeserializer::new(variant, None)),
            value => match into_map(value) {
                Ok(map) if map.len() == 1 => {
                    let Some((key, value)) = map.into_iter().next() else {
                        return Err(Error::custom("expected a single-entry enum map"));
                    };
                    visitor.visit_enum(EnumDeserializer::new(key.to_string(), Some(value)))
                }
                Ok(_) => Err(Error::custom("expected a single-entry enum map")),
                Err(other) => Err(unexpected("enum", &other)),
            },
        }
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: indexmap::map::IntoIter<Key, Value>,
}

impl SeqDeserializer {
    fn new(map: ValueMap) -> Self {
        SeqDeserializer {
            iter: map.into_iter(),
        }
    }
}

impl<'de> de::SeqAccess<'de> for SeqDeserializer {
    type Error = Error;

    fn next_element_seed<T>(&mut self, seed: T) -> Result<Option<T::Value>>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((_, value)) => seed.deserialize(ValueDeserializer::new(value)).map(Some),
            None => Ok(None),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct MapDeserializer {
    iter: indexmap::map::IntoIter<Key, Value>,
    value: Option<Value>,
}

impl MapDeserializer {
    fn new(map: ValueMap) -> Self {
        MapDeserializer {
            iter: map.into_iter(),
            value: None,
        }
    }
}

impl<'de> de::MapAccess<'de> for MapDeserializer {
    type Error = Error;

    fn next_key_seed<K>(&mut self, seed: K) -> Result<Option<K::Value>>
    where
        K: de::DeserializeSeed<'de>,
    {
        match self.iter.next() {
            Some((key, value)) => {
                self.value = Some(value);
                seed.deserialize(KeyDeserializer { key }).map(Some)
            }
            None => Ok(None),
        }
    }

    fn next_value_seed<V>(&mut self, seed: V) -> Result<V::Value>
    where
        V: de::DeserializeSeed<'de>,
    {
        match self.value.take() {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("next_value_seed called before next_key_seed")),
        }
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

/// Map keys read as integers or strings; string targets always get the string form.
struct KeyDeserializer {
    key: Key,
}

impl<'de> de::Deserializer<'de> for KeyDeserializer {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.key {
            Key::Int(i) => visitor.visit_i64(i),
            Key::Str(s) => visitor.visit_string(s),
        }
    }

    fn deserialize_str<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key.to_string())
    }

    fn deserialize_string<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key.to_string())
    }

    fn deserialize_identifier<V>(self, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        visitor.visit_string(self.key.to_string())
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum ignored_any
    }
}

struct EnumDeserializer {
    variant: String,
    value: Option<Value>,
}

impl EnumDeserializer {
    fn new(variant: String, value: Option<Value>) -> Self {
        EnumDeserializer { variant, value }
    }
}

impl<'de> de::EnumAccess<'de> for EnumDeserializer {
    type Error = Error;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> Result<(V::Value, Self::Variant)>
    where
        V: de::DeserializeSeed<'de>,
    {
        let deserializer: de::value::StringDeserializer<Error> = self.variant.into_deserializer();
        let variant = seed.deserialize(deserializer)?;
        Ok((variant, VariantDeserializer { value: self.value }))
    }
}

struct VariantDeserializer {
    value: Option<Value>,
}

impl<'de> de::VariantAccess<'de> for VariantDeserializer {
    type Error = Error;

    fn unit_variant(self) -> Result<()> {
        match self.value {
            Some(Value::Null) | None => Ok(()),
            Some(other) => Err(unexpected("unit variant", &other)),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> Result<T::Value>
    where
        T: de::DeserializeSeed<'de>,
    {
        match self.value {
            Some(value) => seed.deserialize(ValueDeserializer::new(value)),
            None => Err(Error::custom("expected newtype variant")),
        }
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(value) => de::Deserializer::deserialize_seq(ValueDeserializer::new(value), visitor),
            None => Err(Error::custom("expected tuple variant")),
        }
    }

    fn struct_variant<V>(self, _fields: &'static [&'static str], visitor: V) -> Result<V::Value>
    where
        V: de::Visitor<'de>,
    {
        match self.value {
            Some(value) => de::Deserializer::deserialize_map(ValueDeserializer::new(value), visitor),
            None => Err(Error::custom("expected struct variant")),
        }
    }
}
