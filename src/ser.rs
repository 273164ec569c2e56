//! Conversion from `Serialize` types into [`Value`] trees.
//!
//! This module provides [`ValueSerializer`], a serde serializer whose output
//! is a [`Value`] instead of text. It is how ordinary Rust data enters the
//! renderers: numeric widths are preserved (an `i8` stays an `i8`), structs
//! become named aggregates with their fields in declaration order, and enum
//! variants become aggregates named `Type::Variant`.
//!
//! Serde deliberately erases some of what the renderers can show: it carries
//! no capacities, no reference identities, and no privacy, so converted trees
//! never contain [`Value::Ref`] or capacity annotations. Build those parts of
//! a tree by hand when they matter.
//!
//! ## Usage
//!
//! Most users should use [`to_value`](crate::to_value) in the crate root:
//!
//! ```rust
//! use deepfmt::{sdump, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! let value = to_value(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(sdump(&value).unwrap(), "(Point) {\n x: (i32) 1,\n y: (i32) 2\n}\n");
//! ```

use serde::{ser, Serialize};

use crate::error::{Error, Result};
use crate::fields::FieldMap;
use crate::value::{Int, Map, Seq, Struct, Uint, Value};

/// Serializer producing a [`Value`] tree.
pub struct ValueSerializer;

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeStruct;
    type SerializeStructVariant = SerializeStruct;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Int(Int::I8(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Int(Int::I16(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Int(Int::I32(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Int(Int::I64(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::Int(Int::I128(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Uint(Uint::U8(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Uint(Uint::U16(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Uint(Uint::U32(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Uint(Uint::U64(v)))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::Uint(Uint::U128(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::Char(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Str(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Seq(Seq {
            type_name: Some("[]u8".to_string()),
            capacity: None,
            items: v.iter().map(|&b| Value::Uint(Uint::U8(b))).collect(),
        }))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Nil(None))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Nil(None))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value> {
        Ok(Value::Struct(Struct::new(name)))
    }

    fn serialize_unit_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::Struct(Struct::new(format!("{}::{}", name, variant))))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let mut fields = FieldMap::with_capacity(1);
        fields.insert("0".to_string(), value.serialize(ValueSerializer)?);
        Ok(Value::Struct(Struct {
            name: format!("{}::{}", name, variant),
            fields,
        }))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec {
            type_name: None,
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec {
            type_name: None,
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_struct(self, name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec {
            type_name: Some(name.to_string()),
            items: Vec::with_capacity(len),
        })
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: format!("{}::{}", name, variant),
            fields: FieldMap::with_capacity(len),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap {
            entries: Vec::with_capacity(len.unwrap_or(0)),
            next_key: None,
        })
    }

    fn serialize_struct(self, name: &'static str, len: usize) -> Result<SerializeStruct> {
        Ok(SerializeStruct {
            name: name.to_string(),
            fields: FieldMap::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeStruct> {
        Ok(SerializeStruct {
            name: format!("{}::{}", name, variant),
            fields: FieldMap::with_capacity(len),
        })
    }
}

pub struct SerializeVec {
    type_name: Option<String>,
    items: Vec<Value>,
}

impl SerializeVec {
    fn finish(self) -> Value {
        Value::Seq(Seq {
            type_name: self.type_name,
            capacity: None,
            items: self.items,
        })
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
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
        Ok(self.finish())
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
        Ok(self.finish())
    }
}

pub struct SerializeTupleVariant {
    name: String,
    fields: FieldMap,
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let index = self.fields.len().to_string();
        self.fields.insert(index, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Struct(Struct {
            name: self.name,
            fields: self.fields,
        }))
    }
}

pub struct SerializeMap {
    entries: Vec<(Value, Value)>,
    next_key: Option<Value>,
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.next_key = Some(key.serialize(ValueSerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::message("serialize_value called before serialize_key"))?;
        self.entries.push((key, value.serialize(ValueSerializer)?));
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(Map {
            type_name: None,
            entries: self.entries,
        }))
    }
}

pub struct SerializeStruct {
    name: String,
    fields: FieldMap,
}

impl ser::SerializeStruct for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields
            .insert(key.to_string(), value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Struct(Struct {
            name: self.name,
            fields: self.fields,
        }))
    }
}

impl ser::SerializeStructVariant for SerializeStruct {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeStruct::serialize_field(self, key, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeStruct::end(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_value;
    use crate::value::Kind;
    use serde::Serialize;

    #[test]
    fn test_numeric_widths_preserved() {
        assert_eq!(to_value(&5i8).unwrap(), Value::from(5i8));
        assert_eq!(to_value(&5i64).unwrap(), Value::from(5i64));
        assert_ne!(to_value(&5i8).unwrap(), Value::from(5i64));
        assert_eq!(to_value(&5u32).unwrap().type_name(), "u32");
    }

    #[test]
    fn test_struct_fields_in_declaration_order() {
        #[derive(Serialize)]
        struct Config {
            zeta: bool,
            alpha: i32,
        }
        let value = to_value(&Config { zeta: true, alpha: 1 }).unwrap();
        match value {
            Value::Struct(st) => {
                assert_eq!(st.name, "Config");
                let names: Vec<_> = st.fields.keys().cloned().collect();
                assert_eq!(names, vec!["zeta", "alpha"]);
            }
            other => panic!("expected struct, got {:?}", other),
        }
    }

    #[test]
    fn test_enum_variants() {
        #[derive(Serialize)]
        enum Shape {
            Dot,
            Circle(f64),
            Rect { w: u32, h: u32 },
        }

        assert_eq!(to_value(&Shape::Dot).unwrap().type_name(), "Shape::Dot");

        let circle = to_value(&Shape::Circle(1.5)).unwrap();
        match &circle {
            Value::Struct(st) => {
                assert_eq!(st.name, "Shape::Circle");
                assert_eq!(st.fields.get("0").unwrap().value, Value::from(1.5f64));
            }
            other => panic!("expected struct, got {:?}", other),
        }

        let rect = to_value(&Shape::Rect { w: 2, h: 3 }).unwrap();
        assert_eq!(rect.type_name(), "Shape::Rect");
    }

    #[test]
    fn test_option_and_unit() {
        assert_eq!(to_value(&Option::<i32>::None).unwrap(), Value::Nil(None));
        assert_eq!(to_value(&Some(7i32)).unwrap(), Value::from(7i32));
        assert_eq!(to_value(&()).unwrap(), Value::Nil(None));
    }

    #[test]
    fn test_containers() {
        let seq = to_value(&vec![1i32, 2, 3]).unwrap();
        assert_eq!(seq.kind(), Kind::Seq);
        assert_eq!(seq.size(), Some(3));

        let mut map = std::collections::BTreeMap::new();
        map.insert("one", true);
        let value = to_value(&map).unwrap();
        assert_eq!(value.kind(), Kind::Map);
    }

    #[test]
    fn test_bytes_become_typed_seq() {
        use serde::Serializer as _;
        let value = ValueSerializer.serialize_bytes(&[1, 2]).unwrap();
        assert_eq!(value.type_name(), "[]u8");
    }
}
