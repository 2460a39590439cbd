use crate::value::{Params, Value};
use serde::ser::{
    Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple,
    SerializeTupleStruct, Serializer,
};

/// Result type for this module's functionality.
pub type Result<T> = std::result::Result<T, Error>;

/// Convert any serde-serializable value into a [`Value`] tree.
///
/// `None` becomes [`Value::Null`], so `Option` fields of a derived struct
/// are stripped from query strings by the `urlcat` layer without any extra
/// bookkeeping on the caller's side.
pub fn to_value<T: Serialize>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

/// Serializer whose output is a [`Value`] tree.
///
/// Accepts scalars, sequences, maps with scalar keys, structs and unit
/// variants. Byte slices and non-unit enum variants have no query string
/// representation and are rejected.
#[derive(Debug, Clone, Copy)]
pub struct ValueSerializer;

macro_rules! impl_with_int {
    ($(($trait_fn:ident, $prim_ty:ty)),*) => {
        $(fn $trait_fn(self, v: $prim_ty) -> Result<Value> {
            Ok(Value::Int(v as i64))
        })*
    };
}

impl Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SeqCollector;
    type SerializeTuple = SeqCollector;
    type SerializeTupleStruct = SeqCollector;
    type SerializeMap = MapCollector;
    type SerializeStruct = MapCollector;
    type SerializeStructVariant = Impossible<Value, Error>;
    type SerializeTupleVariant = Impossible<Value, Error>;

    impl_with_int!(
        (serialize_u8, u8),
        (serialize_u16, u16),
        (serialize_u32, u32),
        (serialize_i8, i8),
        (serialize_i16, i16),
        (serialize_i32, i32),
        (serialize_i64, i64)
    );

    fn serialize_u64(self, v: u64) -> Result<Value> {
        match i64::try_from(v) {
            Ok(v) => Ok(Value::Int(v)),
            Err(_) => Ok(Value::Float(v as f64)),
        }
    }

    fn serialize_i128(self, _v: i128) -> Result<Value> {
        Err(Error::TypeNotSupported("i128"))
    }

    fn serialize_u128(self, _v: u128) -> Result<Value> {
        Err(Error::TypeNotSupported("u128"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(v as f64))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_owned()))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<Value> {
        Err(Error::TypeNotSupported("&[u8]"))
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
        self.serialize_str(variant)
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
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::TypeNotSupported("newtype variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(SeqCollector {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::TypeNotSupported("tuple variant"))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::TypeNotSupported("struct variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(MapCollector {
            entries: Params::new(),
            pending_key: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(None)
    }

    fn is_human_readable(&self) -> bool {
        true
    }
}

#[derive(Debug)]
pub struct SeqCollector {
    items: Vec<Value>,
}

impl SerializeSeq for SeqCollector {
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
        Ok(Value::Seq(self.items))
    }
}

impl SerializeTuple for SeqCollector {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        SerializeSeq::end(self)
    }
}

impl SerializeTupleStruct for SeqCollector {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        SerializeSeq::end(self)
    }
}

#[derive(Debug)]
pub struct MapCollector {
    entries: Params,
    pending_key: Option<String>,
}

impl SerializeMap for MapCollector {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = key.serialize(ValueSerializer)?;
        let key = key.as_scalar().ok_or(Error::KeyNotString)?;
        self.pending_key = Some(key.into_owned());
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self.pending_key.take().ok_or(Error::ValueBeforeKey)?;
        self.entries.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

impl SerializeStruct for MapCollector {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.entries.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.entries))
    }
}

/// Type of errors, returned when building [`Value`] trees from serde.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Byte slices, 128-bit integers and non-unit enum variants have no
    /// query string representation.
    TypeNotSupported(&'static str),
    /// Map keys must serialize as scalars.
    KeyNotString,
    /// A map serialized a value without serializing its key first.
    ValueBeforeKey,
    /// [`Params::from_serialize`] was given a value whose root is not a
    /// map or struct.
    TopLevelNotMap,
    /// Custom error variant in accordance with serde guidelines.
    Custom(String),
}

impl serde::ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: std::fmt::Display,
    {
        Self::Custom(msg.to_string())
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeNotSupported(ty) => write!(f, "type `{ty}` is not supported"),
            Self::KeyNotString => write!(f, "map keys must serialize as scalar values"),
            Self::ValueBeforeKey => {
                write!(f, "map serialized a value before its key")
            }
            Self::TopLevelNotMap => {
                write!(f, "top level value must serialize as a map or struct")
            }
            Self::Custom(msg) => write!(f, "{msg}"),
        }
    }
}
