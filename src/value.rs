// SPDX-License-Identifier: MIT OR Apache-2.0
//! The `DataType` tag enumeration and the `Value` sum type it indexes.
//!
//! `DataType` is the physical representation of a *generic attribute
//! value* — the thing a `datatype`-typed descriptor field decodes once it
//! has read the tag from an earlier field in the same record. It is
//! narrower than [`crate::descriptor::Physical`], which also covers fixed
//! fields (like `scanned_channels:uint32`) that never flow through the
//! generic slot.

use core::convert::TryFrom;
use strum_macros::EnumIter;

use crate::error::{Error, Result};
use crate::primitive::{Cursor, Eui64};

/// ZCL Spec -- "2.5.2 Data Types" (subset this codec carries end-to-end).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum DataType {
    Null = 0x00,
    Boolean = 0x10,
    Bitmap8 = 0x18,
    Bitmap16 = 0x19,
    Bitmap64 = 0x1f,
    Uint8 = 0x20,
    Uint16 = 0x21,
    Uint64 = 0x27,
    Int8 = 0x28,
    Int16 = 0x29,
    Int64 = 0x2f,
    Enum8 = 0x30,
    Enum16 = 0x31,
    CharacterString = 0x42,
    Eui64 = 0xf0,
}

impl DataType {
    /// The subset over which attribute reporting carries a `delta`
    /// threshold (ZCL Spec -- "2.5.2.1 Analog and Discrete Data Types").
    #[must_use]
    pub fn is_analog(self) -> bool {
        matches!(
            self,
            DataType::Uint8
                | DataType::Uint16
                | DataType::Uint64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int64
        )
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            DataType::Null => "null",
            DataType::Boolean => "bool",
            DataType::Bitmap8 => "bitmap8",
            DataType::Bitmap16 => "bitmap16",
            DataType::Bitmap64 => "bitmap64",
            DataType::Uint8 => "uint8",
            DataType::Uint16 => "uint16",
            DataType::Uint64 => "uint64",
            DataType::Int8 => "int8",
            DataType::Int16 => "int16",
            DataType::Int64 => "int64",
            DataType::Enum8 => "enum8",
            DataType::Enum16 => "enum16",
            DataType::CharacterString => "string",
            DataType::Eui64 => "eui64",
        }
    }

    /// Parses the informal lowercase catalog spelling (`"uint8"`, …) used
    /// by attribute table entries in `catalog::clusters`.
    #[must_use]
    pub fn by_name(name: &str) -> Option<DataType> {
        use strum::IntoEnumIterator;
        DataType::iter().find(|d| d.name() == name)
    }

    pub fn decode(self, cur: &mut Cursor<'_>) -> Result<Value> {
        Ok(match self {
            DataType::Null => Value::Null,
            DataType::Boolean => Value::Bool(cur.read_u8()? != 0),
            DataType::Bitmap8 => Value::Bitmap8(cur.read_u8()?),
            DataType::Bitmap16 => Value::Bitmap16(cur.read_u16()?),
            DataType::Bitmap64 => Value::Bitmap64(cur.read_u64()?),
            DataType::Uint8 => Value::Uint8(cur.read_u8()?),
            DataType::Uint16 => Value::Uint16(cur.read_u16()?),
            DataType::Uint64 => Value::Uint64(cur.read_u64()?),
            DataType::Int8 => Value::Int8(cur.read_i8()?),
            DataType::Int16 => Value::Int16(cur.read_i16()?),
            DataType::Int64 => Value::Int64(cur.read_i64()?),
            DataType::Enum8 => Value::Enum8(cur.read_u8()?),
            DataType::Enum16 => Value::Enum16(cur.read_u16()?),
            DataType::CharacterString => Value::CharacterString(cur.read_string()?),
            DataType::Eui64 => Value::Eui64(cur.read_eui64()?),
        })
    }

    pub fn encode(self, out: &mut Vec<u8>, value: &Value) -> Result<()> {
        use crate::primitive::{write_i16, write_i64, write_i8, write_string, write_u16, write_u64, write_u8};
        match (self, value) {
            (DataType::Null, Value::Null) => {}
            (DataType::Boolean, Value::Bool(v)) => write_u8(out, u8::from(*v)),
            (DataType::Bitmap8, Value::Bitmap8(v)) => write_u8(out, *v),
            (DataType::Bitmap16, Value::Bitmap16(v)) => write_u16(out, *v),
            (DataType::Bitmap64, Value::Bitmap64(v)) => write_u64(out, *v),
            (DataType::Uint8, Value::Uint8(v)) => write_u8(out, *v),
            (DataType::Uint16, Value::Uint16(v)) => write_u16(out, *v),
            (DataType::Uint64, Value::Uint64(v)) => write_u64(out, *v),
            (DataType::Int8, Value::Int8(v)) => write_i8(out, *v),
            (DataType::Int16, Value::Int16(v)) => write_i16(out, *v),
            (DataType::Int64, Value::Int64(v)) => write_i64(out, *v),
            (DataType::Enum8, Value::Enum8(v)) => write_u8(out, *v),
            (DataType::Enum16, Value::Enum16(v)) => write_u16(out, *v),
            (DataType::CharacterString, Value::CharacterString(v)) => write_string(out, v)?,
            (DataType::Eui64, Value::Eui64(v)) => write_u64(out, v.0),
            _ => {
                return Err(Error::InvalidState(format!(
                    "value {value:?} does not match declared datatype {self:?}"
                )))
            }
        }
        Ok(())
    }
}

impl TryFrom<u8> for DataType {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        use strum::IntoEnumIterator;
        DataType::iter().find(|d| *d as u8 == value).ok_or(value)
    }
}

/// A decoded value of one of the recognized [`DataType`]s.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Bitmap8(u8),
    Bitmap16(u16),
    Bitmap64(u64),
    Uint8(u8),
    Uint16(u16),
    Uint64(u64),
    Int8(i8),
    Int16(i16),
    Int64(i64),
    Enum8(u8),
    Enum16(u16),
    CharacterString(String),
    Eui64(Eui64),
}

impl Value {
    /// The [`DataType`] tag this value was (or would be) decoded/encoded
    /// with. Used to re-derive the tag byte on encode when the caller
    /// supplies a `Value` without repeating the tag explicitly.
    #[must_use]
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Null,
            Value::Bool(_) => DataType::Boolean,
            Value::Bitmap8(_) => DataType::Bitmap8,
            Value::Bitmap16(_) => DataType::Bitmap16,
            Value::Bitmap64(_) => DataType::Bitmap64,
            Value::Uint8(_) => DataType::Uint8,
            Value::Uint16(_) => DataType::Uint16,
            Value::Uint64(_) => DataType::Uint64,
            Value::Int8(_) => DataType::Int8,
            Value::Int16(_) => DataType::Int16,
            Value::Int64(_) => DataType::Int64,
            Value::Enum8(_) => DataType::Enum8,
            Value::Enum16(_) => DataType::Enum16,
            Value::CharacterString(_) => DataType::CharacterString,
            Value::Eui64(_) => DataType::Eui64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatype_roundtrips_by_tag() {
        assert_eq!(DataType::try_from(0x20), Ok(DataType::Uint8));
        assert_eq!(DataType::try_from(0xf0), Ok(DataType::Eui64));
        assert_eq!(DataType::try_from(0x99), Err(0x99));
    }

    #[test]
    fn datatype_by_name() {
        assert_eq!(DataType::by_name("uint8"), Some(DataType::Uint8));
        assert_eq!(DataType::by_name("nope"), None);
    }

    #[test]
    fn analog_subset() {
        assert!(DataType::Uint8.is_analog());
        assert!(DataType::Int64.is_analog());
        assert!(!DataType::Boolean.is_analog());
        assert!(!DataType::CharacterString.is_analog());
    }

    #[test]
    fn value_decode_encode_roundtrip() {
        let mut buf = Vec::new();
        DataType::Uint16.encode(&mut buf, &Value::Uint16(0x1234)).unwrap();
        assert_eq!(buf, vec![0x34, 0x12]);
        let mut cur = Cursor::new(&buf);
        assert_eq!(DataType::Uint16.decode(&mut cur).unwrap(), Value::Uint16(0x1234));
    }
}
