// SPDX-License-Identifier: MIT OR Apache-2.0
//! The descriptor interpreter: a generic engine that walks a sequence of
//! [`FieldSpec`] values to decode a byte buffer into a [`Record`], or to
//! encode a `Record` into bytes.
//!
//! Field descriptors are compiled once, as plain `'static` Rust data in
//! `catalog/`, rather than parsed from a string mini-language per frame —
//! see `SPEC_FULL.md` §9 for the rationale.

use core::convert::TryFrom;
use std::collections::HashMap;

use crate::composite;
use crate::error::{Error, Result};
use crate::primitive::{self, Cursor, Eui64};
use crate::status::Status;
use crate::value::{DataType, Value};

/// Which built-in composite descriptor a [`Physical::Composite`] field
/// recurses into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    SimpleDescriptor,
    ReadAttrStatus,
    WriteAttr,
    WriteAttrStatus,
    AttrReportingConfig,
    AttrReportingStatus,
    ReportedAttribute,
}

/// The physical wire representation of a single (non-repeated) value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Physical {
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Int8,
    Int16,
    Int32,
    Int64,
    Bool,
    Enum8,
    Enum16,
    CharacterString,
    Eui64,
    Status8,
    /// A one-byte [`DataType`] tag (the `datatype:uint8` field that a
    /// later [`FieldSpec::DataTypedValue`] in the same list consults).
    DataTypeTag,
    Composite(CompositeKind),
}

/// One field in a descriptor list.
///
/// This is the tagged-variant replacement for the source's
/// `name:typeref[:tags]` strings: repetition, the `n_`/`b_`/`s_`
/// side-channels, and the generic `datatype` slot are all first-class
/// variants instead of name-prefix conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSpec {
    /// Exactly one value, stored under `name`.
    Fixed(&'static str, Physical),
    /// A `n_…` field: decodes/encodes a one-byte element count for the
    /// next `RepeatCount` descriptor targeting the same field; never
    /// stored in the record.
    CountPrefix(&'static str),
    /// A `b_…` field: decodes/encodes a one-byte byte-length for the
    /// next `RepeatBytes` descriptor targeting the same field; never
    /// stored in the record.
    ByteLenPrefix(&'static str),
    /// `*T` — repeated `n` times, `n` supplied by a preceding
    /// [`FieldSpec::CountPrefix`].
    RepeatCount(&'static str, Physical),
    /// `#T` — repeated until `b` bytes have been consumed, `b` supplied
    /// by a preceding [`FieldSpec::ByteLenPrefix`].
    RepeatBytes(&'static str, Physical),
    /// `%T` — repeated until end-of-buffer.
    RepeatToEnd(&'static str, Physical),
    /// `s_…` — a status field; if the decoded value is not
    /// [`Status::Success`], the surrounding descriptor list stops here
    /// (on both decode and encode).
    StopOnNonSuccess(&'static str),
    /// The generic `value:datatype` slot: decodes/encodes one value
    /// whose physical representation is given by the `datatype` field
    /// decoded earlier in the same list.
    DataTypedValue(&'static str),
}

/// A single decoded field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Bool(bool),
    Enum8(u8),
    Enum16(u16),
    Str(String),
    Eui64(Eui64),
    Status(Status),
    DataType(DataType),
    /// The generic attribute value decoded through a `datatype` slot.
    Value(Value),
    List(Vec<Field>),
    /// A nested composite descriptor's own record (e.g. one
    /// `simple_descriptor` entry).
    Composite(Box<Record>),
}

/// A decoded ZDO/ZCL frame body, or one element of a repeated composite
/// field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(HashMap<String, Field>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Record(HashMap::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, field: Field) -> Option<Field> {
        self.0.insert(name.into(), field)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Field)> {
        self.0.iter()
    }

    pub fn require(&self, name: &str) -> Result<&Field> {
        self.0
            .get(name)
            .ok_or_else(|| Error::MissingField(name.to_string()))
    }

    pub fn require_list(&self, name: &str) -> Result<&[Field]> {
        match self.require(name)? {
            Field::List(items) => Ok(items),
            other => Err(Error::InvalidState(format!(
                "field {name:?} is not a list: {other:?}"
            ))),
        }
    }

    pub fn require_status(&self, name: &str) -> Result<Status> {
        match self.require(name)? {
            Field::Status(s) => Ok(*s),
            other => Err(Error::InvalidState(format!(
                "field {name:?} is not a status: {other:?}"
            ))),
        }
    }

    /// Unlike [`Self::require`], an absent `name` is reported as
    /// [`Error::InvalidState`], not [`Error::MissingField`]: a
    /// datatype-typed field decoded/encoded without an earlier `datatype`
    /// field is a codec state violation, not simply missing user input.
    pub fn require_data_type(&self, name: &str) -> Result<DataType> {
        match self.0.get(name) {
            Some(Field::DataType(d)) => Ok(*d),
            Some(other) => Err(Error::InvalidState(format!(
                "field {name:?} is not a datatype tag: {other:?}"
            ))),
            None => Err(Error::InvalidState(format!(
                "datatype-typed field present without an earlier datatype field {name:?}"
            ))),
        }
    }
}

impl FromIterator<(String, Field)> for Record {
    fn from_iter<T: IntoIterator<Item = (String, Field)>>(iter: T) -> Self {
        Record(iter.into_iter().collect())
    }
}

/// Decodes one value of a non-repeated [`Physical`] type.
fn decode_physical_one(physical: Physical, cur: &mut Cursor<'_>) -> Result<Field> {
    Ok(match physical {
        Physical::Uint8 => Field::U8(cur.read_u8()?),
        Physical::Uint16 => Field::U16(cur.read_u16()?),
        Physical::Uint32 => Field::U32(cur.read_u32()?),
        Physical::Uint64 => Field::U64(cur.read_u64()?),
        Physical::Int8 => Field::I8(cur.read_i8()?),
        Physical::Int16 => Field::I16(cur.read_i16()?),
        Physical::Int32 => Field::I32(cur.read_i32()?),
        Physical::Int64 => Field::I64(cur.read_i64()?),
        Physical::Bool => Field::Bool(cur.read_u8()? != 0),
        Physical::Enum8 => Field::Enum8(cur.read_u8()?),
        Physical::Enum16 => Field::Enum16(cur.read_u16()?),
        Physical::CharacterString => Field::Str(cur.read_string()?),
        Physical::Eui64 => Field::Eui64(cur.read_eui64()?),
        Physical::Status8 => Field::Status(cur.read_status()?),
        Physical::DataTypeTag => {
            let tag = cur.read_u8()?;
            Field::DataType(DataType::try_from(tag).map_err(Error::UnknownDataType)?)
        }
        Physical::Composite(kind) => Field::Composite(Box::new(composite::decode(kind, cur)?)),
    })
}

/// Encodes one value of a non-repeated [`Physical`] type.
fn encode_physical_one(physical: Physical, out: &mut Vec<u8>, field: &Field) -> Result<()> {
    use primitive::{write_i16, write_i32, write_i64, write_i8, write_string, write_u16, write_u32, write_u64, write_u8};
    match (physical, field) {
        (Physical::Uint8, Field::U8(v)) => write_u8(out, *v),
        (Physical::Uint16, Field::U16(v)) => write_u16(out, *v),
        (Physical::Uint32, Field::U32(v)) => write_u32(out, *v),
        (Physical::Uint64, Field::U64(v)) => write_u64(out, *v),
        (Physical::Int8, Field::I8(v)) => write_i8(out, *v),
        (Physical::Int16, Field::I16(v)) => write_i16(out, *v),
        (Physical::Int32, Field::I32(v)) => write_i32(out, *v),
        (Physical::Int64, Field::I64(v)) => write_i64(out, *v),
        (Physical::Bool, Field::Bool(v)) => write_u8(out, u8::from(*v)),
        (Physical::Enum8, Field::Enum8(v)) => write_u8(out, *v),
        (Physical::Enum16, Field::Enum16(v)) => write_u16(out, *v),
        (Physical::CharacterString, Field::Str(v)) => write_string(out, v)?,
        (Physical::Eui64, Field::Eui64(v)) => write_u64(out, v.0),
        (Physical::Status8, Field::Status(v)) => primitive::write_status(out, *v),
        (Physical::DataTypeTag, Field::DataType(v)) => write_u8(out, *v as u8),
        (Physical::Composite(kind), Field::Composite(record)) => {
            composite::encode(kind, out, record)?;
        }
        (physical, field) => {
            return Err(Error::InvalidState(format!(
                "field {field:?} does not match declared physical type {physical:?}"
            )))
        }
    }
    Ok(())
}

/// Decodes `specs` from `cur`, returning the resulting [`Record`].
///
/// Stops early (returning the fields decoded so far) if a
/// [`FieldSpec::StopOnNonSuccess`] field decodes to a non-success status.
pub fn decode_fields(specs: &[FieldSpec], cur: &mut Cursor<'_>) -> Result<Record> {
    let mut record = Record::new();
    let mut n: usize = 1;
    let mut b: usize = 0;

    for spec in specs {
        match *spec {
            FieldSpec::Fixed(name, physical) => {
                let field = decode_physical_one(physical, cur)?;
                record.insert(name, field);
                n = 1;
                b = 0;
            }
            FieldSpec::CountPrefix(_target) => {
                n = usize::from(cur.read_u8()?);
            }
            FieldSpec::ByteLenPrefix(_target) => {
                b = usize::from(cur.read_u8()?);
            }
            FieldSpec::RepeatCount(name, physical) => {
                let mut items = Vec::with_capacity(n);
                for _ in 0..n {
                    items.push(decode_physical_one(physical, cur)?);
                }
                record.insert(name, Field::List(items));
                n = 1;
                b = 0;
            }
            FieldSpec::RepeatBytes(name, physical) => {
                let start = cur.pos();
                let mut items = Vec::new();
                while cur.pos() - start < b {
                    items.push(decode_physical_one(physical, cur)?);
                }
                record.insert(name, Field::List(items));
                n = 1;
                b = 0;
            }
            FieldSpec::RepeatToEnd(name, physical) => {
                let mut items = Vec::new();
                while !cur.is_empty() {
                    items.push(decode_physical_one(physical, cur)?);
                }
                record.insert(name, Field::List(items));
                n = 1;
                b = 0;
            }
            FieldSpec::StopOnNonSuccess(name) => {
                let status = cur.read_status()?;
                let success = status.is_success();
                record.insert(name, Field::Status(status));
                n = 1;
                b = 0;
                if !success {
                    log::debug!("short-circuiting decode at {name:?}: status {status:?}");
                    return Ok(record);
                }
            }
            FieldSpec::DataTypedValue(name) => {
                let dt = record.require_data_type("datatype")?;
                let value = dt.decode(cur)?;
                record.insert(name, Field::Value(value));
                n = 1;
                b = 0;
            }
        }
    }

    Ok(record)
}

/// Encodes `record` through `specs`, appending to `out`.
///
/// Stops early once a [`FieldSpec::StopOnNonSuccess`] field's value is
/// not success, mirroring the decode short-circuit.
pub fn encode_fields(specs: &[FieldSpec], record: &Record, out: &mut Vec<u8>) -> Result<()> {
    // RepeatBytes elements must be serialized before their ByteLenPrefix
    // so the byte count can be measured rather than guessed.
    let mut byte_cache: HashMap<&'static str, Vec<u8>> = HashMap::new();
    for spec in specs {
        if let FieldSpec::RepeatBytes(name, physical) = *spec {
            // Absent when an earlier `StopOnNonSuccess` short-circuited
            // decode; the main loop below returns before ever reaching
            // this field's `ByteLenPrefix`/`RepeatBytes` pair, so there is
            // nothing to precompute.
            let items = match record.get(name) {
                Some(Field::List(items)) => items,
                Some(_) | None => continue,
            };
            let mut buf = Vec::new();
            for item in items {
                encode_physical_one(physical, &mut buf, item)?;
            }
            byte_cache.insert(name, buf);
        }
    }

    for spec in specs {
        match *spec {
            FieldSpec::Fixed(name, physical) => {
                let field = record.require(name)?;
                encode_physical_one(physical, out, field)?;
            }
            FieldSpec::CountPrefix(target) => {
                let items = record.require_list(target)?;
                let len = u8::try_from(items.len()).map_err(|_| {
                    Error::Malformed(format!(
                        "list {target:?} has {} elements, too many for a 1-byte count",
                        items.len()
                    ))
                })?;
                primitive::write_u8(out, len);
            }
            FieldSpec::ByteLenPrefix(target) => {
                let buf = byte_cache.get(target).ok_or_else(|| {
                    Error::InvalidState(format!(
                        "no RepeatBytes descriptor produced bytes for {target:?}"
                    ))
                })?;
                let len = u8::try_from(buf.len()).map_err(|_| {
                    Error::Malformed(format!(
                        "byte-length field for {target:?} is {} bytes, exceeds 255",
                        buf.len()
                    ))
                })?;
                primitive::write_u8(out, len);
            }
            FieldSpec::RepeatCount(name, physical) | FieldSpec::RepeatToEnd(name, physical) => {
                let items = record.require_list(name)?;
                for item in items {
                    encode_physical_one(physical, out, item)?;
                }
            }
            FieldSpec::RepeatBytes(name, _physical) => {
                out.extend_from_slice(&byte_cache[name]);
            }
            FieldSpec::StopOnNonSuccess(name) => {
                let status = record.require_status(name)?;
                primitive::write_status(out, status);
                if !status.is_success() {
                    return Ok(());
                }
            }
            FieldSpec::DataTypedValue(name) => {
                let dt = record.require_data_type("datatype")?;
                let field = record.require(name)?;
                let value = match field {
                    Field::Value(v) => v,
                    other => {
                        return Err(Error::InvalidState(format!(
                            "field {name:?} is not a generic value: {other:?}"
                        )))
                    }
                };
                dt.encode(out, value)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const READ_ATTR_STATUS: &[FieldSpec] = &[
        FieldSpec::Fixed("attribute", Physical::Uint16),
        FieldSpec::StopOnNonSuccess("status"),
        FieldSpec::Fixed("datatype", Physical::DataTypeTag),
        FieldSpec::DataTypedValue("value"),
    ];

    #[test]
    fn datatyped_value_without_a_datatype_field_is_invalid_state_not_missing_field() {
        let mut record = Record::new();
        record.insert("value", Field::Value(Value::Uint8(1)));
        let mut out = Vec::new();
        let err = encode_fields(&[FieldSpec::DataTypedValue("value")], &record, &mut out).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn read_attr_status_stop_skips_datatype_and_value_both_ways() {
        let bytes = [0x00, 0x00, 0x86]; // attribute 0x0000, UNSUPPORTED_ATTRIBUTE
        let mut cur = Cursor::new(&bytes);
        let record = decode_fields(READ_ATTR_STATUS, &mut cur).unwrap();
        assert!(!record.contains("datatype"));
        assert!(!record.contains("value"));

        let mut out = Vec::new();
        encode_fields(READ_ATTR_STATUS, &record, &mut out).unwrap();
        assert_eq!(out, bytes);
    }

    const ACTIVE_EP_RESP: &[FieldSpec] = &[
        FieldSpec::StopOnNonSuccess("status"),
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::CountPrefix("active_eps"),
        FieldSpec::RepeatCount("active_eps", Physical::Uint8),
    ];

    #[test]
    fn decodes_repeat_count_list() {
        let bytes = [0x00, 0x34, 0x12, 0x02, 0x05, 0x09];
        let mut cur = Cursor::new(&bytes);
        let record = decode_fields(ACTIVE_EP_RESP, &mut cur).unwrap();
        assert_eq!(record.require_status("status").unwrap(), Status::Success);
        assert_eq!(record.get("addr16"), Some(&Field::U16(0x1234)));
        assert_eq!(
            record.get("active_eps"),
            Some(&Field::List(vec![Field::U8(5), Field::U8(9)]))
        );
    }

    #[test]
    fn stops_on_non_success_status() {
        let bytes = [0x83, 0x34, 0x12];
        let mut cur = Cursor::new(&bytes);
        let record = decode_fields(ACTIVE_EP_RESP, &mut cur).unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(
            record.require_status("status").unwrap(),
            Status::UnsupManufClusterCommand
        );
        // Trailing bytes are left for the caller, not consumed or rejected.
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn encode_roundtrips_decode() {
        let bytes = [0x00, 0x34, 0x12, 0x02, 0x05, 0x09];
        let mut cur = Cursor::new(&bytes);
        let record = decode_fields(ACTIVE_EP_RESP, &mut cur).unwrap();
        let mut out = Vec::new();
        encode_fields(ACTIVE_EP_RESP, &record, &mut out).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn empty_repeat_count_list_encodes_to_zero_bytes() {
        let mut record = Record::new();
        record.insert("status", Field::Status(Status::Success));
        record.insert("addr16", Field::U16(0));
        record.insert("active_eps", Field::List(vec![]));
        let mut out = Vec::new();
        encode_fields(ACTIVE_EP_RESP, &record, &mut out).unwrap();
        assert_eq!(out, vec![0x00, 0x00, 0x00, 0x00]);
    }
}
