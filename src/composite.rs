// SPDX-License-Identifier: MIT OR Apache-2.0
//! The built-in composite descriptor types: `simple_descriptor`,
//! `read_attr_status`, `write_attr`, `write_attr_status`,
//! `attr_reporting_config`, `attr_reporting_status`, `reported_attribute`.
//!
//! Most of these are themselves plain [`FieldSpec`] lists and go through
//! the generic interpreter. `attr_reporting_config`/`attr_reporting_status`
//! branch on whether the attribute's `DataType` is analog, which is not
//! expressible as a linear field list, so they are hand-written instead
//! (see `SPEC_FULL.md` §9).

use core::convert::TryFrom;

use crate::descriptor::{decode_fields, encode_fields, CompositeKind, Field, FieldSpec, Physical, Record};
use crate::error::{Error, Result};
use crate::primitive::{self, Cursor};

const SIMPLE_DESCRIPTOR: &[FieldSpec] = &[
    FieldSpec::Fixed("endpoint", Physical::Uint8),
    FieldSpec::Fixed("profile", Physical::Uint16),
    FieldSpec::Fixed("device_identifier", Physical::Uint16),
    FieldSpec::Fixed("device_version", Physical::Uint8),
    FieldSpec::CountPrefix("in_clusters"),
    FieldSpec::RepeatCount("in_clusters", Physical::Uint16),
    FieldSpec::CountPrefix("out_clusters"),
    FieldSpec::RepeatCount("out_clusters", Physical::Uint16),
];

const READ_ATTR_STATUS: &[FieldSpec] = &[
    FieldSpec::Fixed("attribute", Physical::Uint16),
    FieldSpec::StopOnNonSuccess("status"),
    FieldSpec::Fixed("datatype", Physical::DataTypeTag),
    FieldSpec::DataTypedValue("value"),
];

const WRITE_ATTR: &[FieldSpec] = &[
    FieldSpec::Fixed("attribute", Physical::Uint16),
    FieldSpec::Fixed("datatype", Physical::DataTypeTag),
    FieldSpec::DataTypedValue("value"),
];

const WRITE_ATTR_STATUS: &[FieldSpec] = &[
    FieldSpec::Fixed("attribute", Physical::Uint16),
    FieldSpec::Fixed("status", Physical::Status8),
];

const ATTR_REPORTING_STATUS: &[FieldSpec] = &[
    FieldSpec::Fixed("status", Physical::Status8),
    FieldSpec::Fixed("direction", Physical::Uint8),
    FieldSpec::Fixed("attribute", Physical::Uint16),
];

const REPORTED_ATTRIBUTE: &[FieldSpec] = &[
    FieldSpec::Fixed("attribute", Physical::Uint16),
    FieldSpec::Fixed("datatype", Physical::DataTypeTag),
    FieldSpec::DataTypedValue("value"),
];

/// Decodes one invocation of `kind` from `cur`.
pub fn decode(kind: CompositeKind, cur: &mut Cursor<'_>) -> Result<Record> {
    match kind {
        CompositeKind::SimpleDescriptor => decode_fields(SIMPLE_DESCRIPTOR, cur),
        CompositeKind::ReadAttrStatus => decode_fields(READ_ATTR_STATUS, cur),
        CompositeKind::WriteAttr => decode_fields(WRITE_ATTR, cur),
        CompositeKind::WriteAttrStatus => decode_fields(WRITE_ATTR_STATUS, cur),
        CompositeKind::AttrReportingStatus => decode_fields(ATTR_REPORTING_STATUS, cur),
        CompositeKind::ReportedAttribute => decode_fields(REPORTED_ATTRIBUTE, cur),
        CompositeKind::AttrReportingConfig => decode_attr_reporting_config(cur),
    }
}

/// Encodes one invocation of `kind` from `record`, appending to `out`.
pub fn encode(kind: CompositeKind, out: &mut Vec<u8>, record: &Record) -> Result<()> {
    match kind {
        CompositeKind::SimpleDescriptor => encode_fields(SIMPLE_DESCRIPTOR, record, out),
        CompositeKind::ReadAttrStatus => encode_fields(READ_ATTR_STATUS, record, out),
        CompositeKind::WriteAttr => encode_fields(WRITE_ATTR, record, out),
        CompositeKind::WriteAttrStatus => encode_fields(WRITE_ATTR_STATUS, record, out),
        CompositeKind::AttrReportingStatus => encode_fields(ATTR_REPORTING_STATUS, record, out),
        CompositeKind::ReportedAttribute => encode_fields(REPORTED_ATTRIBUTE, record, out),
        CompositeKind::AttrReportingConfig => encode_attr_reporting_config(out, record),
    }
}

/// `direction:uint8, attribute:uint16, datatype:uint8, minimum:uint16,
/// maximum:uint16, [delta:datatype iff datatype is analog]`.
///
/// `minimum`/`maximum` are always the fixed-width reporting interval (in
/// seconds); only `delta` takes its width from the attribute's own
/// `DataType`, and only when that type is analog (ZCL Spec -- "2.5.2.1").
fn decode_attr_reporting_config(cur: &mut Cursor<'_>) -> Result<Record> {
    let mut record = Record::new();
    record.insert("direction", Field::U8(cur.read_u8()?));
    record.insert("attribute", Field::U16(cur.read_u16()?));
    let tag = cur.read_u8()?;
    let datatype = crate::value::DataType::try_from(tag).map_err(Error::UnknownDataType)?;
    record.insert("datatype", Field::DataType(datatype));
    record.insert("minimum", Field::U16(cur.read_u16()?));
    record.insert("maximum", Field::U16(cur.read_u16()?));
    if datatype.is_analog() {
        let delta = datatype.decode(cur)?;
        record.insert("delta", Field::Value(delta));
    }
    Ok(record)
}

fn encode_attr_reporting_config(out: &mut Vec<u8>, record: &Record) -> Result<()> {
    let direction = match record.require("direction")? {
        Field::U8(v) => *v,
        other => return Err(Error::InvalidState(format!("direction is not u8: {other:?}"))),
    };
    primitive::write_u8(out, direction);

    let attribute = match record.require("attribute")? {
        Field::U16(v) => *v,
        other => return Err(Error::InvalidState(format!("attribute is not u16: {other:?}"))),
    };
    primitive::write_u16(out, attribute);

    let datatype = record.require_data_type("datatype")?;
    primitive::write_u8(out, datatype as u8);

    let minimum = match record.require("minimum")? {
        Field::U16(v) => *v,
        other => return Err(Error::InvalidState(format!("minimum is not u16: {other:?}"))),
    };
    primitive::write_u16(out, minimum);

    let maximum = match record.require("maximum")? {
        Field::U16(v) => *v,
        other => return Err(Error::InvalidState(format!("maximum is not u16: {other:?}"))),
    };
    primitive::write_u16(out, maximum);

    if datatype.is_analog() {
        let delta = match record.require("delta")? {
            Field::Value(v) => v,
            other => return Err(Error::InvalidState(format!("delta is not a value: {other:?}"))),
        };
        datatype.encode(out, delta)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn analog_reporting_config_roundtrips_scenario_6() {
        let expected = [0x00, 0x00, 0x00, 0x20, 0x01, 0x00, 0x3C, 0x00, 0x02];
        let mut cur = Cursor::new(&expected);
        let record = decode(CompositeKind::AttrReportingConfig, &mut cur).unwrap();
        assert_eq!(record.get("direction"), Some(&Field::U8(0)));
        assert_eq!(record.get("attribute"), Some(&Field::U16(0)));
        assert_eq!(record.get("minimum"), Some(&Field::U16(1)));
        assert_eq!(record.get("maximum"), Some(&Field::U16(60)));
        assert_eq!(record.get("delta"), Some(&Field::Value(Value::Uint8(2))));

        let mut out = Vec::new();
        encode(CompositeKind::AttrReportingConfig, &mut out, &record).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn discrete_reporting_config_has_no_delta() {
        // datatype = BOOLEAN (0x10), not analog: no delta field at all.
        let bytes = [0x00, 0x00, 0x00, 0x10, 0x0a, 0x00, 0x3c, 0x00];
        let mut cur = Cursor::new(&bytes);
        let record = decode(CompositeKind::AttrReportingConfig, &mut cur).unwrap();
        assert!(!record.contains("delta"));
        assert!(cur.is_empty());

        let mut out = Vec::new();
        encode(CompositeKind::AttrReportingConfig, &mut out, &record).unwrap();
        assert_eq!(out, bytes);
    }

    #[test]
    fn read_attr_status_stops_before_value_on_failure() {
        let bytes = [0x00, 0x00, 0x86]; // attribute 0x0000, UNSUPPORTED_ATTRIBUTE
        let mut cur = Cursor::new(&bytes);
        let record = decode(CompositeKind::ReadAttrStatus, &mut cur).unwrap();
        assert_eq!(record.len(), 2);
        assert!(!record.contains("datatype"));
        assert!(!record.contains("value"));
    }
}
