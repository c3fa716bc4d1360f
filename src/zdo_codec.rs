// SPDX-License-Identifier: MIT OR Apache-2.0
//! ZDO request/response codec. ZDO frames have no ZCL frame-control
//! octet: the cluster id selects the descriptor set directly, and the
//! only thing ahead of the body is the one-byte transaction sequence
//! number (Zigbee Spec -- "2.4.1.1 APS Data Service").

use crate::catalog::{self, zdo::ZdoEntry};
use crate::descriptor::{decode_fields, encode_fields, Record};
use crate::error::Result;
use crate::primitive::Cursor;

/// Decodes a ZDO frame addressed to `cluster_id`. Returns the matched
/// entry's name, the transaction sequence number, and the decoded body.
pub fn decode_zdo(cluster_id: u16, bytes: &[u8]) -> Result<(&'static str, u8, Record)> {
    let entry: &'static ZdoEntry = catalog::require_zdo_by_cluster(cluster_id)?;
    let mut cur = Cursor::new(bytes);
    let seq = cur.read_u8()?;
    let record = decode_fields(entry.fields, &mut cur)?;
    log::debug!("decoded zdo '{}' seq={seq} fields={}", entry.name, record.len());
    Ok((entry.name, seq, record))
}

/// Encodes a ZDO frame for the entry named `name`, returning its cluster
/// id and the complete wire bytes (sequence number + body).
pub fn encode_zdo(name: &str, seq: u8, fields: &Record) -> Result<(u16, Vec<u8>)> {
    let entry: &'static ZdoEntry = catalog::require_zdo_by_name(name)?;
    let mut out = Vec::new();
    crate::primitive::write_u8(&mut out, seq);
    encode_fields(entry.fields, fields, &mut out)?;
    Ok((entry.cluster, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Field;
    use crate::status::Status;

    #[test]
    fn active_ep_request_roundtrips() {
        let bytes = [0x01, 0x34, 0x12]; // seq=1, addr16=0x1234
        let (name, seq, record) = decode_zdo(0x0005, &bytes).unwrap();
        assert_eq!(name, "active_ep");
        assert_eq!(seq, 1);
        assert_eq!(record.get("addr16"), Some(&Field::U16(0x1234)));

        let (cluster, out) = encode_zdo("active_ep", seq, &record).unwrap();
        assert_eq!(cluster, 0x0005);
        assert_eq!(out, bytes);
    }

    #[test]
    fn active_ep_response_stops_on_failure() {
        let bytes = [0x09, 0x86]; // seq=9, status=UNSUPPORTED_ATTRIBUTE, no addr16/list follows
        let (name, seq, record) = decode_zdo(0x8005, &bytes).unwrap();
        assert_eq!(name, "active_ep_resp");
        assert_eq!(seq, 9);
        assert_eq!(record.require_status("status").unwrap(), Status::UnsupportedAttribute);
        assert!(!record.contains("addr16"));
        assert!(!record.contains("active_eps"));
    }

    #[test]
    fn simple_desc_response_failure_reencodes_without_the_descriptor_list() {
        // status=NOT_FOUND short-circuits before addr16/simple_descriptors
        // are ever read; re-encoding must not require them either.
        let bytes = [0x04, 0x8b];
        let (name, seq, record) = decode_zdo(0x8004, &bytes).unwrap();
        assert_eq!(name, "simple_desc_resp");
        assert_eq!(record.require_status("status").unwrap(), Status::NotFound);
        assert!(!record.contains("addr16"));
        assert!(!record.contains("simple_descriptors"));

        let (cluster, out) = encode_zdo("simple_desc_resp", seq, &record).unwrap();
        assert_eq!(cluster, 0x8004);
        assert_eq!(out, bytes);
    }

    #[test]
    fn active_ep_response_with_endpoints_roundtrips() {
        let bytes = [0x02, 0x00, 0x34, 0x12, 0x02, 0x01, 0x0a];
        let (_, _, record) = decode_zdo(0x8005, &bytes).unwrap();
        let endpoints = record.require_list("active_eps").unwrap();
        assert_eq!(endpoints, &[Field::U8(1), Field::U8(0x0a)]);

        let (_, out) = encode_zdo("active_ep_resp", 0x02, &record).unwrap();
        assert_eq!(out, bytes);
    }
}
