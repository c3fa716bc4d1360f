// SPDX-License-Identifier: MIT OR Apache-2.0
//! ZCL frame control and the top-level decode/encode entry points.
//!
//! ZCL Spec -- "2.1.1 Parsing and Generation of the ZCL Header".

use bitflags::bitflags;

use crate::catalog::{self, clusters::Cluster, profile};
use crate::descriptor::{decode_fields, encode_fields, Record};
use crate::error::{Error, Result};
use crate::options::DecodeOptions;
use crate::primitive::Cursor;

bitflags! {
    /// The one-byte frame-control field. Bits 1, 5, 6, 7 are reserved.
    struct FrameControl: u8 {
        const CLUSTER_SPECIFIC = 0x01;
        const MANUFACTURER_SPECIFIC = 0x04;
        const DIRECTION_SERVER_TO_CLIENT = 0x08;
        const DISABLE_DEFAULT_RESPONSE = 0x10;
    }
}

const RESERVED_BITS: u8 = 0xe2; // !(0x01 | 0x04 | 0x08 | 0x10)

/// Which table a decoded command came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Profile,
    Cluster,
}

/// Direction a cluster-specific or profile command travels, carried in
/// frame-control bit 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    ClientToServer,
    ServerToClient,
}

#[derive(Debug, Clone)]
pub struct DecodedFrame {
    pub cluster_name: &'static str,
    pub seq: u8,
    pub kind: CommandKind,
    pub command_name: &'static str,
    pub direction: Direction,
    pub manufacturer_code: Option<u16>,
    pub default_response_requested: bool,
    pub fields: Record,
}

/// Decodes a ZCL frame addressed to `cluster_id`.
pub fn decode_zcl(cluster_id: u16, bytes: &[u8], options: DecodeOptions) -> Result<DecodedFrame> {
    let cluster = catalog::require_cluster_by_id(cluster_id)?;
    let mut cur = Cursor::new(bytes);

    let raw_fc = cur.read_u8()?;
    if !options.allow_reserved_bits && raw_fc & RESERVED_BITS != 0 {
        return Err(Error::Malformed(format!(
            "frame-control 0x{raw_fc:02x} sets reserved bits"
        )));
    }
    let fc = FrameControl::from_bits_truncate(raw_fc);

    let manufacturer_code = if fc.contains(FrameControl::MANUFACTURER_SPECIFIC) {
        Some(cur.read_u16()?)
    } else {
        None
    };

    let seq = cur.read_u8()?;
    let command_id = cur.read_u8()?;

    let direction = if fc.contains(FrameControl::DIRECTION_SERVER_TO_CLIENT) {
        Direction::ServerToClient
    } else {
        Direction::ClientToServer
    };
    let default_response_requested = !fc.contains(FrameControl::DISABLE_DEFAULT_RESPONSE);

    let (kind, command_name, command_fields) = if fc.contains(FrameControl::CLUSTER_SPECIFIC) {
        let cmd = match direction {
            Direction::ClientToServer => cluster.received_by_id(command_id),
            Direction::ServerToClient => cluster.generated_by_id(command_id),
        }
        .ok_or_else(|| Error::UnknownCommand { cluster: cluster.name.to_string(), command: command_id })?;
        (CommandKind::Cluster, cmd.name, cmd.fields)
    } else {
        let cmd = profile::by_id(command_id)
            .ok_or_else(|| Error::UnknownCommand { cluster: cluster.name.to_string(), command: command_id })?;
        (CommandKind::Profile, cmd.name, cmd.fields)
    };

    let fields = decode_fields(command_fields, &mut cur)?;
    log::debug!(
        "decoded zcl '{}'.'{}' seq={seq} kind={kind:?} fields={}",
        cluster.name,
        command_name,
        fields.len()
    );

    Ok(DecodedFrame {
        cluster_name: cluster.name,
        seq,
        kind,
        command_name,
        direction,
        manufacturer_code,
        default_response_requested,
        fields,
    })
}

fn build_frame_control(
    cluster_specific: bool,
    direction: Direction,
    default_response: bool,
    manufacturer_code: Option<u16>,
) -> FrameControl {
    let mut fc = FrameControl::empty();
    if cluster_specific {
        fc.insert(FrameControl::CLUSTER_SPECIFIC);
    }
    if manufacturer_code.is_some() {
        fc.insert(FrameControl::MANUFACTURER_SPECIFIC);
    }
    if matches!(direction, Direction::ServerToClient) {
        fc.insert(FrameControl::DIRECTION_SERVER_TO_CLIENT);
    }
    if !default_response {
        fc.insert(FrameControl::DISABLE_DEFAULT_RESPONSE);
    }
    fc
}

fn emit_header(
    out: &mut Vec<u8>,
    fc: FrameControl,
    manufacturer_code: Option<u16>,
    seq: u8,
    command_id: u8,
) {
    crate::primitive::write_u8(out, fc.bits());
    if let Some(code) = manufacturer_code {
        crate::primitive::write_u16(out, code);
    }
    crate::primitive::write_u8(out, seq);
    crate::primitive::write_u8(out, command_id);
}

/// Encodes a cluster-specific command, returning the cluster's id and the
/// complete wire bytes.
pub fn encode_cluster_command(
    cluster_name: &str,
    command_name: &str,
    seq: u8,
    direction: Direction,
    default_response: bool,
    manufacturer_code: Option<u16>,
    fields: &Record,
) -> Result<(u16, Vec<u8>)> {
    let cluster: &'static Cluster = catalog::require_cluster_by_name(cluster_name)?;
    let cmd = match direction {
        Direction::ClientToServer => cluster.received_by_name(command_name),
        Direction::ServerToClient => cluster.generated_by_name(command_name),
    }
    .ok_or_else(|| Error::UnknownCommand { cluster: cluster.name.to_string(), command: 0 })?;

    let fc = build_frame_control(true, direction, default_response, manufacturer_code);
    let mut out = Vec::new();
    emit_header(&mut out, fc, manufacturer_code, seq, cmd.id);
    encode_fields(cmd.fields, fields, &mut out)?;
    Ok((cluster.id, out))
}

/// Encodes a profile-wide command against `cluster_name`'s cluster id.
pub fn encode_profile_command(
    cluster_name: &str,
    command_name: &str,
    seq: u8,
    direction: Direction,
    default_response: bool,
    manufacturer_code: Option<u16>,
    fields: &Record,
) -> Result<(u16, Vec<u8>)> {
    let cluster: &'static Cluster = catalog::require_cluster_by_name(cluster_name)?;
    let cmd = profile::by_name(command_name)
        .ok_or_else(|| Error::UnknownCommand { cluster: cluster.name.to_string(), command: 0 })?;

    let fc = build_frame_control(false, direction, default_response, manufacturer_code);
    let mut out = Vec::new();
    emit_header(&mut out, fc, manufacturer_code, seq, cmd.id);
    encode_fields(cmd.fields, fields, &mut out)?;
    Ok((cluster.id, out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::Field;

    #[test]
    fn move_to_level_roundtrips() {
        let mut fields = Record::new();
        fields.insert("level", Field::U8(0x80));
        fields.insert("transition_time", Field::U16(0x000a));

        let (cluster_id, bytes) = encode_cluster_command(
            "level_control",
            "move_to_level",
            0x05,
            Direction::ClientToServer,
            true,
            None,
            &fields,
        )
        .unwrap();
        assert_eq!(cluster_id, 0x0008);
        assert_eq!(bytes, [0x01, 0x05, 0x00, 0x80, 0x0a, 0x00]);

        let decoded = decode_zcl(cluster_id, &bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded.command_name, "move_to_level");
        assert_eq!(decoded.kind, CommandKind::Cluster);
        assert_eq!(decoded.seq, 0x05);
        assert!(decoded.default_response_requested);
        assert_eq!(decoded.fields.get("level"), Some(&Field::U8(0x80)));
    }

    #[test]
    fn reserved_bit_is_rejected_by_default() {
        let bytes = [0x20, 0x00, 0x00]; // bit 5 set
        let err = decode_zcl(0x0006, &bytes, DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)));
    }

    #[test]
    fn reserved_bit_is_tolerated_when_allowed() {
        let bytes = [0x20, 0x00, 0x00]; // off, cluster 0x0006
        let options = DecodeOptions { allow_reserved_bits: true };
        let decoded = decode_zcl(0x0006, &bytes, options).unwrap();
        assert_eq!(decoded.command_name, "off");
    }

    #[test]
    fn manufacturer_specific_bit_carries_code() {
        let mut fields = Record::new();
        let (cluster_id, bytes) = encode_profile_command(
            "onoff",
            "read_attributes",
            0x01,
            Direction::ClientToServer,
            true,
            Some(0x1234),
            {
                fields.insert("attributes", Field::List(vec![Field::U16(0x0000)]));
                &fields
            },
        )
        .unwrap();
        let decoded = decode_zcl(cluster_id, &bytes, DecodeOptions::default()).unwrap();
        assert_eq!(decoded.manufacturer_code, Some(0x1234));
        assert_eq!(decoded.kind, CommandKind::Profile);
    }
}
