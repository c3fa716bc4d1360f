// SPDX-License-Identifier: MIT OR Apache-2.0
//! End-to-end scenarios driven only through the public API.

use zcl_codec::{
    decode_zcl, decode_zdo, encode_cluster_command, encode_profile_command, encode_zdo,
    CommandKind, DataType, DecodeOptions, Direction, Field, Record, Status, Value,
};

#[test]
fn on_command_roundtrips() {
    let (cluster_id, bytes) =
        encode_cluster_command("onoff", "on", 7, Direction::ClientToServer, true, None, &Record::new()).unwrap();
    assert_eq!(cluster_id, 0x0006);
    assert_eq!(bytes, [0x01, 0x07, 0x01]);

    let decoded = decode_zcl(cluster_id, &bytes, DecodeOptions::default()).unwrap();
    assert_eq!(decoded.cluster_name, "onoff");
    assert_eq!(decoded.seq, 7);
    assert_eq!(decoded.kind, CommandKind::Cluster);
    assert_eq!(decoded.command_name, "on");
    assert!(decoded.default_response_requested);
    assert!(decoded.fields.is_empty());
}

#[test]
fn move_to_level_roundtrips() {
    let mut fields = Record::new();
    fields.insert("level", Field::U8(200));
    fields.insert("transition_time", Field::U16(10));

    let (cluster_id, bytes) = encode_cluster_command(
        "level_control",
        "move_to_level",
        3,
        Direction::ClientToServer,
        true,
        None,
        &fields,
    )
    .unwrap();
    assert_eq!(cluster_id, 0x0008);
    assert_eq!(bytes, [0x01, 0x03, 0x00, 0xC8, 0x0A, 0x00]);
}

#[test]
fn active_ep_response_roundtrips() {
    let bytes = [0x00, 0x00, 0x34, 0x12, 0x02, 0x05, 0x09];
    let (name, seq, record) = decode_zdo(0x8005, &bytes).unwrap();
    assert_eq!(name, "active_ep_resp");
    assert_eq!(seq, 0);
    assert_eq!(record.require_status("status").unwrap(), Status::Success);
    assert_eq!(record.get("addr16"), Some(&Field::U16(0x1234)));
    assert_eq!(record.require_list("active_eps").unwrap(), &[Field::U8(5), Field::U8(9)]);

    let (cluster_id, out) = encode_zdo("active_ep_resp", seq, &record).unwrap();
    assert_eq!(cluster_id, 0x8005);
    assert_eq!(out, bytes);
}

#[test]
fn active_ep_response_stops_early_on_non_success() {
    let bytes = [0x00, 0x83, 0x34, 0x12];
    let (name, seq, record) = decode_zdo(0x8005, &bytes).unwrap();
    assert_eq!(name, "active_ep_resp");
    assert_eq!(seq, 0);
    assert_eq!(record.require_status("status").unwrap(), Status::UnsupManufClusterCommand);
    assert!(!record.contains("addr16"));
    assert!(!record.contains("active_eps"));
}

#[test]
fn read_attributes_request_and_response_roundtrip() {
    let mut request_fields = Record::new();
    request_fields.insert("attributes", Field::List(vec![Field::U16(0x0000)]));
    let (cluster_id, request_bytes) = encode_profile_command(
        "onoff",
        "read_attributes",
        1,
        Direction::ClientToServer,
        true,
        None,
        &request_fields,
    )
    .unwrap();
    assert_eq!(cluster_id, 0x0006);
    assert_eq!(request_bytes, [0x00, 0x01, 0x00, 0x00, 0x00]);

    let mut status_record = Record::new();
    status_record.insert("attribute", Field::U16(0x0000));
    status_record.insert("status", Field::Status(Status::Success));
    status_record.insert("datatype", Field::DataType(DataType::Boolean));
    status_record.insert("value", Field::Value(Value::Bool(true)));

    let mut response_fields = Record::new();
    response_fields.insert("attributes", Field::List(vec![Field::Composite(Box::new(status_record))]));
    let (_, response_bytes) = encode_profile_command(
        "onoff",
        "read_attributes_response",
        1,
        Direction::ServerToClient,
        true,
        None,
        &response_fields,
    )
    .unwrap();

    let decoded = decode_zcl(cluster_id, &response_bytes, DecodeOptions::default()).unwrap();
    assert_eq!(decoded.command_name, "read_attributes_response");
    assert_eq!(decoded.kind, CommandKind::Profile);
    let attributes = decoded.fields.require_list("attributes").unwrap();
    assert_eq!(attributes.len(), 1);
    let Field::Composite(entry) = &attributes[0] else { panic!("expected composite entry") };
    assert_eq!(entry.get("attribute"), Some(&Field::U16(0x0000)));
    assert_eq!(entry.require_status("status").unwrap(), Status::Success);
    assert_eq!(entry.get("value"), Some(&Field::Value(Value::Bool(true))));
}

#[test]
fn configure_reporting_on_analog_attribute_matches_worked_example() {
    let mut config = Record::new();
    config.insert("direction", Field::U8(0));
    config.insert("attribute", Field::U16(0x0000));
    config.insert("datatype", Field::DataType(DataType::Uint8));
    config.insert("minimum", Field::U16(1));
    config.insert("maximum", Field::U16(60));
    config.insert("delta", Field::Value(Value::Uint8(2)));

    let mut fields = Record::new();
    fields.insert("configs", Field::List(vec![Field::Composite(Box::new(config))]));

    let (_, bytes) = encode_profile_command(
        "onoff",
        "configure_reporting",
        1,
        Direction::ClientToServer,
        true,
        None,
        &fields,
    )
    .unwrap();

    // frame-control, seq, command id, then the worked 9-byte body.
    assert_eq!(&bytes[3..], [0x00, 0x00, 0x00, 0x20, 0x01, 0x00, 0x3C, 0x00, 0x02]);
}
