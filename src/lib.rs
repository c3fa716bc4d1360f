// SPDX-License-Identifier: MIT OR Apache-2.0
//! Table-driven codec for ZigBee Device Object (ZDO) and ZigBee Cluster
//! Library (ZCL) frames. `zcl_codec::zdo_codec` and `zcl_codec::zcl_codec`
//! provide the encode/decode entry points; the descriptor interpreter
//! that drives both (`descriptor::decode_fields`/`encode_fields`) is
//! shared between them and walks a static table of [`descriptor::FieldSpec`]
//! values rather than a per-frame hand-written parser.
//!
//! The usage can be described in the high level with the following flow:
//!
//! 1. Look up the cluster or ZDO entry addressed by an incoming frame's
//!    destination cluster id (done internally by `decode_zcl`/`decode_zdo`).
//! 2. Decode the frame into a [`descriptor::Record`] — a name-keyed bag of
//!    [`descriptor::Field`] values.
//! 3. Inspect fields with [`descriptor::Record::get`] or the `require*`
//!    helpers.
//!
//! Encoding mirrors this in reverse: build a `Record`, then call
//! `encode_zdo`/`encode_cluster_command`/`encode_profile_command`.

#![deny(clippy::all)]

pub mod catalog;
pub mod composite;
pub mod descriptor;
pub mod dump;
pub mod error;
pub mod options;
pub mod primitive;
pub mod status;
pub mod value;
pub mod zcl_codec;
pub mod zdo_codec;

pub use descriptor::{Field, FieldSpec, Record};
pub use error::{Error, Result};
pub use options::DecodeOptions;
pub use primitive::Eui64;
pub use status::Status;
pub use value::{DataType, Value};
pub use zcl_codec::{decode_zcl, encode_cluster_command, encode_profile_command, CommandKind, DecodedFrame, Direction};
pub use zdo_codec::{decode_zdo, encode_zdo};
