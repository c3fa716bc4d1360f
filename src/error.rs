// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error kinds surfaced by every fallible operation in this crate.

use thiserror::Error;

/// Failure modes for ZDO/ZCL encode and decode.
///
/// None of these are recovered locally by the codec; they are always
/// surfaced to the caller. See `SPEC_FULL.md` §7 for the policy this
/// mirrors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown profile {0:?}")]
    UnknownProfile(String),

    #[error("unknown ZDO cluster 0x{0:04x}")]
    UnknownCluster(u16),

    #[error("unknown ZDO/ZCL name {0:?}")]
    UnknownName(String),

    #[error("unknown command {command:#04x} for cluster {cluster:?}")]
    UnknownCommand { cluster: String, command: u8 },

    #[error("unknown attribute {0:#06x}")]
    UnknownAttribute(u16),

    #[error("unknown status code {0:#04x}")]
    UnknownStatus(u8),

    #[error("unknown data type tag {0:#04x}")]
    UnknownDataType(u8),

    #[error("malformed frame: {0}")]
    Malformed(String),

    #[error("missing required field {0:?}")]
    MissingField(String),

    #[error("invalid codec state: {0}")]
    InvalidState(String),
}

pub type Result<T> = core::result::Result<T, Error>;
