// SPDX-License-Identifier: MIT OR Apache-2.0
//! Decode-time configuration. There is no file or environment-variable
//! configuration surface; callers that embed this crate construct
//! [`DecodeOptions`] directly and pass it to `decode_zcl`.

/// Tunables for [`crate::zcl_codec::decode_zcl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// When `false` (the default), a frame-control octet with any of the
    /// reserved bits (1, 5, 6, 7) set is rejected with
    /// [`crate::error::Error::Malformed`]. Set `true` to tolerate
    /// nonconformant senders instead of refusing to decode.
    pub allow_reserved_bits: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        DecodeOptions { allow_reserved_bits: false }
    }
}
