// SPDX-License-Identifier: MIT OR Apache-2.0
//! Fixed-width little-endian integers, length-prefixed strings, and EUI-64
//! addresses: the non-allocating building blocks the descriptor interpreter
//! is built from.

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::status::Status;

/// A read-only cursor over a decode buffer.
///
/// Every `read_*` method advances `pos` only on success, so a failed read
/// never leaves the cursor in a half-consumed state.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Malformed(format!(
                "buffer underrun: need {n} bytes, have {}",
                self.remaining()
            )));
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take(1)?[0] as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        let b = self.take(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let b = self.take(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(b);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_i64(&mut self) -> Result<i64> {
        let b = self.take(8)?;
        let mut buf = [0u8; 8];
        buf.copy_from_slice(b);
        Ok(i64::from_le_bytes(buf))
    }

    /// Reads a one-byte length prefix followed by that many bytes of UTF-8.
    pub fn read_string(&mut self) -> Result<String> {
        let len = usize::from(self.read_u8()?);
        let bytes = self.take(len)?;
        core::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| Error::Malformed(format!("invalid UTF-8 in string field: {e}")))
    }

    pub fn read_status(&mut self) -> Result<Status> {
        let code = self.read_u8()?;
        Status::try_from(code).map_err(|_| Error::UnknownStatus(code))
    }

    pub fn read_eui64(&mut self) -> Result<Eui64> {
        self.read_u64().map(Eui64)
    }

    /// Returns the unread tail of the buffer without consuming it.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

pub fn write_u8(out: &mut Vec<u8>, value: u8) {
    out.push(value);
}

pub fn write_i8(out: &mut Vec<u8>, value: i8) {
    out.push(value as u8);
}

pub fn write_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_i32(out: &mut Vec<u8>, value: i32) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u64(out: &mut Vec<u8>, value: u64) {
    out.extend_from_slice(&value.to_le_bytes());
}

pub fn write_i64(out: &mut Vec<u8>, value: i64) {
    out.extend_from_slice(&value.to_le_bytes());
}

/// Writes a one-byte length prefix followed by the UTF-8 payload.
///
/// # Errors
///
/// Returns [`Error::Malformed`] if the string is longer than 255 bytes.
pub fn write_string(out: &mut Vec<u8>, value: &str) -> Result<()> {
    let bytes = value.as_bytes();
    let len = u8::try_from(bytes.len())
        .map_err(|_| Error::Malformed(format!("string of {} bytes exceeds 255", bytes.len())))?;
    out.push(len);
    out.extend_from_slice(bytes);
    Ok(())
}

pub fn write_status(out: &mut Vec<u8>, value: Status) {
    out.push(value as u8);
}

/// A 64-bit IEEE EUI-64 device address.
///
/// The wire form is identical to `UINT64`. On encode, callers may supply
/// either the integer directly or a 16-hex-digit string spelling (via
/// [`FromStr`]); the canonical in-memory representation is always the
/// 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Eui64(pub u64);

impl From<u64> for Eui64 {
    fn from(value: u64) -> Self {
        Eui64(value)
    }
}

impl FromStr for Eui64 {
    type Err = Error;

    /// Parses a 16-hex-digit EUI-64 (optionally separated like
    /// `00:11:22:33:44:55:66:77`, stripped before decoding).
    fn from_str(s: &str) -> Result<Self> {
        let stripped: String = s.chars().filter(|c| *c != ':' && *c != '-').collect();
        let bytes = hex::decode(&stripped)
            .map_err(|e| Error::Malformed(format!("invalid EUI-64 hex string {s:?}: {e}")))?;
        if bytes.len() != 8 {
            return Err(Error::Malformed(format!(
                "EUI-64 hex string {s:?} must decode to 8 bytes, got {}",
                bytes.len()
            )));
        }
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&bytes);
        Ok(Eui64(u64::from_be_bytes(buf)))
    }
}

impl fmt::Display for Eui64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_integers() {
        let mut out = Vec::new();
        write_u16(&mut out, 0x1234);
        write_i32(&mut out, -5);
        let mut cur = Cursor::new(&out);
        assert_eq!(cur.read_u16().unwrap(), 0x1234);
        assert_eq!(cur.read_i32().unwrap(), -5);
        assert!(cur.is_empty());
    }

    #[test]
    fn empty_string_is_single_zero_byte() {
        let mut out = Vec::new();
        write_string(&mut out, "").unwrap();
        assert_eq!(out, vec![0x00]);
        let mut cur = Cursor::new(&out);
        assert_eq!(cur.read_string().unwrap(), "");
    }

    #[test]
    fn string_roundtrip() {
        let mut out = Vec::new();
        write_string(&mut out, "hello").unwrap();
        assert_eq!(out, vec![5, b'h', b'e', b'l', b'l', b'o']);
        let mut cur = Cursor::new(&out);
        assert_eq!(cur.read_string().unwrap(), "hello");
    }

    #[test]
    fn underrun_is_malformed() {
        let mut cur = Cursor::new(&[0x01]);
        assert!(matches!(cur.read_u16(), Err(Error::Malformed(_))));
    }

    #[test]
    fn eui64_from_hex_string() {
        let addr: Eui64 = "0011223344556677".parse().unwrap();
        assert_eq!(addr.0, 0x0011_2233_4455_6677);
    }

    #[test]
    fn eui64_from_colon_separated_hex() {
        let addr: Eui64 = "00:11:22:33:44:55:66:77".parse().unwrap();
        assert_eq!(addr.0, 0x0011_2233_4455_6677);
    }
}
