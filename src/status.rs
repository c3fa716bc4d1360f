// SPDX-License-Identifier: MIT OR Apache-2.0
//! The ZCL 8-bit status enumeration.

use core::convert::TryFrom;
use strum_macros::EnumIter;

/// ZCL Spec -- "2.5.3 General Status Codes".
///
/// Unknown codes are rejected by the `status8` primitive decoder rather
/// than substituted with a fallback variant.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Status {
    Success = 0x00,
    Failure = 0x01,
    NotAuthorized = 0x7e,
    ReservedFieldNotZero = 0x7f,
    MalformedCommand = 0x80,
    UnsupClusterCommand = 0x81,
    UnsupGeneralCommand = 0x82,
    UnsupManufClusterCommand = 0x83,
    UnsupManufGeneralCommand = 0x84,
    InvalidField = 0x85,
    UnsupportedAttribute = 0x86,
    InvalidValue = 0x87,
    ReadOnly = 0x88,
    InsufficientSpace = 0x89,
    DuplicateExists = 0x8a,
    NotFound = 0x8b,
    UnreportableAttribute = 0x8c,
    InvalidDataType = 0x8d,
    InvalidSelector = 0x8e,
    WriteOnly = 0x8f,
    InconsistentStartupState = 0x90,
    DefinedOutOfBand = 0x91,
    Inconsistent = 0x92,
    ActionDenied = 0x93,
    Timeout = 0x94,
    Abort = 0x95,
    InvalidImage = 0x96,
    WaitForData = 0x97,
    NoImageAvailable = 0x98,
    RequireMoreImage = 0x99,
    NotificationPending = 0x9a,
    HardwareFailure = 0xc0,
    SoftwareFailure = 0xc1,
    CalibrationError = 0xc2,
    UnsupportedCluster = 0xc3,
}

impl Status {
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Status::Success => "SUCCESS",
            Status::Failure => "FAILURE",
            Status::NotAuthorized => "NOT_AUTHORIZED",
            Status::ReservedFieldNotZero => "RESERVED_FIELD_NOT_ZERO",
            Status::MalformedCommand => "MALFORMED_COMMAND",
            Status::UnsupClusterCommand => "UNSUP_CLUSTER_COMMAND",
            Status::UnsupGeneralCommand => "UNSUP_GENERAL_COMMAND",
            Status::UnsupManufClusterCommand => "UNSUP_MANUF_CLUSTER_COMMAND",
            Status::UnsupManufGeneralCommand => "UNSUP_MANUF_GENERAL_COMMAND",
            Status::InvalidField => "INVALID_FIELD",
            Status::UnsupportedAttribute => "UNSUPPORTED_ATTRIBUTE",
            Status::InvalidValue => "INVALID_VALUE",
            Status::ReadOnly => "READ_ONLY",
            Status::InsufficientSpace => "INSUFFICIENT_SPACE",
            Status::DuplicateExists => "DUPLICATE_EXISTS",
            Status::NotFound => "NOT_FOUND",
            Status::UnreportableAttribute => "UNREPORTABLE_ATTRIBUTE",
            Status::InvalidDataType => "INVALID_DATA_TYPE",
            Status::InvalidSelector => "INVALID_SELECTOR",
            Status::WriteOnly => "WRITE_ONLY",
            Status::InconsistentStartupState => "INCONSISTENT_STARTUP_STATE",
            Status::DefinedOutOfBand => "DEFINED_OUT_OF_BAND",
            Status::Inconsistent => "INCONSISTENT",
            Status::ActionDenied => "ACTION_DENIED",
            Status::Timeout => "TIMEOUT",
            Status::Abort => "ABORT",
            Status::InvalidImage => "INVALID_IMAGE",
            Status::WaitForData => "WAIT_FOR_DATA",
            Status::NoImageAvailable => "NO_IMAGE_AVAILABLE",
            Status::RequireMoreImage => "REQUIRE_MORE_IMAGE",
            Status::NotificationPending => "NOTIFICATION_PENDING",
            Status::HardwareFailure => "HARDWARE_FAILURE",
            Status::SoftwareFailure => "SOFTWARE_FAILURE",
            Status::CalibrationError => "CALIBRATION_ERROR",
            Status::UnsupportedCluster => "UNSUPPORTED_CLUSTER",
        }
    }
}

impl TryFrom<u8> for Status {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, u8> {
        use strum::IntoEnumIterator;
        Status::iter().find(|s| *s as u8 == value).ok_or(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_roundtrips() {
        let status = Status::try_from(0x83).unwrap();
        assert_eq!(status, Status::UnsupManufClusterCommand);
        assert_eq!(status as u8, 0x83);
        assert_eq!(status.name(), "UNSUP_MANUF_CLUSTER_COMMAND");
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert_eq!(Status::try_from(0x02), Err(0x02));
    }
}
