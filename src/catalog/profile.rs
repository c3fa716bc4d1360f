// SPDX-License-Identifier: MIT OR Apache-2.0
//! Profile-wide (general) ZCL commands — Table 2-3 in the ZCL Spec. These
//! are the commands carried by frame control's "cluster-specific" bit set
//! to 0, shared across every cluster.
//!
//! The Python source prefixed each top-level list field with a bare `*`
//! marker and no matching `n_` count field; `RepeatToEnd` is the corrected
//! model for all of them (`SPEC_FULL.md` §9).

use crate::descriptor::{CompositeKind, FieldSpec, Physical};

pub struct ProfileCommand {
    pub name: &'static str,
    pub id: u8,
    pub fields: &'static [FieldSpec],
}

macro_rules! cmd {
    ($name:literal, $id:expr, [$($field:expr),* $(,)?]) => {
        ProfileCommand { name: $name, id: $id, fields: &[$($field),*] }
    };
}

pub static PROFILE_COMMANDS: &[ProfileCommand] = &[
    // ZCL Spec -- "2.4.1 Read Attributes Command"
    cmd!("read_attributes", 0x00, [
        FieldSpec::RepeatToEnd("attributes", Physical::Uint16),
    ]),
    // ZCL Spec -- "2.4.2 Read Attributes Response Command"
    cmd!("read_attributes_response", 0x01, [
        FieldSpec::RepeatToEnd("attributes", Physical::Composite(CompositeKind::ReadAttrStatus)),
    ]),
    // ZCL Spec -- "2.4.3 Write Attributes Command"
    cmd!("write_attributes", 0x02, [
        FieldSpec::RepeatToEnd("attributes", Physical::Composite(CompositeKind::WriteAttr)),
    ]),
    // ZCL Spec -- "2.4.4 Write Attributes Undivided Command"
    cmd!("write_attributes_undivided", 0x03, [
        FieldSpec::RepeatToEnd("attributes", Physical::Composite(CompositeKind::WriteAttr)),
    ]),
    // ZCL Spec -- "2.4.5 Write Attributes Response Command"
    cmd!("write_attributes_response", 0x04, [
        FieldSpec::RepeatToEnd("attributes", Physical::Composite(CompositeKind::WriteAttrStatus)),
    ]),
    // ZCL Spec -- "2.4.6 Write Attributes No Response Command"
    cmd!("write_attributes_no_response", 0x05, [
        FieldSpec::RepeatToEnd("attributes", Physical::Composite(CompositeKind::WriteAttr)),
    ]),
    // ZCL Spec -- "2.4.7 Configure Reporting Command"
    cmd!("configure_reporting", 0x06, [
        FieldSpec::RepeatToEnd("configs", Physical::Composite(CompositeKind::AttrReportingConfig)),
    ]),
    // ZCL Spec -- "2.4.8 Configure Reporting Response Command"
    cmd!("configure_reporting_response", 0x07, [
        FieldSpec::RepeatToEnd("statuses", Physical::Composite(CompositeKind::AttrReportingStatus)),
    ]),
    // ZCL Spec -- "2.4.11 Report Attributes Command"
    cmd!("report_attributes", 0x0a, [
        FieldSpec::RepeatToEnd("attributes", Physical::Composite(CompositeKind::ReportedAttribute)),
    ]),
    // ZCL Spec -- "2.4.12 Default Response Command"
    cmd!("default_response", 0x0b, [
        FieldSpec::Fixed("command", Physical::Uint8),
        FieldSpec::Fixed("status", Physical::Status8),
    ]),
];

#[must_use]
pub fn by_name(name: &str) -> Option<&'static ProfileCommand> {
    PROFILE_COMMANDS.iter().find(|c| c.name == name)
}

#[must_use]
pub fn by_id(id: u8) -> Option<&'static ProfileCommand> {
    PROFILE_COMMANDS.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<u8> = PROFILE_COMMANDS.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[test]
    fn default_response_is_a_fixed_pair() {
        let dr = by_id(0x0b).unwrap();
        assert_eq!(dr.fields.len(), 2);
    }
}
