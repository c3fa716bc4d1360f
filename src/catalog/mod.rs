// SPDX-License-Identifier: MIT OR Apache-2.0
//! Static lookup tables: ZigBee profiles, ZDO service clusters, ZCL
//! profile-wide commands, and ZCL cluster definitions.
//!
//! Every table here is a `'static` slice scanned linearly rather than a
//! hash map — the largest table (`clusters::CLUSTERS`) has well under a
//! hundred entries, so a `HashMap`/`OnceLock` would only add indirection.

pub mod clusters;
pub mod profile;
pub mod zdo;

use crate::error::{Error, Result};

pub struct Profile {
    pub name: &'static str,
    pub id: u16,
}

/// ZCL Spec -- "2.1.1.1.1 Profile Identifier". Only the profiles this
/// codec has catalog entries for are listed; an unrecognized id is still
/// a valid 16-bit value on the wire, just opaque to this crate.
pub static PROFILES: &[Profile] = &[
    Profile { name: "zigbee", id: 0x0000 },
    Profile { name: "home_automation", id: 0x0104 },
    Profile { name: "zigbee_light_link", id: 0xc05e },
];

#[must_use]
pub fn profile_by_name(name: &str) -> Option<&'static Profile> {
    PROFILES.iter().find(|p| p.name == name)
}

#[must_use]
pub fn profile_by_id(id: u16) -> Option<&'static Profile> {
    PROFILES.iter().find(|p| p.id == id)
}

pub fn require_profile_by_name(name: &str) -> Result<&'static Profile> {
    profile_by_name(name).ok_or_else(|| Error::UnknownProfile(name.to_string()))
}

pub fn require_cluster_by_name(name: &str) -> Result<&'static clusters::Cluster> {
    clusters::by_name(name).ok_or_else(|| Error::UnknownName(name.to_string()))
}

pub fn require_cluster_by_id(id: u16) -> Result<&'static clusters::Cluster> {
    clusters::by_id(id).ok_or(Error::UnknownCluster(id))
}

pub fn require_zdo_by_name(name: &str) -> Result<&'static zdo::ZdoEntry> {
    zdo::by_name(name).ok_or_else(|| Error::UnknownName(name.to_string()))
}

pub fn require_zdo_by_cluster(cluster: u16) -> Result<&'static zdo::ZdoEntry> {
    zdo::by_cluster(cluster).ok_or(Error::UnknownCluster(cluster))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_profiles_resolve_both_ways() {
        let p = profile_by_name("home_automation").unwrap();
        assert_eq!(p.id, 0x0104);
        assert_eq!(profile_by_id(0x0104).unwrap().name, "home_automation");
    }

    #[test]
    fn unknown_profile_is_an_error() {
        assert!(matches!(require_profile_by_name("nope"), Err(Error::UnknownProfile(_))));
    }
}
