// SPDX-License-Identifier: MIT OR Apache-2.0
//! Read-only catalog introspection, for documentation and configuration
//! tooling built on top of this crate rather than for the codec itself.

use crate::catalog::{clusters::CLUSTERS, profile::PROFILE_COMMANDS, zdo::ZDO_ENTRIES, PROFILES};
use crate::status::Status;

#[derive(Debug, Clone)]
pub struct ProfileEntry {
    pub name: &'static str,
    pub id: u16,
}

#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub name: &'static str,
    pub code: u8,
}

#[derive(Debug, Clone)]
pub struct ZdoEntrySummary {
    pub name: &'static str,
    pub cluster: u16,
    pub field_count: usize,
}

#[derive(Debug, Clone)]
pub struct ProfileCommandEntry {
    pub name: &'static str,
    pub id: u8,
    pub field_count: usize,
}

#[derive(Debug, Clone)]
pub struct AttributeEntry {
    pub name: &'static str,
    pub id: u16,
    pub datatype: &'static str,
}

#[derive(Debug, Clone)]
pub struct ClusterCommandEntry {
    pub name: &'static str,
    pub id: u8,
    pub field_count: usize,
}

#[derive(Debug, Clone)]
pub struct ClusterEntry {
    pub name: &'static str,
    pub id: u16,
    pub attributes: Vec<AttributeEntry>,
    pub commands_received: Vec<ClusterCommandEntry>,
    pub commands_generated: Vec<ClusterCommandEntry>,
}

/// A complete snapshot of the loaded catalog, for serializing or
/// printing by external tooling.
#[derive(Debug, Clone)]
pub struct CatalogDump {
    pub profiles: Vec<ProfileEntry>,
    pub statuses: Vec<StatusEntry>,
    pub zdo_entries: Vec<ZdoEntrySummary>,
    pub profile_commands: Vec<ProfileCommandEntry>,
    pub clusters: Vec<ClusterEntry>,
}

#[must_use]
pub fn dump() -> CatalogDump {
    use strum::IntoEnumIterator;

    CatalogDump {
        profiles: PROFILES.iter().map(|p| ProfileEntry { name: p.name, id: p.id }).collect(),
        statuses: Status::iter().map(|s| StatusEntry { name: s.name(), code: s as u8 }).collect(),
        zdo_entries: ZDO_ENTRIES
            .iter()
            .map(|e| ZdoEntrySummary { name: e.name, cluster: e.cluster, field_count: e.fields.len() })
            .collect(),
        profile_commands: PROFILE_COMMANDS
            .iter()
            .map(|c| ProfileCommandEntry { name: c.name, id: c.id, field_count: c.fields.len() })
            .collect(),
        clusters: CLUSTERS
            .iter()
            .map(|cluster| ClusterEntry {
                name: cluster.name,
                id: cluster.id,
                attributes: cluster
                    .attributes
                    .iter()
                    .map(|a| AttributeEntry { name: a.name, id: a.id, datatype: a.datatype.name() })
                    .collect(),
                commands_received: cluster
                    .commands_received
                    .iter()
                    .map(|c| ClusterCommandEntry { name: c.name, id: c.id, field_count: c.fields.len() })
                    .collect(),
                commands_generated: cluster
                    .commands_generated
                    .iter()
                    .map(|c| ClusterCommandEntry { name: c.name, id: c.id, field_count: c.fields.len() })
                    .collect(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_covers_every_cluster() {
        let snapshot = dump();
        assert_eq!(snapshot.clusters.len(), CLUSTERS.len());
        assert!(snapshot.profiles.iter().any(|p| p.name == "home_automation"));
    }

    #[test]
    fn onoff_cluster_dump_lists_its_commands() {
        let snapshot = dump();
        let onoff = snapshot.clusters.iter().find(|c| c.name == "onoff").unwrap();
        assert!(onoff.commands_received.iter().any(|c| c.name == "toggle"));
    }
}
