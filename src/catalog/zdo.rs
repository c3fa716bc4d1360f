// SPDX-License-Identifier: MIT OR Apache-2.0
//! ZDO cluster catalog. Zigbee Spec §2.4 ("Device and Service Discovery").
//!
//! Response cluster ids have bit 15 set by convention; `bind_resp`
//! (0x8021) and `unbind_resp` (0x8022) are kept distinct rather than
//! collapsed into one alias, per `SPEC_FULL.md` §9.

use crate::descriptor::{CompositeKind, FieldSpec, Physical};

pub struct ZdoEntry {
    pub name: &'static str,
    pub cluster: u16,
    pub fields: &'static [FieldSpec],
}

macro_rules! zdo_entry {
    ($name:literal, $cluster:expr, [$($field:expr),* $(,)?]) => {
        ZdoEntry { name: $name, cluster: $cluster, fields: &[$($field),*] }
    };
}

pub static ZDO_ENTRIES: &[ZdoEntry] = &[
    // Zigbee Spec -- "2.4.3.1.5 Simple_Desc_req"
    zdo_entry!("simple_desc", 0x0004, [
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::Fixed("endpoint", Physical::Uint8),
    ]),
    // Zigbee Spec -- "2.4.4.1.5 Simple_Desc_resp"
    zdo_entry!("simple_desc_resp", 0x8004, [
        FieldSpec::StopOnNonSuccess("status"),
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::ByteLenPrefix("simple_descriptors"),
        FieldSpec::RepeatBytes("simple_descriptors", Physical::Composite(CompositeKind::SimpleDescriptor)),
    ]),
    // Zigbee Spec -- "2.4.3.1.6 Active_EP_req"
    zdo_entry!("active_ep", 0x0005, [
        FieldSpec::Fixed("addr16", Physical::Uint16),
    ]),
    // Zigbee Spec -- "2.4.4.1.6 Active_EP_resp"
    zdo_entry!("active_ep_resp", 0x8005, [
        FieldSpec::StopOnNonSuccess("status"),
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::CountPrefix("active_eps"),
        FieldSpec::RepeatCount("active_eps", Physical::Uint8),
    ]),
    // Zigbee Spec -- "2.4.3.1.7 Match_Desc_req"
    zdo_entry!("match_desc", 0x0006, [
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::Fixed("profile", Physical::Uint16),
        FieldSpec::CountPrefix("in_clusters"),
        FieldSpec::RepeatCount("in_clusters", Physical::Uint16),
        FieldSpec::CountPrefix("out_clusters"),
        FieldSpec::RepeatCount("out_clusters", Physical::Uint16),
    ]),
    // Zigbee Spec -- "2.4.4.1.7 Match_Desc_resp"
    zdo_entry!("match_desc_resp", 0x8006, [
        FieldSpec::StopOnNonSuccess("status"),
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::CountPrefix("match_list"),
        FieldSpec::RepeatCount("match_list", Physical::Uint8),
    ]),
    // Zigbee Spec -- "2.4.3.2.2 Bind_req"
    zdo_entry!("bind", 0x0021, [
        FieldSpec::Fixed("src_addr", Physical::Uint64),
        FieldSpec::Fixed("src_ep", Physical::Uint8),
        FieldSpec::Fixed("cluster", Physical::Uint16),
        FieldSpec::Fixed("dst_addr_mode", Physical::Enum8),
        FieldSpec::Fixed("dst_addr", Physical::Uint64),
        FieldSpec::Fixed("dst_ep", Physical::Uint8),
    ]),
    // Zigbee Spec -- "2.4.3.2.3 Unbind_req"
    zdo_entry!("unbind", 0x0022, [
        FieldSpec::Fixed("src_addr", Physical::Uint64),
        FieldSpec::Fixed("src_ep", Physical::Uint8),
        FieldSpec::Fixed("cluster", Physical::Uint16),
        FieldSpec::Fixed("dst_addr_mode", Physical::Enum8),
        FieldSpec::Fixed("dst_addr", Physical::Uint64),
        FieldSpec::Fixed("dst_ep", Physical::Uint8),
    ]),
    // Zigbee Spec -- "2.4.4.2.2 Bind_resp"
    zdo_entry!("bind_resp", 0x8021, [
        FieldSpec::Fixed("status", Physical::Status8),
    ]),
    // Zigbee Spec -- "2.4.4.2.3 Unbind_resp"
    zdo_entry!("unbind_resp", 0x8022, [
        FieldSpec::Fixed("status", Physical::Status8),
    ]),
    // Zigbee Spec -- "2.4.3.1.11 Device_annce" (Figure 2.17)
    zdo_entry!("device_annce", 0x0013, [
        FieldSpec::Fixed("addr16", Physical::Uint16),
        FieldSpec::Fixed("addr64", Physical::Eui64),
        FieldSpec::Fixed("capability", Physical::Uint8),
    ]),
    // Zigbee Spec -- "2.4.4.3.9 Mgmt_NWK_Update_notify"
    zdo_entry!("mgmt_nwk_update_notify", 0x8038, [
        FieldSpec::Fixed("status", Physical::Status8),
        FieldSpec::Fixed("scanned_channels", Physical::Uint32),
        FieldSpec::Fixed("total_transmissions", Physical::Uint16),
        FieldSpec::Fixed("transmission_failures", Physical::Uint16),
        FieldSpec::CountPrefix("energy_values"),
        FieldSpec::RepeatCount("energy_values", Physical::Uint8),
    ]),
];

#[must_use]
pub fn by_name(name: &str) -> Option<&'static ZdoEntry> {
    ZDO_ENTRIES.iter().find(|e| e.name == name)
}

#[must_use]
pub fn by_cluster(cluster: u16) -> Option<&'static ZdoEntry> {
    ZDO_ENTRIES.iter().find(|e| e.cluster == cluster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_and_unbind_resp_are_distinct_clusters() {
        let bind_resp = by_name("bind_resp").unwrap();
        let unbind_resp = by_name("unbind_resp").unwrap();
        assert_eq!(bind_resp.cluster, 0x8021);
        assert_eq!(unbind_resp.cluster, 0x8022);
        assert_ne!(bind_resp.cluster, unbind_resp.cluster);
    }

    #[test]
    fn cluster_ids_are_unique() {
        let mut ids: Vec<u16> = ZDO_ENTRIES.iter().map(|e| e.cluster).collect();
        ids.sort_unstable();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }
}
