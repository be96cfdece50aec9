// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IP Space types

use serde::{Deserialize, Serialize};

use super::common::OpenApiReference;

/// IP Space
///
/// A set of non-overlapping IP ranges and CIDR blocks reserved for
/// consumption by organizations. An IP Space is either IPv4 or IPv6.
/// The internal scope lists the CIDRs all ranges must fall inside; the
/// external scope is the span reachable through it (e.g. the internet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSpace {
    /// URN (e.g. `urn:vcloud:ipSpace:...`); empty until created
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `PUBLIC`, `SHARED_SERVICES` or `PRIVATE`
    #[serde(rename = "type")]
    pub ip_space_type: String,
    /// Owning organization, only set for `PRIVATE` IP Spaces
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_ref: Option<OpenApiReference>,
    #[serde(default)]
    pub ip_space_internal_scope: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_space_external_scope: Option<String>,
    #[serde(default)]
    pub ip_space_ranges: IpSpaceRanges,
    #[serde(default)]
    pub route_advertisement_enabled: bool,
}

/// Range section of an IP Space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSpaceRanges {
    #[serde(default)]
    pub ip_ranges: Vec<IpSpaceRange>,
    /// Default quota of floating IPs per organization (-1 is unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_floating_ip_quota: Option<i64>,
}

/// Single contiguous IP range
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpSpaceRange {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub start_ip_address: String,
    pub end_ip_address: String,
}
