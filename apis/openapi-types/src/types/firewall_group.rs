// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall Group types

use serde::{Deserialize, Serialize};

use super::common::OpenApiReference;

/// Firewall group type for IP sets
pub const FIREWALL_GROUP_TYPE_IP_SET: &str = "IP_SET";

/// Firewall group type for security groups
pub const FIREWALL_GROUP_TYPE_SECURITY_GROUP: &str = "SECURITY_GROUP";

/// Firewall Group (an IP set or a security group)
///
/// IP sets list addresses directly; security groups list member networks.
/// Which of the two is selected by `group_type`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallGroup {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Single addresses, ranges or CIDRs (IP_SET only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    /// Member networks (SECURITY_GROUP only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<OpenApiReference>,
    /// Edge gateway or VDC group owning this group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_ref: Option<OpenApiReference>,
    /// Deprecated in favour of `owner_ref`; still returned on reads
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge_gateway_ref: Option<OpenApiReference>,
    #[serde(rename = "type")]
    pub group_type: String,
}
