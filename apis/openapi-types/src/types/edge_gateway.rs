// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Edge Gateway types

use serde::{Deserialize, Serialize};

use super::common::OpenApiReference;

/// Edge Gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeGateway {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// VDC or VDC group the gateway belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_ref: Option<OpenApiReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_ref: Option<OpenApiReference>,
    #[serde(default)]
    pub edge_gateway_uplinks: Vec<EdgeGatewayUplink>,
}

/// Uplink connecting an edge gateway to an external network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeGatewayUplink {
    pub uplink_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uplink_name: String,
    #[serde(default)]
    pub connected: bool,
    #[serde(default)]
    pub dedicated: bool,
}
