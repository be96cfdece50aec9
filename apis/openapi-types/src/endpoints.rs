// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint templates, relative to `<base>/cloudapi/`
//!
//! `{}` marks a path parameter. Parameters left over after every
//! placeholder is filled are appended as trailing path segments, so the
//! collection template doubles as the item template (`edgeGateways` +
//! `[id]` -> `edgeGateways/<id>`).

/// API path version prefix used by every endpoint below
pub const PATH_VERSION_1_0_0: &str = "1.0.0/";

pub const AUDIT_TRAIL: &str = "1.0.0/auditTrail";
pub const EDGE_GATEWAYS: &str = "1.0.0/edgeGateways";
pub const FIREWALL_GROUPS: &str = "1.0.0/firewallGroups";
pub const IP_SPACES: &str = "1.0.0/ipSpaces";
pub const IP_SPACE_SUMMARIES: &str = "1.0.0/ipSpaces/summaries";
