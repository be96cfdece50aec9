// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Audit trail types

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::OpenApiReference;

/// One audit trail event
///
/// The collection is returned in chronological order and that order is
/// meaningful to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditTrailEvent {
    pub event_id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub operating_org: OpenApiReference,
    #[serde(default)]
    pub user: OpenApiReference,
    #[serde(default)]
    pub event_entity: OpenApiReference,
    #[serde(default)]
    pub task_id: Option<Value>,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub event_status: String,
    /// RFC3339 timestamp
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub external: bool,
}
