// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Page envelope for "get all" endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a paginated collection
///
/// `values` stays untyped so that paging can be handled without knowing
/// the item type; items are decoded into concrete types once every page
/// has been collected. The link to the following page travels in the
/// `Link` response header, not in this body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pages {
    /// Total results available across all pages
    #[serde(default)]
    pub result_total: u64,
    /// Total pages available
    #[serde(default)]
    pub page_count: u64,
    /// This page's number (1-based)
    #[serde(default)]
    pub page: u64,
    /// Requested page size; the server may return fewer items
    #[serde(default)]
    pub page_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associations: Option<Value>,
    #[serde(default)]
    pub values: Vec<Value>,
}
