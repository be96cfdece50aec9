// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Audit trail (read-only)

use openapi_types::AuditTrailEvent;
use openapi_types::endpoints::AUDIT_TRAIL;

use crate::client::Client;
use crate::crud::CrudConfig;
use crate::error::Result;
use crate::query::QueryParams;

const LABEL: &str = "Audit Trail";

impl Client {
    /// Audit events in server order (chronological), optionally filtered
    pub async fn get_all_audit_trail_events(
        &self,
        query: Option<&QueryParams>,
    ) -> Result<Vec<AuditTrailEvent>> {
        let config =
            CrudConfig::new(AUDIT_TRAIL, LABEL).with_query(QueryParams::copy_or_new(query));
        self.get_all_inner(&config).await
    }
}
