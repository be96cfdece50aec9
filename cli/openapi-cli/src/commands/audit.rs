// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Audit trail listing

use anyhow::Result;
use clap::Args;
use openapi_client::Client;

use crate::output::json::print_json;
use crate::output::table;

use super::filter_query;

#[derive(Args, Clone)]
pub struct AuditCommand {
    /// Filter expression (field==value); may be repeated
    #[arg(short, long)]
    filter: Vec<String>,
}

impl AuditCommand {
    pub async fn run(&self, client: &Client, json: bool) -> Result<()> {
        let query = filter_query(&self.filter)?;
        let events = client.get_all_audit_trail_events(Some(&query)).await?;
        if json {
            return print_json(&events);
        }
        let mut tbl = table::create_table(&["TIMESTAMP", "TYPE", "STATUS", "USER"]);
        for e in &events {
            tbl.add_row(vec![
                e.timestamp.as_str(),
                e.event_type.as_str(),
                e.event_status.as_str(),
                e.user.name.as_str(),
            ]);
        }
        table::print_table(tbl);
        Ok(())
    }
}
