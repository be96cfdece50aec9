// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IP Space commands

use anyhow::Result;
use clap::Subcommand;
use openapi_client::Client;

use crate::output::json::print_json;
use crate::output::table;

use super::filter_query;

#[derive(Subcommand, Clone)]
pub enum IpSpaceCommand {
    /// List IP Space summaries
    #[command(alias = "ls")]
    List {
        /// Filter expression (field==value); may be repeated
        #[arg(short, long)]
        filter: Vec<String>,
    },
    /// Show one IP Space by name
    Get {
        name: String,
        /// Restrict the lookup to one organization
        #[arg(long)]
        org_id: Option<String>,
    },
    /// Delete an IP Space by name
    #[command(alias = "rm")]
    Delete { name: String },
}

impl IpSpaceCommand {
    pub async fn run(&self, client: &Client, json: bool) -> Result<()> {
        match self {
            IpSpaceCommand::List { filter } => {
                let query = filter_query(filter)?;
                let spaces = client.get_all_ip_space_summaries(Some(&query)).await?;
                if json {
                    let inner: Vec<_> = spaces.iter().map(|s| &s.ip_space).collect();
                    return print_json(&inner);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "TYPE"]);
                for s in &spaces {
                    tbl.add_row(vec![
                        s.id(),
                        s.name(),
                        s.ip_space.ip_space_type.as_str(),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
            IpSpaceCommand::Get { name, org_id } => {
                let space = match org_id {
                    Some(org_id) => client.get_ip_space_by_name_and_org_id(name, org_id).await?,
                    None => client.get_ip_space_by_name(name).await?,
                };
                print_json(&space.ip_space)
            }
            IpSpaceCommand::Delete { name } => {
                let space = client.get_ip_space_by_name(name).await?;
                space.delete().await?;
                eprintln!("Deleted IP Space {} ({})", name, space.id());
                Ok(())
            }
        }
    }
}
