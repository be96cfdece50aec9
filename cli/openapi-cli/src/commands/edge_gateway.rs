// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Edge gateway and firewall group commands

use anyhow::Result;
use clap::Subcommand;
use openapi_client::Client;

use crate::output::json::print_json;
use crate::output::table;

use super::filter_query;

#[derive(Subcommand, Clone)]
pub enum EdgeGatewayCommand {
    /// List edge gateways
    #[command(alias = "ls")]
    List {
        /// Filter expression (field==value); may be repeated
        #[arg(short, long)]
        filter: Vec<String>,
    },
    /// Show one edge gateway by name
    Get { name: String },
    /// List the firewall groups of a gateway
    Groups {
        /// Gateway name
        gateway: String,
        /// Filter expression (field==value); may be repeated
        #[arg(short, long)]
        filter: Vec<String>,
    },
}

impl EdgeGatewayCommand {
    pub async fn run(&self, client: &Client, json: bool) -> Result<()> {
        match self {
            EdgeGatewayCommand::List { filter } => {
                let query = filter_query(filter)?;
                let gateways = client.get_all_edge_gateways(Some(&query)).await?;
                if json {
                    let inner: Vec<_> = gateways.iter().map(|g| &g.edge_gateway).collect();
                    return print_json(&inner);
                }
                let mut tbl = table::create_table(&["ID", "NAME"]);
                for g in &gateways {
                    tbl.add_row(vec![g.id(), g.name()]);
                }
                table::print_table(tbl);
                Ok(())
            }
            EdgeGatewayCommand::Get { name } => {
                let gateway = client.get_edge_gateway_by_name(name).await?;
                print_json(&gateway.edge_gateway)
            }
            EdgeGatewayCommand::Groups { gateway, filter } => {
                let gateway = client.get_edge_gateway_by_name(gateway).await?;
                let query = filter_query(filter)?;
                let groups = gateway.get_all_firewall_groups(Some(&query)).await?;
                if json {
                    let inner: Vec<_> = groups.iter().map(|g| &g.firewall_group).collect();
                    return print_json(&inner);
                }
                let mut tbl = table::create_table(&["ID", "NAME", "TYPE"]);
                for g in &groups {
                    tbl.add_row(vec![
                        g.id(),
                        g.firewall_group.name.as_str(),
                        g.firewall_group.group_type.as_str(),
                    ]);
                }
                table::print_table(tbl);
                Ok(())
            }
        }
    }
}
