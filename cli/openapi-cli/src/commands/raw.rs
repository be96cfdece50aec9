// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Generic endpoint access through the CRUD engine

use anyhow::{Context, Result};
use clap::Subcommand;
use openapi_client::{Client, CrudConfig};
use serde_json::Value;

use crate::output::json::print_json;

use super::filter_query;

#[derive(Subcommand, Clone)]
pub enum RawCommand {
    /// Read every item of a collection, following all pages
    List {
        /// Endpoint below /cloudapi/, e.g. 1.0.0/edgeGateways
        endpoint: String,
        /// Filter expression (field==value); may be repeated
        #[arg(short, long)]
        filter: Vec<String>,
    },
    /// Read one entity
    Get {
        endpoint: String,
        id: String,
    },
    /// Create an entity from a JSON document and print the result
    Create {
        endpoint: String,
        /// Entity as JSON
        body: String,
    },
    /// Replace an entity with a JSON document and print the result
    Update {
        endpoint: String,
        id: String,
        /// Entity as JSON
        body: String,
    },
    /// Delete an entity, waiting for the server to finish
    Delete {
        endpoint: String,
        id: String,
    },
}

fn parse_body(body: &str) -> Result<Value> {
    serde_json::from_str(body).context("entity body is not valid JSON")
}

impl RawCommand {
    pub async fn run(&self, client: &Client) -> Result<()> {
        match self {
            RawCommand::List { endpoint, filter } => {
                let config = CrudConfig::new(endpoint.as_str(), endpoint.as_str())
                    .with_query(filter_query(filter)?);
                let items = client.get_all_raw(&config).await?;
                print_json(&items)
            }
            RawCommand::Get { endpoint, id } => {
                let config = CrudConfig::new(endpoint.as_str(), endpoint.as_str()).with_param(id);
                let item: Value = client.get_inner(&config).await?;
                print_json(&item)
            }
            RawCommand::Create { endpoint, body } => {
                let config = CrudConfig::new(endpoint.as_str(), endpoint.as_str());
                let item: Value = client.create_inner(&config, &parse_body(body)?).await?;
                print_json(&item)
            }
            RawCommand::Update { endpoint, id, body } => {
                let config = CrudConfig::new(endpoint.as_str(), endpoint.as_str()).with_param(id);
                let item: Value = client.update_inner(&config, &parse_body(body)?).await?;
                print_json(&item)
            }
            RawCommand::Delete { endpoint, id } => {
                let config = CrudConfig::new(endpoint.as_str(), endpoint.as_str()).with_param(id);
                client.delete(&config).await?;
                eprintln!("Deleted {}", id);
                Ok(())
            }
        }
    }
}
