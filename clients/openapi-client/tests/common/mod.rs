// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Shared helpers for openapi-client integration tests

#![allow(dead_code, clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use openapi_client::{AuthContext, Client, ClientConfig, OuterEntity, PollConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const ITEMS: &str = "1.0.0/items";
pub const ITEMS_PATH: &str = "/cloudapi/1.0.0/items";

/// Poll settings that keep tests fast
pub fn fast_poll() -> PollConfig {
    PollConfig {
        initial_interval: Duration::from_millis(10),
        max_interval: Duration::from_millis(20),
        multiplier: 2,
        timeout: Duration::from_secs(5),
        status_retries: 2,
        retry_delay: Duration::from_millis(5),
    }
}

pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::new(
        Url::parse(&server.uri()).expect("mock server uri"),
        AuthContext::bearer(TOKEN),
    )
    .with_page_size(None)
    .with_poll(fast_poll())
}

pub fn client_for(server: &MockServer) -> Client {
    Client::new(config_for(server)).expect("client")
}

/// Page envelope holding items with the given ids
pub fn page(total: u64, page_count: u64, page: u64, ids: &[&str]) -> Value {
    json!({
        "resultTotal": total,
        "pageCount": page_count,
        "page": page,
        "pageSize": 2,
        "associations": null,
        "values": ids.iter().map(|id| json!({"id": id, "name": format!("item-{}", id)})).collect::<Vec<_>>(),
    })
}

/// `Link` header value pointing at `path_and_query` on the mock server
pub fn next_link(server: &MockServer, path_and_query: &str) -> String {
    format!(
        "<{}{}>;rel=\"nextPage\";type=\"application/json\";model=\"Items\"",
        server.uri(),
        path_and_query
    )
}

pub fn task(status: &str) -> Value {
    json!({"id": "t1", "status": status, "operation": "test"})
}

pub fn task_with_owner(owner_id: &str) -> Value {
    json!({
        "id": "t1",
        "status": "success",
        "owner": {"name": "r1", "id": owner_id},
    })
}

pub fn task_location(server: &MockServer) -> String {
    format!("{}/api/task/t1", server.uri())
}

/// Minimal DTO for generic engine tests
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
}

/// Outer wrapper for [`Item`]
#[derive(Debug)]
pub struct ItemEntity {
    pub item: Item,
    pub client: Client,
}

impl OuterEntity for ItemEntity {
    type Inner = Item;

    fn wrap(client: &Client, inner: Item) -> Self {
        Self {
            item: inner,
            client: client.clone(),
        }
    }
}
