// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

// Allow expect/unwrap in tests - they provide clear panic messages on failure
#![allow(clippy::expect_used, clippy::unwrap_used)]

//! Collection reads against a mock server: page walking, termination,
//! runaway protection and query handling.

mod common;

use common::*;
use openapi_client::{
    Client, CrudConfig, Error, FilterClause, PageLimits, PaginationError, QueryParams, filter_by,
};
use serde_json::Value;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ids(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect()
}

fn items_config() -> CrudConfig {
    CrudConfig::new(ITEMS, "Item")
}

// ============================================================================
// Completeness and termination
// ============================================================================

#[tokio::test]
async fn test_three_pages_are_accumulated_in_order() {
    let server = MockServer::start().await;

    // Continuation pages first: the first mounted matching mock wins
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(5, 3, 3, &["e"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(5, 3, 2, &["c", "d"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?pageSize=2&page=3").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("pageSize", "2"))
        .and(header("authorization", "Bearer test-token"))
        .and(header("accept", "application/json;version=37.2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(5, 3, 1, &["a", "b"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?pageSize=2&page=2").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let config = items_config().with_query(QueryParams::new().with("pageSize", "2"));

    let raw = client.get_all_raw(&config).await.unwrap();
    assert_eq!(ids(&raw), vec!["a", "b", "c", "d", "e"]);
}

#[tokio::test]
async fn test_typed_read_all_matches_raw() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(3, 2, 2, &["c"])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(3, 2, 1, &["a", "b"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?page=2").as_str()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let items: Vec<Item> = client.get_all_inner(&items_config()).await.unwrap();
    assert_eq!(
        items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
        vec!["a", "b", "c"]
    );
    assert_eq!(items[2].name, "item-c");

    let wrapped: Vec<ItemEntity> = client.get_all_outer(&items_config()).await.unwrap();
    assert_eq!(wrapped.len(), 3);
    assert_eq!(wrapped[0].item, items[0]);
}

#[tokio::test]
async fn test_single_page_makes_exactly_one_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(2, 1, 1, &["a", "b"])))
        .expect(1)
        .mount(&server)
        .await;

    let raw = client_for(&server).get_all_raw(&items_config()).await.unwrap();
    assert_eq!(ids(&raw), vec!["a", "b"]);
}

#[tokio::test]
async fn test_empty_collection_returns_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0, 0, 1, &[])))
        .expect(1)
        .mount(&server)
        .await;

    let items: Vec<Item> = client_for(&server)
        .get_all_inner(&items_config())
        .await
        .unwrap();
    assert!(items.is_empty());
}

// ============================================================================
// Runaway protection and failures
// ============================================================================

#[tokio::test]
async fn test_runaway_chain_is_stopped() {
    let server = MockServer::start().await;

    // Declares one page, then keeps linking to fresh pages
    for n in 2..=6u32 {
        let next = format!("/cloudapi/1.0.0/items?page={}", n + 1);
        Mock::given(method("GET"))
            .and(path(ITEMS_PATH))
            .and(query_param("page", n.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(page(1, 1, n.into(), &["x"]))
                    .insert_header("Link", next_link(&server, &next).as_str()),
            )
            .expect(if n <= 3 { 1 } else { 0 })
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(1, 1, 1, &["x"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?page=2").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server).with_page_limits(PageLimits {
        safety_margin: 2,
        max_pages: 1_000,
    });
    let client = Client::new(config).unwrap();

    let err = client.get_all_raw(&items_config()).await.unwrap_err();
    match err {
        Error::Read { source, .. } => assert!(matches!(
            *source,
            Error::Pagination(PaginationError::PageLimitExceeded { limit: 3, .. })
        )),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_page_cycle_is_detected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(4, 2, 2, &["b"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?page=2").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(4, 2, 1, &["a"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?page=2").as_str()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_all_raw(&items_config())
        .await
        .unwrap_err();
    match err {
        Error::Read { source, .. } => assert!(matches!(
            *source,
            Error::Pagination(PaginationError::RepeatedPage { .. })
        )),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_page_returns_no_partial_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "minorErrorCode": "INTERNAL_SERVER_ERROR",
            "message": "boom",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(3, 2, 1, &["a", "b"]))
                .insert_header("Link", next_link(&server, "/cloudapi/1.0.0/items?page=2").as_str()),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_all_raw(&items_config())
        .await
        .unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(
        err.api_error().map(|e| e.minor_error_code.as_str()),
        Some("INTERNAL_SERVER_ERROR")
    );
}

#[tokio::test]
async fn test_malformed_item_fails_whole_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "resultTotal": 2,
            "pageCount": 1,
            "page": 1,
            "pageSize": 2,
            "values": [{"id": "a", "name": "ok"}, {"id": "b", "name": 17}],
        })))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get_all_inner::<Item>(&items_config())
        .await
        .unwrap_err();
    match err {
        Error::Read { source, .. } => assert!(matches!(*source, Error::Decode { .. })),
        other => panic!("unexpected error: {:?}", other),
    }
}

// ============================================================================
// Query handling
// ============================================================================

#[tokio::test]
async fn test_default_page_size_is_added_unless_set() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("pageSize", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 1, 1, &["a"])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("pageSize", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 1, 1, &["b"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(config_for(&server).with_page_size(Some(25))).unwrap();

    let raw = client.get_all_raw(&items_config()).await.unwrap();
    assert_eq!(ids(&raw), vec!["a"]);

    let config = items_config().with_query(QueryParams::new().with("pageSize", "7"));
    let raw = client.get_all_raw(&config).await.unwrap();
    assert_eq!(ids(&raw), vec!["b"]);
}

#[tokio::test]
async fn test_filter_value_is_escaped_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(ITEMS_PATH))
        .and(query_param("filter", "name==a%3Bname%3D%3Db"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(1, 1, 1, &["a"])))
        .expect(1)
        .mount(&server)
        .await;

    let config = items_config().with_query(filter_by(&FilterClause::eq("name", "a;name==b")));
    let raw = client_for(&server).get_all_raw(&config).await.unwrap();
    assert_eq!(raw.len(), 1);
}
