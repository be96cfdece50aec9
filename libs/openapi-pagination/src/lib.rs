// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Page walker for OpenAPI "get all" endpoints
//!
//! Collection endpoints answer with one [`Pages`] envelope per request and
//! point at the following page through a `Link` header with relation
//! `nextPage`. [`fetch_all_pages`] follows that chain and returns every
//! item payload of every page, in page order then in-page order, still
//! undecoded. Decoding into a concrete type happens afterwards, in one go,
//! so the same walk can feed raw JSON consumers and typed consumers alike.
//!
//! The walk is all-or-nothing: any fetch or envelope failure aborts it and
//! no partial result is returned.
//!
//! # Termination
//!
//! Only the absence of a `nextPage` link ends the walk; the number of items
//! on a page says nothing (the server may return fewer than `pageSize`).
//! Because a buggy server could link pages in a cycle, the walk is bounded:
//!
//! - an address that was already fetched is rejected with
//!   [`PaginationError::RepeatedPage`]
//! - the number of fetched pages may not exceed the largest `pageCount` the
//!   server declared plus [`PageLimits::safety_margin`], nor
//!   [`PageLimits::max_pages`] in any case
//!   ([`PaginationError::PageLimitExceeded`])
//!
//! # Example
//!
//! ```ignore
//! use openapi_pagination::{fetch_all_pages, PageLimits};
//!
//! let query = [("pageSize".to_string(), "128".to_string())];
//! let items = fetch_all_pages(&fetcher, &url, &query, &PageLimits::default()).await?;
//! ```

pub mod link;

use std::collections::HashSet;

use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;
use thiserror::Error;
use url::Url;

pub use link::{Link, REL_NEXT_PAGE, next_page, parse_link_header};
pub use openapi_types::Pages;

/// Default number of pages allowed beyond the server-declared `pageCount`
const DEFAULT_SAFETY_MARGIN: u64 = 2;

/// Default absolute page cap, used when no `pageCount` is declared
const DEFAULT_MAX_PAGES: u64 = 10_000;

/// Errors raised by the page walk itself (as opposed to fetch failures)
#[derive(Error, Debug)]
pub enum PaginationError {
    /// A page body was not a valid page envelope
    #[error("error decoding page envelope from {address}: {source}")]
    Envelope {
        address: String,
        #[source]
        source: serde_json::Error,
    },

    /// A `nextPage` link could not be resolved to an address
    #[error("invalid nextPage link '{uri}': {source}")]
    InvalidLink {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    /// The chain linked back to a page that was already fetched
    #[error("page chain links back to already fetched page {address}")]
    RepeatedPage { address: String },

    /// More pages than the server declared (plus margin) or than the cap
    #[error("page chain exceeded {limit} pages (next page {address})")]
    PageLimitExceeded { limit: u64, address: String },
}

/// Bounds applied to one page walk
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    /// Pages tolerated beyond the largest declared `pageCount`
    pub safety_margin: u64,
    /// Hard cap regardless of what the server declares
    pub max_pages: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            safety_margin: DEFAULT_SAFETY_MARGIN,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

impl PageLimits {
    /// Page budget given the largest `pageCount` seen so far (0 = unknown)
    fn budget(&self, declared_page_count: u64) -> u64 {
        if declared_page_count == 0 {
            self.max_pages
        } else {
            declared_page_count
                .saturating_add(self.safety_margin)
                .min(self.max_pages)
        }
    }
}

/// One fetched, status-checked page
#[derive(Clone, Debug, Default)]
pub struct RawPage {
    /// Response body (a [`Pages`] envelope)
    pub body: Bytes,
    /// Every `Link` header value of the response, in order
    pub links: Vec<String>,
}

/// Source of pages (normally an HTTP client)
///
/// Implementations perform one GET and must turn non-success responses
/// into their own error type. Walk failures are converted through
/// `From<PaginationError>` so callers see a single error type.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    type Error: From<PaginationError> + Send;

    /// Fetch `address` with `query` merged into its query string
    async fn fetch_page(
        &self,
        address: &Url,
        query: &[(String, String)],
    ) -> Result<RawPage, Self::Error>;
}

/// Address with the first-page query merged in, used to detect revisits
fn visit_key(address: &Url, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return address.to_string();
    }
    let mut keyed = address.clone();
    keyed.query_pairs_mut().extend_pairs(query);
    keyed.to_string()
}

/// Walk every page starting at `initial` and return all item payloads
///
/// `query` applies to the first request only: continuation addresses
/// already embed the full query state, so they are fetched with an empty
/// query.
pub async fn fetch_all_pages<F>(
    fetcher: &F,
    initial: &Url,
    query: &[(String, String)],
    limits: &PageLimits,
) -> Result<Vec<Value>, F::Error>
where
    F: PageFetcher + ?Sized,
{
    let mut items: Vec<Value> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut address = initial.clone();
    let mut page_query: &[(String, String)] = query;
    let mut fetched: u64 = 0;
    let mut declared_page_count: u64 = 0;

    // Yields the resultTotal of the last page
    let declared_total = loop {
        if !visited.insert(visit_key(&address, page_query)) {
            return Err(PaginationError::RepeatedPage {
                address: address.to_string(),
            }
            .into());
        }

        let limit = limits.budget(declared_page_count);
        if fetched >= limit {
            return Err(PaginationError::PageLimitExceeded {
                limit,
                address: address.to_string(),
            }
            .into());
        }

        let raw = fetcher.fetch_page(&address, page_query).await?;
        fetched += 1;

        let page: Pages =
            serde_json::from_slice(&raw.body).map_err(|source| PaginationError::Envelope {
                address: address.to_string(),
                source,
            })?;

        tracing::trace!(
            address = %address,
            page = page.page,
            page_count = page.page_count,
            items = page.values.len(),
            "Fetched page"
        );

        declared_page_count = declared_page_count.max(page.page_count);
        items.extend(page.values);

        match next_page(&raw.links, &address)? {
            Some(next) => {
                address = next;
                page_query = &[];
            }
            None => break page.result_total,
        }
    };

    if declared_total != items.len() as u64 {
        // Not an error: collections can change while they are being walked
        tracing::debug!(
            declared = declared_total,
            collected = items.len(),
            pages = fetched,
            "Collected item count differs from declared resultTotal"
        );
    }

    Ok(items)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug)]
    enum TestError {
        Walk(PaginationError),
        Missing(String),
    }

    impl From<PaginationError> for TestError {
        fn from(e: PaginationError) -> Self {
            TestError::Walk(e)
        }
    }

    /// Serves canned pages keyed by full address and records every request
    #[derive(Default)]
    struct FakeServer {
        pages: HashMap<String, RawPage>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeServer {
        fn page(mut self, address: &str, body: Value, next: Option<&str>) -> Self {
            let links = next
                .map(|n| vec![format!("<{}>;rel=\"nextPage\";type=\"application/json\"", n)])
                .unwrap_or_default();
            self.pages.insert(
                address.to_string(),
                RawPage {
                    body: Bytes::from(body.to_string()),
                    links,
                },
            );
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl PageFetcher for FakeServer {
        type Error = TestError;

        async fn fetch_page(
            &self,
            address: &Url,
            query: &[(String, String)],
        ) -> Result<RawPage, TestError> {
            let key = visit_key(address, query);
            self.requests.lock().unwrap().push(key.clone());
            self.pages
                .get(&key)
                .cloned()
                .ok_or(TestError::Missing(key))
        }
    }

    fn envelope(total: u64, page_count: u64, page: u64, ids: &[&str]) -> Value {
        json!({
            "resultTotal": total,
            "pageCount": page_count,
            "page": page,
            "pageSize": 2,
            "values": ids.iter().map(|id| json!({"id": id})).collect::<Vec<_>>(),
        })
    }

    fn ids(items: &[Value]) -> Vec<String> {
        items
            .iter()
            .map(|v| v["id"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    const BASE: &str = "https://h/cloudapi/1.0.0/items";

    #[tokio::test]
    async fn test_three_pages_accumulate_in_order() {
        let server = FakeServer::default()
            .page(
                "https://h/cloudapi/1.0.0/items?pageSize=2",
                envelope(5, 3, 1, &["a", "b"]),
                Some("https://h/cloudapi/1.0.0/items?pageSize=2&page=2"),
            )
            .page(
                "https://h/cloudapi/1.0.0/items?pageSize=2&page=2",
                envelope(5, 3, 2, &["c", "d"]),
                Some("https://h/cloudapi/1.0.0/items?pageSize=2&page=3"),
            )
            .page(
                "https://h/cloudapi/1.0.0/items?pageSize=2&page=3",
                envelope(5, 3, 3, &["e"]),
                None,
            );

        let query = vec![("pageSize".to_string(), "2".to_string())];
        let items = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &query, &PageLimits::default())
            .await
            .unwrap();

        assert_eq!(ids(&items), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(server.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_single_page_makes_one_request() {
        let server = FakeServer::default().page(BASE, envelope(2, 1, 1, &["a", "b"]), None);

        let items = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &PageLimits::default())
            .await
            .unwrap();

        assert_eq!(ids(&items), vec!["a", "b"]);
        assert_eq!(server.requests(), vec![BASE.to_string()]);
    }

    #[tokio::test]
    async fn test_empty_collection_is_not_an_error() {
        let server = FakeServer::default().page(BASE, json!({"resultTotal": 0, "values": []}), None);

        let items = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &PageLimits::default())
            .await
            .unwrap();

        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_short_page_with_next_link_keeps_walking() {
        // Fewer items than pageSize must not end the walk
        let server = FakeServer::default()
            .page(BASE, envelope(2, 2, 1, &["a"]), Some("https://h/cloudapi/1.0.0/items?page=2"))
            .page("https://h/cloudapi/1.0.0/items?page=2", envelope(2, 2, 2, &["b"]), None);

        let items = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &PageLimits::default())
            .await
            .unwrap();

        assert_eq!(ids(&items), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_cycle_is_rejected() {
        let server = FakeServer::default()
            .page(BASE, envelope(4, 2, 1, &["a"]), Some("https://h/cloudapi/1.0.0/items?page=2"))
            .page("https://h/cloudapi/1.0.0/items?page=2", envelope(4, 2, 2, &["b"]), Some(BASE));

        let err = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &PageLimits::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TestError::Walk(PaginationError::RepeatedPage { .. })));
        assert_eq!(server.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_runaway_chain_exceeds_declared_page_count() {
        // Declares one page but keeps linking to fresh addresses
        let mut server = FakeServer::default();
        for n in 1..=10 {
            let address = if n == 1 {
                BASE.to_string()
            } else {
                format!("{}?page={}", BASE, n)
            };
            let next = format!("{}?page={}", BASE, n + 1);
            server = server.page(&address, envelope(1, 1, n, &["x"]), Some(&next));
        }

        let limits = PageLimits {
            safety_margin: 2,
            max_pages: 100,
        };
        let err = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &limits)
            .await
            .unwrap_err();

        match err {
            TestError::Walk(PaginationError::PageLimitExceeded { limit, .. }) => assert_eq!(limit, 3),
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(server.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_absolute_cap_applies_without_declared_count() {
        let mut server = FakeServer::default();
        for n in 1..=10 {
            let address = if n == 1 {
                BASE.to_string()
            } else {
                format!("{}?page={}", BASE, n)
            };
            let next = format!("{}?page={}", BASE, n + 1);
            server = server.page(&address, json!({"values": [{"id": "x"}]}), Some(&next));
        }

        let limits = PageLimits {
            safety_margin: 2,
            max_pages: 4,
        };
        let err = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &limits)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TestError::Walk(PaginationError::PageLimitExceeded { limit: 4, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_failure_aborts_walk() {
        let server = FakeServer::default().page(
            BASE,
            envelope(4, 2, 1, &["a", "b"]),
            Some("https://h/cloudapi/1.0.0/items?page=2"),
        );

        let err = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &PageLimits::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TestError::Missing(_)));
    }

    #[tokio::test]
    async fn test_malformed_envelope_is_an_error() {
        let mut server = FakeServer::default();
        server.pages.insert(
            BASE.to_string(),
            RawPage {
                body: Bytes::from_static(b"<html>oops</html>"),
                links: vec![],
            },
        );

        let err = fetch_all_pages(&server, &Url::parse(BASE).unwrap(), &[], &PageLimits::default())
            .await
            .unwrap_err();

        assert!(matches!(err, TestError::Walk(PaginationError::Envelope { .. })));
    }

    #[test]
    fn test_budget() {
        let limits = PageLimits {
            safety_margin: 2,
            max_pages: 10,
        };
        assert_eq!(limits.budget(0), 10);
        assert_eq!(limits.budget(3), 5);
        assert_eq!(limits.budget(9), 10);
    }
}
