// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

pub mod audit;
pub mod edge_gateway;
pub mod ip_space;
pub mod raw;

pub use audit::AuditCommand;
pub use edge_gateway::EdgeGatewayCommand;
pub use ip_space::IpSpaceCommand;
pub use raw::RawCommand;

use anyhow::Result;
use openapi_client::QueryParams;
use openapi_client::filter::{filter_and, parse_filter};

/// Combine `field==value` style expressions into one filter query
///
/// Values are given unescaped; each is escaped once when the query is built.
pub fn filter_query(expressions: &[String]) -> Result<QueryParams> {
    let mut query = QueryParams::new();
    for expression in expressions {
        for clause in parse_filter(expression)? {
            query = filter_and(&clause, &query);
        }
    }
    Ok(query)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use openapi_client::query::FILTER;

    #[test]
    fn test_filter_query_joins_expressions() {
        let query =
            filter_query(&["name==web".to_string(), "type==IP_SET".to_string()]).unwrap();
        assert_eq!(query.get(FILTER), Some("name==web;type==IP_SET"));
    }

    #[test]
    fn test_filter_query_empty() {
        assert!(filter_query(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_filter_query_rejects_garbage() {
        assert!(filter_query(&["no operator here".to_string()]).is_err());
    }
}
