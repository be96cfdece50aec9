// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Server-side filter expressions
//!
//! The `filter` query parameter holds `field OP value` clauses joined with
//! `;` (AND). Operators:
//!
//! | Operator | Meaning |
//! |----------|---------|
//! | `==`     | equal (`*` in the value is a wildcard) |
//! | `!=`     | not equal |
//! | `=gt=`, `=ge=`, `=lt=`, `=le=` | ordering |
//!
//! Values are escaped before they are placed in a clause: every character
//! the grammar gives a meaning to is percent-encoded, so data such as
//! `a==b;c` stays one literal value instead of forging a second clause.
//! `*` is deliberately left alone so wildcard matching keeps working.

use std::fmt;

use crate::error::{Error, Result};
use crate::query::{FILTER, QueryParams};

/// Characters escaped inside filter values
const RESERVED: &[char] = &['%', ';', ',', '=', '!', '<', '>', '(', ')', '"', '\''];

/// Clause separator meaning AND
pub const AND: char = ';';

/// Comparison operator of one clause
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
}

impl FilterOp {
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOp::Eq => "==",
            FilterOp::Ne => "!=",
            FilterOp::Gt => "=gt=",
            FilterOp::Ge => "=ge=",
            FilterOp::Lt => "=lt=",
            FilterOp::Le => "=le=",
        }
    }
}

/// One `field OP value` clause, value unescaped
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterClause {
    pub field: String,
    pub op: FilterOp,
    pub value: String,
}

impl FilterClause {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// `field==value`
    pub fn eq(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Eq, value)
    }

    /// `field!=value`
    pub fn ne(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(field, FilterOp::Ne, value)
    }

    /// `field==*value*`; the value itself is escaped, the wildcards are not
    pub fn contains(field: impl Into<String>, value: &str) -> Self {
        Self::new(field, FilterOp::Eq, format!("*{}*", value))
    }
}

impl fmt::Display for FilterClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.field, self.op.as_str(), escape_value(&self.value))
    }
}

/// Percent-encode the characters the filter grammar reserves
pub fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut buf = [0u8; 4];
    for c in value.chars() {
        if RESERVED.contains(&c) {
            escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        } else {
            escaped.push(c);
        }
    }
    escaped
}

/// Add `clause` to the `filter` parameter of a copy of `query` (AND)
///
/// Creates the parameter when `query` has none.
pub fn filter_and(clause: &FilterClause, query: &QueryParams) -> QueryParams {
    let mut query = query.clone();
    let expression = match query.get(FILTER).filter(|f| !f.is_empty()) {
        Some(existing) => format!("{}{}{}", existing, AND, clause),
        None => clause.to_string(),
    };
    query.set(FILTER, expression);
    query
}

/// Query parameters filtering on a single clause
pub fn filter_by(clause: &FilterClause) -> QueryParams {
    filter_and(clause, &QueryParams::new())
}

/// Split a filter expression back into clauses, values unescaped
pub fn parse_filter(expression: &str) -> Result<Vec<FilterClause>> {
    let invalid = |reason: String| Error::InvalidFilter {
        expression: expression.to_string(),
        reason,
    };

    expression
        .split(AND)
        .filter(|c| !c.is_empty())
        .map(|clause| {
            let start = clause
                .find(['=', '!'])
                .ok_or_else(|| invalid(format!("no operator in '{}'", clause)))?;
            let field = &clause[..start];
            let rest = &clause[start..];

            let (op, value) = if let Some(v) = rest.strip_prefix("==") {
                (FilterOp::Eq, v)
            } else if let Some(v) = rest.strip_prefix("!=") {
                (FilterOp::Ne, v)
            } else {
                [FilterOp::Gt, FilterOp::Ge, FilterOp::Lt, FilterOp::Le]
                    .into_iter()
                    .find_map(|op| rest.strip_prefix(op.as_str()).map(|v| (op, v)))
                    .ok_or_else(|| invalid(format!("unknown operator in '{}'", clause)))?
            };

            if field.is_empty() {
                return Err(invalid(format!("no field in '{}'", clause)));
            }
            let value = urlencoding::decode(value)
                .map_err(|e| invalid(format!("bad escape in '{}': {}", clause, e)))?;

            Ok(FilterClause::new(field, op, value.into_owned()))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    use url::Url;

    #[test]
    fn test_clause_rendering() {
        assert_eq!(FilterClause::eq("name", "r1").to_string(), "name==r1");
        assert_eq!(
            FilterClause::new("size", FilterOp::Ge, "10").to_string(),
            "size=ge=10"
        );
        assert_eq!(
            FilterClause::contains("name", "web").to_string(),
            "name==*web*"
        );
    }

    #[test]
    fn test_and_appends_to_existing_filter() {
        let query = filter_by(&FilterClause::eq("name", "r1"));
        let query = filter_and(&FilterClause::eq("orgRef.id", "urn:vcloud:org:1"), &query);
        assert_eq!(query.get(FILTER), Some("name==r1;orgRef.id==urn:vcloud:org:1"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_and_leaves_input_untouched() {
        let original = QueryParams::new().with("pageSize", "5");
        let filtered = filter_and(&FilterClause::eq("name", "x"), &original);
        assert!(!original.contains(FILTER));
        assert_eq!(filtered.get("pageSize"), Some("5"));
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let clause = FilterClause::eq("name", "a==b;c,d!e%f");
        assert_eq!(clause.to_string(), "name==a%3D%3Db%3Bc%2Cd%21e%25f");
    }

    #[test_case("a==b" ; "equality operator")]
    #[test_case("x;name==evil" ; "forged clause")]
    #[test_case("50%;off" ; "percent sign")]
    #[test_case("(o'brien)" ; "parens and quote")]
    #[test_case("plain value" ; "space")]
    fn test_value_round_trips_through_query_string(value: &str) {
        let query = filter_and(
            &FilterClause::eq("description", value),
            &filter_by(&FilterClause::eq("name", "r1")),
        );

        // Serialize the way the transport does, then read it back
        let mut url = Url::parse("https://h/cloudapi/1.0.0/ipSpaces").unwrap();
        url.query_pairs_mut().extend_pairs(query.iter());
        let (_, filter) = url
            .query_pairs()
            .find(|(k, _)| k == FILTER)
            .unwrap();

        let clauses = parse_filter(&filter).unwrap();
        assert_eq!(
            clauses,
            vec![
                FilterClause::eq("name", "r1"),
                FilterClause::eq("description", value),
            ]
        );
    }

    #[test]
    fn test_parse_operators() {
        let clauses = parse_filter("a!=1;b=gt=2;c=le=3").unwrap();
        assert_eq!(
            clauses.iter().map(|c| c.op).collect::<Vec<_>>(),
            vec![FilterOp::Ne, FilterOp::Gt, FilterOp::Le]
        );
    }

    #[test_case("name" ; "no operator")]
    #[test_case("==x" ; "no field")]
    #[test_case("a=zz=1" ; "unknown operator")]
    fn test_parse_invalid(expression: &str) {
        assert!(matches!(
            parse_filter(expression),
            Err(Error::InvalidFilter { .. })
        ));
    }
}
