// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! `Link` response header parsing (RFC 8288 subset)
//!
//! The server sends one or more `Link` headers, each holding one or more
//! comma-separated links:
//!
//! ```text
//! <https://host/cloudapi/1.0.0/edgeGateways?page=2&pageSize=1>;rel="lastPage nextPage";type="application/json"
//! ```
//!
//! A link may carry several relation types in one `rel` parameter, so the
//! continuation check looks for `nextPage` among the whitespace-separated
//! tokens rather than comparing the whole value.

use url::Url;

use crate::PaginationError;

/// Relation type naming the following page of a collection
pub const REL_NEXT_PAGE: &str = "nextPage";

/// One parsed link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Target exactly as written between `<` and `>`
    pub uri: String,
    /// Relation types from the `rel` parameter
    pub rels: Vec<String>,
    /// Remaining parameters (`type`, `model`, `title`, ...), unquoted
    pub params: Vec<(String, String)>,
}

impl Link {
    /// Whether `rel` lists the given relation type
    pub fn has_rel(&self, rel: &str) -> bool {
        self.rels.iter().any(|r| r == rel)
    }
}

/// Parse a single `Link` header value into its links
///
/// Malformed fragments are skipped; a header the parser cannot make sense
/// of yields no links, which the page walk treats as "no next page".
pub fn parse_link_header(value: &str) -> Vec<Link> {
    let chars: Vec<char> = value.chars().collect();
    let mut links = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        // Seek the start of the next target
        while pos < chars.len() && chars[pos] != '<' {
            pos += 1;
        }
        if pos >= chars.len() {
            break;
        }
        let Some(close) = chars[pos..].iter().position(|&c| c == '>') else {
            break;
        };
        let uri: String = chars[pos + 1..pos + close].iter().collect();
        pos += close + 1;

        let mut rels = Vec::new();
        let mut params = Vec::new();

        // Parameters run until a top-level comma or the end of the value
        loop {
            while pos < chars.len() && chars[pos].is_whitespace() {
                pos += 1;
            }
            if pos >= chars.len() || chars[pos] == ',' {
                break;
            }
            if chars[pos] != ';' {
                // Garbage between parameters; resynchronise on the next link
                while pos < chars.len() && chars[pos] != ',' {
                    pos += 1;
                }
                break;
            }
            pos += 1;

            let name_start = pos;
            while pos < chars.len() && !matches!(chars[pos], '=' | ';' | ',') {
                pos += 1;
            }
            let name: String = chars[name_start..pos]
                .iter()
                .collect::<String>()
                .trim()
                .to_lowercase();

            let mut param_value = String::new();
            if pos < chars.len() && chars[pos] == '=' {
                pos += 1;
                while pos < chars.len() && chars[pos].is_whitespace() {
                    pos += 1;
                }
                if pos < chars.len() && chars[pos] == '"' {
                    pos += 1;
                    while pos < chars.len() && chars[pos] != '"' {
                        if chars[pos] == '\\' && pos + 1 < chars.len() {
                            pos += 1;
                        }
                        param_value.push(chars[pos]);
                        pos += 1;
                    }
                    // closing quote
                    pos += 1;
                } else {
                    let value_start = pos;
                    while pos < chars.len() && !matches!(chars[pos], ';' | ',') {
                        pos += 1;
                    }
                    param_value = chars[value_start..pos]
                        .iter()
                        .collect::<String>()
                        .trim()
                        .to_string();
                }
            }

            if name == "rel" {
                rels.extend(param_value.split_whitespace().map(str::to_string));
            } else if !name.is_empty() {
                params.push((name, param_value));
            }
        }

        links.push(Link { uri, rels, params });
    }

    links
}

/// Find the next-page address among the `Link` header values of a response
///
/// Relative targets are resolved against `current`, the address the page
/// was fetched from.
pub fn next_page(link_headers: &[String], current: &Url) -> Result<Option<Url>, PaginationError> {
    let next = link_headers
        .iter()
        .flat_map(|value| parse_link_header(value))
        .find(|link| link.has_rel(REL_NEXT_PAGE) && !link.uri.is_empty());

    match next {
        Some(link) => current
            .join(&link.uri)
            .map(Some)
            .map_err(|source| PaginationError::InvalidLink {
                uri: link.uri,
                source,
            }),
        None => Ok(None),
    }
}
