// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Common types used across the OpenAPI

use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type of every JSON request and response body
pub const JSON_MIME: &str = "application/json";

/// Minor error code the server uses for missing entities
pub const MINOR_ERROR_NOT_FOUND: &str = "NOT_FOUND";

/// OpenAPI error response
///
/// Returned as the body of non-2xx responses. `minorErrorCode` is the
/// machine-readable part; `message` is meant for humans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code (e.g. "NOT_FOUND", "BAD_REQUEST")
    #[serde(default)]
    pub minor_error_code: String,
    /// Human-readable error message
    #[serde(default)]
    pub message: String,
    /// Server-side stack trace, usually lengthy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
}

impl ApiError {
    /// Error body built from a response that was not a JSON error document
    pub fn from_raw_body(body: &str) -> Self {
        Self {
            minor_error_code: String::new(),
            message: body.trim().to_string(),
            stack_trace: None,
        }
    }

    /// Whether the server flagged the entity as missing
    pub fn is_not_found(&self) -> bool {
        self.minor_error_code == MINOR_ERROR_NOT_FOUND
    }

    /// Same as `Display`, but with the server stack trace appended
    pub fn with_stack(&self) -> String {
        match &self.stack_trace {
            Some(stack) => format!("{}. Stack: {}", self, stack),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor_error_code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{} - {}", self.minor_error_code, self.message)
        }
    }
}

/// Reference to another entity by id and (optionally) name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenApiReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

impl OpenApiReference {
    /// Reference carrying only an id, enough for create/update payloads
    pub fn from_id(id: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            id: id.into(),
        }
    }
}
