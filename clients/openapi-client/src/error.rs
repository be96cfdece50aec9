// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for openapi-client
//!
//! Every failure surfaces the most specific variant available and keeps the
//! underlying cause as its `source`, so the full chain can be inspected.
//! Callers probing for existence should use [`Error::is_not_found`] rather
//! than matching on variants or messages: the not-found condition may sit
//! below one of the per-operation wrappers.

use std::time::Duration;

use http::StatusCode;
use openapi_pagination::PaginationError;
use openapi_types::ApiError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while talking to the OpenAPI
#[derive(Error, Debug)]
pub enum Error {
    /// Network, TLS or protocol failure before a response was available
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Request body could not be serialized
    #[error("error encoding {entity} request body: {source}")]
    Encode {
        entity: String,
        #[source]
        source: serde_json::Error,
    },

    /// Response body was not valid JSON or did not match the expected type
    #[error("error decoding {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Non-2xx response carrying a server error body
    #[error("server returned {status}: {error}")]
    Server { status: StatusCode, error: ApiError },

    /// The server reported that the entity does not exist
    #[error("not found ({status}): {error}")]
    NotFound { status: StatusCode, error: ApiError },

    /// Runaway or malformed page chain
    #[error(transparent)]
    Pagination(PaginationError),

    /// The deferred operation did not reach a terminal state in time
    ///
    /// The server-side operation may still be running; it is not cancelled.
    #[error("operation {handle} did not complete within {waited:?}")]
    OperationTimeout { handle: String, waited: Duration },

    /// Polling was cancelled by the caller; the server-side operation is untouched
    #[error("waiting for operation {handle} was cancelled")]
    OperationCancelled { handle: String },

    /// The deferred operation reached a failed terminal state
    #[error("operation {handle} failed: {message}")]
    OperationFailed {
        handle: String,
        minor_error_code: String,
        message: String,
    },

    /// A deferred response arrived without a `Location` header
    #[error("server answered {status} without an operation Location header")]
    MissingOperationHandle { status: StatusCode },

    /// A completed create did not name the entity it created
    #[error("operation {handle} succeeded without an owner id")]
    MissingOwner { handle: String },

    /// Update or delete requested without an entity identifier
    #[error("cannot {operation} {entity}: missing identifier")]
    MissingIdentifier {
        entity: String,
        operation: &'static str,
    },

    /// Request configuration lacks a mandatory field
    #[error("cannot {operation}: {field} is not set")]
    MissingEntityConfig {
        operation: &'static str,
        field: &'static str,
    },

    /// Endpoint template and parameters do not form a valid address
    #[error("invalid endpoint '{template}': {reason}")]
    Endpoint { template: String, reason: String },

    /// Filter expression could not be parsed
    #[error("invalid filter expression '{expression}': {reason}")]
    InvalidFilter { expression: String, reason: String },

    /// Client configuration is unusable
    #[error("configuration error: {0}")]
    Config(String),

    /// Fetching the entity after its operation completed failed
    #[error("error re-fetching {address} after operation completed: {source}")]
    Refetch {
        address: String,
        #[source]
        source: Box<Error>,
    },

    #[error("error creating {entity}: {source}")]
    Create {
        entity: String,
        #[source]
        source: Box<Error>,
    },

    #[error("error reading {entity}: {source}")]
    Read {
        entity: String,
        #[source]
        source: Box<Error>,
    },

    #[error("error updating {entity}: {source}")]
    Update {
        entity: String,
        #[source]
        source: Box<Error>,
    },

    #[error("error deleting {entity}: {source}")]
    Delete {
        entity: String,
        #[source]
        source: Box<Error>,
    },

    /// A lookup expected exactly one match
    #[error("expected exactly one {entity} with {field} '{value}', found {count}")]
    NotExactlyOne {
        entity: String,
        field: String,
        value: String,
        count: usize,
    },
}

impl From<PaginationError> for Error {
    fn from(e: PaginationError) -> Self {
        match e {
            PaginationError::Envelope { address, source } => Error::Decode {
                what: format!("page envelope from {}", address),
                source,
            },
            other => Error::Pagination(other),
        }
    }
}

impl Error {
    /// Classify a non-2xx response
    ///
    /// A JSON error body is decoded; anything else is kept verbatim as the
    /// message. HTTP 404 and the `NOT_FOUND` minor code both mean the entity
    /// does not exist.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let error = serde_json::from_slice::<ApiError>(body)
            .ok()
            .filter(|e| !e.minor_error_code.is_empty() || !e.message.is_empty())
            .unwrap_or_else(|| ApiError::from_raw_body(&String::from_utf8_lossy(body)));

        if status == StatusCode::NOT_FOUND || error.is_not_found() {
            Error::NotFound { status, error }
        } else {
            Error::Server { status, error }
        }
    }

    /// Whether this error (or the error it wraps) means "no such entity"
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::NotExactlyOne { count, .. } => *count == 0,
            Error::Create { source, .. }
            | Error::Read { source, .. }
            | Error::Update { source, .. }
            | Error::Delete { source, .. }
            | Error::Refetch { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Server error body, if the failure carries one
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Server { error, .. } | Error::NotFound { error, .. } => Some(error),
            Error::Create { source, .. }
            | Error::Read { source, .. }
            | Error::Update { source, .. }
            | Error::Delete { source, .. }
            | Error::Refetch { source, .. } => source.api_error(),
            _ => None,
        }
    }

    /// Whether retrying the same GET may succeed
    pub(crate) fn is_transient(&self) -> bool {
        match self {
            Error::Transport(_) => true,
            Error::Server { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    pub(crate) fn create(entity: &str, source: Error) -> Self {
        Error::Create {
            entity: entity.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn read(entity: &str, source: Error) -> Self {
        Error::Read {
            entity: entity.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn update(entity: &str, source: Error) -> Self {
        Error::Update {
            entity: entity.to_string(),
            source: Box::new(source),
        }
    }

    pub(crate) fn delete(entity: &str, source: Error) -> Self {
        Error::Delete {
            entity: entity.to_string(),
            source: Box::new(source),
        }
    }
}

/// Result type for openapi-client operations
pub type Result<T> = std::result::Result<T, Error>;
