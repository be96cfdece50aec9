// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Decoding of untyped item payloads into DTOs
//!
//! Collection reads keep items as [`serde_json::Value`] until every page is
//! in, so one walk can serve raw JSON consumers and typed consumers. These
//! helpers are the only place the concrete type enters.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Decode one item payload
pub fn decode_one<T: DeserializeOwned>(payload: Value, entity: &str) -> Result<T> {
    serde_json::from_value(payload).map_err(|source| Error::Decode {
        what: entity.to_string(),
        source,
    })
}

/// Decode every payload, preserving order
///
/// The first malformed item fails the whole call; nothing is skipped.
pub fn decode_many<T: DeserializeOwned>(payloads: Vec<Value>, entity: &str) -> Result<Vec<T>> {
    payloads
        .into_iter()
        .enumerate()
        .map(|(index, payload)| {
            serde_json::from_value(payload).map_err(|source| Error::Decode {
                what: format!("{} item {}", entity, index),
                source,
            })
        })
        .collect()
}

/// Decode a response body
pub fn decode_body<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        what: what.to_string(),
        source,
    })
}

/// The single element of `items`
///
/// No element is a not-found error ([`Error::is_not_found`] holds), more than
/// one is [`Error::NotExactlyOne`].
pub fn one_or_error<T>(entity: &str, field: &str, value: &str, mut items: Vec<T>) -> Result<T> {
    if items.len() == 1
        && let Some(item) = items.pop()
    {
        return Ok(item);
    }
    Err(Error::NotExactlyOne {
        entity: entity.to_string(),
        field: field.to_string(),
        value: value.to_string(),
        count: items.len(),
    })
}
