// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cloud management OpenAPI wire types
//!
//! Schema-accurate representations of what the server puts on the wire:
//!
//! - [`Pages`]: the envelope every "get all" endpoint wraps its results in
//! - [`ApiError`]: the JSON error body returned with non-2xx statuses
//! - [`Task`]: the status document of a deferred (long-running) operation
//! - resource DTOs such as [`IpSpace`], [`EdgeGateway`] and [`FirewallGroup`]
//!
//! Nothing here performs I/O. The request engine lives in `openapi-client`.

pub mod endpoints;
pub mod types;

pub use types::*;
