// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! OpenAPI Client Library
//!
//! A generic CRUD engine for the cloud-management OpenAPI (`/cloudapi/`).
//! One implementation of create, read, read-all, update and delete serves
//! every resource: resource modules describe a call with a [`CrudConfig`]
//! and wrap the decoded DTO in an [`OuterEntity`].
//!
//! The engine takes care of
//!
//! - walking paginated collections (`Link: <...>;rel="nextPage"`)
//! - the immediate (200/201 + body) and deferred (202 + `Location`) write
//!   modes, polling deferred operations until they finish
//! - classifying failures, including a not-found predicate
//!   ([`Error::is_not_found`]) for existence probes
//! - server-side filter expressions with escaped values
//!
//! ## Usage
//!
//! ```ignore
//! use openapi_client::{AuthContext, Client, ClientConfig};
//!
//! let config = ClientConfig::new(
//!     "https://vcd.example.com".parse()?,
//!     AuthContext::bearer(token),
//! );
//! let client = Client::new(config)?;
//!
//! let ip_space = client.get_ip_space_by_name("public-1").await?;
//! println!("{}", ip_space.id());
//! ```
//!
//! ### Generic calls
//!
//! Resources without a typed wrapper can use the engine directly:
//!
//! ```ignore
//! use openapi_client::{CrudConfig, filter::{FilterClause, filter_by}};
//!
//! let config = CrudConfig::new("1.0.0/edgeGateways", "Edge Gateway")
//!     .with_query(filter_by(&FilterClause::eq("name", "gw-1")));
//! let raw: Vec<serde_json::Value> = client.get_all_raw(&config).await?;
//! ```

pub mod auth;
pub mod client;
pub mod codec;
pub mod config;
pub mod crud;
pub mod endpoint;
pub mod error;
pub mod filter;
pub mod query;
pub mod resources;
pub mod task;
pub mod transport;

mod retry;

pub use auth::AuthContext;
pub use client::Client;
pub use codec::{decode_many, decode_one, one_or_error};
pub use config::{ClientConfig, PollConfig};
pub use crud::{CrudConfig, OuterEntity};
pub use endpoint::EndpointBuilder;
pub use error::{Error, Result};
pub use filter::{FilterClause, FilterOp, filter_and, filter_by};
pub use query::QueryParams;
pub use resources::{EdgeGateway, FirewallGroup, IpSpace};
pub use task::{OperationHandle, OperationState};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};

// Re-export so callers need not depend on these crates directly
pub use openapi_pagination::{PageLimits, PaginationError};
pub use openapi_types as types;
pub use tokio_util::sync::CancellationToken;
