// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Generic CRUD engine
//!
//! Every resource is handled by the same handful of operations, generic over
//! the wire DTO (the "inner" entity). Resource modules only describe the
//! call with a [`CrudConfig`] and, for typed results, supply an
//! [`OuterEntity`] that wraps the decoded DTO together with a client handle.
//!
//! Writes reconcile the two response modes of the API:
//!
//! - immediate: the body of the 200/201 response is the new representation
//! - deferred: `202 Accepted` + `Location`; the operation is awaited, then
//!   the entity is fetched again (by the owner id of the operation for a
//!   create, at the same address for an update)
//!
//! Both paths return the same DTO, so callers cannot tell them apart.

use bytes::Bytes;
use http::Method;
use http::header::{HeaderMap, HeaderName, HeaderValue, LINK};
use openapi_pagination::{PageFetcher, RawPage, fetch_all_pages};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::client::Client;
use crate::codec::{decode_body, decode_many};
use crate::error::{Error, Result};
use crate::query::{PAGE_SIZE, QueryParams};

/// Description of one CRUD call
///
/// Built fresh for every call and never stored.
#[derive(Clone, Debug, Default)]
pub struct CrudConfig {
    /// Endpoint template relative to `<base>/cloudapi/`
    pub endpoint: String,
    /// Path parameters; the last one is usually the entity id
    pub endpoint_params: Vec<String>,
    pub query_params: QueryParams,
    /// Human-readable entity name used in errors and logs
    pub entity_label: String,
    /// Headers sent with every request of the call
    pub extra_headers: HeaderMap,
    /// Cancels waiting for a deferred operation
    pub cancel: Option<CancellationToken>,
}

impl CrudConfig {
    pub fn new(endpoint: impl Into<String>, entity_label: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            entity_label: entity_label.into(),
            ..Self::default()
        }
    }

    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.endpoint_params.push(param.into());
        self
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query_params = query;
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.extra_headers.insert(name, value);
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn validate(&self, operation: &'static str) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::MissingEntityConfig {
                operation,
                field: "endpoint",
            });
        }
        if self.entity_label.is_empty() {
            return Err(Error::MissingEntityConfig {
                operation,
                field: "entity label",
            });
        }
        Ok(())
    }

    /// Reject calls that would address the whole collection
    fn require_identifier(&self, operation: &'static str) -> Result<()> {
        if self.endpoint_params.is_empty() || self.endpoint_params.iter().any(String::is_empty) {
            return Err(Error::MissingIdentifier {
                entity: self.entity_label.clone(),
                operation,
            });
        }
        Ok(())
    }

    fn cancellation(&self) -> CancellationToken {
        self.cancel.clone().unwrap_or_default()
    }
}

/// Typed wrapper around a DTO
///
/// `wrap` must have no side effects: it is called once per element of a
/// collection read, and once per create/read/update.
pub trait OuterEntity: Sized {
    type Inner: Serialize + DeserializeOwned + Send + Sync;

    fn wrap(client: &Client, inner: Self::Inner) -> Self;
}

/// Page source for one collection read
struct CollectionFetcher<'a> {
    client: &'a Client,
    headers: &'a HeaderMap,
}

#[async_trait::async_trait]
impl PageFetcher for CollectionFetcher<'_> {
    type Error = Error;

    async fn fetch_page(&self, address: &Url, query: &[(String, String)]) -> Result<RawPage> {
        let response = self
            .client
            .send(Method::GET, address.clone(), query, None, self.headers)
            .await?;
        if !response.status.is_success() {
            return Err(Error::from_response(response.status, &response.body));
        }
        Ok(RawPage {
            links: response.header_values(LINK),
            body: response.body,
        })
    }
}

fn is_blank(body: &Bytes) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

impl Client {
    fn encode<T: Serialize>(&self, config: &CrudConfig, entity: &T) -> Result<Vec<u8>> {
        serde_json::to_vec(entity).map_err(|source| Error::Encode {
            entity: config.entity_label.clone(),
            source,
        })
    }

    async fn refetch<T: DeserializeOwned>(&self, address: Url, config: &CrudConfig) -> Result<T> {
        self.get_json(address.clone(), &[], &config.extra_headers, &config.entity_label)
            .await
            .map_err(|e| Error::Refetch {
                address: address.to_string(),
                source: Box::new(e),
            })
    }

    /// POST `entity` and return the created DTO
    pub async fn create_inner<T>(&self, config: &CrudConfig, entity: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.create_inner_unwrapped(config, entity)
            .await
            .map_err(|e| Error::create(&config.entity_label, e))
    }

    async fn create_inner_unwrapped<T>(&self, config: &CrudConfig, entity: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        config.validate("create")?;
        let body = self.encode(config, entity)?;
        let url = self.endpoints().build(&config.endpoint, &config.endpoint_params)?;

        tracing::debug!(entity = %config.entity_label, url = %url, "Creating entity");

        let (response, operation) = self
            .send_write(
                Method::POST,
                &url,
                config.query_params.as_pairs(),
                Some(body),
                &config.extra_headers,
                &config.cancellation(),
            )
            .await?;

        match operation {
            Some((handle, task)) => {
                let owner = task.owner_id().ok_or_else(|| Error::MissingOwner {
                    handle: handle.to_string(),
                })?;
                let mut params = config.endpoint_params.clone();
                params.push(owner.to_string());
                let address = self.endpoints().build(&config.endpoint, &params)?;
                self.refetch(address, config).await
            }
            None => decode_body(&response.body, &config.entity_label),
        }
    }

    /// GET one entity
    pub async fn get_inner<T: DeserializeOwned>(&self, config: &CrudConfig) -> Result<T> {
        let result = async {
            config.validate("read")?;
            let url = self.endpoints().build(&config.endpoint, &config.endpoint_params)?;
            self.get_json(
                url,
                config.query_params.as_pairs(),
                &config.extra_headers,
                &config.entity_label,
            )
            .await
        };
        result
            .await
            .map_err(|e| Error::read(&config.entity_label, e))
    }

    /// Every item of a collection, undecoded, in server order
    ///
    /// A `pageSize` hint is added unless the caller set one. Zero results
    /// is an empty vector, not an error.
    pub async fn get_all_raw(&self, config: &CrudConfig) -> Result<Vec<Value>> {
        let result = async {
            config.validate("read all")?;
            let url = self.endpoints().build(&config.endpoint, &config.endpoint_params)?;

            let mut query = config.query_params.clone();
            if let Some(page_size) = self.config().page_size
                && !query.contains(PAGE_SIZE)
            {
                query.set(PAGE_SIZE, page_size.to_string());
            }

            let fetcher = CollectionFetcher {
                client: self,
                headers: &config.extra_headers,
            };
            let items = fetch_all_pages(
                &fetcher,
                &url,
                query.as_pairs(),
                &self.config().page_limits,
            )
            .await?;

            tracing::debug!(
                entity = %config.entity_label,
                count = items.len(),
                "Collected entities"
            );
            Ok::<_, Error>(items)
        };
        result
            .await
            .map_err(|e| Error::read(&config.entity_label, e))
    }

    /// Every item of a collection, decoded, in server order
    pub async fn get_all_inner<T: DeserializeOwned>(&self, config: &CrudConfig) -> Result<Vec<T>> {
        let items = self.get_all_raw(config).await?;
        decode_many(items, &config.entity_label).map_err(|e| Error::read(&config.entity_label, e))
    }

    /// PUT `entity` and return the updated DTO
    pub async fn update_inner<T>(&self, config: &CrudConfig, entity: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        self.update_inner_unwrapped(config, entity)
            .await
            .map_err(|e| Error::update(&config.entity_label, e))
    }

    async fn update_inner_unwrapped<T>(&self, config: &CrudConfig, entity: &T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        config.validate("update")?;
        config.require_identifier("update")?;
        let body = self.encode(config, entity)?;
        let url = self.endpoints().build(&config.endpoint, &config.endpoint_params)?;

        tracing::debug!(entity = %config.entity_label, url = %url, "Updating entity");

        let (response, operation) = self
            .send_write(
                Method::PUT,
                &url,
                config.query_params.as_pairs(),
                Some(body),
                &config.extra_headers,
                &config.cancellation(),
            )
            .await?;

        // Same identity after an update: re-read the address we wrote to
        if operation.is_some() || is_blank(&response.body) {
            return self.refetch(url, config).await;
        }
        decode_body(&response.body, &config.entity_label)
    }

    /// DELETE the entity; a deferred delete succeeds once its operation does
    pub async fn delete(&self, config: &CrudConfig) -> Result<()> {
        let result = async {
            config.validate("delete")?;
            config.require_identifier("delete")?;
            let url = self.endpoints().build(&config.endpoint, &config.endpoint_params)?;

            tracing::debug!(entity = %config.entity_label, url = %url, "Deleting entity");

            self.send_write(
                Method::DELETE,
                &url,
                config.query_params.as_pairs(),
                None,
                &config.extra_headers,
                &config.cancellation(),
            )
            .await?;
            Ok::<_, Error>(())
        };
        result
            .await
            .map_err(|e| Error::delete(&config.entity_label, e))
    }

    /// Create and wrap
    pub async fn create_outer<O: OuterEntity>(
        &self,
        config: &CrudConfig,
        inner: &O::Inner,
    ) -> Result<O> {
        let inner = self.create_inner(config, inner).await?;
        Ok(O::wrap(self, inner))
    }

    /// Read one and wrap
    pub async fn get_outer<O: OuterEntity>(&self, config: &CrudConfig) -> Result<O> {
        let inner = self.get_inner(config).await?;
        Ok(O::wrap(self, inner))
    }

    /// Read all and wrap each element
    pub async fn get_all_outer<O: OuterEntity>(&self, config: &CrudConfig) -> Result<Vec<O>> {
        let inners: Vec<O::Inner> = self.get_all_inner(config).await?;
        Ok(inners.into_iter().map(|inner| O::wrap(self, inner)).collect())
    }

    /// Update and wrap
    pub async fn update_outer<O: OuterEntity>(
        &self,
        config: &CrudConfig,
        inner: &O::Inner,
    ) -> Result<O> {
        let inner = self.update_inner(config, inner).await?;
        Ok(O::wrap(self, inner))
    }
}
