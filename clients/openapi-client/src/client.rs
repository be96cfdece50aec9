// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client handle shared by every operation

use std::fmt;
use std::sync::Arc;

use http::header::HeaderMap;
use http::Method;
use serde::de::DeserializeOwned;
use url::Url;

use crate::codec::decode_body;
use crate::config::ClientConfig;
use crate::endpoint::EndpointBuilder;
use crate::error::{Error, Result};
use crate::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};

/// Entry point to the OpenAPI
///
/// Cheap to clone: clones share configuration and transport. A client holds
/// no mutable state, so independent operations may run concurrently from
/// clones of the same client.
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
    endpoints: EndpointBuilder,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("root", &self.endpoints.root().as_str())
            .field("api_version", &self.config.api_version)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Client using the reqwest transport
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Client using a caller-supplied transport
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let endpoints = EndpointBuilder::new(&config.base_url)?;
        Ok(Self {
            config: Arc::new(config),
            transport,
            endpoints,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &EndpointBuilder {
        &self.endpoints
    }

    /// Send one request and return the response whatever its status
    ///
    /// `query` is appended to whatever query `url` already carries.
    pub async fn send(
        &self,
        method: Method,
        url: Url,
        query: &[(String, String)],
        body: Option<Vec<u8>>,
        headers: &HeaderMap,
    ) -> Result<ApiResponse> {
        let mut url = url;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        let mut request = ApiRequest::new(method, url).with_headers(headers);
        if let Some(body) = body {
            request = request.with_json_body(body);
        }

        Ok(self.transport.send(request).await?)
    }

    /// GET `url` and decode a successful response body
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(String, String)],
        headers: &HeaderMap,
        what: &str,
    ) -> Result<T> {
        let response = self.send(Method::GET, url, query, None, headers).await?;
        if !response.status.is_success() {
            return Err(Error::from_response(response.status, &response.body));
        }
        decode_body(&response.body, what)
    }
}
