// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP transport seam
//!
//! The CRUD engine only needs "send one request, get status, headers and
//! body back". [`Transport`] is that contract; [`ReqwestTransport`] is the
//! production implementation. Headers are kept intact because both the
//! page chain (`Link`) and deferred operations (`Location`) travel there.

use async_trait::async_trait;
use bytes::Bytes;
use http::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, LOCATION};
use http::{Method, StatusCode};
use openapi_types::JSON_MIME;
use thiserror::Error;
use url::Url;

use crate::auth::AuthContext;
use crate::config::ClientConfig;
use crate::error::{Error, Result};

/// Failure to obtain a response at all
#[derive(Error, Debug)]
#[error("{method} {url} failed: {source}")]
pub struct TransportError {
    pub method: Method,
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(
        method: &Method,
        url: &Url,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            method: method.clone(),
            url: url.to_string(),
            source: source.into(),
        }
    }
}

/// One outgoing request
#[derive(Clone, Debug)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attach a JSON body and its content type
    pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MIME));
        self.body = Some(body);
        self
    }

    /// Add headers, replacing any already set under the same name
    pub fn with_headers(mut self, headers: &HeaderMap) -> Self {
        for (name, value) in headers {
            self.headers.insert(name.clone(), value.clone());
        }
        self
    }
}

/// One response, body fully read
#[derive(Clone, Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl ApiResponse {
    /// Every value of header `name` that is valid text, in order
    pub fn header_values(&self, name: impl http::header::AsHeaderName) -> Vec<String> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    /// The `Location` header, if present and non-empty
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    }
}

/// Executes requests on behalf of the engine
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError>;
}

/// [`Transport`] backed by a reqwest client
///
/// Adds the credentials and the versioned `Accept` header to every request.
pub struct ReqwestTransport {
    http: reqwest::Client,
    auth: AuthContext,
    accept: HeaderValue,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // A provider may already be installed by the embedding program
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(config.insecure)
            .build()
            .map_err(|e| Error::Config(format!("failed to create HTTP client: {}", e)))?;

        let accept = HeaderValue::from_str(&format!("{};version={}", JSON_MIME, config.api_version))
            .map_err(|e| {
                Error::Config(format!("invalid API version '{}': {}", config.api_version, e))
            })?;

        Ok(Self {
            http,
            auth: config.auth.clone(),
            accept,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> std::result::Result<ApiResponse, TransportError> {
        let ApiRequest {
            method,
            url,
            mut headers,
            body,
        } = request;

        headers
            .entry(ACCEPT)
            .or_insert_with(|| self.accept.clone());
        let (auth_name, auth_value) = self
            .auth
            .header_pair()
            .map_err(|e| TransportError::new(&method, &url, e))?;
        headers.insert(auth_name, auth_value);

        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut builder = self.http.request(method.clone(), url.clone()).headers(headers);
        if let Some(body) = body {
            tracing::trace!(body = %String::from_utf8_lossy(&body), "Request body");
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::new(&method, &url, e))?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(&method, &url, e))?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = status.as_u16(),
            bytes = body.len(),
            "Received response"
        );
        tracing::trace!(body = %String::from_utf8_lossy(&body), "Response body");

        Ok(ApiResponse {
            status,
            headers,
            body,
        })
    }
}
