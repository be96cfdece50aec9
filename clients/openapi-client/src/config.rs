// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use std::time::Duration;

use openapi_pagination::PageLimits;
use url::Url;

use crate::auth::AuthContext;
use crate::error::{Error, Result};

/// Default OpenAPI version sent in the `Accept` header
pub const DEFAULT_API_VERSION: &str = "37.2";

/// Default `pageSize` hint for collection reads
const DEFAULT_PAGE_SIZE: u32 = 128;

/// Default per-request HTTP timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default limit on waiting for one deferred operation (seconds)
const DEFAULT_TASK_TIMEOUT_SECS: u64 = 600;

const DEFAULT_POLL_INITIAL_MS: u64 = 500;
const DEFAULT_POLL_MAX_MS: u64 = 5_000;
const DEFAULT_POLL_MULTIPLIER: u32 = 2;

/// Default number of retries for a failed status check
const DEFAULT_STATUS_RETRIES: u32 = 3;
const DEFAULT_STATUS_RETRY_DELAY_MS: u64 = 150;

const DEFAULT_USER_AGENT: &str = concat!("openapi-client/", env!("CARGO_PKG_VERSION"));

/// How deferred operations are polled
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PollConfig {
    /// Delay before the second status check
    pub initial_interval: Duration,
    /// Upper bound for the delay between status checks
    pub max_interval: Duration,
    /// Factor applied to the delay after every check
    pub multiplier: u32,
    /// Give up waiting after this long
    pub timeout: Duration,
    /// Retries for a status check that failed transiently
    pub status_retries: u32,
    /// First delay between status check retries
    pub retry_delay: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(DEFAULT_POLL_INITIAL_MS),
            max_interval: Duration::from_millis(DEFAULT_POLL_MAX_MS),
            multiplier: DEFAULT_POLL_MULTIPLIER,
            timeout: Duration::from_secs(DEFAULT_TASK_TIMEOUT_SECS),
            status_retries: DEFAULT_STATUS_RETRIES,
            retry_delay: Duration::from_millis(DEFAULT_STATUS_RETRY_DELAY_MS),
        }
    }
}

impl PollConfig {
    pub(crate) fn next_interval(&self, current: Duration) -> Duration {
        current
            .saturating_mul(self.multiplier.max(1))
            .min(self.max_interval)
    }
}

/// Everything a [`Client`](crate::Client) needs
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Site address; `/cloudapi/` is appended unless already present
    pub base_url: Url,
    /// Sent as `Accept: application/json;version=<api_version>`
    pub api_version: String,
    pub auth: AuthContext,
    pub request_timeout: Duration,
    /// Skip TLS certificate verification
    pub insecure: bool,
    pub user_agent: String,
    /// `pageSize` added to collection reads that do not set one
    pub page_size: Option<u32>,
    pub page_limits: PageLimits,
    pub poll: PollConfig,
}

impl ClientConfig {
    /// Configuration with defaults for everything but address and credentials
    pub fn new(base_url: Url, auth: AuthContext) -> Self {
        Self {
            base_url,
            api_version: DEFAULT_API_VERSION.to_string(),
            auth,
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            insecure: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            page_size: Some(DEFAULT_PAGE_SIZE),
            page_limits: PageLimits::default(),
            poll: PollConfig::default(),
        }
    }

    /// Load configuration from environment variables
    ///
    /// `OPENAPI_URL` and `OPENAPI_TOKEN` are required. The token is sent as a
    /// bearer token unless `OPENAPI_AUTH_HEADER` names another header, in
    /// which case it is sent verbatim under that header.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("OPENAPI_URL")
            .map_err(|_| Error::Config("OPENAPI_URL is not set".to_string()))?;
        let base_url = Url::parse(&url)
            .map_err(|e| Error::Config(format!("invalid OPENAPI_URL '{}': {}", url, e)))?;

        let token = std::env::var("OPENAPI_TOKEN")
            .map_err(|_| Error::Config("OPENAPI_TOKEN is not set".to_string()))?;
        let auth = match std::env::var("OPENAPI_AUTH_HEADER") {
            Ok(header) if !header.is_empty() => AuthContext::with_header(header, token),
            _ => AuthContext::bearer(token),
        };

        let mut config = Self::new(base_url, auth);

        if let Ok(version) = std::env::var("OPENAPI_API_VERSION")
            && !version.is_empty()
        {
            config.api_version = version;
        }

        config.insecure = std::env::var("OPENAPI_INSECURE")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        if let Some(page_size) = std::env::var("OPENAPI_PAGE_SIZE")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
        {
            config.page_size = (page_size > 0).then_some(page_size);
        }

        if let Some(secs) = std::env::var("OPENAPI_TASK_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.poll.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    pub fn with_insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// `None` leaves page sizing to the server
    pub fn with_page_size(mut self, page_size: Option<u32>) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_page_limits(mut self, limits: PageLimits) -> Self {
        self.page_limits = limits;
        self
    }

    pub fn with_poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
