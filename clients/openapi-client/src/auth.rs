// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Authentication context for OpenAPI requests
//!
//! Session establishment happens elsewhere; this module only carries an
//! already-issued token and turns it into the header added to every request.

use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

/// Header/value pair injected into every request
///
/// The token is held as a [`SecretString`] so it never shows up in `Debug`
/// output or logs.
#[derive(Clone, Debug)]
pub struct AuthContext {
    header: String,
    value: SecretString,
}

impl AuthContext {
    /// `Authorization: Bearer <token>`
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            header: AUTHORIZATION.as_str().to_string(),
            value: SecretString::from(format!("Bearer {}", token.into())),
        }
    }

    /// Send `value` verbatim under a custom header
    /// (e.g. `X-VMWARE-VCLOUD-ACCESS-TOKEN`)
    pub fn with_header(header: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            value: SecretString::from(value.into()),
        }
    }

    /// Name of the header carrying the credentials
    pub fn header_name(&self) -> &str {
        &self.header
    }

    /// Build the header pair, marked sensitive
    pub fn header_pair(&self) -> Result<(HeaderName, HeaderValue), http::Error> {
        let name = HeaderName::from_bytes(self.header.as_bytes())?;
        let mut value = HeaderValue::from_str(self.value.expose_secret())?;
        value.set_sensitive(true);
        Ok((name, value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header() {
        let auth = AuthContext::bearer("tok123");
        let (name, value) = auth.header_pair().unwrap();
        assert_eq!(name, AUTHORIZATION);
        assert_eq!(value.to_str().unwrap(), "Bearer tok123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn test_custom_header() {
        let auth = AuthContext::with_header("X-VMWARE-VCLOUD-ACCESS-TOKEN", "abc");
        let (name, value) = auth.header_pair().unwrap();
        assert_eq!(name.as_str(), "x-vmware-vcloud-access-token");
        assert_eq!(value.to_str().unwrap(), "abc");
    }

    #[test]
    fn test_token_not_in_debug_output() {
        let auth = AuthContext::bearer("very-secret");
        assert!(!format!("{:?}", auth).contains("very-secret"));
    }

    #[test]
    fn test_invalid_header_name_is_an_error() {
        let auth = AuthContext::with_header("bad header", "x");
        assert!(auth.header_pair().is_err());
    }
}
