// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Endpoint template expansion

use url::Url;

use crate::error::{Error, Result};

/// Placeholder for one path parameter; must be a whole path segment
pub const PLACEHOLDER: &str = "{}";

/// Turns endpoint templates into absolute addresses under `<base>/cloudapi/`
#[derive(Clone, Debug)]
pub struct EndpointBuilder {
    root: Url,
}

impl EndpointBuilder {
    /// Root the builder at `base`, adding `/cloudapi/` unless already present
    pub fn new(base: &Url) -> Result<Self> {
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!("'{}' cannot be used as a base URL", base)));
        }

        let mut root = base.clone();
        let path = root.path().trim_end_matches('/').to_string();
        let path = if path.ends_with("/cloudapi") {
            format!("{}/", path)
        } else {
            format!("{}/cloudapi/", path)
        };
        root.set_path(&path);
        root.set_query(None);
        root.set_fragment(None);

        Ok(Self { root })
    }

    /// The `<base>/cloudapi/` address every template is relative to
    pub fn root(&self) -> &Url {
        &self.root
    }

    /// Expand `template` with `params`
    ///
    /// Each `{}` segment takes the next parameter, percent-encoded as a
    /// single path segment. Parameters left over are appended as trailing
    /// segments, so `("1.0.0/ipSpaces", ["abc"])` addresses one item of the
    /// collection.
    pub fn build(&self, template: &str, params: &[String]) -> Result<Url> {
        let invalid = |reason: &str| Error::Endpoint {
            template: template.to_string(),
            reason: reason.to_string(),
        };

        if let Some(empty) = params.iter().position(|p| p.is_empty()) {
            return Err(invalid(&format!("path parameter {} is empty", empty)));
        }

        let mut url = self.root.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| invalid("base URL cannot carry a path"))?;
            segments.pop_if_empty();

            let mut params = params.iter();
            for segment in template.split('/').filter(|s| !s.is_empty()) {
                if segment == PLACEHOLDER {
                    let param = params
                        .next()
                        .ok_or_else(|| invalid("not enough path parameters"))?;
                    segments.push(param);
                } else if segment.contains(PLACEHOLDER) {
                    return Err(invalid("placeholder must be a whole path segment"));
                } else {
                    segments.push(segment);
                }
            }
            segments.extend(params);
        }

        Ok(url)
    }
}
