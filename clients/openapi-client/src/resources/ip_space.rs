// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! IP Spaces

use openapi_types as types;
use openapi_types::endpoints::{IP_SPACE_SUMMARIES, IP_SPACES};

use crate::client::Client;
use crate::codec::one_or_error;
use crate::crud::{CrudConfig, OuterEntity};
use crate::error::{Error, Result};
use crate::filter::{FilterClause, filter_and, filter_by};
use crate::query::QueryParams;

const LABEL: &str = "IP Space";

/// An IP Space together with the client it was read through
#[derive(Clone, Debug)]
pub struct IpSpace {
    pub ip_space: types::IpSpace,
    client: Client,
}

impl OuterEntity for IpSpace {
    type Inner = types::IpSpace;

    fn wrap(client: &Client, inner: types::IpSpace) -> Self {
        Self {
            ip_space: inner,
            client: client.clone(),
        }
    }
}

impl Client {
    pub async fn create_ip_space(&self, ip_space: &types::IpSpace) -> Result<IpSpace> {
        self.create_outer(&CrudConfig::new(IP_SPACES, LABEL), ip_space)
            .await
    }

    pub async fn get_ip_space_by_id(&self, id: &str) -> Result<IpSpace> {
        if id.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: LABEL.to_string(),
                operation: "read",
            });
        }
        self.get_outer(&CrudConfig::new(IP_SPACES, LABEL).with_param(id))
            .await
    }

    /// IP Space summaries
    ///
    /// Summaries omit some details (ranges, prefixes); fetch by id for the
    /// full entity.
    pub async fn get_all_ip_space_summaries(
        &self,
        query: Option<&QueryParams>,
    ) -> Result<Vec<IpSpace>> {
        let config = CrudConfig::new(IP_SPACE_SUMMARIES, "IP Space Summary")
            .with_query(QueryParams::copy_or_new(query));
        self.get_all_outer(&config).await
    }

    /// Look the name up in the summaries, then read the full entity by id
    pub async fn get_ip_space_by_name(&self, name: &str) -> Result<IpSpace> {
        self.find_ip_space(name, filter_by(&FilterClause::eq("name", name)))
            .await
    }

    /// Same as [`Client::get_ip_space_by_name`], scoped to one organization
    pub async fn get_ip_space_by_name_and_org_id(
        &self,
        name: &str,
        org_id: &str,
    ) -> Result<IpSpace> {
        if org_id.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: "Org".to_string(),
                operation: "look up IP Space in",
            });
        }
        let query = filter_and(
            &FilterClause::eq("orgRef.id", org_id),
            &filter_by(&FilterClause::eq("name", name)),
        );
        self.find_ip_space(name, query).await
    }

    async fn find_ip_space(&self, name: &str, query: QueryParams) -> Result<IpSpace> {
        if name.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: LABEL.to_string(),
                operation: "look up",
            });
        }
        let summaries = self.get_all_ip_space_summaries(Some(&query)).await?;
        let summary = one_or_error(LABEL, "name", name, summaries)?;
        self.get_ip_space_by_id(&summary.ip_space.id).await
    }
}

impl IpSpace {
    pub fn id(&self) -> &str {
        &self.ip_space.id
    }

    pub fn name(&self) -> &str {
        &self.ip_space.name
    }

    /// Replace this IP Space with `ip_space` and return the server's view
    pub async fn update(&self, ip_space: &types::IpSpace) -> Result<IpSpace> {
        let config = CrudConfig::new(IP_SPACES, LABEL).with_param(self.id());
        self.client.update_outer(&config, ip_space).await
    }

    pub async fn delete(&self) -> Result<()> {
        let config = CrudConfig::new(IP_SPACES, LABEL).with_param(self.id());
        self.client.delete(&config).await
    }

    /// Re-read this IP Space from the server
    pub async fn refresh(&mut self) -> Result<()> {
        let fresh = self.client.get_ip_space_by_id(self.id()).await?;
        self.ip_space = fresh.ip_space;
        Ok(())
    }
}
