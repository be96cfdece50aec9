// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Firewall groups (IP sets, security groups) of an edge gateway
//!
//! Groups live in a flat collection; the owning gateway is named in the
//! payload on writes and selected with a `_context==<gateway id>` filter on
//! reads.

use openapi_types as types;
use openapi_types::OpenApiReference;
use openapi_types::endpoints::FIREWALL_GROUPS;

use crate::client::Client;
use crate::codec::one_or_error;
use crate::crud::{CrudConfig, OuterEntity};
use crate::error::{Error, Result};
use crate::filter::{FilterClause, filter_and, filter_by};
use crate::query::QueryParams;
use crate::resources::EdgeGateway;

const LABEL: &str = "Firewall Group";

/// Filter field scoping a query to one edge gateway
const CONTEXT_FIELD: &str = "_context";

#[derive(Clone, Debug)]
pub struct FirewallGroup {
    pub firewall_group: types::FirewallGroup,
    client: Client,
}

impl OuterEntity for FirewallGroup {
    type Inner = types::FirewallGroup;

    fn wrap(client: &Client, inner: types::FirewallGroup) -> Self {
        Self {
            firewall_group: inner,
            client: client.clone(),
        }
    }
}

impl Client {
    pub async fn get_firewall_group_by_id(&self, id: &str) -> Result<FirewallGroup> {
        if id.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: LABEL.to_string(),
                operation: "read",
            });
        }
        self.get_outer(&CrudConfig::new(FIREWALL_GROUPS, LABEL).with_param(id))
            .await
    }
}

impl EdgeGateway {
    /// Create a group owned by this gateway
    ///
    /// The gateway reference of `group` is overwritten with this gateway.
    pub async fn create_firewall_group(
        &self,
        group: &types::FirewallGroup,
    ) -> Result<FirewallGroup> {
        let mut group = group.clone();
        group.edge_gateway_ref = Some(OpenApiReference::from_id(self.id()));
        self.client
            .create_outer(&CrudConfig::new(FIREWALL_GROUPS, LABEL), &group)
            .await
    }

    /// Groups of this gateway; `query` may narrow them further
    pub async fn get_all_firewall_groups(
        &self,
        query: Option<&QueryParams>,
    ) -> Result<Vec<FirewallGroup>> {
        let query = filter_and(
            &FilterClause::eq(CONTEXT_FIELD, self.id()),
            &QueryParams::copy_or_new(query),
        );
        self.client
            .get_all_outer(&CrudConfig::new(FIREWALL_GROUPS, LABEL).with_query(query))
            .await
    }

    pub async fn get_firewall_group_by_name(&self, name: &str) -> Result<FirewallGroup> {
        if name.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: LABEL.to_string(),
                operation: "look up",
            });
        }
        let query = filter_by(&FilterClause::eq("name", name));
        let groups = self.get_all_firewall_groups(Some(&query)).await?;
        one_or_error(LABEL, "name", name, groups)
    }
}

impl FirewallGroup {
    pub fn id(&self) -> &str {
        &self.firewall_group.id
    }

    /// Id of the owning edge gateway, if the server reported one
    pub fn edge_gateway_id(&self) -> Option<&str> {
        self.firewall_group
            .edge_gateway_ref
            .as_ref()
            .map(|r| r.id.as_str())
            .filter(|id| !id.is_empty())
    }

    pub async fn update(&self, group: &types::FirewallGroup) -> Result<FirewallGroup> {
        let config = CrudConfig::new(FIREWALL_GROUPS, LABEL).with_param(self.id());
        self.client.update_outer(&config, group).await
    }

    pub async fn delete(&self) -> Result<()> {
        let config = CrudConfig::new(FIREWALL_GROUPS, LABEL).with_param(self.id());
        self.client.delete(&config).await
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let fresh = self.client.get_firewall_group_by_id(self.id()).await?;
        self.firewall_group = fresh.firewall_group;
        Ok(())
    }
}
