// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! NSX-T edge gateways

use openapi_types as types;
use openapi_types::endpoints::EDGE_GATEWAYS;

use crate::client::Client;
use crate::codec::one_or_error;
use crate::crud::{CrudConfig, OuterEntity};
use crate::error::{Error, Result};
use crate::filter::{FilterClause, filter_by};
use crate::query::QueryParams;

const LABEL: &str = "Edge Gateway";

#[derive(Clone, Debug)]
pub struct EdgeGateway {
    pub edge_gateway: types::EdgeGateway,
    pub(crate) client: Client,
}

impl OuterEntity for EdgeGateway {
    type Inner = types::EdgeGateway;

    fn wrap(client: &Client, inner: types::EdgeGateway) -> Self {
        Self {
            edge_gateway: inner,
            client: client.clone(),
        }
    }
}

impl Client {
    pub async fn get_edge_gateway_by_id(&self, id: &str) -> Result<EdgeGateway> {
        if id.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: LABEL.to_string(),
                operation: "read",
            });
        }
        self.get_outer(&CrudConfig::new(EDGE_GATEWAYS, LABEL).with_param(id))
            .await
    }

    pub async fn get_all_edge_gateways(
        &self,
        query: Option<&QueryParams>,
    ) -> Result<Vec<EdgeGateway>> {
        let config =
            CrudConfig::new(EDGE_GATEWAYS, LABEL).with_query(QueryParams::copy_or_new(query));
        self.get_all_outer(&config).await
    }

    pub async fn get_edge_gateway_by_name(&self, name: &str) -> Result<EdgeGateway> {
        if name.is_empty() {
            return Err(Error::MissingIdentifier {
                entity: LABEL.to_string(),
                operation: "look up",
            });
        }
        let query = filter_by(&FilterClause::eq("name", name));
        let gateways = self.get_all_edge_gateways(Some(&query)).await?;
        one_or_error(LABEL, "name", name, gateways)
    }
}

impl EdgeGateway {
    pub fn id(&self) -> &str {
        &self.edge_gateway.id
    }

    pub fn name(&self) -> &str {
        &self.edge_gateway.name
    }

    pub async fn update(&self, edge_gateway: &types::EdgeGateway) -> Result<EdgeGateway> {
        let config = CrudConfig::new(EDGE_GATEWAYS, LABEL).with_param(self.id());
        self.client.update_outer(&config, edge_gateway).await
    }

    pub async fn delete(&self) -> Result<()> {
        let config = CrudConfig::new(EDGE_GATEWAYS, LABEL).with_param(self.id());
        self.client.delete(&config).await
    }

    pub async fn refresh(&mut self) -> Result<()> {
        let fresh = self.client.get_edge_gateway_by_id(self.id()).await?;
        self.edge_gateway = fresh.edge_gateway;
        Ok(())
    }
}
