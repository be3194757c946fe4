/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub type BuildingId = i64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Building {
    pub id: BuildingId,
    pub name: String,
    pub address: String,
    /// Computed by the server; never sent back.
    #[serde(rename = "residentsCount", default)]
    pub residents_count: i64,
}

impl Building {
    pub const fn has_residents(&self) -> bool {
        self.residents_count > 0
    }
}

/// Request body for create (`id: null`) and update.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingDraft {
    pub id: Option<BuildingId>,
    pub name: String,
    pub address: String,
}

impl From<&Building> for BuildingDraft {
    fn from(building: &Building) -> Self {
        Self {
            id: Some(building.id),
            name: building.name.clone(),
            address: building.address.clone(),
        }
    }
}

#[instrument(skip(http))]
pub async fn get(http: &HttpGateway) -> Result<Vec<Building>, GatewayError> {
    let url = http.config.endpoint(Resource::Buildings.path());
    send(Resource::Buildings, http.get_client(url, RequestType::GET)).await
}

#[instrument(skip(http, draft), fields(name = %draft.name))]
pub async fn post(http: &HttpGateway, draft: &BuildingDraft) -> Result<Created, GatewayError> {
    let req = BuildingDraft {
        id: None,
        ..draft.clone()
    };

    let url = http.config.endpoint(Resource::Buildings.path());
    send(
        Resource::Buildings,
        http.get_client(url, RequestType::POST).json(&req),
    )
    .await
}

#[instrument(skip(http, draft), fields(building_id = ?draft.id))]
pub async fn put(http: &HttpGateway, draft: &BuildingDraft) -> Result<Ack, GatewayError> {
    let url = http.config.endpoint(Resource::Buildings.path());
    send(
        Resource::Buildings,
        http.get_client(url, RequestType::PUT).json(draft),
    )
    .await
}

#[instrument(skip(http))]
pub async fn delete_building(http: &HttpGateway, id: BuildingId) -> Result<Ack, GatewayError> {
    let url = http
        .config
        .endpoint(&format!("{}/{}", Resource::Buildings.path(), id));
    send(Resource::Buildings, http.get_client(url, RequestType::DELETE)).await
}
