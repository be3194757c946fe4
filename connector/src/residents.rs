/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use serde::{Deserialize, Serialize};
use tracing::instrument;

pub type ResidentId = i64;

/// `apartment_id` of a resident that belongs to no building.
pub const UNASSIGNED: BuildingId = 0;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    pub id: ResidentId,
    pub name: String,
    pub last_name: String,
    #[serde(alias = "apartment")]
    pub apartment_id: BuildingId,
    pub email: String,
    pub mobile_number: String,
}

impl Resident {
    pub const fn is_unassigned(&self) -> bool {
        self.apartment_id == UNASSIGNED
    }
}

/// Request body for create and update. `apartment_id: None` means no building
/// was picked yet and is sent as `null`, unlike `Some(UNASSIGNED)`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResidentDraft {
    pub id: Option<ResidentId>,
    pub name: String,
    pub last_name: String,
    #[serde(alias = "apartment")]
    pub apartment_id: Option<BuildingId>,
    pub email: String,
    pub mobile_number: String,
}

impl From<&Resident> for ResidentDraft {
    fn from(resident: &Resident) -> Self {
        Self {
            id: Some(resident.id),
            name: resident.name.clone(),
            last_name: resident.last_name.clone(),
            apartment_id: Some(resident.apartment_id),
            email: resident.email.clone(),
            mobile_number: resident.mobile_number.clone(),
        }
    }
}

/// Combined listing backing the residents view.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    #[serde(default)]
    pub residents: Vec<Resident>,
    #[serde(default)]
    pub buildings: Vec<Building>,
}

#[derive(Serialize, Deserialize, Debug)]
struct DeleteResidentRequest {
    pub id: ResidentId,
}

#[derive(Serialize, Deserialize, Debug)]
struct AssignResidentRequest {
    pub id: ResidentId,
    pub apartment_id: BuildingId,
}

#[instrument(skip(http))]
pub async fn get_directory(http: &HttpGateway) -> Result<Directory, GatewayError> {
    let url = http.config.directory_endpoint();
    send(Resource::Residents, http.get_client(url, RequestType::GET)).await
}

#[instrument(skip(http))]
pub async fn get_in_building(
    http: &HttpGateway,
    building_id: BuildingId,
) -> Result<Vec<Resident>, GatewayError> {
    let url = http.config.endpoint(Resource::Residents.path());
    send(
        Resource::Residents,
        http.get_client(url, RequestType::GET)
            .query(&[("buildingId", building_id)]),
    )
    .await
}

#[instrument(skip(http, draft), fields(name = %draft.name))]
pub async fn post(http: &HttpGateway, draft: &ResidentDraft) -> Result<Ack, GatewayError> {
    let req = ResidentDraft {
        id: None,
        ..draft.clone()
    };

    let url = http.config.endpoint(Resource::Residents.path());
    send(
        Resource::Residents,
        http.get_client(url, RequestType::POST).json(&req),
    )
    .await
}

#[instrument(skip(http, draft), fields(resident_id = ?draft.id))]
pub async fn put(http: &HttpGateway, draft: &ResidentDraft) -> Result<Ack, GatewayError> {
    let url = http.config.endpoint(Resource::Residents.path());
    send(
        Resource::Residents,
        http.get_client(url, RequestType::PUT).json(draft),
    )
    .await
}

#[instrument(skip(http))]
pub async fn put_unassigned(http: &HttpGateway, id: ResidentId) -> Result<Ack, GatewayError> {
    let req = AssignResidentRequest {
        id,
        apartment_id: UNASSIGNED,
    };

    let url = http.config.endpoint(Resource::Residents.path());
    send(
        Resource::Residents,
        http.get_client(url, RequestType::PUT).json(&req),
    )
    .await
}

#[instrument(skip(http))]
pub async fn delete_resident(http: &HttpGateway, id: ResidentId) -> Result<Ack, GatewayError> {
    let req = DeleteResidentRequest { id };

    let url = http.config.endpoint(Resource::Residents.path());
    send(
        Resource::Residents,
        http.get_client(url, RequestType::DELETE).json(&req),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_serializes_apartment_id() {
        let draft = ResidentDraft {
            id: None,
            name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            apartment_id: Some(3),
            email: "ada@example.com".to_string(),
            mobile_number: "555".to_string(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["apartment_id"], 3);
        assert!(value.get("apartment").is_none());
        assert!(value["id"].is_null());
    }

    #[test]
    fn test_unselected_apartment_is_null_not_zero() {
        let draft = ResidentDraft::default();
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value["apartment_id"].is_null());

        let draft = ResidentDraft {
            apartment_id: Some(UNASSIGNED),
            ..ResidentDraft::default()
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["apartment_id"], 0);
    }

    #[test]
    fn test_resident_accepts_legacy_apartment_field() {
        let body = r#"{"id":5,"name":"Ada","last_name":"L","apartment":2,"email":"a@b","mobile_number":"1"}"#;
        let resident: Resident = serde_json::from_str(body).unwrap();
        assert_eq!(resident.apartment_id, 2);
        assert!(!resident.is_unassigned());
    }

    #[test]
    fn test_directory_defaults_missing_lists() {
        let directory: Directory = serde_json::from_str(r#"{"residents":[]}"#).unwrap();
        assert!(directory.buildings.is_empty());
    }
}
