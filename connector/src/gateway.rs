/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use async_trait::async_trait;

/// Remote operations the console needs. Every call is at-most-once: no
/// retries, no timeouts beyond the transport's own.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn list_buildings(&self) -> Result<Vec<Building>, GatewayError>;

    async fn create_building(&self, draft: &BuildingDraft) -> Result<Created, GatewayError>;

    async fn update_building(&self, draft: &BuildingDraft) -> Result<Ack, GatewayError>;

    /// Fails with [`GatewayError::BuildingOccupied`] while residents are
    /// assigned to the building.
    async fn delete_building(&self, id: BuildingId) -> Result<Ack, GatewayError>;

    async fn list_residents_in(&self, building_id: BuildingId)
    -> Result<Vec<Resident>, GatewayError>;

    /// Residents together with the buildings they may refer to.
    async fn directory(&self) -> Result<Directory, GatewayError>;

    async fn create_resident(&self, draft: &ResidentDraft) -> Result<Ack, GatewayError>;

    async fn update_resident(&self, draft: &ResidentDraft) -> Result<Ack, GatewayError>;

    /// Destroys the resident record.
    async fn delete_resident(&self, id: ResidentId) -> Result<Ack, GatewayError>;

    /// Keeps the resident record and sets its `apartment_id` to [`UNASSIGNED`].
    async fn unassign_resident(&self, id: ResidentId) -> Result<Ack, GatewayError>;
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn list_buildings(&self) -> Result<Vec<Building>, GatewayError> {
        buildings::get(self).await
    }

    async fn create_building(&self, draft: &BuildingDraft) -> Result<Created, GatewayError> {
        buildings::post(self, draft).await
    }

    async fn update_building(&self, draft: &BuildingDraft) -> Result<Ack, GatewayError> {
        buildings::put(self, draft).await
    }

    async fn delete_building(&self, id: BuildingId) -> Result<Ack, GatewayError> {
        buildings::delete_building(self, id).await
    }

    async fn list_residents_in(
        &self,
        building_id: BuildingId,
    ) -> Result<Vec<Resident>, GatewayError> {
        residents::get_in_building(self, building_id).await
    }

    async fn directory(&self) -> Result<Directory, GatewayError> {
        residents::get_directory(self).await
    }

    async fn create_resident(&self, draft: &ResidentDraft) -> Result<Ack, GatewayError> {
        residents::post(self, draft).await
    }

    async fn update_resident(&self, draft: &ResidentDraft) -> Result<Ack, GatewayError> {
        residents::put(self, draft).await
    }

    async fn delete_resident(&self, id: ResidentId) -> Result<Ack, GatewayError> {
        residents::delete_resident(self, id).await
    }

    async fn unassign_resident(&self, id: ResidentId) -> Result<Ack, GatewayError> {
        residents::put_unassigned(self, id).await
    }
}
