/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use connector::{Ack, Gateway, GatewayError, ResidentId};

/// The two ways a resident can leave a list. The residents view destroys the
/// record; a building's roster only detaches it from the building.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResidentRemoval {
    Delete(ResidentId),
    UnassignFromBuilding(ResidentId),
}

impl ResidentRemoval {
    pub const fn resident_id(self) -> ResidentId {
        match self {
            ResidentRemoval::Delete(id) | ResidentRemoval::UnassignFromBuilding(id) => id,
        }
    }

    pub async fn apply(self, gateway: &dyn Gateway) -> Result<Ack, GatewayError> {
        match self {
            ResidentRemoval::Delete(id) => gateway.delete_resident(id).await,
            ResidentRemoval::UnassignFromBuilding(id) => gateway.unassign_resident(id).await,
        }
    }
}
