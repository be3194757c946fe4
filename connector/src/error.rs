/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::Resource;

/// Error value the backend returns when a building still has residents.
pub const BUILDING_OCCUPIED_MESSAGE: &str = "Cannot delete building with assigned residents.";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("request to {resource} failed: {source}")]
    Transport {
        resource: Resource,
        #[source]
        source: reqwest::Error,
    },
    #[error("{resource}: {message}")]
    Server { resource: Resource, message: String },
    #[error("cannot delete building with assigned residents")]
    BuildingOccupied,
    #[error("unexpected response from {resource}: {body}")]
    Malformed { resource: Resource, body: String },
}

impl GatewayError {
    pub fn from_server_message(resource: Resource, message: String) -> Self {
        if resource == Resource::Buildings && message == BUILDING_OCCUPIED_MESSAGE {
            return GatewayError::BuildingOccupied;
        }

        GatewayError::Server { resource, message }
    }

    pub fn server(resource: Resource, message: impl Into<String>) -> Self {
        Self::from_server_message(resource, message.into())
    }

    pub const fn is_building_occupied(&self) -> bool {
        matches!(self, GatewayError::BuildingOccupied)
    }
}
