/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! HTTP access to the buildings and residents endpoints.
//!
//! [`Gateway`] is the seam the view-models talk to; [`HttpGateway`] is the
//! reqwest-backed implementation used by the command line front end.

pub mod buildings;
pub mod error;
pub mod gateway;
pub mod residents;

pub use buildings::{Building, BuildingDraft, BuildingId};
pub use error::{BUILDING_OCCUPIED_MESSAGE, GatewayError};
pub use gateway::Gateway;
#[cfg(feature = "mock")]
pub use gateway::MockGateway;
pub use residents::{Directory, Resident, ResidentDraft, ResidentId, UNASSIGNED};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestConfig {
    pub server_url: String,
    /// Full URL of the combined residents + buildings endpoint. Falls back to
    /// `{server_url}/api/residents`.
    pub directory_url: Option<String>,
}

impl RequestConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            directory_url: None,
        }
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.server_url.trim_end_matches('/'), endpoint)
    }

    fn directory_endpoint(&self) -> String {
        match &self.directory_url {
            Some(url) => url.clone(),
            None => self.endpoint(Resource::Residents.path()),
        }
    }
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Buildings,
    Residents,
}

impl Resource {
    pub const fn path(self) -> &'static str {
        match self {
            Resource::Buildings => "buildings",
            Resource::Residents => "residents",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Success body of updates and deletes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub message: String,
}

/// Success body of a create: the server-assigned id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: i64,
    pub message: String,
}

/// Every endpoint answers either with its success shape or with `{error}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Failure { error: String },
    Success(T),
}

pub type RequestType = reqwest::Method;

#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: RequestConfig,
    client: reqwest::Client,
}

impl HttpGateway {
    pub fn new(config: RequestConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &RequestConfig {
        &self.config
    }

    fn get_client(&self, url: String, request_type: RequestType) -> reqwest::RequestBuilder {
        self.client
            .request(request_type, url)
            .header("Content-Type", "application/json")
    }
}

/// Decodes a response body. The status code is not consulted: the backend
/// reports failures in the body.
fn decode<T: DeserializeOwned>(resource: Resource, bytes: &[u8]) -> Result<T, GatewayError> {
    match serde_json::from_slice::<Envelope<T>>(bytes) {
        Ok(Envelope::Success(value)) => Ok(value),
        Ok(Envelope::Failure { error }) => Err(GatewayError::from_server_message(resource, error)),
        Err(_) => Err(GatewayError::Malformed {
            resource,
            body: String::from_utf8_lossy(bytes).into_owned(),
        }),
    }
}

async fn parse_response<T: DeserializeOwned>(
    resource: Resource,
    res: reqwest::Response,
) -> Result<T, GatewayError> {
    let bytes = res
        .bytes()
        .await
        .map_err(|source| GatewayError::Transport { resource, source })?;

    decode(resource, &bytes)
}

async fn send<T: DeserializeOwned>(
    resource: Resource,
    request: reqwest::RequestBuilder,
) -> Result<T, GatewayError> {
    let res = request
        .send()
        .await
        .map_err(|source| GatewayError::Transport { resource, source })?;

    parse_response(resource, res).await
}
