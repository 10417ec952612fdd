//! Climber endpoints.

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// A climber profile.
#[derive(Debug, Clone, Deserialize)]
pub struct Climber {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Payload for `POST /climber`.
#[derive(Debug, Clone, Serialize)]
pub struct ClimberRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Climber endpoints.
pub struct ClimbersApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ClimbersApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a climber profile. Public route.
    ///
    /// # Errors
    /// A 409 (`is_conflict()`) means the name is already taken.
    pub async fn create(&self, request: &ClimberRequest) -> Result<Climber, ApiError> {
        self.client.post("/climber", request, false).await
    }

    /// Fetch the profile tied to the current session.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn me(&self) -> Result<Climber, ApiError> {
        self.client.get("/climber/me", true).await
    }

    /// Fetch a climber by id. Public route.
    ///
    /// # Errors
    /// `Http { status: 404 }` for an unknown id.
    pub async fn get(&self, id: i64) -> Result<Climber, ApiError> {
        self.client.get(&format!("/climber/{id}"), false).await
    }
}
