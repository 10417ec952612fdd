//! Season endpoints.

use serde::{Deserialize, Serialize};

use super::query_string;
use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// A competition season.
#[derive(Debug, Clone, Deserialize)]
pub struct Season {
    pub id: i64,
    pub name: String,
    pub year: i32,
}

/// Payload for creating or updating a season.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonRequest {
    pub name: String,
    pub year: i32,
}

/// Filters for `GET /season`.
#[derive(Debug, Clone, Default)]
pub struct SeasonQuery {
    pub name: Option<String>,
    pub year: Option<i32>,
}

/// Season endpoints. All routes need a session.
pub struct SeasonsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SeasonsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a season.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn create(&self, request: &SeasonRequest) -> Result<Season, ApiError> {
        self.client.post("/season", request, true).await
    }

    /// List seasons, optionally filtered by name and year.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn list(&self, query: &SeasonQuery) -> Result<Vec<Season>, ApiError> {
        let qs = query_string(&[
            ("name", query.name.clone()),
            ("year", query.year.map(|y| y.to_string())),
        ]);
        self.client.get(&format!("/season{qs}"), true).await
    }

    /// Fetch a season by id.
    ///
    /// # Errors
    /// `Http { status: 404 }` for an unknown id.
    pub async fn get(&self, id: i64) -> Result<Season, ApiError> {
        self.client.get(&format!("/season/{id}"), true).await
    }

    /// Replace a season's name and year.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn update(&self, id: i64, request: &SeasonRequest) -> Result<Season, ApiError> {
        self.client.put(&format!("/season/{id}"), request, true).await
    }

    /// Delete a season. The backend answers 204 with no body.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.client.delete(&format!("/season/{id}"), true).await
    }
}
