//! Competition and registration endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::query_string;
use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// A scheduled competition.
#[derive(Debug, Clone, Deserialize)]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub comp_date: NaiveDate,
    pub season_id: i64,
}

/// Payload for `POST /competition`.
#[derive(Debug, Clone, Serialize)]
pub struct CompetitionRequest {
    pub name: String,
    pub comp_date: NaiveDate,
    pub season_id: i64,
}

/// Filters for `GET /competition`.
#[derive(Debug, Clone, Default)]
pub struct CompetitionQuery {
    pub name: Option<String>,
    pub year: Option<i32>,
}

/// A climber's registration in a competition.
#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionRegistration {
    pub climber_id: i64,
    pub level: u8,
    #[serde(default)]
    pub climber_name: Option<String>,
}

/// Answer of `GET /competition/{id}/registration/check`.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistrationStatus {
    pub registered: bool,
    #[serde(default)]
    pub level: Option<u8>,
}

#[derive(Serialize)]
struct RegisterRequest {
    level: u8,
}

/// Competition endpoints.
pub struct CompetitionsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CompetitionsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Create a competition.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn create(&self, request: &CompetitionRequest) -> Result<Competition, ApiError> {
        self.client.post("/competition", request, true).await
    }

    /// List competitions, optionally filtered by name and year. Public route.
    ///
    /// # Errors
    /// See [`ApiError`].
    pub async fn list(&self, query: &CompetitionQuery) -> Result<Vec<Competition>, ApiError> {
        let qs = query_string(&[
            ("name", query.name.clone()),
            ("year", query.year.map(|y| y.to_string())),
        ]);
        self.client.get(&format!("/competition{qs}"), false).await
    }

    /// List everyone registered for a competition.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn registrations(&self, id: i64) -> Result<Vec<CompetitionRegistration>, ApiError> {
        self.client.get(&format!("/competition/{id}/registration"), true).await
    }

    /// Check whether the current climber is registered.
    ///
    /// # Errors
    /// `AuthenticationRequired` without a usable session.
    pub async fn registration_status(&self, id: i64) -> Result<RegistrationStatus, ApiError> {
        self.client.get(&format!("/competition/{id}/registration/check"), true).await
    }

    /// Register the current climber at the given level.
    ///
    /// # Errors
    /// A 409 (`is_conflict()`) means the climber is already registered.
    pub async fn register(&self, id: i64, level: u8) -> Result<CompetitionRegistration, ApiError> {
        self.client.post(&format!("/competition/{id}/register"), &RegisterRequest { level }, true).await
    }
}
