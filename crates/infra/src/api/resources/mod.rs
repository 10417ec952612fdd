//! Typed endpoint helpers
//!
//! Thin, borrowed views over [`ApiClient`](super::ApiClient); each resource
//! method maps to exactly one backend route and funnels through the shared
//! dispatcher, so the 401 contract applies uniformly.

pub mod auth;
pub mod climbers;
pub mod competitions;
pub mod scores;
pub mod seasons;

pub use auth::{AuthApi, LoginRequest, SessionTokens, SignupRequest};
pub use climbers::{Climber, ClimberRequest, ClimbersApi};
pub use competitions::{
    Competition, CompetitionQuery, CompetitionRegistration, CompetitionRequest, CompetitionsApi,
    RegistrationStatus,
};
pub use scores::{ProblemScore, ScoreBatch, ScoreUpdate, ScoresApi};
pub use seasons::{Season, SeasonQuery, SeasonRequest, SeasonsApi};

use super::client::ApiClient;

impl ApiClient {
    /// Authentication endpoints (`/auth/*`).
    #[must_use]
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }

    /// Climber endpoints (`/climber/*`).
    #[must_use]
    pub fn climbers(&self) -> ClimbersApi<'_> {
        ClimbersApi::new(self)
    }

    /// Competition and registration endpoints (`/competition/*`).
    #[must_use]
    pub fn competitions(&self) -> CompetitionsApi<'_> {
        CompetitionsApi::new(self)
    }

    /// Season endpoints (`/season/*`).
    #[must_use]
    pub fn seasons(&self) -> SeasonsApi<'_> {
        SeasonsApi::new(self)
    }

    /// Score endpoints (`/competitions/{id}/level/{level}/*`).
    #[must_use]
    pub fn scores(&self) -> ScoresApi<'_> {
        ScoresApi::new(self)
    }
}

/// Build a query string from present (key, value) pairs, percent-encoding
/// the values. Empty when no pair is present.
fn query_string(pairs: &[(&str, Option<String>)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter_map(|(key, value)| {
            value.as_ref().map(|v| format!("{key}={}", urlencoding::encode(v)))
        })
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}
