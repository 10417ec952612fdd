//! Authentication endpoints
//!
//! Login and signup are the two public routes that mint a session; both save
//! the returned pair through the client's store before handing it back.
//! Logout is purely local: the backend holds no session state to revoke.

use blocrank_common::session::TokenPair;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::client::ApiClient;
use crate::api::errors::ApiError;

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub name: String,
    pub password: String,
}

/// Payload for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Token response from login and signup.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    /// Always `"bearer"` from this backend; decoded but not persisted.
    #[serde(default)]
    pub token_type: String,
    /// Present when the account already has a climber profile.
    #[serde(default)]
    pub climber_id: Option<i64>,
}

impl SessionTokens {
    /// The persistable portion of the response.
    #[must_use]
    pub fn pair(&self) -> TokenPair {
        TokenPair::new(self.access_token.clone(), self.refresh_token.clone())
    }
}

/// Authentication endpoints.
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Log in and persist the issued token pair.
    ///
    /// # Errors
    /// `Validation` on a 422 (wrong credentials are reported that way by
    /// this backend), `Config` when the store rejects the save.
    pub async fn login(&self, request: &LoginRequest) -> Result<SessionTokens, ApiError> {
        let tokens: SessionTokens = self.client.post("/auth/login", request, false).await?;
        self.client.save_tokens(&tokens.pair()).await?;
        info!(name = %request.name, "logged in");
        Ok(tokens)
    }

    /// Create an account and persist the issued token pair.
    ///
    /// # Errors
    /// `Validation` on a 422, `Config` when the store rejects the save.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SessionTokens, ApiError> {
        let tokens: SessionTokens = self.client.post("/auth/signup", request, false).await?;
        self.client.save_tokens(&tokens.pair()).await?;
        info!(name = %request.name, "account created");
        Ok(tokens)
    }

    /// Drop the local session.
    ///
    /// # Errors
    /// `Config` when the store rejects the clear.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.store().clear().await.map_err(|e| ApiError::Config(e.to_string()))?;
        info!("logged out");
        Ok(())
    }
}
