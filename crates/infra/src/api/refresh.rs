//! Silent token refresh
//!
//! Exchanges the stored refresh token for a fresh token pair against
//! `POST /auth/refresh`. Failure is soft: the service reports `None` and the
//! caller decides what to do with the session. The store is never cleared
//! from here, so a transient backend outage cannot log the user out.

use std::sync::Arc;

use blocrank_common::session::{SessionStore, TokenPair};
use serde::Serialize;
use tracing::{debug, warn};

use crate::http::HttpClient;

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

/// Performs the refresh-token exchange and persists the result.
#[derive(Clone)]
pub struct RefreshService {
    http: HttpClient,
    store: Arc<dyn SessionStore>,
    refresh_url: String,
}

impl RefreshService {
    /// Create a refresh service posting to `{base_url}/auth/refresh`.
    #[must_use]
    pub fn new(http: HttpClient, store: Arc<dyn SessionStore>, base_url: &str) -> Self {
        Self { http, store, refresh_url: format!("{base_url}/auth/refresh") }
    }

    /// Attempt a silent refresh.
    ///
    /// Returns the new token pair when the exchange succeeded and the pair
    /// was handed to the store, `None` otherwise (no refresh token on hand,
    /// transport failure, non-2xx response, or undecodable body).
    pub async fn refresh(&self) -> Option<TokenPair> {
        let refresh_token = self.store.refresh_token().await?;

        let request = self
            .http
            .request(reqwest::Method::POST, &self.refresh_url)
            .json(&RefreshRequest { refresh_token: &refresh_token });

        let response = match self.http.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, "token refresh request failed");
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(status = %response.status(), "token refresh rejected");
            return None;
        }

        let pair: TokenPair = match response.json().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "token refresh response not decodable");
                return None;
            }
        };

        if let Err(e) = self.store.save(&pair).await {
            warn!(error = %e, "failed to persist refreshed tokens");
            return None;
        }

        debug!("access token refreshed");
        Some(pair)
    }
}
