//! API client dispatcher
//!
//! Every request funnels through [`ApiClient::dispatch`], which owns the
//! authentication contract:
//!
//! 1. An authenticated request with no stored access token fails immediately
//!    with [`ApiError::AuthenticationRequired`] and never touches the wire.
//! 2. An authenticated request answered 401 triggers exactly one silent
//!    refresh followed by exactly one resend; whatever the resend returns is
//!    final, including a second 401.
//! 3. Public requests are sent as-is and a 401 on them is a plain HTTP error.
//!
//! Concurrent 401s share one refresh: the first caller through the lock does
//! the exchange, later callers observe the rotated token and resend without
//! another round trip to `/auth/refresh`.

use std::sync::Arc;

use blocrank_common::session::{FileSessionStore, SessionStore, TokenPair};
use reqwest::{header, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::errors::ApiError;
use super::refresh::RefreshService;
use crate::config::Config;
use crate::http::HttpClient;

/// A single request as seen by the dispatcher.
struct RequestDescriptor {
    method: Method,
    path: String,
    body: Option<serde_json::Value>,
    requires_auth: bool,
}

/// Authenticated client for the BlocRank backend.
///
/// Share behind an `Arc`; all state (HTTP pool, session store, refresh
/// lock) lives in the one instance.
pub struct ApiClient {
    http: HttpClient,
    store: Arc<dyn SessionStore>,
    refresh: RefreshService,
    base_url: String,
    refresh_lock: Mutex<()>,
}

impl ApiClient {
    /// Create a client for the backend at `base_url` (no trailing slash),
    /// persisting session tokens through `store`.
    #[must_use]
    pub fn new(http: HttpClient, store: Arc<dyn SessionStore>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let refresh = RefreshService::new(http.clone(), Arc::clone(&store), &base_url);
        Self { http, store, refresh, base_url, refresh_lock: Mutex::new(()) }
    }

    /// Assemble a client from loaded configuration: transport with the
    /// configured timeout, file-backed session store at the configured path.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the transport cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let http = HttpClient::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::Config(e.to_string()))?;
        let store = Arc::new(FileSessionStore::open(config.session_path.clone()));
        Ok(Self::new(http, store, config.base_url.clone()))
    }

    /// The injected session store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Whether an access token is currently on hand.
    pub async fn is_authenticated(&self) -> bool {
        self.store.is_authenticated().await
    }

    /// Persist a freshly issued token pair.
    ///
    /// # Errors
    /// Returns [`ApiError::Config`] when the store rejects the write.
    pub async fn save_tokens(&self, pair: &TokenPair) -> Result<(), ApiError> {
        self.store.save(pair).await.map_err(|e| ApiError::Config(e.to_string()))
    }

    /// Issue a GET request.
    ///
    /// # Errors
    /// See [`ApiError`] for the classification of failures.
    pub async fn get<T>(&self, path: &str, requires_auth: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.dispatch(RequestDescriptor {
            method: Method::GET,
            path: path.to_string(),
            body: None,
            requires_auth,
        })
        .await
    }

    /// Issue a POST request with a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`] for the classification of failures.
    pub async fn post<B, T>(&self, path: &str, body: &B, requires_auth: bool) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.dispatch(RequestDescriptor {
            method: Method::POST,
            path: path.to_string(),
            body: Some(encode_body(body)?),
            requires_auth,
        })
        .await
    }

    /// Issue a PUT request with a JSON body.
    ///
    /// # Errors
    /// See [`ApiError`] for the classification of failures.
    pub async fn put<B, T>(&self, path: &str, body: &B, requires_auth: bool) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        self.dispatch(RequestDescriptor {
            method: Method::PUT,
            path: path.to_string(),
            body: Some(encode_body(body)?),
            requires_auth,
        })
        .await
    }

    /// Issue a DELETE request.
    ///
    /// # Errors
    /// See [`ApiError`] for the classification of failures.
    pub async fn delete<T>(&self, path: &str, requires_auth: bool) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.dispatch(RequestDescriptor {
            method: Method::DELETE,
            path: path.to_string(),
            body: None,
            requires_auth,
        })
        .await
    }

    /// Core dispatch: auth gate, send, 401 refresh-and-resend, decode.
    #[instrument(skip_all, fields(method = %request.method, path = %request.path))]
    async fn dispatch<T>(&self, request: RequestDescriptor) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let token = if request.requires_auth {
            match self.store.access_token().await {
                Some(token) => Some(token),
                None => {
                    debug!("rejecting authenticated request without a session");
                    return Err(ApiError::AuthenticationRequired);
                }
            }
        } else {
            None
        };

        let response = self.execute(&request, token.as_deref()).await?;

        if response.status() == StatusCode::UNAUTHORIZED && request.requires_auth {
            // The token may only be Some here; the gate above guarantees it.
            let stale = token.unwrap_or_default();
            let Some(fresh) = self.refresh_once(&stale).await else {
                warn!("silent refresh failed, surfacing authentication error");
                return Err(ApiError::AuthenticationRequired);
            };

            debug!("resending request with refreshed token");
            let retried = self.execute(&request, Some(&fresh)).await?;
            return decode_response(retried).await;
        }

        decode_response(response).await
    }

    /// Build and send one HTTP request. Never retries.
    async fn execute(
        &self,
        request: &RequestDescriptor,
        token: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self
            .http
            .request(request.method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        self.http.send(builder).await.map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Obtain a usable access token after a 401, refreshing at most once
    /// across all concurrent callers.
    ///
    /// `stale` is the token the failed request carried. If the stored token
    /// already differs once we hold the lock, another task refreshed in the
    /// meantime and we reuse its result instead of spending our own exchange.
    async fn refresh_once(&self, stale: &str) -> Option<String> {
        let _guard = self.refresh_lock.lock().await;

        if let Some(current) = self.store.access_token().await {
            if current != stale {
                debug!("token already rotated by a concurrent refresh");
                return Some(current);
            }
        }

        self.refresh.refresh().await.map(|pair| pair.access_token)
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(format!("request body: {e}")))
}

/// Turn a final response into the caller's value or a classified error.
///
/// Empty 2xx bodies decode through `Value::Null`, so operations returning
/// `()` accept a bare 204.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;

    if !status.is_success() {
        return Err(ApiError::from_response_parts(status, &body));
    }

    if body.trim().is_empty() {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| ApiError::Decode(format!("empty body: {e}")));
    }

    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}
