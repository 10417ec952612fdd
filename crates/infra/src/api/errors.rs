//! API-specific error types
//!
//! Every failure that leaves the dispatcher is classified into one of these
//! variants before the caller sees it; nothing escapes unlabelled.

use reqwest::StatusCode;
use thiserror::Error;

/// Categories of API errors for caller-side handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// No usable session: missing token or failed refresh. Callers should
    /// clear the session and send the user to login.
    Authentication,
    /// The server rejected the request content (422).
    Validation,
    /// Non-2xx response after any retry.
    Http,
    /// Response body present but not decodable as the expected shape.
    Decode,
    /// Transport-level failure, no response at all.
    Network,
    /// Client-side configuration or storage problem.
    Config,
}

/// API operation errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No access token available, or the silent refresh failed.
    #[error("authentication required")]
    AuthenticationRequired,

    /// Non-2xx response after any retry.
    #[error("request failed with status {status}: {message}")]
    Http {
        /// HTTP status code of the final response.
        status: u16,
        /// Message derived from the response body, or a generic status line.
        message: String,
    },

    /// 422 response; the message is the first field-validation error when the
    /// body carries one.
    #[error("{0}")]
    Validation(String),

    /// Response body present but not valid for the expected shape.
    #[error("invalid response from server: {0}")]
    Decode(String),

    /// Transport-level failure (no response at all).
    #[error("network error: {0}")]
    Network(String),

    /// Client-side configuration or session storage problem.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Get the error category for this error.
    #[must_use]
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::AuthenticationRequired => ApiErrorCategory::Authentication,
            Self::Validation(_) => ApiErrorCategory::Validation,
            Self::Http { .. } => ApiErrorCategory::Http,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Network(_) => ApiErrorCategory::Network,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// HTTP status of the final response, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is a 409 conflict (e.g. name taken, already registered).
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(StatusCode::CONFLICT.as_u16())
    }

    /// Classify a non-2xx response from its status and raw body text.
    pub(crate) fn from_response_parts(status: StatusCode, body: &str) -> Self {
        if status == StatusCode::UNPROCESSABLE_ENTITY {
            return Self::Validation(
                first_validation_message(body)
                    .unwrap_or_else(|| "validation error".to_string()),
            );
        }

        let message = if body.trim().is_empty() {
            format!("server returned status {status}")
        } else {
            body.trim().to_string()
        };
        Self::Http { status: status.as_u16(), message }
    }
}

/// Extract the first field-validation message from a FastAPI-style error
/// body: `{"detail": [{"msg": "..."}]}`.
fn first_validation_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let detail = value.get("detail")?.as_array()?;
    let msg = detail.first()?.get("msg")?.as_str()?;
    Some(msg.to_string())
}
