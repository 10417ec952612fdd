//! Session token types.

use serde::{Deserialize, Serialize};

/// Access/refresh bearer token pair issued by the backend.
///
/// Both tokens are opaque strings; the client never inspects their internal
/// structure. The pair is created by a successful login or signup, replaced
/// wholesale by a successful refresh, and cleared on logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived bearer credential sent as `Authorization: Bearer <token>`.
    pub access_token: String,

    /// Longer-lived credential used solely to obtain a new pair.
    pub refresh_token: String,
}

impl TokenPair {
    /// Create a new token pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self { access_token: access_token.into(), refresh_token: refresh_token.into() }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for session::types.
    use super::*;

    /// Validates `TokenPair::new` accepts both owned and borrowed strings.
    #[test]
    fn test_token_pair_creation() {
        let pair = TokenPair::new("a1", "r1".to_string());
        assert_eq!(pair.access_token, "a1");
        assert_eq!(pair.refresh_token, "r1");
    }

    /// Validates the wire format matches the backend's token response keys.
    #[test]
    fn test_token_pair_serde_roundtrip() {
        let json = r#"{"access_token":"a1","refresh_token":"r1"}"#;
        let pair: TokenPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair, TokenPair::new("a1", "r1"));

        let encoded = serde_json::to_value(&pair).unwrap();
        assert_eq!(encoded["access_token"], "a1");
        assert_eq!(encoded["refresh_token"], "r1");
    }

    /// Validates unknown response fields (e.g. `token_type`) are tolerated.
    #[test]
    fn test_token_pair_ignores_extra_fields() {
        let json = r#"{"access_token":"a1","refresh_token":"r1","token_type":"bearer"}"#;
        let pair: TokenPair = serde_json::from_str(json).unwrap();
        assert_eq!(pair.access_token, "a1");
    }
}
