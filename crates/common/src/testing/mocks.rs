//! Mock implementations of common traits
//!
//! Provides mock objects for testing purposes.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::session::{SessionStore, SessionStoreError, TokenPair};

/// In-memory session store for deterministic tests.
///
/// Behaves exactly like [`crate::session::FileSessionStore`] minus the file:
/// `save` overwrites, `clear` removes, reads see the latest write. Cloning
/// yields a handle to the same underlying session.
#[derive(Clone, Default)]
pub struct MockSessionStore {
    current: Arc<Mutex<Option<TokenPair>>>,
}

impl MockSessionStore {
    /// Create an empty (unauthenticated) store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with `pair`.
    #[must_use]
    pub fn with_pair(pair: TokenPair) -> Self {
        Self { current: Arc::new(Mutex::new(Some(pair))) }
    }

    /// Snapshot of the currently stored pair.
    #[must_use]
    pub fn pair(&self) -> Option<TokenPair> {
        self.current.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn save(&self, pair: &TokenPair) -> Result<(), SessionStoreError> {
        *self.current.lock().unwrap() = Some(pair.clone());
        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        self.current.lock().unwrap().as_ref().map(|p| p.access_token.clone())
    }

    async fn refresh_token(&self) -> Option<String> {
        self.current.lock().unwrap().as_ref().map(|p| p.refresh_token.clone())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        *self.current.lock().unwrap() = None;
        Ok(())
    }
}
