//! Durable session storage.
//!
//! The [`SessionStore`] trait abstracts the key-value persistence the hosting
//! environment supplies for the token pair, so the API client can be tested
//! against an in-memory fake. [`FileSessionStore`] is the production
//! implementation: a single JSON file that survives restarts, the desktop
//! analogue of a browser's persisted storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::types::TokenPair;

/// Error type for session store operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionStoreError {
    /// Reading or writing the backing storage failed.
    #[error("session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored session could not be encoded or decoded.
    #[error("session serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Storage for the current session's token pair.
///
/// Implementations must behave as pure storage: `save` overwrites any
/// existing pair and is visible to all subsequent reads, `clear` removes the
/// pair entirely. No implementation may contact the network.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Overwrite the stored pair with `pair`.
    async fn save(&self, pair: &TokenPair) -> Result<(), SessionStoreError>;

    /// Current access token, if a session is present.
    async fn access_token(&self) -> Option<String>;

    /// Current refresh token, if a session is present.
    async fn refresh_token(&self) -> Option<String>;

    /// Remove the stored pair entirely (logout).
    async fn clear(&self) -> Result<(), SessionStoreError>;

    /// Whether a session is present.
    async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }
}

/// File-backed session store.
///
/// Persists the pair as a small JSON document and keeps an in-memory copy so
/// reads never touch the filesystem. The file is loaded once when the store
/// is opened; a missing file simply means no session.
pub struct FileSessionStore {
    path: PathBuf,
    current: Arc<RwLock<Option<TokenPair>>>,
}

impl FileSessionStore {
    /// Open a store backed by the file at `path`.
    ///
    /// If the file exists it is read immediately; an unreadable or corrupt
    /// file is treated as an absent session rather than a startup failure,
    /// since the worst outcome is that the user logs in again.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match Self::read_file(&path) {
            Ok(pair) => {
                debug!(path = %path.display(), "loaded existing session");
                pair
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "discarding unreadable session file");
                None
            }
        };

        Self { path, current: Arc::new(RwLock::new(current)) }
    }

    fn read_file(path: &Path) -> Result<Option<TokenPair>, SessionStoreError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn write_file(&self, pair: &TokenPair) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string(pair)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }

    fn remove_file(&self) -> Result<(), SessionStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn save(&self, pair: &TokenPair) -> Result<(), SessionStoreError> {
        self.write_file(pair)?;
        *self.current.write().await = Some(pair.clone());
        debug!(path = %self.path.display(), "session saved");
        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|p| p.access_token.clone())
    }

    async fn refresh_token(&self) -> Option<String> {
        self.current.read().await.as_ref().map(|p| p.refresh_token.clone())
    }

    async fn clear(&self) -> Result<(), SessionStoreError> {
        self.remove_file()?;
        *self.current.write().await = None;
        debug!(path = %self.path.display(), "session cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for session::store.
    use tempfile::tempdir;

    use super::*;

    fn pair() -> TokenPair {
        TokenPair::new("access", "refresh")
    }

    /// Validates an absent file opens as an unauthenticated store.
    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("session.json"));

        assert!(!store.is_authenticated().await);
        assert!(store.access_token().await.is_none());
        assert!(store.refresh_token().await.is_none());
    }

    /// Validates save is visible to subsequent reads and to a freshly opened
    /// store over the same file (survives "reload").
    #[tokio::test]
    async fn test_save_persists_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileSessionStore::open(&path);
        store.save(&pair()).await.unwrap();
        assert_eq!(store.access_token().await.as_deref(), Some("access"));

        let reopened = FileSessionStore::open(&path);
        assert_eq!(reopened.access_token().await.as_deref(), Some("access"));
        assert_eq!(reopened.refresh_token().await.as_deref(), Some("refresh"));
    }

    /// Validates save overwrites any existing pair wholesale.
    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::open(dir.path().join("session.json"));

        store.save(&pair()).await.unwrap();
        store.save(&TokenPair::new("a2", "r2")).await.unwrap();

        assert_eq!(store.access_token().await.as_deref(), Some("a2"));
        assert_eq!(store.refresh_token().await.as_deref(), Some("r2"));
    }

    /// Validates clear removes the pair and is idempotent.
    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = FileSessionStore::open(&path);

        store.save(&pair()).await.unwrap();
        store.clear().await.unwrap();
        store.clear().await.unwrap();

        assert!(!store.is_authenticated().await);
        assert!(!path.exists());
    }

    /// Validates a corrupt session file is discarded instead of failing open.
    #[tokio::test]
    async fn test_corrupt_file_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileSessionStore::open(&path);
        assert!(!store.is_authenticated().await);
    }
}
