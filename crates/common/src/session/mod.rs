//! Session layer: bearer token pair and durable session storage.
//!
//! Exactly one session is live at a time. Login or signup produces a
//! [`TokenPair`] which is written to a [`SessionStore`]; a refresh replaces
//! the pair wholesale; logout clears it. The store is injected into the API
//! client rather than read through ambient globals, so tests can swap in
//! [`crate::testing::MockSessionStore`].
//!
//! # Module Organization
//!
//! - **[`types`]**: the [`TokenPair`] carried by the session
//! - **[`store`]**: the [`SessionStore`] trait and the file-backed
//!   [`FileSessionStore`] implementation

pub mod store;
pub mod types;

pub use store::{FileSessionStore, SessionStore, SessionStoreError};
pub use types::TokenPair;
