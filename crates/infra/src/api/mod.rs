//! Authenticated API client for the BlocRank backend
//!
//! This module is the single choke point for every REST call the client
//! makes. It owns the retry-on-401 contract: an authenticated request that
//! comes back 401 triggers exactly one silent token refresh and one resend,
//! and the outcome of that resend is final.
//!
//! # Architecture
//!
//! ```text
//! resources (auth, climbers, competitions, seasons, scores)
//!        │
//!        ▼
//!   ApiClient::dispatch ──► RefreshService ──► SessionStore
//!        │
//!        ▼
//!    HttpClient (reqwest transport)
//! ```
//!
//! The session store is injected, never ambient, so every piece is testable
//! with an in-memory fake and a stub HTTP server.

pub mod client;
pub mod errors;
pub mod refresh;
pub mod resources;

pub use client::ApiClient;
pub use errors::{ApiError, ApiErrorCategory};
pub use refresh::RefreshService;
