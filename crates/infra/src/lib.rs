//! # BlocRank Infrastructure
//!
//! HTTP-facing half of the BlocRank client:
//! - Configuration loading (environment first, file fallback)
//! - The HTTP transport wrapper around `reqwest`
//! - The authenticated API client with single-retry token refresh
//! - Typed helpers for the backend's auth, climber, competition, season, and
//!   score resources
//!
//! ## Architecture
//! - Session storage comes from `blocrank-common`; the client takes it as an
//!   injected `Arc<dyn SessionStore>` so tests can substitute a fake
//! - Every resource helper goes through the one dispatcher in
//!   [`api::ApiClient`]; there is deliberately no second code path

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod api;
pub mod config;
pub mod http;

pub use api::{ApiClient, ApiError, ApiErrorCategory};
pub use config::Config;
pub use http::HttpClient;
