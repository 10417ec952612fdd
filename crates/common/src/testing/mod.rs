//! Test doubles shared across BlocRank crates.
//!
//! Only deterministic in-memory fakes live here; anything touching the real
//! filesystem belongs in the production modules.

pub mod mocks;

pub use mocks::MockSessionStore;
