//! Common primitives shared across BlocRank client crates.
//!
//! Holds the session layer (bearer token pair, durable session store) and the
//! in-memory test doubles the other crates use in their test suites.

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

pub mod session;
pub mod testing;
