//! The shared library for Smilebook, a dental appointment booking client.
//!
//! This library holds the pieces of the application that are independent of
//! the UI: wire data types for the remote appointments API, the HTTP client,
//! session token decoding and the access decision for protected routes,
//! error handling, logging, and macros.

pub mod api;
pub mod auth;
pub mod data;
pub mod errors;
pub mod log;
pub mod macros;

pub use serde;
pub use serde_json;
pub use tracing;
