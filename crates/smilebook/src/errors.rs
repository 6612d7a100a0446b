//! Shared error types and utilities for the smilebook project.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Failed to install color_eyre")]
    ColorEyre(#[from] color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Why a stored session token could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("Token has no payload segment")]
    MissingPayload,
    #[error("Token payload is not valid base64: {0}")]
    Payload(#[from] base64::DecodeError),
    #[error("Token claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}
