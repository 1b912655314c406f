//! Error types for model calls.
//!
//! These never leave the crate through [`crate::InsightRequester`]; they are
//! logged and replaced by fallback text.

use thiserror::Error;

/// Result type for model calls.
pub type InsightResult<T> = Result<T, InsightError>;

/// Errors from a text generation call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsightError {
    /// The request could not be sent or timed out.
    #[error("request failed: {0}")]
    Request(String),

    /// The API answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// Status code.
        status: u16,
        /// Error message from the body, or the raw body.
        message: String,
    },

    /// The response carried no candidate text.
    #[error("response contained no text")]
    EmptyResponse,

    /// The response body could not be decoded.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The HTTP client could not be built.
    #[error("client setup failed: {0}")]
    Client(String),
}
