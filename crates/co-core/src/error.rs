//! Error types for the deterministic core.

use thiserror::Error;

/// Result type for core operations.
pub type FateResult<T> = Result<T, FateError>;

/// Errors raised while preparing or recording a draw.
///
/// All of these are recoverable: the caller corrects its input and tries
/// again. None of them abort a draw that has already been resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FateError {
    /// Numeric bounds where the maximum is below the minimum.
    #[error("invalid range: max ({max}) is less than min ({min})")]
    InvalidBounds {
        /// Lower bound supplied.
        min: i64,
        /// Upper bound supplied.
        max: i64,
    },

    /// Options mode with nothing to choose from.
    #[error("no options to choose from")]
    EmptyOptions,

    /// Divination without a question.
    #[error("a divination needs a question")]
    EmptyQuestion,

    /// Another draw has not finished yet.
    #[error("a draw is already in progress")]
    DrawInProgress,

    /// The history item already carries an insight.
    #[error("insight already attached to draw {0}")]
    InsightAlreadyAttached(uuid::Uuid),

    /// Unrecognized selection mode string.
    #[error("unknown mode: {0}")]
    UnknownMode(String),
}
