//! Error types for the fallible edges (storage and trivia payloads).
//!
//! The simulations themselves have no error type: a crash is a normal
//! terminal outcome and a malformed grid is a programming error.

use thiserror::Error;

/// Errors from the local key-value store.
#[derive(Debug, Error)]
pub enum PersistError {
    /// No storage backend (private browsing, no window).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the operation (quota, security).
    #[error("storage operation failed: {0}")]
    Storage(String),

    /// Stored payload could not be (de)serialized.
    #[error("invalid stored payload: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Errors from the trivia question endpoint payload.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The provider flagged the question; discard and fetch another.
    #[error("question flagged invalid ({0} reports)")]
    Invalid(u32),

    /// Payload is not a question object.
    #[error("malformed question payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
