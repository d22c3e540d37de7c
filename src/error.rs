//! Error types for the ChatAI state core
//!
//! This module defines all error types surfaced by the session store and
//! attachment stager, using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for ChatAI core operations
///
/// Every variant is recoverable: the UI layer catches the error, re-renders
/// the current state unchanged, and shows an inline message. Nothing here is
/// fatal to the process, and no operation is retried automatically; each
/// failure is the result of a stale or malformed caller request.
#[derive(Error, Debug)]
pub enum ChatAiError {
    /// An operation referenced a session id that is not in the store
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// A rename supplied an empty or whitespace-only title
    #[error("Invalid session title: {0}")]
    InvalidTitle(String),

    /// Attachment removal referenced a position outside the staged list
    #[error("Attachment index out of bounds: index={index}, len={len}")]
    AttachmentIndexOutOfBounds {
        /// The index the caller asked to remove
        index: usize,
        /// Length of the staged list at the time of the call
        len: usize,
    },

    /// A message send supplied an empty or whitespace-only body
    #[error("Invalid message: {0}")]
    InvalidMessage(String),
}

/// Result type alias for ChatAI core operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
