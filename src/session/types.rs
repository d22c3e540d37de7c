//! Session records and ordering
//!
//! Defines the `ChatSession` record rendered in the sidebar, the id
//! generator, and the display ordering rule shared by the store and its
//! callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use ulid::Ulid;

/// One saved chat thread
///
/// Sessions are in-memory records; they live for the chat view's lifetime
/// and are never persisted by this core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatSession {
    /// Opaque unique identifier (ULID), assigned at creation, immutable.
    /// Ids are never reused, even after the session is deleted.
    pub id: String,

    /// Short display title; placeholder until the first message sets it
    pub title: String,

    /// When the session was created
    pub created_at: DateTime<Utc>,

    /// When the session last changed (message exchange or rename)
    pub last_activity_at: DateTime<Utc>,

    /// Excerpt of the most recent message content
    pub preview: String,
}

/// Generate a new session id
///
/// ULIDs (Universally Unique Lexicographically Sortable Identifiers) are
/// preferred over UUIDs as they are sortable by timestamp and more
/// human-readable.
///
/// # Examples
///
/// ```
/// use chatai::session::new_session_id;
///
/// let id = new_session_id();
/// assert_eq!(id.len(), 26);
/// ```
pub fn new_session_id() -> String {
    Ulid::new().to_string()
}

/// Display ordering for the sidebar
///
/// Most recently active first; ties break by `created_at` descending, then
/// by `id` descending so the order is deterministic.
pub fn display_order(a: &ChatSession, b: &ChatSession) -> Ordering {
    b.last_activity_at
        .cmp(&a.last_activity_at)
        .then_with(|| b.created_at.cmp(&a.created_at))
        .then_with(|| b.id.cmp(&a.id))
}

/// Truncate to a maximum number of characters, adding ellipsis if truncated
pub(crate) fn truncate_with_ellipsis(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut truncated = s.chars().take(max_chars.saturating_sub(3)).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
