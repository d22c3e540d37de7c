//! Session store
//!
//! Maintains the ordered set of chat sessions and the active-session
//! pointer. All operations are synchronous and execute in response to
//! discrete UI events; failures are recoverable validation results, never
//! fatal. A multi-threaded host must serialize access behind a single
//! writer (e.g. `Arc<Mutex<SessionStore>>`).

use crate::config::ChatConfig;
use crate::error::{ChatAiError, Result};
use crate::session::types::{display_order, new_session_id, truncate_with_ellipsis, ChatSession};
use chrono::Utc;

/// Owns the session list and the active-session pointer
///
/// The store is created once per chat view and lives for the view's
/// lifetime; it is discarded on navigation away. Rendering reads ordered
/// snapshots via [`SessionStore::list`] and never mutates state directly.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Vec<ChatSession>,
    active_id: Option<String>,
    config: ChatConfig,
}

impl SessionStore {
    /// Creates an empty store with default configuration
    ///
    /// # Examples
    ///
    /// ```
    /// use chatai::session::SessionStore;
    ///
    /// let store = SessionStore::new();
    /// assert!(store.is_empty());
    /// assert!(store.active().is_none());
    /// ```
    pub fn new() -> Self {
        Self::with_config(ChatConfig::default())
    }

    /// Creates an empty store with the given configuration
    pub fn with_config(config: ChatConfig) -> Self {
        Self {
            sessions: Vec::new(),
            active_id: None,
            config,
        }
    }

    /// Allocates a new session and makes it active
    ///
    /// The session gets a fresh unique id, both timestamps set to now, an
    /// empty preview, and the configured placeholder title. Always succeeds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chatai::session::SessionStore;
    ///
    /// let mut store = SessionStore::new();
    /// let session = store.create_session();
    /// assert_eq!(session.title, "New Chat");
    /// assert_eq!(store.active_id(), Some(session.id.as_str()));
    /// ```
    pub fn create_session(&mut self) -> ChatSession {
        let now = Utc::now();
        let session = ChatSession {
            id: new_session_id(),
            title: self.config.default_session_title.clone(),
            created_at: now,
            last_activity_at: now,
            preview: String::new(),
        };
        tracing::debug!(id = %session.id, "created session");
        self.active_id = Some(session.id.clone());
        self.sessions.push(session.clone());
        session
    }

    /// Renames a session
    ///
    /// The title is trimmed before validation; an empty result fails with
    /// [`ChatAiError::InvalidTitle`] and leaves the session unchanged.
    /// Renaming counts as activity.
    pub fn rename_session(&mut self, id: &str, new_title: &str) -> Result<()> {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return Err(ChatAiError::InvalidTitle(
                "title is empty after trimming".to_string(),
            )
            .into());
        }
        let session = self.find_mut(id)?;
        session.title = trimmed.to_string();
        session.last_activity_at = Utc::now();
        tracing::debug!(id, title = trimmed, "renamed session");
        Ok(())
    }

    /// Deletes a session
    ///
    /// If the deleted session was active, the next-most-recent remaining
    /// session (per the display ordering) becomes active, or none if the
    /// store is now empty.
    pub fn delete_session(&mut self, id: &str) -> Result<()> {
        let index = self
            .sessions
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ChatAiError::SessionNotFound(id.to_string()))?;
        self.sessions.remove(index);
        tracing::debug!(id, "deleted session");

        if self.active_id.as_deref() == Some(id) {
            self.active_id = self.list().first().map(|s| s.id.clone());
        }
        Ok(())
    }

    /// Records a message exchange on a session
    ///
    /// Called by the messaging collaborator after each exchange; updates the
    /// preview (truncated to the configured limit) and the activity
    /// timestamp.
    pub fn touch(&mut self, id: &str, preview: &str) -> Result<()> {
        let max_chars = self.config.preview_max_chars;
        let session = self.find_mut(id)?;
        session.preview = truncate_with_ellipsis(preview, max_chars);
        session.last_activity_at = Utc::now();
        Ok(())
    }

    /// Changes the active-session pointer with no other side effects
    pub fn set_active(&mut self, id: &str) -> Result<()> {
        if !self.sessions.iter().any(|s| s.id == id) {
            return Err(ChatAiError::SessionNotFound(id.to_string()).into());
        }
        self.active_id = Some(id.to_string());
        Ok(())
    }

    /// Ordered read-only snapshot of all sessions
    ///
    /// Most recently active first; ties break by creation time descending,
    /// then id descending.
    pub fn list(&self) -> Vec<ChatSession> {
        let mut snapshot = self.sessions.clone();
        snapshot.sort_by(display_order);
        snapshot
    }

    /// The active session, if any
    pub fn active(&self) -> Option<&ChatSession> {
        let id = self.active_id.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Id of the active session, if any
    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    /// Returns the number of sessions in the store
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns true if the store has no sessions
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut ChatSession> {
        self.sessions
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ChatAiError::SessionNotFound(id.to_string()).into())
    }
}
