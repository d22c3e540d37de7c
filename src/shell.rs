//! Chat shell composition
//!
//! Wires the session store and attachment stager together with the
//! read-only identity snapshot, the way the chat view does: UI events come
//! in, one immutable snapshot goes out to the rendering layer. The shell is
//! also the send-time integration point: it drains the stager and hands
//! the outgoing message to the messaging collaborator, which performs the
//! actual exchange and calls back with the reply.

use crate::attachment::{AttachmentStager, DragState, FileKind, StagedAttachment};
use crate::config::ChatConfig;
use crate::error::{ChatAiError, Result};
use crate::identity::UserIdentity;
use crate::session::types::truncate_with_ellipsis;
use crate::session::{ChatSession, SessionStore};
use serde::Serialize;

/// A composed message ready for the messaging collaborator
///
/// Produced by [`ChatShell::send_message`]; this core performs no upload or
/// inference itself.
#[derive(Debug, Clone)]
pub struct OutgoingMessage {
    /// Session the message belongs to
    pub session_id: String,
    /// Trimmed message body
    pub body: String,
    /// Attachments drained from the stager, in staging order
    pub attachments: Vec<StagedAttachment>,
}

/// One staged file as the rendering layer sees it
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentSnapshot {
    /// File name
    pub name: String,
    /// Mime type
    pub mime_type: String,
    /// Size in bytes
    pub size_bytes: u64,
    /// Human-readable size ("1.50 MB")
    pub size_display: String,
    /// Display classification
    pub kind: FileKind,
}

/// Immutable render snapshot of the whole chat shell
///
/// Everything the sidebar, header, and upload dialog need to draw one
/// frame. The rendering layer never mutates state directly; it re-requests
/// a snapshot after each event.
#[derive(Debug, Clone, Serialize)]
pub struct ChatSnapshot {
    /// Sessions in display order (most recently active first)
    pub sessions: Vec<ChatSession>,
    /// Id of the active session, if any
    pub active_id: Option<String>,
    /// Staged attachments in insertion order
    pub attachments: Vec<AttachmentSnapshot>,
    /// Current drop-zone drag state
    pub drag_state: DragState,
    /// Read-only identity snapshot, passed through unchanged
    pub identity: UserIdentity,
}

/// Owns the chat view's state for the view's lifetime
///
/// # Examples
///
/// ```
/// use chatai::identity::UserIdentity;
/// use chatai::shell::ChatShell;
///
/// let mut shell = ChatShell::new(UserIdentity::signed_in("ada"));
/// let outgoing = shell.send_message("Hello there").unwrap();
/// assert_eq!(shell.sessions().active_id(), Some(outgoing.session_id.as_str()));
/// ```
#[derive(Debug, Clone)]
pub struct ChatShell {
    sessions: SessionStore,
    stager: AttachmentStager,
    identity: UserIdentity,
    config: ChatConfig,
}

impl ChatShell {
    /// Creates a shell with default configuration
    pub fn new(identity: UserIdentity) -> Self {
        Self::with_config(identity, ChatConfig::default())
    }

    /// Creates a shell with the given configuration
    pub fn with_config(identity: UserIdentity, config: ChatConfig) -> Self {
        Self {
            sessions: SessionStore::with_config(config.clone()),
            stager: AttachmentStager::new(),
            identity,
            config,
        }
    }

    /// Starts a fresh chat session (the header's "New Chat" button)
    pub fn new_chat(&mut self) -> ChatSession {
        self.sessions.create_session()
    }

    /// Composes and hands off a message
    ///
    /// Validates the body (non-empty after trim, else
    /// [`ChatAiError::InvalidMessage`]), creates a session if none is
    /// active, titles the session from its first message, records the
    /// exchange, and drains the stager into the returned
    /// [`OutgoingMessage`]. The stager is empty afterwards.
    pub fn send_message(&mut self, body: &str) -> Result<OutgoingMessage> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ChatAiError::InvalidMessage("body is empty after trimming".to_string()).into());
        }

        let session_id = match self.sessions.active_id() {
            Some(id) => id.to_string(),
            None => self.sessions.create_session().id,
        };

        // First message names the session
        let still_default = self
            .sessions
            .active()
            .map(|s| s.title == self.config.default_session_title)
            .unwrap_or(false);
        if still_default {
            let title = truncate_with_ellipsis(body, self.config.title_max_chars);
            self.sessions.rename_session(&session_id, &title)?;
        }

        self.sessions.touch(&session_id, body)?;
        let attachments = self.stager.commit();
        tracing::info!(
            session_id = %session_id,
            attachments = attachments.len(),
            "message handed off"
        );

        Ok(OutgoingMessage {
            session_id,
            body: body.to_string(),
            attachments,
        })
    }

    /// Records the inference collaborator's reply on a session
    pub fn apply_reply(&mut self, session_id: &str, preview: &str) -> Result<()> {
        self.sessions.touch(session_id, preview)
    }

    /// The session store
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Mutable session store, for sidebar events (rename, delete, select)
    pub fn sessions_mut(&mut self) -> &mut SessionStore {
        &mut self.sessions
    }

    /// The attachment stager
    pub fn stager(&self) -> &AttachmentStager {
        &self.stager
    }

    /// Mutable stager, for upload-dialog events (stage, remove, drag)
    pub fn stager_mut(&mut self) -> &mut AttachmentStager {
        &mut self.stager
    }

    /// The identity snapshot this shell was created with
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// One immutable snapshot for the rendering layer
    pub fn snapshot(&self) -> ChatSnapshot {
        ChatSnapshot {
            sessions: self.sessions.list(),
            active_id: self.sessions.active_id().map(str::to_string),
            attachments: self
                .stager
                .staged()
                .iter()
                .map(|a| AttachmentSnapshot {
                    name: a.name.clone(),
                    mime_type: a.mime_type.clone(),
                    size_bytes: a.size_bytes,
                    size_display: a.display_size(),
                    kind: a.kind,
                })
                .collect(),
            drag_state: self.stager.drag_state(),
            identity: self.identity.clone(),
        }
    }
}
