//! ChatAI - session and attachment state core
//!
//! This library is the client-side state core behind the ChatAI chat front
//! end: it decides which chat sessions exist, which one is active, and
//! which files are queued for the next outgoing message. Presentation
//! (routing, auth screens, styling) lives in the host application, which
//! calls into this core on UI events and renders the snapshots it reports.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `session`: the session list, display ordering, and active pointer
//! - `attachment`: staged files, classification, sizes, and drag state
//! - `shell`: composition of the two stores plus the send-time hand-off
//! - `identity`: read-only snapshot of the signed-in user
//! - `config`: display tunables
//! - `error`: error types and result aliases
//!
//! All operations are synchronous and single-threaded; a multi-threaded
//! host must serialize access to each store behind a single writer, e.g.
//! `Arc<Mutex<ChatShell>>`.
//!
//! # Example
//!
//! ```
//! use chatai::identity::UserIdentity;
//! use chatai::shell::ChatShell;
//!
//! let mut shell = ChatShell::new(UserIdentity::signed_in("ada"));
//! let outgoing = shell.send_message("Hello!")?;
//! assert!(outgoing.attachments.is_empty());
//!
//! let snapshot = shell.snapshot();
//! assert_eq!(snapshot.sessions.len(), 1);
//! # anyhow::Ok(())
//! ```

pub mod attachment;
pub mod config;
pub mod error;
pub mod identity;
pub mod session;
pub mod shell;

// Re-export commonly used types
pub use attachment::{AttachmentStager, DragEvent, DragState, FileHandle, FileKind, StagedAttachment};
pub use config::ChatConfig;
pub use error::{ChatAiError, Result};
pub use identity::UserIdentity;
pub use session::{ChatSession, SessionStore};
pub use shell::{ChatShell, ChatSnapshot, OutgoingMessage};
