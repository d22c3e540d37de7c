//! Attachment staging state
//!
//! This module owns the upload dialog's state: the raw file handles the
//! user has selected, their display classification and formatted sizes,
//! the drag-affordance state machine, and the `AttachmentStager` that
//! accumulates files until a message is sent.

pub mod drag;
pub mod stager;
pub mod types;

pub use drag::{DragEvent, DragState};
pub use stager::AttachmentStager;
pub use types::{classify, format_size, FileHandle, FileKind, StagedAttachment};
