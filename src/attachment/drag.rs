//! Drag-affordance state machine
//!
//! The drop zone's visual state is a two-value machine driven by three
//! logical events, abstracted from whatever DOM event stream the host UI
//! uses. State transitions are idempotent: an event whose target state is
//! already current leaves the state untouched. A drop always stages its
//! files and settles on idle. The machine has no terminal state; it
//! persists for the upload dialog's lifetime.

use crate::attachment::types::FileHandle;
use std::fmt;

/// Drop-zone visual state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragState {
    /// No drag in progress over the drop zone
    #[default]
    Idle,
    /// A drag is hovering over the drop zone
    Dragging,
}

impl DragState {
    /// Returns true while a drag is hovering over the drop zone
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }
}

impl fmt::Display for DragState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Dragging => write!(f, "dragging"),
        }
    }
}

/// Logical drag events delivered by the host UI layer
///
/// Enter and over events are indistinguishable to the machine and map to
/// [`DragEvent::Over`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    /// Pointer entered or moved over the drop zone while dragging files
    Over,
    /// Pointer left the drop zone
    Leave,
    /// Files were released over the drop zone
    Drop(Vec<FileHandle>),
}
