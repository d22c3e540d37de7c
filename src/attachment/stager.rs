//! Attachment stager
//!
//! Accumulates files selected via click-to-browse or drag-and-drop before a
//! message is sent. Nothing is rejected at this layer; file-type and size
//! limits belong to the upload collaborator. The stager also owns the drag
//! state machine, since a drop both transitions the machine and stages the
//! dropped files.

use crate::attachment::drag::{DragEvent, DragState};
use crate::attachment::types::{FileHandle, StagedAttachment};
use crate::error::{ChatAiError, Result};

/// Staged-file list plus drop-zone drag state
///
/// Created per compose action; cleared explicitly on cancel or drained by
/// [`AttachmentStager::commit`] on send. The staged list preserves
/// insertion order, and duplicates (same name and size) are allowed: a
/// user may intentionally attach two same-named files from different
/// folders.
#[derive(Debug, Clone, Default)]
pub struct AttachmentStager {
    staged: Vec<StagedAttachment>,
    drag: DragState,
}

impl AttachmentStager {
    /// Creates an empty stager in the idle drag state
    ///
    /// # Examples
    ///
    /// ```
    /// use chatai::attachment::AttachmentStager;
    ///
    /// let stager = AttachmentStager::new();
    /// assert!(stager.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends files to the staged list, preserving their order
    ///
    /// Always succeeds; an empty input is a no-op. Returns the updated
    /// list.
    pub fn stage(&mut self, files: impl IntoIterator<Item = FileHandle>) -> &[StagedAttachment] {
        for handle in files {
            tracing::debug!(name = %handle.name, mime = %handle.mime_type, "staged file");
            self.staged.push(StagedAttachment::from_handle(handle));
        }
        &self.staged
    }

    /// Removes the file at the given position
    ///
    /// Fails with [`ChatAiError::AttachmentIndexOutOfBounds`] if `index` is
    /// outside the current list. A correctly generated UI event never sends
    /// a stale index, but the precondition is checked regardless. Returns
    /// the updated list.
    pub fn remove(&mut self, index: usize) -> Result<&[StagedAttachment]> {
        if index >= self.staged.len() {
            return Err(ChatAiError::AttachmentIndexOutOfBounds {
                index,
                len: self.staged.len(),
            }
            .into());
        }
        let removed = self.staged.remove(index);
        tracing::debug!(name = %removed.name, index, "removed staged file");
        Ok(&self.staged)
    }

    /// Empties the staged list
    ///
    /// Called when the dialog is cancelled. Always succeeds.
    pub fn clear(&mut self) {
        self.staged.clear();
    }

    /// Drains the staged list for the send-time hand-off
    ///
    /// Returns the staged attachments in insertion order and leaves the
    /// stager empty, ready for the next compose action.
    pub fn commit(&mut self) -> Vec<StagedAttachment> {
        std::mem::take(&mut self.staged)
    }

    /// The staged files, in insertion order
    pub fn staged(&self) -> &[StagedAttachment] {
        &self.staged
    }

    /// Number of staged files
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Returns true if nothing is staged
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Current drop-zone drag state
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Feeds one logical drag event through the state machine
    ///
    /// An over event while idle starts dragging; a leave while dragging
    /// returns to idle; a drop stages the dropped files and settles on
    /// idle. State transitions whose target state is already current are
    /// no-ops; the staging side effect of a drop happens regardless.
    /// Returns the state after the event.
    pub fn handle_drag(&mut self, event: DragEvent) -> DragState {
        match (self.drag, event) {
            (DragState::Idle, DragEvent::Over) => {
                self.drag = DragState::Dragging;
            }
            (DragState::Dragging, DragEvent::Leave) => {
                self.drag = DragState::Idle;
            }
            (_, DragEvent::Drop(files)) => {
                self.stage(files);
                self.drag = DragState::Idle;
            }
            _ => {}
        }
        self.drag
    }
}
