//! Attachment records, classification, and size formatting

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw file handle selected via click-to-browse or drag-and-drop
///
/// Carries everything the upload collaborator needs at commit time: the
/// file name, the reported mime type, and the raw contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    /// File name as reported by the picker or drop event
    pub name: String,
    /// Mime type as reported by the browser (may be empty)
    pub mime_type: String,
    /// Raw file contents
    pub data: Bytes,
}

impl FileHandle {
    /// Creates a handle from name, mime type, and contents
    ///
    /// # Examples
    ///
    /// ```
    /// use chatai::attachment::FileHandle;
    ///
    /// let handle = FileHandle::new("notes.txt", "text/plain", b"hello".as_ref());
    /// assert_eq!(handle.size_bytes(), 5);
    /// ```
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    /// Size of the file contents in bytes
    pub fn size_bytes(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Display classification of a staged file, derived from its mime type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Any `image/*` mime type
    Image,
    /// Any `video/*` mime type
    Video,
    /// Mime type containing "pdf" or "document"
    Document,
    /// Everything else
    Other,
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Document => write!(f, "document"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Classifies a mime type for display
///
/// Pure function; the rules are prefix/substring checks in order:
/// `image/*`, `video/*`, then "pdf"/"document" substrings, else other.
///
/// # Examples
///
/// ```
/// use chatai::attachment::{classify, FileKind};
///
/// assert_eq!(classify("image/png"), FileKind::Image);
/// assert_eq!(classify("application/pdf"), FileKind::Document);
/// assert_eq!(classify("text/plain"), FileKind::Other);
/// ```
pub fn classify(mime_type: &str) -> FileKind {
    if mime_type.starts_with("image/") {
        FileKind::Image
    } else if mime_type.starts_with("video/") {
        FileKind::Video
    } else if mime_type.contains("pdf") || mime_type.contains("document") {
        FileKind::Document
    } else {
        FileKind::Other
    }
}

/// Formats a byte count for display
///
/// Picks the largest unit in {Bytes, KB, MB, GB} via
/// `floor(ln(bytes) / ln(1024))`, clamped to the unit list, and renders the
/// scaled value with exactly two decimal places. Zero is special-cased.
///
/// # Examples
///
/// ```
/// use chatai::attachment::format_size;
///
/// assert_eq!(format_size(0), "0 Bytes");
/// assert_eq!(format_size(1024), "1.00 KB");
/// assert_eq!(format_size(1500000), "1.43 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }
    let exponent = ((bytes as f64).ln() / 1024_f64.ln()).floor() as usize;
    let exponent = exponent.min(UNITS.len() - 1);
    let value = bytes as f64 / 1024_f64.powi(exponent as i32);
    format!("{:.2} {}", value, UNITS[exponent])
}

/// A file queued for the next outgoing message
///
/// Name, size, and mime type are copied from the handle at staging time and
/// are immutable thereafter; the handle itself is retained for the
/// commit-time hand-off to the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedAttachment {
    /// File name, copied at staging time
    pub name: String,
    /// Content size in bytes, copied at staging time
    pub size_bytes: u64,
    /// Mime type, copied at staging time
    pub mime_type: String,
    /// Display classification, computed once from the mime type
    pub kind: FileKind,
    handle: FileHandle,
}

impl StagedAttachment {
    /// Stages a raw file handle, copying its metadata
    pub fn from_handle(handle: FileHandle) -> Self {
        Self {
            name: handle.name.clone(),
            size_bytes: handle.size_bytes(),
            mime_type: handle.mime_type.clone(),
            kind: classify(&handle.mime_type),
            handle,
        }
    }

    /// Human-readable size for display
    pub fn display_size(&self) -> String {
        format_size(self.size_bytes)
    }

    /// The underlying file handle
    pub fn handle(&self) -> &FileHandle {
        &self.handle
    }

    /// Consumes the attachment, yielding the handle for upload
    pub fn into_handle(self) -> FileHandle {
        self.handle
    }
}
