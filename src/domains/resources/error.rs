//! Resource-specific error types.

use thiserror::Error;

use crate::core::error::ErrorKind;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No task exists under the addressed id.
    #[error("ไม่พบงาน / Task not found: {0}")]
    TaskNotFound(String),

    /// No note exists under the addressed id.
    #[error("ไม่พบโน้ต / Note not found: {0}")]
    NoteNotFound(String),

    /// The URI matches neither `task:///` nor `note:///`.
    #[error("ไม่รู้จักประเภททรัพยากร / Unknown resource type: {0}")]
    UnknownScheme(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "unknown scheme" error.
    pub fn unknown_scheme(uri: impl Into<String>) -> Self {
        Self::UnknownScheme(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// The caller-visible kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskNotFound(_) | Self::NoteNotFound(_) => ErrorKind::NotFound,
            Self::UnknownScheme(_) => ErrorKind::UnknownResourceScheme,
            Self::Internal(_) => ErrorKind::OperationFailed,
        }
    }
}
