//! Tool-specific error types.

use thiserror::Error;

pub use crate::core::error::ErrorKind;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// A required argument is missing, blank or of the wrong shape.
    #[error("ข้อมูลไม่ถูกต้อง / Invalid arguments: {0}")]
    Validation(String),

    /// The referenced task does not exist.
    #[error("ไม่พบงาน / Task not found: {0}")]
    TaskNotFound(String),

    /// No handler is registered under this name.
    #[error("ไม่พบเครื่องมือนี้ / Tool not found: {0}")]
    UnknownOperation(String),

    /// Any other handler-level fault.
    #[error("ข้อผิดพลาด / Error: {0}")]
    OperationFailed(String),
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new "task not found" error.
    pub fn task_not_found(id: impl Into<String>) -> Self {
        Self::TaskNotFound(id.into())
    }

    /// Create a new "unknown operation" error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a new "operation failed" error.
    pub fn operation_failed(msg: impl Into<String>) -> Self {
        Self::OperationFailed(msg.into())
    }

    /// The caller-visible kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::ValidationError,
            Self::TaskNotFound(_) => ErrorKind::NotFound,
            Self::UnknownOperation(_) => ErrorKind::UnknownOperation,
            Self::OperationFailed(_) => ErrorKind::OperationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_not_found_message() {
        let err = ToolError::task_not_found("task_x");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Task not found: task_x"));
    }

    #[test]
    fn test_unknown_operation_mentions_not_found() {
        let err = ToolError::unknown_operation("delete_task");
        assert_eq!(err.kind(), ErrorKind::UnknownOperation);
        assert!(err.to_string().contains("not found"));
        assert!(err.to_string().contains("delete_task"));
    }
}
