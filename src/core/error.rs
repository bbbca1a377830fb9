//! Error types and handling for the MCP server.
//!
//! `ErrorKind` is the caller-visible failure taxonomy shared by the tools and
//! resources domains. `Error` covers the failures that stop the server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Caller-visible failure taxonomy shared by operations and resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or invalid required argument.
    ValidationError,
    /// Referenced id does not exist in the relevant store.
    NotFound,
    /// No handler registered under the requested name.
    UnknownOperation,
    /// Resource URI prefix unrecognized.
    UnknownResourceScheme,
    /// Any other handler-level fault.
    OperationFailed,
}

/// Unified error type for the MCP server.
///
/// Only startup and transport failures surface here. Per-call failures
/// (tools and resources) never become an `Error`: they are reported to the
/// caller as `{success: false, message}` envelopes.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport could not be started or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] crate::core::transport::TransportError),

    /// Configuration-related errors, including an inconsistent tool catalog.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
