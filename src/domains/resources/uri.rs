//! Resource URI scheme.
//!
//! Entities are addressed as `task:///{id}` and `note:///{id}`.

use std::fmt;

use super::error::ResourceError;

pub const TASK_URI_PREFIX: &str = "task:///";
pub const NOTE_URI_PREFIX: &str = "note:///";

/// A parsed resource address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceUri {
    Task(String),
    Note(String),
}

impl ResourceUri {
    /// Parse a resource URI by prefix.
    pub fn parse(uri: &str) -> Result<Self, ResourceError> {
        if let Some(id) = uri.strip_prefix(TASK_URI_PREFIX) {
            Ok(Self::Task(id.to_string()))
        } else if let Some(id) = uri.strip_prefix(NOTE_URI_PREFIX) {
            Ok(Self::Note(id.to_string()))
        } else {
            Err(ResourceError::unknown_scheme(uri))
        }
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Task(id) => write!(f, "{}{}", TASK_URI_PREFIX, id),
            Self::Note(id) => write!(f, "{}{}", NOTE_URI_PREFIX, id),
        }
    }
}
