//! Resources domain module.
//!
//! This module exposes tasks and notes as read-only, URI-addressable
//! resources (`task:///{id}`, `note:///{id}`). It reads the same stores as
//! the tools domain but never writes to them.
//!
//! ## Architecture
//!
//! - `uri.rs` - URI scheme parsing
//! - `registry.rs` - Resource templates
//! - `service.rs` - Resource service for listing and reading

mod error;
mod registry;
mod service;
mod uri;

pub use error::ResourceError;
pub use registry::{ENTITY_MIME_TYPE, get_all_resource_templates};
pub use service::{NO_DESCRIPTION, ResourceEntity, ResourceService};
pub use uri::{NOTE_URI_PREFIX, ResourceUri, TASK_URI_PREFIX};
