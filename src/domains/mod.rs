//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the MCP
//! server:
//! - **store**: the in-memory task and note stores
//! - **tools**: operations callers invoke against the stores
//! - **resources**: read-only URI view of the stores

pub mod resources;
pub mod store;
pub mod tools;
