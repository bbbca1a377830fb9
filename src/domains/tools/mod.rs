//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are the operations MCP clients invoke against the task and note
//! stores (plus the synthetic weather generator).
//!
//! ## Architecture
//!
//! - `definitions/` - Individual operation handlers (one file per tool)
//! - `operation.rs` - Static name -> handler mapping
//! - `registry.rs` - Capability catalog and dispatcher
//! - `envelope.rs` - `{success, ...}` response envelope
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `ToolDefinition`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a variant to `Operation` and fill in its `match` arms
//! 4. Add a payload variant to `OperationPayload`
//!
//! **No need to modify `server.rs` or `registry.rs`!**

pub mod definitions;
mod envelope;
mod error;
mod operation;
mod registry;

pub use envelope::{Envelope, OperationPayload};
pub use error::{ErrorKind, ToolError};
pub use operation::Operation;
pub use registry::ToolRegistry;
