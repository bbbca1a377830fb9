//! Task & Notes MCP Server Library
//!
//! An in-memory Model Context Protocol (MCP) server. It exposes six tools
//! (`create_task`, `list_tasks`, `complete_task`, `create_note`,
//! `search_notes`, `get_weather`) and two resource schemes (`task:///{id}`
//! and `note:///{id}`). All data lives in process memory and is lost on
//! restart.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **store**: insertion-ordered, lock-protected task and note stores
//!   - **tools**: operation dispatcher, capability catalog and result envelopes
//!   - **resources**: URI resolution over the stores
//!
//! # Example
//!
//! ```rust,no_run
//! use task_notes_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let server = McpServer::new(Config::from_env())?;
//!
//!     let mut args = serde_json::Map::new();
//!     args.insert("title".into(), "Buy milk".into());
//!     let envelope = server.call_tool("create_task", args).await;
//!     assert!(envelope.is_success());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
