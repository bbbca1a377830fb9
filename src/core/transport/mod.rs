//! Transports that carry MCP traffic to the task and note server.
//!
//! - `stdio` (default feature): one rmcp session on stdin/stdout, the mode
//!   desktop MCP clients launch.
//! - `tcp`: an rmcp session per accepted socket, line-delimited JSON-RPC.
//! - `http`: an axum JSON-RPC bridge for browser UIs and `curl`, plus
//!   `/health`.
//!
//! Whichever transport runs, every session works on clones of one
//! `McpServer`, so all clients read and write the same in-memory stores and
//! nothing survives a restart. `MCP_TRANSPORT` picks among the transports
//! compiled in; at least one feature must be enabled.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

// Re-export configs for convenience
#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
