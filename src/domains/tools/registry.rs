//! Tool Registry - capability catalog and dispatcher.
//!
//! This module provides:
//! - The capability catalog (tool metadata for listing)
//! - Dispatch of a named operation with raw arguments to its handler
//! - Startup verification that the catalog and the handlers agree
//!
//! The registry and the resource service are the only places that turn a
//! failure into a caller-facing envelope.

use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use rmcp::model::Tool;
use tracing::{debug, info, instrument, warn};

use super::definitions::{Arguments, ToolContext};
use super::envelope::{Envelope, OperationPayload};
use super::error::ToolError;
use super::operation::Operation;
use crate::core::config::ToolsConfig;
use crate::core::error::{Error, Result};
use crate::domains::store::Stores;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - owns the handler context and dispatches calls.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    ctx: ToolContext,
}

impl ToolRegistry {
    /// Create a new tool registry over the given stores.
    pub fn new(stores: Arc<Stores>, config: Arc<ToolsConfig>) -> Self {
        Self {
            ctx: ToolContext::new(stores, config),
        }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        Operation::ALL.iter().map(|op| op.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO/TCP transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        Operation::ALL.iter().map(|op| op.tool()).collect()
    }

    /// Check that every catalog entry resolves to exactly one handler and
    /// that each schema only requires fields it declares.
    pub fn verify_catalog() -> Result<()> {
        let mut seen = HashSet::new();

        for tool in Self::get_all_tools() {
            let name = tool.name.as_ref();

            if !seen.insert(name.to_string()) {
                return Err(Error::config(format!("duplicate tool '{}' in catalog", name)));
            }

            if Operation::from_name(name).is_none() {
                return Err(Error::config(format!("tool '{}' has no handler", name)));
            }

            let properties = tool
                .input_schema
                .get("properties")
                .and_then(|v| v.as_object());
            let required = tool
                .input_schema
                .get("required")
                .and_then(|v| v.as_array())
                .cloned()
                .unwrap_or_default();

            for field in required {
                let field = field.as_str().unwrap_or_default();
                if !properties.is_some_and(|p| p.contains_key(field)) {
                    return Err(Error::config(format!(
                        "tool '{}' requires undeclared field '{}'",
                        name, field
                    )));
                }
            }
        }

        info!(
            "Capability catalog verified: {}",
            Self::tool_names().join(", ")
        );
        Ok(())
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Never panics and never returns a raw error: unknown names, handler
    /// failures and handler panics all come back as a failure envelope.
    #[instrument(skip(self, arguments))]
    pub fn dispatch(&self, name: &str, arguments: Arguments) -> Envelope {
        let Some(op) = Operation::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Envelope::Failure(ToolError::unknown_operation(name));
        };

        let ctx = &self.ctx;
        let envelope = guarded(|| op.invoke(arguments, ctx));

        if let Envelope::Failure(e) = &envelope {
            warn!("Tool {} failed: {}", name, e);
        }

        envelope
    }

    /// Dispatch after the configured cosmetic delay.
    pub async fn call(&self, name: &str, arguments: Arguments) -> Envelope {
        let latency = self.ctx.config.demo_latency_ms;
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }
        let envelope = self.dispatch(name, arguments);
        debug!(tool = name, kind = ?envelope.error_kind(), "Tool call finished");
        envelope
    }
}

/// Run a handler, turning a panic into an `OperationFailed` envelope.
fn guarded(f: impl FnOnce() -> std::result::Result<OperationPayload, ToolError>) -> Envelope {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(ToolError::operation_failed(panic_message(&*payload))))
        .into()
}

/// Extract a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    }
}
