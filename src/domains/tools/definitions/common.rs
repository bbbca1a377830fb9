//! Common utilities shared across tool definitions.
//!
//! This module provides the `ToolDefinition` trait every operation
//! implements, the execution context handed to handlers, and argument
//! parsing/validation helpers.

use std::sync::Arc;

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::core::config::ToolsConfig;
use crate::domains::store::Stores;
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Raw argument map as received from the caller.
pub type Arguments = serde_json::Map<String, serde_json::Value>;

/// State handed to every handler invocation.
#[derive(Debug, Clone)]
pub struct ToolContext {
    /// Task and note stores.
    pub stores: Arc<Stores>,

    /// Tools domain configuration.
    pub config: Arc<ToolsConfig>,
}

impl ToolContext {
    pub fn new(stores: Arc<Stores>, config: Arc<ToolsConfig>) -> Self {
        Self { stores, config }
    }
}

/// A single operation: its catalog metadata plus its handler.
pub trait ToolDefinition {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Typed arguments; also the source of the input schema.
    type Params: DeserializeOwned + JsonSchema + 'static;

    /// Run the handler against already-parsed arguments.
    fn execute(params: Self::Params, ctx: &ToolContext) -> Result<OperationPayload, ToolError>;

    /// Parse raw arguments and run the handler.
    fn call(arguments: Arguments, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        let params = parse_params::<Self::Params>(arguments)?;
        Self::execute(params, ctx)
    }

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Deserialize raw arguments into typed params.
pub fn parse_params<T: DeserializeOwned>(arguments: Arguments) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::validation(e.to_string()))
}

/// Reject an empty or whitespace-only required string argument.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), ToolError> {
    if value.trim().is_empty() {
        return Err(ToolError::validation(format!("'{}' must not be empty", field)));
    }
    Ok(())
}
