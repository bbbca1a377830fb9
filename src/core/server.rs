//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains.
//!
//! ## State
//!
//! The task and note stores are created once here and shared (via `Arc`)
//! with the tool registry and the resource service. Clones of `McpServer`
//! (one per TCP/HTTP connection) all see the same stores.
//!
//! Every `tools/call` goes through `ToolRegistry::call`, whatever the name,
//! so an unknown tool is answered with a failure envelope rather than a
//! JSON-RPC error. **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::ResourceService,
    store::Stores,
    tools::{Envelope, ToolRegistry, definitions::Arguments},
};

const INSTRUCTIONS: &str = "Task and note manager. Use the tools to create, list and complete \
    tasks, create and search notes, and get (synthetic) weather. Tasks and notes are also \
    readable as resources at task:///{id} and note:///{id}.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Task and note stores, shared by tools and resources.
    stores: Arc<Stores>,

    /// Dispatcher and capability catalog.
    registry: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the capability catalog and the handlers disagree.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        ToolRegistry::verify_catalog()?;

        let config = Arc::new(config);
        let stores = Arc::new(Stores::new());
        let registry = Arc::new(ToolRegistry::new(
            stores.clone(),
            Arc::new(config.tools.clone()),
        ));
        let resource_service = Arc::new(ResourceService::new(stores.clone()));

        Ok(Self {
            config,
            stores,
            registry,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared stores.
    pub fn stores(&self) -> &Arc<Stores> {
        &self.stores
    }

    /// Server instructions sent on initialize.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // Transport-agnostic entry points (used by the HTTP transport and tests)
    // ========================================================================

    /// List all available tools.
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        ToolRegistry::get_all_tools()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name and return its envelope.
    pub async fn call_tool(&self, name: &str, arguments: Arguments) -> Envelope {
        self.registry.call(name, arguments).await
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI. Failures come back as a failure envelope
    /// inside the contents.
    pub async fn read_resource(&self, uri: &str) -> serde_json::Value {
        let result = self.resource_service.read(uri).await;
        serde_json::json!({
            "contents": result.contents
        })
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<serde_json::Value> {
        let templates = self.resource_service.list_resource_templates().await;

        templates
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "uriTemplate": t.raw.uri_template,
                    "name": t.raw.name,
                    "title": t.raw.title,
                    "description": t.raw.description,
                    "mimeType": t.raw.mime_type
                })
            })
            .collect()
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions().to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            tools: ToolRegistry::get_all_tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        let arguments = request.arguments.unwrap_or_default();
        let envelope = self.registry.call(&request.name, arguments).await;
        Ok(envelope.into_call_result())
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        Ok(self.resource_service.read(&request.uri).await)
    }
}
