//! Resource service implementation.
//!
//! The ResourceService is a read-only view of the entity stores addressed by
//! URI. Listing yields descriptors only; reading yields the full entity as
//! pretty-printed JSON.

use std::sync::Arc;

use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents, ResourceTemplate,
};
use serde::Serialize;
use tracing::{info, instrument, warn};

use super::error::ResourceError;
use super::registry::{ENTITY_MIME_TYPE, get_all_resource_templates};
use super::uri::ResourceUri;
use crate::domains::store::{Note, Stores, Task};

/// Description used for tasks with an empty description.
pub const NO_DESCRIPTION: &str = "No description";

/// An entity resolved from a resource URI.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourceEntity {
    Task(Task),
    Note(Note),
}

#[derive(Serialize)]
struct FailureEnvelope<'a> {
    success: bool,
    message: &'a str,
}

/// Service for listing and reading entity resources.
pub struct ResourceService {
    /// Shared task and note stores.
    stores: Arc<Stores>,

    /// Resource templates for parameterized resources.
    templates: Vec<ResourceTemplate>,
}

impl ResourceService {
    /// Create a new ResourceService over the given stores.
    pub fn new(stores: Arc<Stores>) -> Self {
        info!("Initializing ResourceService");
        Self {
            stores,
            templates: get_all_resource_templates(),
        }
    }

    /// List every task, then every note, as resource descriptors.
    pub async fn list_resources(&self) -> Vec<Resource> {
        let tasks = self.stores.tasks.snapshot().into_iter().map(|task| {
            let description = if task.description.is_empty() {
                NO_DESCRIPTION.to_string()
            } else {
                task.description
            };
            descriptor(ResourceUri::Task(task.id), task.title, description)
        });

        let notes = self.stores.notes.snapshot().into_iter().map(|note| {
            let description = format!("Note with {} tags", note.tags.len());
            descriptor(ResourceUri::Note(note.id), note.title, description)
        });

        tasks.chain(notes).collect()
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Resolve a URI to the entity it addresses.
    pub fn lookup(&self, uri: &str) -> Result<ResourceEntity, ResourceError> {
        match ResourceUri::parse(uri)? {
            ResourceUri::Task(id) => self
                .stores
                .tasks
                .get(&id)
                .map(ResourceEntity::Task)
                .ok_or(ResourceError::TaskNotFound(id)),
            ResourceUri::Note(id) => self
                .stores
                .notes
                .get(&id)
                .map(ResourceEntity::Note)
                .ok_or(ResourceError::NoteNotFound(id)),
        }
    }

    /// Read a resource by URI.
    #[instrument(skip(self))]
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entity = self.lookup(uri)?;
        let text = serde_json::to_string_pretty(&entity)
            .map_err(|e| ResourceError::internal(e.to_string()))?;

        Ok(json_contents(uri, text))
    }

    /// Read a resource by URI, reporting failures as a
    /// `{success: false, message}` envelope instead of an error.
    pub async fn read(&self, uri: &str) -> ReadResourceResult {
        match self.read_resource(uri).await {
            Ok(result) => result,
            Err(e) => {
                warn!("Failed to read resource {}: {}", uri, e);
                let message = e.to_string();
                let envelope = FailureEnvelope {
                    success: false,
                    message: &message,
                };
                let text = serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| {
                    serde_json::json!({ "success": false, "message": message }).to_string()
                });
                json_contents(uri, text)
            }
        }
    }
}

/// Build a resource descriptor.
fn descriptor(uri: ResourceUri, name: String, description: String) -> Resource {
    let mut raw = RawResource::new(uri.to_string(), name);
    raw.description = Some(description);
    raw.mime_type = Some(ENTITY_MIME_TYPE.to_string());
    raw.no_annotation()
}

/// Wrap a JSON text body as a single-content read result.
fn json_contents(uri: &str, text: String) -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContents::TextResourceContents {
            uri: uri.to_string(),
            mime_type: Some(ENTITY_MIME_TYPE.to_string()),
            text,
            meta: None,
        }],
    }
}
