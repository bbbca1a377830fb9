//! Resource Registry - resource templates.
//!
//! Task and note resources are derived from the stores at list time (see
//! `service.rs`); the templates below advertise the URI scheme so clients
//! can address an entity directly by id.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

/// MIME type of every entity resource.
pub const ENTITY_MIME_TYPE: &str = "application/json";

/// Get all registered resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn get_all_resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: "task:///{id}".to_string(),
            name: "Task".to_string(),
            title: Some("งาน / Task".to_string()),
            description: Some("Read a task by its id".to_string()),
            mime_type: Some(ENTITY_MIME_TYPE.to_string()),
        }
        .no_annotation(),
        RawResourceTemplate {
            uri_template: "note:///{id}".to_string(),
            name: "Note".to_string(),
            title: Some("โน้ต / Note".to_string()),
            description: Some("Read a note by its id".to_string()),
            mime_type: Some(ENTITY_MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resource_templates() {
        let templates = get_all_resource_templates();
        assert_eq!(templates.len(), 2);

        let uri_templates: Vec<_> = templates
            .iter()
            .map(|t| t.raw.uri_template.as_str())
            .collect();
        assert!(uri_templates.contains(&"task:///{id}"));
        assert!(uri_templates.contains(&"note:///{id}"));
    }
}
