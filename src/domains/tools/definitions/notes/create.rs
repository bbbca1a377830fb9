//! Create note tool.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolContext, ToolDefinition, require_non_blank};
use crate::domains::store::Note;
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Parameters for the create note tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateNoteParams {
    #[schemars(description = "หัวข้อโน้ต / Note title")]
    pub title: String,

    #[schemars(description = "เนื้อหาโน้ต / Note content")]
    pub content: String,

    #[schemars(description = "แท็ก / Tags")]
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Create note tool.
pub struct CreateNoteTool;

impl ToolDefinition for CreateNoteTool {
    const NAME: &'static str = "create_note";
    const DESCRIPTION: &'static str = "สร้างโน้ตใหม่ / Create a new note";

    type Params = CreateNoteParams;

    #[instrument(skip_all, fields(title = %params.title))]
    fn execute(params: CreateNoteParams, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        require_non_blank("title", &params.title)?;
        require_non_blank("content", &params.content)?;

        let note = Note::new(params.title, params.content, params.tags.unwrap_or_default());
        let note = ctx.stores.notes.insert(note);

        info!("Created note {} with {} tag(s)", note.id, note.tags.len());
        Ok(OperationPayload::note_created(note))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{args, context};
    use super::*;
    use crate::domains::tools::error::ErrorKind;
    use serde_json::json;

    fn created(payload: OperationPayload) -> Note {
        match payload {
            OperationPayload::NoteCreated { note, .. } => note,
            other => panic!("Expected NoteCreated, got {:?}", other),
        }
    }

    #[test]
    fn test_create_note() {
        let ctx = context();
        let note = created(
            CreateNoteTool::call(
                args(json!({
                    "title": "Meeting",
                    "content": "Discuss roadmap",
                    "tags": ["work", "q1", "work"]
                })),
                &ctx,
            )
            .unwrap(),
        );

        assert!(note.id.starts_with("note_"));
        assert_eq!(note.tags, vec!["work", "q1", "work"]);
        assert_eq!(ctx.stores.notes.get(&note.id), Some(note));
    }

    #[test]
    fn test_create_note_tags_default_to_empty() {
        let ctx = context();
        let note = created(
            CreateNoteTool::call(args(json!({ "title": "t", "content": "c" })), &ctx).unwrap(),
        );
        assert!(note.tags.is_empty());
    }

    #[test]
    fn test_create_note_requires_content() {
        let ctx = context();
        let err = CreateNoteTool::call(args(json!({ "title": "t" })), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);

        let err =
            CreateNoteTool::call(args(json!({ "title": "t", "content": "" })), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert!(ctx.stores.notes.is_empty());
    }

    #[test]
    fn test_create_note_rejects_non_string_tags() {
        let ctx = context();
        let err = CreateNoteTool::call(
            args(json!({ "title": "t", "content": "c", "tags": [1, 2] })),
            &ctx,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert!(ctx.stores.notes.is_empty());
    }
}
