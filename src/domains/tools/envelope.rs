//! Response envelope returned by every operation.
//!
//! On success the wire shape is `{ "success": true, ...payload }` where the
//! payload fields depend on the operation. On failure it is
//! `{ "success": false, "message": "..." }`.

use rmcp::model::{CallToolResult, Content};
use serde::{Serialize, Serializer};
use tracing::warn;

use super::definitions::WeatherReading;
use super::error::{ErrorKind, ToolError};
use crate::domains::store::{Note, Task};

pub const TASK_CREATED_MESSAGE: &str = "งานถูกสร้างเรียบร้อยแล้ว / Task created successfully";
pub const TASK_COMPLETED_MESSAGE: &str = "งานถูกทำเครื่องหมายว่าเสร็จสิ้น / Task marked as completed";
pub const NOTE_CREATED_MESSAGE: &str = "โน้ตถูกสร้างเรียบร้อยแล้ว / Note created successfully";

/// Operation-specific success payload, one variant per operation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum OperationPayload {
    /// `create_task`
    TaskCreated { message: &'static str, task: Task },

    /// `list_tasks`
    TaskList { count: usize, tasks: Vec<Task> },

    /// `complete_task`
    TaskCompleted { message: &'static str, task: Task },

    /// `create_note`
    NoteCreated { message: &'static str, note: Note },

    /// `search_notes`
    NoteSearch { count: usize, notes: Vec<Note> },

    /// `get_weather`
    Weather { weather: WeatherReading },
}

impl OperationPayload {
    pub fn task_created(task: Task) -> Self {
        Self::TaskCreated {
            message: TASK_CREATED_MESSAGE,
            task,
        }
    }

    pub fn task_list(tasks: Vec<Task>) -> Self {
        Self::TaskList {
            count: tasks.len(),
            tasks,
        }
    }

    pub fn task_completed(task: Task) -> Self {
        Self::TaskCompleted {
            message: TASK_COMPLETED_MESSAGE,
            task,
        }
    }

    pub fn note_created(note: Note) -> Self {
        Self::NoteCreated {
            message: NOTE_CREATED_MESSAGE,
            note,
        }
    }

    pub fn note_search(notes: Vec<Note>) -> Self {
        Self::NoteSearch {
            count: notes.len(),
            notes,
        }
    }
}

/// The uniform `{success, ...}` wrapper around an operation outcome.
#[derive(Debug)]
pub enum Envelope {
    Success(OperationPayload),
    Failure(ToolError),
}

#[derive(Serialize)]
struct SuccessWire<'a> {
    success: bool,
    #[serde(flatten)]
    payload: &'a OperationPayload,
}

#[derive(Serialize)]
struct FailureWire<'a> {
    success: bool,
    message: &'a str,
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Success(payload) => SuccessWire {
                success: true,
                payload,
            }
            .serialize(serializer),
            Self::Failure(error) => FailureWire {
                success: false,
                message: &error.to_string(),
            }
            .serialize(serializer),
        }
    }
}

impl From<Result<OperationPayload, ToolError>> for Envelope {
    fn from(result: Result<OperationPayload, ToolError>) -> Self {
        match result {
            Ok(payload) => Self::Success(payload),
            Err(error) => Self::Failure(error),
        }
    }
}

impl Envelope {
    /// Whether the operation succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The failure kind, if any.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error.kind()),
        }
    }

    /// Serialize to a JSON value.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|e| {
            warn!("Failed to serialize envelope: {}", e);
            serde_json::json!({
                "success": false,
                "message": format!("ข้อผิดพลาด / Error: {}", e),
            })
        })
    }

    /// Convert into an MCP tool result.
    ///
    /// The envelope is sent as pretty-printed JSON text and as structured
    /// content; `isError` mirrors `!success`.
    pub fn into_call_result(self) -> CallToolResult {
        let json = self.to_json();
        let text = serde_json::to_string_pretty(&json).unwrap_or_else(|_| json.to_string());

        CallToolResult {
            content: vec![Content::text(text)],
            structured_content: Some(json),
            is_error: Some(!self.is_success()),
            meta: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::store::Priority;
    use rmcp::model::RawContent;

    #[test]
    fn test_success_envelope_is_flat() {
        let task = Task::new("Buy milk", "", Priority::High);
        let json = Envelope::Success(OperationPayload::task_created(task.clone())).to_json();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], TASK_CREATED_MESSAGE);
        assert_eq!(json["task"]["id"], task.id.as_str());
    }

    #[test]
    fn test_list_envelope_has_count() {
        let json = Envelope::Success(OperationPayload::task_list(vec![])).to_json();
        assert_eq!(json, serde_json::json!({ "success": true, "count": 0, "tasks": [] }));
    }

    #[test]
    fn test_failure_envelope() {
        let envelope = Envelope::Failure(ToolError::unknown_operation("delete_task"));
        assert_eq!(envelope.error_kind(), Some(ErrorKind::UnknownOperation));

        let json = envelope.to_json();
        assert_eq!(json["success"], false);
        assert!(json["message"].as_str().unwrap().contains("not found"));
        assert_eq!(json.as_object().unwrap().len(), 2);
    }

    #[test]
    fn test_into_call_result_sets_is_error() {
        let result = Envelope::Failure(ToolError::validation("title")).into_call_result();
        assert_eq!(result.is_error, Some(true));

        let text = match &result.content[0].raw {
            RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        let parsed: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(parsed["success"], false);
        assert_eq!(result.structured_content, Some(parsed));
    }
}
