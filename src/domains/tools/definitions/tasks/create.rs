//! Create task tool.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolContext, ToolDefinition, require_non_blank};
use crate::domains::store::{Priority, Task};
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Parameters for the create task tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    /// Task title.
    #[schemars(description = "ชื่องาน / Task title")]
    pub title: String,

    /// Task description (default: empty).
    #[schemars(description = "รายละเอียดงาน / Task description")]
    #[serde(default)]
    pub description: Option<String>,

    /// Priority level (default: medium).
    #[schemars(description = "ระดับความสำคัญ / Priority level")]
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// Create task tool - inserts a new pending task.
pub struct CreateTaskTool;

impl ToolDefinition for CreateTaskTool {
    const NAME: &'static str = "create_task";
    const DESCRIPTION: &'static str = "สร้างงานใหม่ในระบบ / Create a new task";

    type Params = CreateTaskParams;

    #[instrument(skip_all, fields(title = %params.title))]
    fn execute(params: CreateTaskParams, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        require_non_blank("title", &params.title)?;

        let task = Task::new(
            params.title,
            params.description.unwrap_or_default(),
            params.priority.unwrap_or_default(),
        );
        let task = ctx.stores.tasks.insert(task);

        info!("Created task {}", task.id);
        Ok(OperationPayload::task_created(task))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{args, context};
    use super::*;
    use crate::domains::store::TaskStatus;
    use crate::domains::tools::error::ErrorKind;
    use serde_json::json;

    fn created(payload: OperationPayload) -> Task {
        match payload {
            OperationPayload::TaskCreated { task, .. } => task,
            other => panic!("Expected TaskCreated, got {:?}", other),
        }
    }

    #[test]
    fn test_create_task_defaults() {
        let ctx = context();
        let task = created(
            CreateTaskTool::call(args(json!({ "title": "Buy milk", "priority": "high" })), &ctx)
                .unwrap(),
        );

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.completed_at.is_none());
        assert_eq!(ctx.stores.tasks.get(&task.id), Some(task));
    }

    #[test]
    fn test_create_task_default_priority_is_medium() {
        let ctx = context();
        let task = created(CreateTaskTool::call(args(json!({ "title": "Read" })), &ctx).unwrap());
        assert_eq!(task.priority, Priority::Medium);
    }

    #[test]
    fn test_create_task_missing_title() {
        let ctx = context();
        let err = CreateTaskTool::call(args(json!({ "description": "no title" })), &ctx).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert!(ctx.stores.tasks.is_empty());
    }

    #[test]
    fn test_create_task_blank_title() {
        let ctx = context();
        let err = CreateTaskTool::call(args(json!({ "title": "  " })), &ctx).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert!(ctx.stores.tasks.is_empty());
    }

    #[test]
    fn test_create_task_unknown_priority() {
        let ctx = context();
        let err = CreateTaskTool::call(args(json!({ "title": "x", "priority": "urgent" })), &ctx)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert!(ctx.stores.tasks.is_empty());
    }

    #[test]
    fn test_create_task_ids_are_unique() {
        let ctx = context();
        for _ in 0..100 {
            CreateTaskTool::call(args(json!({ "title": "same instant" })), &ctx).unwrap();
        }
        assert_eq!(ctx.stores.tasks.len(), 100);
    }
}
