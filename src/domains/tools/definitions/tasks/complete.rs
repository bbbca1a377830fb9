//! Complete task tool.

use chrono::Utc;
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use super::super::common::{ToolContext, ToolDefinition, require_non_blank};
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Parameters for the complete task tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CompleteTaskParams {
    /// Id of the task to complete.
    #[serde(rename = "taskId")]
    #[schemars(description = "รหัสงาน / Task ID")]
    pub task_id: String,
}

/// Complete task tool - transitions a task to `completed`.
///
/// By default completing an already completed task succeeds again and
/// re-stamps `completedAt`. With `strict_completion` it is rejected.
pub struct CompleteTaskTool;

impl ToolDefinition for CompleteTaskTool {
    const NAME: &'static str = "complete_task";
    const DESCRIPTION: &'static str = "ทำเครื่องหมายงานว่าเสร็จสิ้น / Mark a task as completed";

    type Params = CompleteTaskParams;

    #[instrument(skip_all, fields(task_id = %params.task_id))]
    fn execute(params: CompleteTaskParams, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        require_non_blank("taskId", &params.task_id)?;
        let strict = ctx.config.strict_completion;

        let outcome = ctx.stores.tasks.update(&params.task_id, |task| {
            if strict && task.is_completed() {
                return Err(ToolError::validation(format!(
                    "task '{}' is already completed",
                    task.id
                )));
            }
            task.complete(Utc::now());
            Ok(task.clone())
        });

        let task = match outcome {
            Some(result) => result?,
            None => {
                warn!("Task not found: {}", params.task_id);
                return Err(ToolError::task_not_found(params.task_id));
            }
        };

        info!("Completed task {}", task.id);
        Ok(OperationPayload::task_completed(task))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{args, context, strict_context};
    use super::*;
    use crate::domains::store::{Priority, Task, TaskStatus};
    use crate::domains::tools::error::ErrorKind;
    use serde_json::json;

    fn completed(payload: OperationPayload) -> Task {
        match payload {
            OperationPayload::TaskCompleted { task, .. } => task,
            other => panic!("Expected TaskCompleted, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_task() {
        let ctx = context();
        let task = ctx.stores.tasks.insert(Task::new("Buy milk", "", Priority::High));

        let done = completed(
            CompleteTaskTool::call(args(json!({ "taskId": task.id })), &ctx).unwrap(),
        );

        assert_eq!(done.status, TaskStatus::Completed);
        let completed_at = done.completed_at.expect("completedAt set");
        assert!(completed_at >= done.created_at);
        assert_eq!(done.created_at, task.created_at);
        assert_eq!(ctx.stores.tasks.get(&task.id), Some(done));
    }

    #[test]
    fn test_complete_missing_task_does_not_mutate() {
        let ctx = context();
        let task = ctx.stores.tasks.insert(Task::new("a", "", Priority::Low));

        let err = CompleteTaskTool::call(args(json!({ "taskId": "task_missing" })), &ctx)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("Task not found"));
        assert_eq!(ctx.stores.tasks.snapshot(), vec![task]);
    }

    #[test]
    fn test_complete_missing_task_id_argument() {
        let ctx = context();
        let err = CompleteTaskTool::call(args(json!({})), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }

    #[test]
    fn test_complete_twice_restamps_by_default() {
        let ctx = context();
        let task = ctx.stores.tasks.insert(Task::new("a", "", Priority::Low));

        let first = completed(
            CompleteTaskTool::call(args(json!({ "taskId": task.id })), &ctx).unwrap(),
        );
        let second = completed(
            CompleteTaskTool::call(args(json!({ "taskId": task.id })), &ctx).unwrap(),
        );

        assert_eq!(second.status, TaskStatus::Completed);
        assert!(second.completed_at >= first.completed_at);
    }

    #[test]
    fn test_complete_twice_rejected_when_strict() {
        let ctx = strict_context();
        let task = ctx.stores.tasks.insert(Task::new("a", "", Priority::Low));

        let first = completed(
            CompleteTaskTool::call(args(json!({ "taskId": task.id })), &ctx).unwrap(),
        );
        let err = CompleteTaskTool::call(args(json!({ "taskId": task.id })), &ctx).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValidationError);
        assert_eq!(ctx.stores.tasks.get(&task.id), Some(first));
    }
}
