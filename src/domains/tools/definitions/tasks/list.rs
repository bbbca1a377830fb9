//! List tasks tool.

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use super::super::common::{ToolContext, ToolDefinition};
use crate::domains::store::TaskStatus;
use crate::domains::tools::envelope::OperationPayload;
use crate::domains::tools::error::ToolError;

/// Status filter for listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Pending,
    Completed,
    #[default]
    All,
}

impl StatusFilter {
    /// The task status to keep, or `None` to keep everything.
    pub fn status(self) -> Option<TaskStatus> {
        match self {
            Self::Pending => Some(TaskStatus::Pending),
            Self::Completed => Some(TaskStatus::Completed),
            Self::All => None,
        }
    }
}

/// Parameters for the list tasks tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    /// Status filter (default: all).
    #[schemars(description = "กรองตามสถานะ / Filter by status")]
    #[serde(default)]
    pub status: Option<StatusFilter>,
}

/// List tasks tool - snapshot of tasks in creation order.
pub struct ListTasksTool;

impl ToolDefinition for ListTasksTool {
    const NAME: &'static str = "list_tasks";
    const DESCRIPTION: &'static str = "แสดงรายการงานทั้งหมด / List all tasks";

    type Params = ListTasksParams;

    #[instrument(skip_all)]
    fn execute(params: ListTasksParams, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        let filter = params.status.unwrap_or_default();

        let tasks = match filter.status() {
            Some(status) => ctx.stores.tasks.filter(|t| t.status == status),
            None => ctx.stores.tasks.snapshot(),
        };

        info!("Listed {} task(s) with filter {:?}", tasks.len(), filter);
        Ok(OperationPayload::task_list(tasks))
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::common::test_support::{args, context};
    use super::*;
    use crate::domains::store::{Priority, Task};
    use crate::domains::tools::error::ErrorKind;
    use chrono::Utc;
    use serde_json::json;

    fn listed(payload: OperationPayload) -> (usize, Vec<Task>) {
        match payload {
            OperationPayload::TaskList { count, tasks } => (count, tasks),
            other => panic!("Expected TaskList, got {:?}", other),
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_list_empty_store() {
        let ctx = context();
        let (count, tasks) = listed(ListTasksTool::call(args(json!({})), &ctx).unwrap());
        assert_eq!(count, 0);
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_list_filters_by_status_in_creation_order() {
        let ctx = context();
        let a = ctx.stores.tasks.insert(Task::new("a", "", Priority::Low));
        let b = ctx.stores.tasks.insert(Task::new("b", "", Priority::Low));
        let c = ctx.stores.tasks.insert(Task::new("c", "", Priority::Low));
        ctx.stores.tasks.update(&b.id, |t| t.complete(Utc::now()));

        let (count, all) = listed(ListTasksTool::call(args(json!({ "status": "all" })), &ctx).unwrap());
        assert_eq!(count, 3);
        assert_eq!(ids(&all), vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);

        let (_, pending) =
            listed(ListTasksTool::call(args(json!({ "status": "pending" })), &ctx).unwrap());
        assert_eq!(ids(&pending), vec![a.id.as_str(), c.id.as_str()]);

        let (count, completed) =
            listed(ListTasksTool::call(args(json!({ "status": "completed" })), &ctx).unwrap());
        assert_eq!(count, 1);
        assert_eq!(ids(&completed), vec![b.id.as_str()]);
    }

    #[test]
    fn test_list_default_is_all() {
        let ctx = context();
        ctx.stores.tasks.insert(Task::new("a", "", Priority::Low));
        let (count, _) = listed(ListTasksTool::call(args(json!({})), &ctx).unwrap());
        assert_eq!(count, 1);
    }

    #[test]
    fn test_list_unknown_status() {
        let ctx = context();
        let err = ListTasksTool::call(args(json!({ "status": "archived" })), &ctx).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }
}
