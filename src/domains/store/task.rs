//! Task record and lifecycle.
//!
//! # Invariants
//! - A task is either `pending` with no `completed_at`, or `completed` with
//!   `completed_at >= created_at`.
//! - `created_at` never changes after creation.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityStore, generate_id};

/// Store holding every task.
pub type TaskStore = EntityStore<Task>;

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// Task lifecycle state. The only transition is `Pending -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// A task as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a new pending task with a generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: generate_id(Self::ID_PREFIX),
            title: title.into(),
            description: description.into(),
            priority,
            status: TaskStatus::Pending,
            created_at: Utc::now(),
            completed_at: None,
        }
    }

    /// Whether the task has been completed.
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// Mark the task completed at `now`.
    ///
    /// Completing an already completed task re-stamps `completed_at`. The
    /// stamp is clamped so it never precedes `created_at`.
    pub fn complete(&mut self, now: DateTime<Utc>) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(now.max(self.created_at));
    }
}

impl Entity for Task {
    const ID_PREFIX: &'static str = "task_";

    fn id(&self) -> &str {
        &self.id
    }
}
