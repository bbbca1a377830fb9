//! Task tools module.
//!
//! - `create`: Create a new pending task
//! - `list`: List tasks, optionally filtered by status
//! - `complete`: Mark a task as completed

pub mod complete;
pub mod create;
pub mod list;

pub use complete::{CompleteTaskParams, CompleteTaskTool};
pub use create::{CreateTaskParams, CreateTaskTool};
pub use list::{ListTasksParams, ListTasksTool, StatusFilter};
