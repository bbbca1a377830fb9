//! Static mapping from operation name to handler.
//!
//! `Operation` is the single list of supported operations. The catalog and
//! the dispatcher are both derived from `Operation::ALL`, and every
//! per-operation `match` below is exhaustive, so a new operation cannot be
//! added to one of them without the other.

use rmcp::model::Tool;

use super::definitions::{
    Arguments, CompleteTaskTool, CreateNoteTool, CreateTaskTool, GetWeatherTool, ListTasksTool,
    SearchNotesTool, ToolContext, ToolDefinition,
};
use super::envelope::OperationPayload;
use super::error::ToolError;

/// Every operation a caller can invoke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CreateTask,
    ListTasks,
    CompleteTask,
    CreateNote,
    SearchNotes,
    GetWeather,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 6] = [
        Self::CreateTask,
        Self::ListTasks,
        Self::CompleteTask,
        Self::CreateNote,
        Self::SearchNotes,
        Self::GetWeather,
    ];

    /// The wire name of this operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::CreateTask => CreateTaskTool::NAME,
            Self::ListTasks => ListTasksTool::NAME,
            Self::CompleteTask => CompleteTaskTool::NAME,
            Self::CreateNote => CreateNoteTool::NAME,
            Self::SearchNotes => SearchNotesTool::NAME,
            Self::GetWeather => GetWeatherTool::NAME,
        }
    }

    /// Resolve an operation by exact name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Catalog entry (name, description, input schema).
    pub fn tool(self) -> Tool {
        match self {
            Self::CreateTask => CreateTaskTool::to_tool(),
            Self::ListTasks => ListTasksTool::to_tool(),
            Self::CompleteTask => CompleteTaskTool::to_tool(),
            Self::CreateNote => CreateNoteTool::to_tool(),
            Self::SearchNotes => SearchNotesTool::to_tool(),
            Self::GetWeather => GetWeatherTool::to_tool(),
        }
    }

    /// Parse `arguments` and run the matching handler.
    pub fn invoke(self, arguments: Arguments, ctx: &ToolContext) -> Result<OperationPayload, ToolError> {
        match self {
            Self::CreateTask => CreateTaskTool::call(arguments, ctx),
            Self::ListTasks => ListTasksTool::call(arguments, ctx),
            Self::CompleteTask => CompleteTaskTool::call(arguments, ctx),
            Self::CreateNote => CreateNoteTool::call(arguments, ctx),
            Self::SearchNotes => SearchNotesTool::call(arguments, ctx),
            Self::GetWeather => GetWeatherTool::call(arguments, ctx),
        }
    }
}
