//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod common;
pub mod notes;
pub mod tasks;
pub mod weather;

pub use common::{Arguments, ToolContext, ToolDefinition};
pub use notes::{CreateNoteParams, CreateNoteTool, SearchNotesParams, SearchNotesTool};
pub use tasks::{
    CompleteTaskParams, CompleteTaskTool, CreateTaskParams, CreateTaskTool, ListTasksParams,
    ListTasksTool, StatusFilter,
};
pub use weather::{GetWeatherParams, GetWeatherTool, WeatherCondition, WeatherReading};
