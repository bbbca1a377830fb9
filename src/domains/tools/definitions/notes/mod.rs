//! Note tools module.
//!
//! - `create`: Create a new note
//! - `search`: Case-insensitive search across titles, contents and tags

pub mod create;
pub mod search;

pub use create::{CreateNoteParams, CreateNoteTool};
pub use search::{SearchNotesParams, SearchNotesTool};
