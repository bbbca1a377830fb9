//! Entity stores domain module.
//!
//! This module owns every task and note record for the lifetime of the
//! process. Stores are plain data containers: insert, lookup, update in place
//! and enumerate in insertion order. Nothing is ever removed.
//!
//! ## Architecture
//!
//! - `entity.rs` - Generic insertion-ordered `EntityStore` and id generation
//! - `task.rs` - Task record, priority and lifecycle status
//! - `note.rs` - Note record and search matching
//!
//! The `Stores` state object is constructed once at startup and shared (via
//! `Arc`) with the tool registry and the resource service.

mod entity;
mod note;
mod task;

pub use entity::{Entity, EntityStore, generate_id};
pub use note::{Note, NoteStore};
pub use task::{Priority, Task, TaskStatus, TaskStore};

/// The process-lifetime state shared by operations and resources.
#[derive(Debug, Default)]
pub struct Stores {
    /// All tasks, in creation order.
    pub tasks: TaskStore,

    /// All notes, in creation order.
    pub notes: NoteStore,
}

impl Stores {
    /// Create an empty set of stores.
    pub fn new() -> Self {
        Self::default()
    }
}
