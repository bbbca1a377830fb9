//! Note record.
//!
//! Notes are immutable after creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityStore, generate_id};

/// Store holding every note.
pub type NoteStore = EntityStore<Note>;

/// A note as stored and as sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Ordered, duplicates kept as given.
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note with a generated id.
    pub fn new(title: impl Into<String>, content: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: generate_id(Self::ID_PREFIX),
            title: title.into(),
            content: content.into(),
            tags,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive substring match against title, content or any tag.
    ///
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.content.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
    }
}

impl Entity for Note {
    const ID_PREFIX: &'static str = "note_";

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meeting() -> Note {
        Note::new(
            "Meeting",
            "Discuss roadmap",
            vec!["work".to_string(), "q1".to_string()],
        )
    }

    #[test]
    fn test_matches_title_content_and_tags() {
        let note = meeting();
        assert!(note.matches("meet"));
        assert!(note.matches("roadmap"));
        assert!(note.matches("work"));
        assert!(note.matches("q1"));
        assert!(!note.matches("nope"));
    }

    #[test]
    fn test_duplicate_tags_are_kept() {
        let note = Note::new("t", "c", vec!["a".to_string(), "a".to_string()]);
        assert_eq!(note.tags.len(), 2);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(meeting()).unwrap();
        assert!(json["id"].as_str().unwrap().starts_with("note_"));
        assert_eq!(json["tags"], serde_json::json!(["work", "q1"]));
        assert!(json["createdAt"].is_string());
    }
}
