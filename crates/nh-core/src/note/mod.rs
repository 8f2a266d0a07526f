//! Note domain models and the wire shapes of the NoteHub API.

mod id;
mod page;
mod tag;

pub use id::NoteId;
pub use page::{DeleteNoteResponse, ListNotesParams, NotesPage};
pub use tag::{NoteTag, ParseNoteTagError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note as returned by the server.
///
/// Notes are never partially updated by this client; the only mutations are
/// create and delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Payload of a create request. Doubles as the modal form draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub tag: NoteTag,
}

impl NewNote {
    pub fn new(title: impl Into<String>, content: impl Into<String>, tag: NoteTag) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tag,
        }
    }
}

/// The form's initial values: empty title and content, tag `Todo`.
impl Default for NewNote {
    fn default() -> Self {
        Self::new("", "", NoteTag::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_decodes_with_numeric_id_and_timestamps() {
        let json = r#"{
            "id": 42,
            "title": "Groceries",
            "content": "milk, eggs",
            "tag": "Shopping",
            "createdAt": "2025-06-01T10:00:00.000Z",
            "updatedAt": "2025-06-01T10:00:00.000Z"
        }"#;

        let note: Note = serde_json::from_str(json).unwrap();

        assert_eq!(note.id, NoteId::from("42"));
        assert_eq!(note.tag, NoteTag::Shopping);
        assert!(note.created_at.is_some());
    }

    #[test]
    fn note_decodes_without_timestamps() {
        let json = r#"{"id":"abc","title":"t","content":"","tag":"Todo"}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.id.as_str(), "abc");
        assert_eq!(note.created_at, None);
    }

    #[test]
    fn new_note_serializes_to_create_body() {
        let body = serde_json::to_value(NewNote::new("Standup", "9:30", NoteTag::Meeting)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"title": "Standup", "content": "9:30", "tag": "Meeting"})
        );
    }

    #[test]
    fn default_draft_matches_form_initial_values() {
        let draft = NewNote::default();
        assert_eq!(draft.title, "");
        assert_eq!(draft.content, "");
        assert_eq!(draft.tag, NoteTag::Todo);
    }
}
