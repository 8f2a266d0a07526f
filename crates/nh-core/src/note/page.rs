use serde::{Deserialize, Serialize};

use super::{Note, NoteId};

/// One page of a list/search query. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    pub notes: Vec<Note>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_notes: u32,
}

impl NotesPage {
    pub fn contains(&self, id: &NoteId) -> bool {
        self.notes.iter().any(|note| &note.id == id)
    }
}

/// Confirmation returned by a delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteNoteResponse {
    pub message: String,
    pub deleted_note_id: NoteId,
}

/// Inputs of a list request.
///
/// Serializes to the API query string: `page`, `perPage` and, only when set,
/// `search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesParams {
    pub page: u32,
    pub per_page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl ListNotesParams {
    /// Builds params, treating an empty search as "all notes".
    pub fn new(page: u32, per_page: u32, search: &str) -> Self {
        Self {
            page,
            per_page,
            search: (!search.is_empty()).then(|| search.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_is_omitted() {
        let params = ListNotesParams::new(1, 12, "");
        assert_eq!(params.search, None);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"page": 1, "perPage": 12})
        );
    }

    #[test]
    fn non_empty_search_is_kept() {
        let params = ListNotesParams::new(1, 12, "meeting");
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({"page": 1, "perPage": 12, "search": "meeting"})
        );
    }

    #[test]
    fn page_decodes_and_defaults_total_notes() {
        let page: NotesPage = serde_json::from_str(r#"{"notes":[],"totalPages":3}"#).unwrap();
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_notes, 0);
    }

    #[test]
    fn delete_response_accepts_numeric_id() {
        let resp: DeleteNoteResponse =
            serde_json::from_str(r#"{"message":"Note deleted","deletedNoteId":42}"#).unwrap();
        assert_eq!(resp.deleted_note_id, NoteId::from(42));
    }
}
