use nh_core::{NewNote, Note, NotesPage};

use super::{ControllerState, MutationStatus};
use crate::query::CachedQuery;

/// Banner text when a list fetch fails without a message.
pub const LOAD_ERROR_FALLBACK: &str = "Error loading notes";

/// Props of the pagination strip. Only produced when there is more than one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    pub total_pages: u32,
}

/// Everything the presentation layer needs to render the notes screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NotesView {
    pub notes: Vec<Note>,
    pub total_pages: u32,
    pub total_notes: u32,
    pub current_page: u32,
    /// A fetch is in flight and there is nothing to show yet, not even a placeholder.
    pub is_loading: bool,
    /// `notes` belong to the previously displayed query while the active one loads.
    pub is_placeholder: bool,
    pub error: Option<String>,
    pub pagination: Option<PaginationView>,
    pub search_input: String,
    pub is_modal_open: bool,
    pub draft: NewNote,
    pub mutation: MutationStatus,
}

impl NotesView {
    pub(crate) fn compose(
        state: &ControllerState,
        active: Option<CachedQuery>,
        previous: Option<&NotesPage>,
        mutation: &MutationStatus,
    ) -> Self {
        let is_fetching = active.as_ref().is_some_and(|q| q.is_fetching);
        let error = active
            .as_ref()
            .and_then(|q| q.error.as_ref())
            .map(|message| {
                if message.trim().is_empty() {
                    LOAD_ERROR_FALLBACK.to_string()
                } else {
                    message.clone()
                }
            });

        let (page, is_placeholder) = match active.and_then(|q| q.data) {
            Some(data) => (Some(data), false),
            None if is_fetching => (previous.cloned(), previous.is_some()),
            None => (None, false),
        };
        let is_loading = is_fetching && page.is_none();
        let page = page.unwrap_or_default();

        let pagination = (page.total_pages > 1).then_some(PaginationView {
            current_page: state.page(),
            total_pages: page.total_pages,
        });

        Self {
            notes: page.notes,
            total_pages: page.total_pages,
            total_notes: page.total_notes,
            current_page: state.page(),
            is_loading,
            is_placeholder,
            error,
            pagination,
            search_input: state.search_input().to_string(),
            is_modal_open: state.is_modal_open(),
            draft: state.draft().clone(),
            mutation: mutation.clone(),
        }
    }
}
