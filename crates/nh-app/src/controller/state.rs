use nh_core::NewNote;

/// User-owned state of the notes screen.
///
/// Lives for as long as the controller; nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerState {
    page: u32,
    search_input: String,
    is_modal_open: bool,
    draft: NewNote,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            page: 1,
            search_input: String::new(),
            is_modal_open: false,
            draft: NewNote::default(),
        }
    }
}

impl ControllerState {
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Raw search input, possibly not yet debounced.
    pub fn search_input(&self) -> &str {
        &self.search_input
    }

    pub fn is_modal_open(&self) -> bool {
        self.is_modal_open
    }

    pub fn draft(&self) -> &NewNote {
        &self.draft
    }

    /// Changing the search always returns the view to page 1.
    pub(crate) fn set_search(&mut self, value: String) {
        self.search_input = value;
        self.page = 1;
    }

    /// Not clamped: the pagination control only emits pages in range.
    pub(crate) fn set_page(&mut self, page: u32) {
        self.page = page;
    }

    pub(crate) fn open_modal(&mut self) {
        self.is_modal_open = true;
    }

    /// Closing discards whatever was typed into the form.
    pub(crate) fn close_modal(&mut self) {
        self.is_modal_open = false;
        self.draft = NewNote::default();
    }

    pub(crate) fn update_draft(&mut self, draft: NewNote) {
        self.draft = draft;
    }
}
