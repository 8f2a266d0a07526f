//! Data-flow controller for the notes screen.
//!
//! Owns paging, search and modal state and derives the query identity
//! `(page, debounced search)` from it. Every transition re-evaluates the
//! identity and spawns a fetch only when the cache has nothing fresh and
//! nothing in flight for it. Spawned fetches write into the shared
//! [`QueryCache`]; the view always reads the active identity's entry, so a
//! slow fetch for a superseded identity can never overwrite newer data.
//!
//! ```text
//! set_search ──▶ Debouncer ──(settled)──▶ sync ──▶ ListNotes ──▶ QueryCache
//! set_page ─────────────────────────────▶ sync          ▲
//! create / delete ──▶ gateway ──▶ invalidate("notes") ──┘ + sync
//! ```

mod state;
mod view;

pub use state::ControllerState;
pub use view::{NotesView, PaginationView, LOAD_ERROR_FALLBACK};

use std::sync::Arc;

use nh_core::ports::NotesGatewayPort;
use nh_core::{DeleteNoteResponse, GatewayError, NewNote, Note, NoteId, NotesPage};
use tokio::sync::{mpsc, watch};
use tokio::time::Duration;
use tracing::{debug, info, warn};

use crate::debounce::Debouncer;
use crate::query::{FetchTicket, QueryCache, QueryKey, NOTES_NAMESPACE};
use crate::usecases::{CreateNote, DeleteNote, ListNotes};

/// Outcome of the last create/delete.
///
/// Failures are only recorded here; nothing else in the view changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MutationStatus {
    #[default]
    Idle,
    Succeeded,
    Failed(String),
}

/// What woke [`NotesController::next_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The search input settled on a new debounced term.
    SearchSettled(String),
    /// A fetch finished and its outcome is in the cache. `is_active` is false
    /// for fetches whose identity was superseded while they were in flight.
    FetchSettled { key: QueryKey, is_active: bool },
}

#[derive(Debug, Clone, Copy)]
pub struct ControllerOptions {
    pub per_page: u32,
    pub debounce: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            per_page: 12,
            debounce: Duration::from_millis(500),
        }
    }
}

pub struct NotesController {
    state: ControllerState,
    search: Debouncer<String>,
    search_rx: watch::Receiver<String>,
    cache: Arc<QueryCache>,
    list_notes: Arc<ListNotes>,
    create_note: CreateNote,
    delete_note: DeleteNote,
    active_key: QueryKey,
    previous: Option<NotesPage>,
    mutation: MutationStatus,
    /// Set when a settled search has been observed but not yet synced.
    sync_pending: bool,
    settled_tx: mpsc::UnboundedSender<QueryKey>,
    settled_rx: mpsc::UnboundedReceiver<QueryKey>,
}

impl NotesController {
    /// Build a controller. No fetch happens until the first [`sync`](Self::sync).
    pub fn new(
        gateway: Arc<dyn NotesGatewayPort>,
        cache: Arc<QueryCache>,
        options: ControllerOptions,
    ) -> Self {
        let search = Debouncer::new(String::new(), options.debounce);
        let search_rx = search.subscribe();
        let (settled_tx, settled_rx) = mpsc::unbounded_channel();
        let state = ControllerState::default();
        let active_key = QueryKey::notes(state.page(), "");

        Self {
            state,
            search,
            search_rx,
            cache,
            list_notes: Arc::new(ListNotes::from_arc(gateway.clone(), options.per_page)),
            create_note: CreateNote::from_arc(gateway.clone()),
            delete_note: DeleteNote::from_arc(gateway),
            active_key,
            previous: None,
            mutation: MutationStatus::Idle,
            sync_pending: false,
            settled_tx,
            settled_rx,
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    /// The search term that currently drives fetching.
    pub fn debounced_search(&self) -> String {
        self.search_rx.borrow().clone()
    }

    /// Identity derived from the current state.
    pub fn query_key(&self) -> QueryKey {
        QueryKey::notes(self.state.page(), self.debounced_search())
    }

    pub fn active_key(&self) -> &QueryKey {
        &self.active_key
    }

    pub fn mutation(&self) -> &MutationStatus {
        &self.mutation
    }

    pub async fn set_search(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.state.set_search(value.clone());
        self.search.set(value);
        self.sync().await;
    }

    pub async fn set_page(&mut self, page: u32) {
        self.state.set_page(page);
        self.sync().await;
    }

    pub fn open_modal(&mut self) {
        self.mutation = MutationStatus::Idle;
        self.state.open_modal();
    }

    pub fn close_modal(&mut self) {
        self.state.close_modal();
    }

    pub fn update_draft(&mut self, draft: NewNote) {
        self.state.update_draft(draft);
    }

    /// Submit the modal form's current draft.
    pub async fn submit_draft(&mut self) -> Result<Note, GatewayError> {
        let draft = self.state.draft().clone();
        self.create_note(draft).await
    }

    /// Create a note. On success the modal closes and every cached notes
    /// query is invalidated; the new note shows up wherever the server
    /// orders it. On failure the modal and draft are left as they were.
    pub async fn create_note(&mut self, note: NewNote) -> Result<Note, GatewayError> {
        match self.create_note.execute(&note).await {
            Ok(created) => {
                self.mutation = MutationStatus::Succeeded;
                self.invalidate_notes().await;
                self.state.close_modal();
                self.sync().await;
                Ok(created)
            }
            Err(err) => {
                warn!(error = %err, "create note failed");
                self.mutation = MutationStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete a note and invalidate every cached notes query.
    ///
    /// The current page is kept even if it is now out of range; the list
    /// renders empty until the user navigates.
    pub async fn delete_note(&mut self, id: &NoteId) -> Result<DeleteNoteResponse, GatewayError> {
        match self.delete_note.execute(id).await {
            Ok(response) => {
                self.mutation = MutationStatus::Succeeded;
                self.invalidate_notes().await;
                self.sync().await;
                Ok(response)
            }
            Err(err) => {
                warn!(note_id = %id, error = %err, "delete note failed");
                self.mutation = MutationStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Re-evaluate the identity and fetch it if the cache cannot serve it.
    ///
    /// Returns `true` when a fetch was spawned.
    pub async fn sync(&mut self) -> bool {
        let key = self.query_key();

        if key != self.active_key {
            self.remember_active().await;
            debug!(from = %self.active_key, to = %key, "query identity changed");
            self.active_key = key.clone();
        }

        let spawned = match self.cache.try_begin_fetch(&key).await {
            Some(ticket) => {
                self.spawn_fetch(ticket);
                true
            }
            None => false,
        };
        self.sync_pending = false;
        spawned
    }

    /// Wait for the next reactive input and apply it.
    ///
    /// A settled search re-evaluates the identity; a settled fetch is only
    /// reported, since its outcome is already in the cache.
    ///
    /// Cancel safe: a search observed by a dropped call is synced by the next
    /// call (or by any transition) before anything else happens.
    pub async fn next_event(&mut self) -> ControllerEvent {
        enum Wake {
            Search,
            Fetch(QueryKey),
        }

        if self.sync_pending {
            self.sync().await;
        }

        let wake = tokio::select! {
            Ok(()) = self.search_rx.changed() => Wake::Search,
            Some(key) = self.settled_rx.recv() => Wake::Fetch(key),
        };

        match wake {
            Wake::Search => {
                let term = self.search_rx.borrow_and_update().clone();
                self.sync_pending = true;
                debug!(search = %term, "search settled");
                self.sync().await;
                ControllerEvent::SearchSettled(term)
            }
            Wake::Fetch(key) => {
                let is_active = key == self.active_key;
                ControllerEvent::FetchSettled { key, is_active }
            }
        }
    }

    pub async fn view(&self) -> NotesView {
        let active = self.cache.get(&self.active_key).await;
        NotesView::compose(&self.state, active, self.previous.as_ref(), &self.mutation)
    }

    async fn invalidate_notes(&mut self) {
        self.remember_active().await;
        self.cache.invalidate_namespace(NOTES_NAMESPACE).await;
    }

    /// Keep the active page around as placeholder data for the next identity.
    async fn remember_active(&mut self) {
        if let Some(page) = self.cache.data(&self.active_key).await {
            self.previous = Some(page);
        }
    }

    fn spawn_fetch(&self, ticket: FetchTicket) {
        let list_notes = Arc::clone(&self.list_notes);
        let cache = Arc::clone(&self.cache);
        let settled_tx = self.settled_tx.clone();

        info!(key = %ticket.key(), "fetching notes");
        tokio::spawn(async move {
            let key = ticket.key().clone();
            let outcome = list_notes
                .execute(key.page(), key.search())
                .await
                .map_err(|e| e.to_string());
            cache.settle(ticket, outcome).await;
            // The controller may already be gone; nothing to report then.
            let _ = settled_tx.send(key);
        });
    }
}
