use crate::error::GatewayError;
use crate::note::{DeleteNoteResponse, ListNotesParams, NewNote, Note, NoteId, NotesPage};

/// Remote notes collection.
///
/// Each call is exactly one request/response round trip. Implementations do
/// not retry and perform no business validation; the server's rejection is
/// surfaced as [`GatewayError::Server`].
#[async_trait::async_trait]
pub trait NotesGatewayPort: Send + Sync {
    /// List or search notes. A `None` search means all notes.
    async fn list(&self, params: &ListNotesParams) -> Result<NotesPage, GatewayError>;

    /// Create a note and return it with its server-assigned id.
    async fn create(&self, note: &NewNote) -> Result<Note, GatewayError>;

    /// Delete a note. A missing id surfaces as a plain server error.
    async fn delete(&self, id: &NoteId) -> Result<DeleteNoteResponse, GatewayError>;
}
