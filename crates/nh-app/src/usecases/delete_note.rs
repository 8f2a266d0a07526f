use std::sync::Arc;

use nh_core::ports::NotesGatewayPort;
use nh_core::{DeleteNoteResponse, GatewayError, NoteId};
use tracing::info;

/// Use case for deleting a note by id.
pub struct DeleteNote {
    gateway: Arc<dyn NotesGatewayPort>,
}

impl DeleteNote {
    pub fn from_arc(gateway: Arc<dyn NotesGatewayPort>) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(
        name = "usecase.delete_note.execute",
        skip(self, id),
        fields(note_id = %id)
    )]
    pub async fn execute(&self, id: &NoteId) -> Result<DeleteNoteResponse, GatewayError> {
        let response = self.gateway.delete(id).await?;
        info!(deleted = %response.deleted_note_id, "deleted note");
        Ok(response)
    }
}
