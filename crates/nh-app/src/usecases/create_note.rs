use std::sync::Arc;

use nh_core::ports::NotesGatewayPort;
use nh_core::{GatewayError, NewNote, Note};
use tracing::info;

/// Use case for creating a note from the form payload.
///
/// Field validation (e.g. a required title) is left to the server.
pub struct CreateNote {
    gateway: Arc<dyn NotesGatewayPort>,
}

impl CreateNote {
    pub fn from_arc(gateway: Arc<dyn NotesGatewayPort>) -> Self {
        Self { gateway }
    }

    #[tracing::instrument(
        name = "usecase.create_note.execute",
        skip(self, note),
        fields(tag = %note.tag)
    )]
    pub async fn execute(&self, note: &NewNote) -> Result<Note, GatewayError> {
        let created = self.gateway.create(note).await?;
        info!(note_id = %created.id, "created note");
        Ok(created)
    }
}
