//! Mock implementations of ports for testing.
//!
//! Enabled for this crate's tests and, through the `testing` feature, for
//! downstream crates' tests.

use mockall::mock;

use crate::error::GatewayError;
use crate::note::{DeleteNoteResponse, ListNotesParams, NewNote, Note, NoteId, NotesPage};
use crate::ports::{ClockPort, NotesGatewayPort};
use async_trait::async_trait;

mock! {
    pub NotesGateway {}

    #[async_trait]
    impl NotesGatewayPort for NotesGateway {
        async fn list(&self, params: &ListNotesParams) -> Result<NotesPage, GatewayError>;
        async fn create(&self, note: &NewNote) -> Result<Note, GatewayError>;
        async fn delete(&self, id: &NoteId) -> Result<DeleteNoteResponse, GatewayError>;
    }
}

mock! {
    pub Clock {}

    impl ClockPort for Clock {
        fn now_ms(&self) -> i64;
    }
}
