//! # nh-core
//!
//! Core domain models and port definitions for the NoteHub client.
//!
//! This crate contains no I/O. HTTP access, clocks and timers live behind the
//! ports in [`ports`] and are implemented by `nh-infra`.

pub mod config;
pub mod error;
pub mod note;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use error::GatewayError;
pub use note::{
    DeleteNoteResponse, ListNotesParams, NewNote, Note, NoteId, NoteTag, NotesPage,
};
