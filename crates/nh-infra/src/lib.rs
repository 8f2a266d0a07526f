//! Infrastructure adapters for the NoteHub client.
//!
//! Implements the ports declared in `nh-core::ports`.

pub mod gateway;
pub mod time;

pub use gateway::HttpNotesGateway;
pub use time::SystemClock;
