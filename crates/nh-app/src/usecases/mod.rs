//! Business logic use cases
//! 业务用例
//!
//! Each use case is one gateway round trip; cache invalidation and view
//! state belong to the controller.
//!
// ListNotes   → list / search, one page at a time
// CreateNote  → modal form submit
// DeleteNote  → list item delete

pub mod create_note;
pub mod delete_note;
pub mod list_notes;

pub use create_note::CreateNote;
pub use delete_note::DeleteNote;
pub use list_notes::ListNotes;
