//! NoteHub Application Orchestration Layer
//! NoteHub 应用编排层
//!
//! Use cases over the notes gateway, the keyed query cache, the search
//! debouncer and the controller that ties them to user interaction.
//!
//! ## Dependencies / 依赖
//!
//! - `nh-core` ports only; no HTTP or clock implementation is named here
//! - 仅依赖 `nh-core` 的端口，不引用任何具体实现

pub mod controller;
pub mod debounce;
pub mod query;
pub mod usecases;

pub use controller::{
    ControllerEvent, ControllerOptions, ControllerState, MutationStatus, NotesController,
    NotesView, PaginationView,
};
pub use debounce::Debouncer;
pub use query::{QueryCache, QueryKey};
