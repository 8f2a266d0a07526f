//! NoteHub REST gateway / NoteHub REST 网关
//!
//! ## Errors / 错误
//!
//! - Connect, TLS and timeout failures → `GatewayError::Network`
//! - Non-2xx responses → `GatewayError::Server` with the server's message
//! - 2xx bodies that do not decode → `GatewayError::InvalidResponse`

mod error_mapping;
mod http_notes_gateway;

pub use http_notes_gateway::HttpNotesGateway;
