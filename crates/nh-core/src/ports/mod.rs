//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `nh-app` and the
//! adapters in `nh-infra`, so the controller can be exercised against
//! in-memory gateways and a manual clock.

mod clock;
pub mod notes_gateway;

#[cfg(any(test, feature = "testing"))]
pub mod mock_ports;

pub use clock::*;
pub use notes_gateway::NotesGatewayPort;
