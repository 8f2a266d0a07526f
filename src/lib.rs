//! NoteHub terminal client.
//!
//! Wires the `nh-*` crates together and exposes the command-line surface.

pub mod bootstrap;
pub mod cli;
