//! FALCONE session runtime.
//!
//! Wires the engine to its collaborators: a session thread fed by a command
//! channel, an external reset channel, the search backend, and a presenter
//! that receives results, notices, and snapshots.

pub mod presenter;
pub mod reset;
pub mod session;
pub mod state;

pub use falcone_core as core;
