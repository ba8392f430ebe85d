//! Assignment and resolution engine for FALCONE.
//!
//! Owns the session's planets and vehicles, enforces the selection and
//! assignment rules, keeps the aggregates consistent, and resolves searches.

pub mod board;
pub mod engine;
pub mod systems;

pub use engine::{CommandOutcome, EngineConfig, MissionEngine, SearchOutcome};
pub use falcone_core as core;
