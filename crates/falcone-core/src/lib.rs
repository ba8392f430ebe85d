//! Core types and definitions for the FALCONE search puzzle.
//!
//! This crate defines the vocabulary shared across all other crates:
//! catalog entries, unit instances, commands, notices, search payloads,
//! snapshots, and errors. It has no dependency on any runtime.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod events;
pub mod search;
pub mod state;
pub mod types;
