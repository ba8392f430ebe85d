//! Rejections raised by the engine and failures reported by the search backend.

use thiserror::Error;

use crate::constants::*;
use crate::types::UnitId;

/// A player action the rules refuse. State is left unchanged.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("selection limit of {limit} planets reached")]
    CapacityExceeded { limit: usize },
    #[error("{unit} (range {max_distance}) cannot reach {location} at distance {distance}")]
    IncompatibleRange {
        unit: UnitId,
        location: String,
        max_distance: f64,
        distance: f64,
    },
    #[error("planet {0} is not selected")]
    LocationNotSelected(String),
    #[error(
        "search needs {required} selected and assigned planets, have {selected} selected and {assigned} assigned"
    )]
    IncompleteAssignment {
        required: usize,
        selected: usize,
        assigned: usize,
    },
    #[error("unknown planet `{0}`")]
    UnknownLocation(String),
    #[error("unknown unit `{0}`")]
    UnknownUnit(UnitId),
    #[error("{unit} is already assigned to {location}")]
    UnitUnavailable { unit: UnitId, location: String },
}

impl EngineError {
    /// Text shown to the player for this rejection.
    pub fn user_message(&self) -> &'static str {
        match self {
            EngineError::CapacityExceeded { .. } => MSG_SELECTION_LIMIT,
            EngineError::IncompatibleRange { .. } => MSG_OUT_OF_RANGE,
            EngineError::LocationNotSelected(_) => MSG_NOT_SELECTED,
            EngineError::IncompleteAssignment { .. } => MSG_INCOMPLETE,
            EngineError::UnknownLocation(_) => MSG_UNKNOWN_LOCATION,
            EngineError::UnknownUnit(_) => MSG_UNKNOWN_UNIT,
            EngineError::UnitUnavailable { .. } => MSG_UNIT_UNAVAILABLE,
        }
    }
}

/// The primary search path failed; the engine falls back to a local draw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("no token available: {0}")]
    TokenUnavailable(String),
    #[error("search service rejected the request: {0}")]
    Rejected(String),
    #[error("search service timed out")]
    Timeout,
    #[error("no search service configured")]
    Unavailable,
}
