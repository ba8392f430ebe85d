//! Session snapshot sent to the frontend after each command.

use serde::{Deserialize, Serialize};

use crate::search::SearchResult;
use crate::types::{Location, UnitInstance};

/// Complete session state for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub locations: Vec<Location>,
    pub units: Vec<UnitInstance>,
    /// Remaining vehicles per unit type, in catalog order.
    pub stock: Vec<UnitStock>,
    pub selected_count: usize,
    pub assigned_count: usize,
    /// Slowest travel time among the current assignments.
    pub elapsed_time: u64,
    pub last_result: Option<SearchResult>,
}

/// Availability summary for one unit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStock {
    pub name: String,
    pub available: u32,
    pub total: u32,
}
