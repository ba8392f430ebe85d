//! Player commands sent from the frontend to the engine.

use serde::{Deserialize, Serialize};

use crate::types::UnitId;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Select an unselected planet, or unselect a selected one.
    ToggleSelect { location: String },
    /// Bind a vehicle to a selected planet (the completed drag-and-drop).
    Assign { location: String, unit_id: UnitId },
    /// Release the vehicle bound to a planet, keeping the planet selected.
    Unassign { location: String },
    /// Search the selected planets.
    Search,
    /// Start over with nothing selected.
    Reset,
}
