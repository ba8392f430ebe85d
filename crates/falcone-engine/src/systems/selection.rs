//! Selection rules: at most four planets selected at once.

use falcone_core::constants::MAX_SELECTED_LOCATIONS;
use falcone_core::errors::EngineError;

use crate::board::Board;
use crate::systems::{aggregate, assignment};

/// Flip the selection of a planet and return its new state.
///
/// Selecting a fifth planet is refused without touching the board.
/// Unselecting a planet releases the unit bound to it.
pub fn toggle_select(board: &mut Board, name: &str) -> Result<bool, EngineError> {
    let index = board.location_index(name)?;

    if !board.locations[index].is_selected
        && board.aggregates.selected_count >= MAX_SELECTED_LOCATIONS
    {
        return Err(EngineError::CapacityExceeded {
            limit: MAX_SELECTED_LOCATIONS,
        });
    }

    let location = &mut board.locations[index];
    location.is_selected = !location.is_selected;
    let is_selected = location.is_selected;

    if !is_selected {
        if let Some(unit_id) = location.assigned_unit.take() {
            assignment::release_unit(board, &unit_id);
            aggregate::recompute_assigned_count(board);
            aggregate::recompute_elapsed_time(board);
        }
    }

    aggregate::recompute_selected_count(board);

    tracing::debug!(
        target: "falcone::selection",
        planet = name,
        selected = is_selected,
        selected_count = board.aggregates.selected_count,
        "selection.toggled"
    );

    Ok(is_selected)
}
