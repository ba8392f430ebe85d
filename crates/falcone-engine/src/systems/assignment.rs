//! Assignment rules: binding vehicles to selected planets.
//!
//! A bind validates range first, then selection. Availability is only
//! committed for a bind that passed both checks.

use falcone_core::errors::EngineError;
use falcone_core::types::{UnitId, UnitInstance};

use crate::board::Board;
use crate::systems::aggregate;

/// Bind `unit_id` to the planet `name`, releasing any unit it held before.
pub fn assign(board: &mut Board, name: &str, unit_id: &UnitId) -> Result<(), EngineError> {
    let location_index = board.location_index(name)?;
    let unit_index = board.unit_index(unit_id)?;

    let outcome = bind(board, location_index, unit_index);
    mark_assigned_unavailable(&mut board.units[unit_index], outcome.is_ok());
    outcome?;

    aggregate::recompute_assigned_count(board);
    aggregate::recompute_elapsed_time(board);

    tracing::debug!(
        target: "falcone::assignment",
        planet = name,
        unit = %unit_id,
        assigned_count = board.aggregates.assigned_count,
        elapsed_time = board.aggregates.elapsed_time,
        "assignment.bound"
    );
    Ok(())
}

/// Release the unit bound to `name`, keeping the planet selected.
pub fn unassign(board: &mut Board, name: &str) -> Result<Option<UnitId>, EngineError> {
    let index = board.location_index(name)?;
    let Some(unit_id) = board.locations[index].assigned_unit.take() else {
        return Ok(None);
    };

    release_unit(board, &unit_id);
    aggregate::recompute_assigned_count(board);
    aggregate::recompute_elapsed_time(board);

    tracing::debug!(
        target: "falcone::assignment",
        planet = name,
        unit = %unit_id,
        "assignment.released"
    );
    Ok(Some(unit_id))
}

/// Make a unit available again.
pub fn release_unit(board: &mut Board, unit_id: &UnitId) {
    if let Some(unit) = board.units.iter_mut().find(|unit| &unit.id == unit_id) {
        unit.is_available = true;
    }
}

/// Commit the availability change of a bind; a refused bind leaves the unit alone.
pub fn mark_assigned_unavailable(unit: &mut UnitInstance, bind_succeeded: bool) {
    if bind_succeeded {
        unit.is_available = false;
    }
}

/// Validate and perform the binding, first failing check wins.
fn bind(board: &mut Board, location_index: usize, unit_index: usize) -> Result<(), EngineError> {
    let location = &board.locations[location_index];
    let unit = &board.units[unit_index];

    if !unit.can_reach(location.distance) {
        return Err(EngineError::IncompatibleRange {
            unit: unit.id.clone(),
            location: location.name.clone(),
            max_distance: unit.max_distance,
            distance: location.distance,
        });
    }
    if !location.is_selected {
        return Err(EngineError::LocationNotSelected(location.name.clone()));
    }
    if !unit.is_available {
        if location.assigned_unit.as_ref() == Some(&unit.id) {
            return Ok(());
        }
        let holder = board
            .holder_of(&unit.id)
            .map(|holder| holder.name.clone())
            .unwrap_or_default();
        return Err(EngineError::UnitUnavailable {
            unit: unit.id.clone(),
            location: holder,
        });
    }

    let unit_id = unit.id.clone();
    if let Some(previous) = board.locations[location_index].assigned_unit.take() {
        release_unit(board, &previous);
    }
    board.locations[location_index].assigned_unit = Some(unit_id);
    Ok(())
}
