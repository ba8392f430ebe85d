//! Aggregate recalculation: counts and elapsed time, always by full scan.

use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Values derived from the board after every mutation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Aggregates {
    pub selected_count: usize,
    pub assigned_count: usize,
    pub elapsed_time: u64,
}

/// Travel time rounded half away from zero (`2.5 -> 3`).
pub fn travel_time(distance: f64, speed: f64) -> u64 {
    (distance / speed).round() as u64
}

pub fn recompute_selected_count(board: &mut Board) {
    board.aggregates.selected_count = board
        .locations
        .iter()
        .filter(|location| location.is_selected)
        .count();
}

pub fn recompute_assigned_count(board: &mut Board) {
    board.aggregates.assigned_count = board
        .locations
        .iter()
        .filter(|location| location.assigned_unit.is_some())
        .count();
}

/// Slowest travel time over selected planets with a bound unit; 0 when none.
pub fn recompute_elapsed_time(board: &mut Board) {
    let elapsed = board
        .locations
        .iter()
        .filter(|location| location.is_engaged())
        .filter_map(|location| {
            let unit_id = location.assigned_unit.as_ref()?;
            let unit = board.unit(unit_id)?;
            Some(travel_time(location.distance, unit.speed))
        })
        .max()
        .unwrap_or(0);
    board.aggregates.elapsed_time = elapsed;
}

