//! Mission engine: the single owner of a puzzle session.
//!
//! `MissionEngine` holds the board, applies player commands, recomputes the
//! aggregates after each mutation, and resolves searches. It never talks to
//! the network or the UI itself: collaborators are passed in per call and
//! results are returned to the caller. Completely headless and seeded, so
//! sessions replay deterministically.

use serde::{Deserialize, Serialize};

use falcone_core::catalog::Catalog;
use falcone_core::commands::PlayerCommand;
use falcone_core::constants::{DEFAULT_SEED, MSG_FALLBACK};
use falcone_core::enums::ResultSource;
use falcone_core::errors::EngineError;
use falcone_core::events::Notice;
use falcone_core::search::SearchResult;
use falcone_core::state::SessionSnapshot;
use falcone_core::types::UnitId;

use crate::board::Board;
use crate::systems::search::{SearchService, SeededDraw, TargetDraw, TokenProvider};
use crate::systems::{assignment, search, selection};

/// Configuration for starting a new session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Seed of the fallback target draw. Same seed = same targets.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

/// A resolved search and the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub source: ResultSource,
}

/// What a successfully applied command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CommandOutcome {
    SelectionChanged { location: String, selected: bool },
    Assigned { location: String, unit_id: UnitId },
    Unassigned { location: String, unit_id: Option<UnitId> },
    Searched(SearchOutcome),
    Reset,
}

/// The engine. Owns all session state.
pub struct MissionEngine {
    board: Board,
    draw: SeededDraw,
    notices: Vec<Notice>,
    last_result: Option<SearchResult>,
}

impl MissionEngine {
    /// Create a session from a catalog snapshot.
    pub fn new(config: EngineConfig, catalog: &Catalog) -> Self {
        let board = Board::from_catalog(catalog);
        tracing::info!(
            target: "falcone::engine",
            planets = board.locations.len(),
            vehicles = board.units.len(),
            seed = config.seed,
            "session.started"
        );
        Self {
            board,
            draw: SeededDraw::new(config.seed),
            notices: Vec::new(),
            last_result: None,
        }
    }

    /// Select or unselect a planet. Returns the planet's new selection state.
    pub fn toggle_select(&mut self, location: &str) -> Result<bool, EngineError> {
        let result = selection::toggle_select(&mut self.board, location);
        self.report(result)
    }

    /// Bind a vehicle to a selected planet.
    pub fn assign(&mut self, location: &str, unit_id: &UnitId) -> Result<(), EngineError> {
        let result = assignment::assign(&mut self.board, location, unit_id);
        self.report(result)
    }

    /// Release the vehicle bound to a planet. Returns the released unit, if any.
    pub fn unassign(&mut self, location: &str) -> Result<Option<UnitId>, EngineError> {
        let result = assignment::unassign(&mut self.board, location);
        self.report(result)
    }

    /// Search using the session's seeded fallback draw.
    pub fn search(
        &mut self,
        tokens: &mut dyn TokenProvider,
        service: &mut dyn SearchService,
    ) -> Result<SearchOutcome, EngineError> {
        let outcome = resolve_search(&self.board, tokens, service, &mut self.draw);
        self.finish_search(outcome)
    }

    /// Search with a caller-supplied fallback draw.
    pub fn search_with_draw(
        &mut self,
        tokens: &mut dyn TokenProvider,
        service: &mut dyn SearchService,
        draw: &mut dyn TargetDraw,
    ) -> Result<SearchOutcome, EngineError> {
        let outcome = resolve_search(&self.board, tokens, service, draw);
        self.finish_search(outcome)
    }

    /// Return to the initial state. Safe to call at any time, any number of times.
    pub fn reset(&mut self) {
        self.board.reset();
        self.last_result = None;
        tracing::info!(target: "falcone::engine", "session.reset");
    }

    /// Dispatch a player command.
    pub fn apply(
        &mut self,
        command: PlayerCommand,
        tokens: &mut dyn TokenProvider,
        service: &mut dyn SearchService,
    ) -> Result<CommandOutcome, EngineError> {
        match command {
            PlayerCommand::ToggleSelect { location } => {
                let selected = self.toggle_select(&location)?;
                Ok(CommandOutcome::SelectionChanged { location, selected })
            }
            PlayerCommand::Assign { location, unit_id } => {
                self.assign(&location, &unit_id)?;
                Ok(CommandOutcome::Assigned { location, unit_id })
            }
            PlayerCommand::Unassign { location } => {
                let unit_id = self.unassign(&location)?;
                Ok(CommandOutcome::Unassigned { location, unit_id })
            }
            PlayerCommand::Search => self.search(tokens, service).map(CommandOutcome::Searched),
            PlayerCommand::Reset => {
                self.reset();
                Ok(CommandOutcome::Reset)
            }
        }
    }

    /// Build the visible session state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let aggregates = self.board.aggregates;
        SessionSnapshot {
            locations: self.board.locations.clone(),
            units: self.board.units.clone(),
            stock: self.board.stock(),
            selected_count: aggregates.selected_count,
            assigned_count: aggregates.assigned_count,
            elapsed_time: aggregates.elapsed_time,
            last_result: self.last_result.clone(),
        }
    }

    /// Drain the notices produced since the last call.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selected_count(&self) -> usize {
        self.board.aggregates.selected_count
    }

    pub fn assigned_count(&self) -> usize {
        self.board.aggregates.assigned_count
    }

    pub fn elapsed_time(&self) -> u64 {
        self.board.aggregates.elapsed_time
    }

    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last_result.as_ref()
    }

    /// Turn a rejection into a notice for the player.
    fn report<T>(&mut self, result: Result<T, EngineError>) -> Result<T, EngineError> {
        if let Err(err) = &result {
            tracing::warn!(target: "falcone::engine", error = %err, "command.rejected");
            self.notices.push(Notice::error(err.user_message()));
        }
        result
    }

    fn finish_search(
        &mut self,
        outcome: Result<SearchOutcome, EngineError>,
    ) -> Result<SearchOutcome, EngineError> {
        let outcome = self.report(outcome)?;
        if outcome.source == ResultSource::Fallback {
            self.notices.push(Notice::warning(MSG_FALLBACK));
        }
        tracing::info!(
            target: "falcone::search",
            status = ?outcome.result.status,
            source = ?outcome.source,
            planet = outcome.result.location_name.as_deref().unwrap_or("-"),
            "search.resolved"
        );
        self.last_result = Some(outcome.result.clone());
        Ok(outcome)
    }
}

/// Primary path first; any submission failure falls back to the local draw.
fn resolve_search(
    board: &Board,
    tokens: &mut dyn TokenProvider,
    service: &mut dyn SearchService,
    draw: &mut dyn TargetDraw,
) -> Result<SearchOutcome, EngineError> {
    search::check_ready(board)?;

    match search::submit_primary(board, tokens, service) {
        Ok(result) => Ok(SearchOutcome {
            result,
            source: ResultSource::Remote,
        }),
        Err(err) => {
            tracing::warn!(
                target: "falcone::search",
                error = %err,
                "search.submission_failed"
            );
            Ok(SearchOutcome {
                result: search::resolve_fallback(board, draw),
                source: ResultSource::Fallback,
            })
        }
    }
}
