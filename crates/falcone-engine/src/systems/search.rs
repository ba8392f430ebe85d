//! Search resolution.
//!
//! The primary path fetches a token and submits the selection to the search
//! service. Any failure there hands over to a local draw over the whole
//! catalog, which keeps the puzzle playable without a backend.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use falcone_core::constants::REQUIRED_ASSIGNMENTS;
use falcone_core::errors::{EngineError, SubmissionError};
use falcone_core::search::{SearchRequest, SearchResult, Token};

use crate::board::Board;

/// Source of authorization tokens for the search service.
pub trait TokenProvider {
    fn get_token(&mut self) -> Result<Token, SubmissionError>;
}

/// Remote search service.
pub trait SearchService {
    fn submit(&mut self, request: &SearchRequest) -> Result<SearchResult, SubmissionError>;
}

/// Picks the hidden target for the fallback search.
pub trait TargetDraw {
    /// Index in `0..catalog_len` of the planet hiding the target.
    fn draw(&mut self, catalog_len: usize) -> usize;
}

/// Uniform draw from a seeded ChaCha8 stream.
#[derive(Debug, Clone)]
pub struct SeededDraw {
    rng: ChaCha8Rng,
}

impl SeededDraw {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl TargetDraw for SeededDraw {
    fn draw(&mut self, catalog_len: usize) -> usize {
        if catalog_len == 0 {
            return 0;
        }
        self.rng.gen_range(0..catalog_len)
    }
}

/// Backend used when no search service is configured: every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

impl TokenProvider for OfflineBackend {
    fn get_token(&mut self) -> Result<Token, SubmissionError> {
        Err(SubmissionError::TokenUnavailable(
            "no token endpoint configured".into(),
        ))
    }
}

impl SearchService for OfflineBackend {
    fn submit(&mut self, _request: &SearchRequest) -> Result<SearchResult, SubmissionError> {
        Err(SubmissionError::Unavailable)
    }
}

/// A search may only run with four planets selected and four vehicles bound.
pub fn check_ready(board: &Board) -> Result<(), EngineError> {
    let selected = board.aggregates.selected_count;
    let assigned = board.aggregates.assigned_count;
    if selected < REQUIRED_ASSIGNMENTS || assigned < REQUIRED_ASSIGNMENTS {
        return Err(EngineError::IncompleteAssignment {
            required: REQUIRED_ASSIGNMENTS,
            selected,
            assigned,
        });
    }
    Ok(())
}

/// Selected planet names in catalog order, with the unit type bound to each.
pub fn build_request(board: &Board, token: Token) -> SearchRequest {
    let mut planet_names = Vec::new();
    let mut vehicle_names = Vec::new();
    for location in board.locations.iter().filter(|l| l.is_selected) {
        planet_names.push(location.name.clone());
        if let Some(unit) = location
            .assigned_unit
            .as_ref()
            .and_then(|id| board.unit(id))
        {
            vehicle_names.push(unit.name.clone());
        }
    }
    SearchRequest {
        token,
        planet_names,
        vehicle_names,
    }
}

/// Token then submission; the first failure aborts the primary path.
pub fn submit_primary(
    board: &Board,
    tokens: &mut dyn TokenProvider,
    service: &mut dyn SearchService,
) -> Result<SearchResult, SubmissionError> {
    let token = tokens.get_token()?;
    let request = build_request(board, token);
    let mut result = service.submit(&request)?;
    if result.is_success() && result.time_taken.is_none() {
        result.time_taken = Some(board.aggregates.elapsed_time);
    }
    Ok(result)
}

/// Draw the target from the full catalog and check it against the selection.
pub fn resolve_fallback(board: &Board, draw: &mut dyn TargetDraw) -> SearchResult {
    let index = draw.draw(board.locations.len());
    match board.locations.get(index) {
        Some(winner) if winner.is_selected => {
            SearchResult::success(winner.name.clone(), board.aggregates.elapsed_time)
        }
        _ => SearchResult::failure(),
    }
}
