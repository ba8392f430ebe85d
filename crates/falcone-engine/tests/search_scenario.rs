//! End-to-end search scenarios driven through player commands.

use falcone_engine::core::catalog::Catalog;
use falcone_engine::core::commands::PlayerCommand;
use falcone_engine::core::errors::SubmissionError;
use falcone_engine::core::search::{SearchRequest, SearchResult, Token};
use falcone_engine::core::types::{LocationTemplate, UnitId, UnitType};
use falcone_engine::systems::search::{SearchService, TargetDraw, TokenProvider};
use falcone_engine::{EngineConfig, MissionEngine};

struct FailingBackend;

impl TokenProvider for FailingBackend {
    fn get_token(&mut self) -> Result<Token, SubmissionError> {
        Ok(Token("expired".into()))
    }
}

impl SearchService for FailingBackend {
    fn submit(&mut self, _request: &SearchRequest) -> Result<SearchResult, SubmissionError> {
        Err(SubmissionError::Rejected("token expired".into()))
    }
}

/// Always lands on the named planet.
struct DrawPlanet {
    names: Vec<String>,
    target: &'static str,
}

impl TargetDraw for DrawPlanet {
    fn draw(&mut self, catalog_len: usize) -> usize {
        assert_eq!(catalog_len, self.names.len(), "draw spans the full catalog");
        self.names
            .iter()
            .position(|name| name == self.target)
            .unwrap()
    }
}

fn catalog() -> Catalog {
    let locations = (0..6)
        .map(|i| LocationTemplate {
            name: ((b'A' + i as u8) as char).to_string(),
            distance: 10.0 * (i + 1) as f64,
        })
        .collect();
    let units = vec![UnitType {
        name: "Scout".into(),
        total_no: 4,
        max_distance: 60.0,
        speed: 10.0,
    }];
    Catalog::new(locations, units).unwrap()
}

fn planned_engine() -> MissionEngine {
    let mut engine = MissionEngine::new(EngineConfig { seed: 2024 }, &catalog());
    let mut backend = FailingBackend;
    let mut service = FailingBackend;
    for (i, name) in ["A", "B", "C", "D"].into_iter().enumerate() {
        let commands = [
            PlayerCommand::ToggleSelect {
                location: name.into(),
            },
            PlayerCommand::Assign {
                location: name.into(),
                unit_id: UnitId::new("Scout", i as u32 + 1),
            },
        ];
        for command in commands {
            engine.apply(command, &mut backend, &mut service).unwrap();
        }
    }
    engine
}

fn draw(target: &'static str) -> DrawPlanet {
    DrawPlanet {
        names: ["A", "B", "C", "D", "E", "F"].map(String::from).to_vec(),
        target,
    }
}

#[test]
fn failed_submission_finds_target_among_selection() {
    let mut engine = planned_engine();
    assert_eq!(engine.elapsed_time(), 4);

    let outcome = engine
        .search_with_draw(&mut FailingBackend, &mut FailingBackend, &mut draw("B"))
        .unwrap();

    let json = serde_json::to_value(&outcome.result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "location_name": "B", "time_taken": 4, "status": "success" })
    );
}

#[test]
fn failed_submission_misses_unselected_target() {
    let mut engine = planned_engine();

    let outcome = engine
        .search_with_draw(&mut FailingBackend, &mut FailingBackend, &mut draw("F"))
        .unwrap();

    let json = serde_json::to_value(&outcome.result).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "failure" }));
}

#[test]
fn reset_after_search_allows_a_new_plan() {
    let mut engine = planned_engine();
    engine
        .search_with_draw(&mut FailingBackend, &mut FailingBackend, &mut draw("C"))
        .unwrap();

    engine.reset();
    engine.reset();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.selected_count, 0);
    assert_eq!(snapshot.assigned_count, 0);
    assert_eq!(snapshot.elapsed_time, 0);
    assert!(snapshot.units.iter().all(|unit| unit.is_available));
    assert!(snapshot.last_result.is_none());

    engine.toggle_select("F").unwrap();
    engine.assign("F", &UnitId::new("Scout", 1)).unwrap();
    assert_eq!(engine.elapsed_time(), 6);
}
