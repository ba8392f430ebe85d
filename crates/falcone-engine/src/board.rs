//! The planets, vehicles, and derived aggregates of one session.

use falcone_core::catalog::Catalog;
use falcone_core::errors::EngineError;
use falcone_core::state::UnitStock;
use falcone_core::types::{Location, UnitId, UnitInstance, UnitType};

use crate::systems::aggregate::Aggregates;
use crate::systems::inventory;

/// Mutable session state. Aggregates are derived, never edited directly.
#[derive(Debug, Clone)]
pub struct Board {
    pub locations: Vec<Location>,
    pub units: Vec<UnitInstance>,
    pub unit_types: Vec<UnitType>,
    pub aggregates: Aggregates,
}

impl Board {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            locations: catalog
                .locations()
                .iter()
                .map(Location::from_template)
                .collect(),
            units: inventory::expand_inventory(catalog.unit_types()),
            unit_types: catalog.unit_types().to_vec(),
            aggregates: Aggregates::default(),
        }
    }

    pub fn location_index(&self, name: &str) -> Result<usize, EngineError> {
        self.locations
            .iter()
            .position(|location| location.name == name)
            .ok_or_else(|| EngineError::UnknownLocation(name.to_string()))
    }

    pub fn unit_index(&self, id: &UnitId) -> Result<usize, EngineError> {
        self.units
            .iter()
            .position(|unit| &unit.id == id)
            .ok_or_else(|| EngineError::UnknownUnit(id.clone()))
    }

    pub fn unit(&self, id: &UnitId) -> Option<&UnitInstance> {
        self.units.iter().find(|unit| &unit.id == id)
    }

    pub fn location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }

    /// The planet a unit is currently bound to.
    pub fn holder_of(&self, id: &UnitId) -> Option<&Location> {
        self.locations
            .iter()
            .find(|location| location.assigned_unit.as_ref() == Some(id))
    }

    /// Available / total vehicles per unit type, in catalog order.
    pub fn stock(&self) -> Vec<UnitStock> {
        self.unit_types
            .iter()
            .map(|unit_type| {
                let available = self
                    .units
                    .iter()
                    .filter(|unit| unit.name == unit_type.name && unit.is_available)
                    .count() as u32;
                UnitStock {
                    name: unit_type.name.clone(),
                    available,
                    total: unit_type.total_no,
                }
            })
            .collect()
    }

    /// Everything available, nothing selected or bound, aggregates zeroed.
    pub fn reset(&mut self) {
        for unit in &mut self.units {
            unit.is_available = true;
        }
        for location in &mut self.locations {
            location.is_selected = false;
            location.assigned_unit = None;
        }
        self.aggregates = Aggregates::default();
    }
}
