//! Catalog entries and the per-session entities built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a single unit instance, `"<type name>_<ordinal>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub String);

impl UnitId {
    /// Build the id of the `ordinal`-th instance (1-based) of a unit type.
    pub fn new(type_name: &str, ordinal: u32) -> Self {
        Self(format!("{type_name}_{ordinal}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A planet as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationTemplate {
    pub name: String,
    pub distance: f64,
}

/// A kind of vehicle with a pool of `total_no` identical instances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitType {
    pub name: String,
    pub total_no: u32,
    pub max_distance: f64,
    pub speed: f64,
}

/// A selectable planet owned by the engine for the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub distance: f64,
    pub is_selected: bool,
    /// The unit currently bound to this planet.
    pub assigned_unit: Option<UnitId>,
}

impl Location {
    pub fn from_template(template: &LocationTemplate) -> Self {
        Self {
            name: template.name.clone(),
            distance: template.distance,
            is_selected: false,
            assigned_unit: None,
        }
    }

    /// Selected and holding a unit: the planet counts toward elapsed time.
    pub fn is_engaged(&self) -> bool {
        self.is_selected && self.assigned_unit.is_some()
    }
}

/// One concrete vehicle drawn from a [`UnitType`] pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitInstance {
    pub id: UnitId,
    /// Name of the unit type this instance belongs to.
    pub name: String,
    pub max_distance: f64,
    pub speed: f64,
    pub is_available: bool,
}

impl UnitInstance {
    /// Create the `ordinal`-th instance (1-based) of a unit type.
    pub fn from_type(unit_type: &UnitType, ordinal: u32) -> Self {
        Self {
            id: UnitId::new(&unit_type.name, ordinal),
            name: unit_type.name.clone(),
            max_distance: unit_type.max_distance,
            speed: unit_type.speed,
            is_available: true,
        }
    }

    pub fn can_reach(&self, distance: f64) -> bool {
        self.max_distance >= distance
    }
}
