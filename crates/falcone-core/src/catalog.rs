//! Catalog of planets and vehicle types.
//!
//! A catalog is loaded once per session and never changes afterwards. The
//! bundled catalog ships with the crate; `FALCONE_CATALOG_PATH` points the
//! loader at a different JSON file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::CATALOG_PATH_ENV;
use crate::types::{LocationTemplate, UnitType};

pub const BUILTIN_CATALOG: &str = include_str!("data/catalog.json");

/// On-disk catalog layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub planets: Vec<LocationTemplate>,
    pub vehicles: Vec<UnitType>,
}

/// Validated catalog snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    locations: Vec<LocationTemplate>,
    unit_types: Vec<UnitType>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read catalog from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("duplicate planet name `{0}`")]
    DuplicateLocation(String),
    #[error("duplicate vehicle name `{0}`")]
    DuplicateUnitType(String),
    #[error("planet `{name}` has invalid distance {distance}")]
    InvalidDistance { name: String, distance: f64 },
    #[error("vehicle `{name}` has invalid max distance {max_distance}")]
    InvalidRange { name: String, max_distance: f64 },
    #[error("vehicle `{name}` has invalid speed {speed}")]
    InvalidSpeed { name: String, speed: f64 },
}

impl Catalog {
    /// Validate and wrap catalog entries.
    pub fn new(
        locations: Vec<LocationTemplate>,
        unit_types: Vec<UnitType>,
    ) -> Result<Self, CatalogError> {
        let mut names = HashSet::new();
        for location in &locations {
            if !names.insert(location.name.as_str()) {
                return Err(CatalogError::DuplicateLocation(location.name.clone()));
            }
            if !location.distance.is_finite() || location.distance < 0.0 {
                return Err(CatalogError::InvalidDistance {
                    name: location.name.clone(),
                    distance: location.distance,
                });
            }
        }

        let mut names = HashSet::new();
        for unit_type in &unit_types {
            if !names.insert(unit_type.name.as_str()) {
                return Err(CatalogError::DuplicateUnitType(unit_type.name.clone()));
            }
            if unit_type.max_distance.is_nan() || unit_type.max_distance < 0.0 {
                return Err(CatalogError::InvalidRange {
                    name: unit_type.name.clone(),
                    max_distance: unit_type.max_distance,
                });
            }
            if !unit_type.speed.is_finite() || unit_type.speed <= 0.0 {
                return Err(CatalogError::InvalidSpeed {
                    name: unit_type.name.clone(),
                    speed: unit_type.speed,
                });
            }
        }

        Ok(Self {
            locations,
            unit_types,
        })
    }

    /// The catalog bundled with the crate.
    pub fn builtin() -> Self {
        read_catalog_from_str(BUILTIN_CATALOG).expect("builtin catalog should parse")
    }

    pub fn locations(&self) -> &[LocationTemplate] {
        &self.locations
    }

    pub fn unit_types(&self) -> &[UnitType] {
        &self.unit_types
    }
}

/// Load the catalog named by `FALCONE_CATALOG_PATH`, or the bundled one.
///
/// A file that fails to load is logged and replaced by the bundled catalog.
pub fn load_catalog_from_env() -> Catalog {
    let Some(path) = env::var(CATALOG_PATH_ENV).ok().map(PathBuf::from) else {
        return Catalog::builtin();
    };

    match read_catalog_from_file(&path) {
        Ok(catalog) => {
            tracing::info!(
                target: "falcone::catalog",
                path = %path.display(),
                planets = catalog.locations().len(),
                vehicles = catalog.unit_types().len(),
                "catalog.loaded"
            );
            catalog
        }
        Err(err) => {
            tracing::warn!(
                target: "falcone::catalog",
                path = %path.display(),
                error = %err,
                "catalog.load_failed"
            );
            Catalog::builtin()
        }
    }
}

pub fn read_catalog_from_file(path: &Path) -> Result<Catalog, CatalogError> {
    let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_catalog_from_str(&contents)
}

pub fn read_catalog_from_str(data: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = serde_json::from_str(data)?;
    Catalog::new(file.planets, file.vehicles)
}
