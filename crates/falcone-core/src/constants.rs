//! Puzzle rules and the user-facing notice texts.

/// Maximum number of planets that can be selected at once.
pub const MAX_SELECTED_LOCATIONS: usize = 4;

/// Number of planets that must be selected and assigned before a search.
pub const REQUIRED_ASSIGNMENTS: usize = 4;

/// Default seed for the fallback target draw.
pub const DEFAULT_SEED: u64 = 42;

/// Environment variable overriding the bundled catalog.
pub const CATALOG_PATH_ENV: &str = "FALCONE_CATALOG_PATH";

// --- Notices ---

pub const MSG_SELECTION_LIMIT: &str = "Please unselect one and select a new planet.";

pub const MSG_OUT_OF_RANGE: &str = "The vehicle chosen cannot travel to this planet.";

pub const MSG_NOT_SELECTED: &str = "This planet has not been chosen for exploration.";

pub const MSG_INCOMPLETE: &str =
    "Please choose 4 planets & assign appropriate vehicles to them to proceed.";

pub const MSG_FALLBACK: &str = "No token available. Mock implementation kicks in.";

pub const MSG_UNKNOWN_LOCATION: &str = "That planet is not part of the catalog.";

pub const MSG_UNKNOWN_UNIT: &str = "That vehicle is not part of the fleet.";

pub const MSG_UNIT_UNAVAILABLE: &str = "This vehicle is already on its way to another planet.";
