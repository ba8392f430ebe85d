//! Expands unit types into individually addressable unit instances.

use falcone_core::types::{UnitInstance, UnitType};

/// `total_no` available instances per type, in catalog order, ids `<name>_1..`.
pub fn expand_inventory(unit_types: &[UnitType]) -> Vec<UnitInstance> {
    unit_types
        .iter()
        .flat_map(|unit_type| {
            (1..=unit_type.total_no).map(move |ordinal| UnitInstance::from_type(unit_type, ordinal))
        })
        .collect()
}
