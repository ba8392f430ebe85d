//! Payloads exchanged with the search service and handed to the presenter.

use serde::{Deserialize, Serialize};

use crate::enums::SearchStatus;

/// Opaque authorization token; forwarded, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(pub String);

/// Body submitted to the search service.
///
/// `vehicle_names[i]` is the unit type bound to `planet_names[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub token: Token,
    pub planet_names: Vec<String>,
    pub vehicle_names: Vec<String>,
}

/// Final search record, e.g. `{"location_name":"B","time_taken":4,"status":"success"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken: Option<u64>,
    pub status: SearchStatus,
}

impl SearchResult {
    pub fn success(location_name: impl Into<String>, time_taken: u64) -> Self {
        Self {
            location_name: Some(location_name.into()),
            time_taken: Some(time_taken),
            status: SearchStatus::Success,
        }
    }

    pub fn failure() -> Self {
        Self {
            location_name: None,
            time_taken: None,
            status: SearchStatus::Failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SearchStatus::Success
    }
}
