//! Messages exchanged between the frontend and the session thread.

use serde::{Deserialize, Serialize};

use falcone_core::commands::PlayerCommand;
use falcone_core::events::Notice;
use falcone_core::search::SearchResult;
use falcone_core::state::SessionSnapshot;

/// Commands sent to the session thread.
#[derive(Debug)]
pub enum SessionCommand {
    /// A player command to forward to the engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the session thread gracefully.
    Shutdown,
}

/// Everything the session reports back to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    Result(SearchResult),
    Notice(Notice),
    Snapshot(SessionSnapshot),
}
