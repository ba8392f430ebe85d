//! Result presentation seam between the session and the frontend.

use crossbeam_channel::Sender;

use falcone_core::events::Notice;
use falcone_core::search::SearchResult;
use falcone_core::state::SessionSnapshot;

use crate::state::SessionEvent;

/// Receives what the session produces. Rendering and navigation live behind it.
pub trait Presenter {
    /// A search resolved; typically routes to a results view.
    fn present_result(&mut self, result: &SearchResult);
    /// A notice for the player's notification area.
    fn notify(&mut self, notice: &Notice);
    /// The session state after a command.
    fn show_snapshot(&mut self, _snapshot: &SessionSnapshot) {}
}

/// Forwards everything as [`SessionEvent`]s on a channel.
pub struct ChannelPresenter {
    tx: Sender<SessionEvent>,
}

impl ChannelPresenter {
    pub fn new(tx: Sender<SessionEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, event: SessionEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!(target: "falcone::presenter", "presenter.receiver_gone");
        }
    }
}

impl Presenter for ChannelPresenter {
    fn present_result(&mut self, result: &SearchResult) {
        self.send(SessionEvent::Result(result.clone()));
    }

    fn notify(&mut self, notice: &Notice) {
        self.send(SessionEvent::Notice(notice.clone()));
    }

    fn show_snapshot(&mut self, snapshot: &SessionSnapshot) {
        self.send(SessionEvent::Snapshot(snapshot.clone()));
    }
}
