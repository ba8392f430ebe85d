//! Session thread. Owns the engine and processes commands one at a time.
//!
//! The engine is created inside the thread so it has a single owner.
//! Commands arrive on a crossbeam channel, reset signals from outside
//! publishers on a [`ResetSubscription`]; `select!` waits on both. The two
//! are not ordered against each other, so a reset that must follow earlier
//! commands is sent as `PlayerCommand::Reset`. After every command the
//! session flushes notices, presents search results, and publishes a snapshot.

use std::io;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{select, unbounded, Receiver, Sender};
use thiserror::Error;

use falcone_core::catalog::Catalog;
use falcone_core::commands::PlayerCommand;
use falcone_core::state::SessionSnapshot;
use falcone_engine::engine::{CommandOutcome, EngineConfig, MissionEngine};
use falcone_engine::systems::search::{OfflineBackend, SearchService, TokenProvider};

use crate::presenter::Presenter;
use crate::reset::{ResetChannel, ResetSubscription};
use crate::state::SessionCommand;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub engine: EngineConfig,
    pub catalog: Catalog,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            catalog: Catalog::builtin(),
        }
    }
}

/// External collaborators the session talks to.
pub struct Collaborators {
    pub tokens: Box<dyn TokenProvider + Send>,
    pub service: Box<dyn SearchService + Send>,
    pub presenter: Box<dyn Presenter + Send>,
}

impl Collaborators {
    /// No search backend: every search resolves through the local draw.
    pub fn offline(presenter: Box<dyn Presenter + Send>) -> Self {
        Self {
            tokens: Box::new(OfflineBackend),
            service: Box::new(OfflineBackend),
            presenter,
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session has shut down")]
    Closed,
    #[error("session thread panicked")]
    Panicked,
}

/// Handle to a running session.
pub struct SessionHandle {
    commands: Sender<SessionCommand>,
    latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
    thread: Option<JoinHandle<()>>,
}

impl SessionHandle {
    /// Queue a player command.
    pub fn send(&self, command: PlayerCommand) -> Result<(), SessionError> {
        self.commands
            .send(SessionCommand::PlayerCommand(command))
            .map_err(|_| SessionError::Closed)
    }

    /// Latest published snapshot, for synchronous polling.
    pub fn latest_snapshot(&self) -> Option<SessionSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }

    /// Stop the session and wait for its thread to finish.
    pub fn shutdown(mut self) -> Result<(), SessionError> {
        let _ = self.commands.send(SessionCommand::Shutdown);
        match self.thread.take() {
            Some(thread) => thread.join().map_err(|_| SessionError::Panicked),
            None => Ok(()),
        }
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.commands.send(SessionCommand::Shutdown);
        }
    }
}

/// Spawn a session thread subscribed to `reset`.
pub fn spawn_session(
    config: SessionConfig,
    reset: &ResetChannel,
    collaborators: Collaborators,
) -> io::Result<SessionHandle> {
    let (cmd_tx, cmd_rx) = unbounded::<SessionCommand>();
    let subscription = reset.subscribe();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared_snapshot = Arc::clone(&latest_snapshot);

    let thread = thread::Builder::new()
        .name("falcone-session".into())
        .spawn(move || {
            let engine = MissionEngine::new(config.engine, &config.catalog);
            run_session(engine, cmd_rx, subscription, collaborators, &shared_snapshot);
        })?;

    Ok(SessionHandle {
        commands: cmd_tx,
        latest_snapshot,
        thread: Some(thread),
    })
}

/// The session loop. Runs until Shutdown or channel disconnect.
fn run_session(
    mut engine: MissionEngine,
    commands: Receiver<SessionCommand>,
    subscription: ResetSubscription,
    mut collaborators: Collaborators,
    latest_snapshot: &Mutex<Option<SessionSnapshot>>,
) {
    publish_snapshot(&engine, collaborators.presenter.as_mut(), latest_snapshot);

    loop {
        select! {
            recv(commands) -> message => match message {
                Ok(SessionCommand::PlayerCommand(command)) => {
                    handle_command(&mut engine, command, &mut collaborators);
                }
                Ok(SessionCommand::Shutdown) | Err(_) => break,
            },
            recv(subscription.receiver()) -> _ => {
                // Several queued signals collapse into one reset.
                subscription.drain();
                engine.reset();
            }
        }

        publish_snapshot(&engine, collaborators.presenter.as_mut(), latest_snapshot);
    }

    tracing::info!(target: "falcone::session", "session.stopped");
}

fn handle_command(
    engine: &mut MissionEngine,
    command: PlayerCommand,
    collaborators: &mut Collaborators,
) {
    let outcome = engine.apply(
        command,
        collaborators.tokens.as_mut(),
        collaborators.service.as_mut(),
    );

    for notice in engine.take_notices() {
        collaborators.presenter.notify(&notice);
    }

    match outcome {
        Ok(CommandOutcome::Searched(search)) => {
            collaborators.presenter.present_result(&search.result);
        }
        Ok(_) => {}
        Err(err) => {
            tracing::debug!(target: "falcone::session", error = %err, "command.failed");
        }
    }
}

fn publish_snapshot(
    engine: &MissionEngine,
    presenter: &mut dyn Presenter,
    latest_snapshot: &Mutex<Option<SessionSnapshot>>,
) {
    let snapshot = engine.snapshot();
    if let Ok(mut lock) = latest_snapshot.lock() {
        *lock = Some(snapshot.clone());
    }
    presenter.show_snapshot(&snapshot);
}
