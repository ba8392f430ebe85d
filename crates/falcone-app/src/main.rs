//! Headless FALCONE frontend.
//!
//! Reads one JSON `PlayerCommand` per line from stdin and writes session
//! events as JSON lines to stdout. Every command, `{"type":"Reset"}` included,
//! goes through the session's command queue so input order is kept. Logs go
//! to stderr, filtered by `RUST_LOG`.

use std::io::{self, BufRead, Write};
use std::thread;

use crossbeam_channel::unbounded;
use tracing::{info, warn};

use falcone_app::presenter::ChannelPresenter;
use falcone_app::reset::ResetChannel;
use falcone_app::session::{spawn_session, Collaborators, SessionConfig};
use falcone_app::state::SessionEvent;
use falcone_core::catalog::load_catalog_from_env;
use falcone_core::commands::PlayerCommand;
use falcone_core::constants::DEFAULT_SEED;
use falcone_engine::EngineConfig;

const SEED_ENV: &str = "FALCONE_SEED";

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed = std::env::var(SEED_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let config = SessionConfig {
        engine: EngineConfig { seed },
        catalog: load_catalog_from_env(),
    };

    let reset = ResetChannel::new();
    let (event_tx, event_rx) = unbounded::<SessionEvent>();
    let collaborators = Collaborators::offline(Box::new(ChannelPresenter::new(event_tx)));
    let session = spawn_session(config, &reset, collaborators)?;

    let printer = thread::Builder::new()
        .name("falcone-printer".into())
        .spawn(move || -> io::Result<()> {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for event in event_rx {
                serde_json::to_writer(&mut out, &event)?;
                writeln!(out)?;
            }
            out.flush()
        })?;

    info!(target: "falcone::app", seed, "FALCONE session ready");

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(&line) {
            Ok(command) => {
                if session.send(command).is_err() {
                    warn!(target: "falcone::app", "session closed, dropping input");
                    break;
                }
            }
            Err(err) => {
                warn!(target: "falcone::app", error = %err, "command.parse_failed");
            }
        }
    }

    if session.shutdown().is_err() {
        warn!(target: "falcone::app", "session thread panicked");
    }
    match printer.join() {
        Ok(result) => result,
        Err(_) => Err(io::Error::new(io::ErrorKind::Other, "printer thread panicked")),
    }
}
