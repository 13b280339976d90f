//! Single-worker FIFO front for the engine.

use crate::Action;
use crate::CapabilityDescriptor;
use crate::SecurityEngine;
use std::sync::mpsc;
use std::thread;
use std::thread::JoinHandle;
use tracing::debug;
use tracing::warn;
use zz_core::EngineError;
use zz_core::EngineResult;
use zz_policy::SecurityLevel;

enum Command {
    SetEnabled(bool),
    SetLevel(SecurityLevel),
    AddTracker(String),
    RemoveTracker(String),
    ListTrackers {
        reply: mpsc::Sender<Vec<String>>,
    },
    Apply {
        url: String,
        capabilities: CapabilityDescriptor,
        reply: mpsc::Sender<Vec<Action>>,
    },
    Shutdown,
}

/// Handle to a dedicated worker thread that owns a [`SecurityEngine`].
///
/// Commands run strictly in submission order, so an `apply_security`
/// submitted after `set_level` observes the new level. The handle is the
/// engine's lifecycle owner: [`EngineWorker::dispose`] is idempotent and
/// dropping the handle disposes implicitly.
#[derive(Debug)]
pub struct EngineWorker {
    tx: Option<mpsc::Sender<Command>>,
    join: Option<JoinHandle<()>>,
}

impl EngineWorker {
    /// Spawns the worker thread with a fresh [`SecurityEngine`].
    pub fn spawn() -> EngineResult<Self> {
        let (tx, rx) = mpsc::channel();

        let join = thread::Builder::new()
            .name("zz-security-worker".to_owned())
            .spawn(move || run_worker(rx))
            .map_err(|error| {
                EngineError::new(
                    "engine.worker_spawn_failed",
                    format!("failed to spawn security worker thread: {error}"),
                )
            })?;

        Ok(Self {
            tx: Some(tx),
            join: Some(join),
        })
    }

    pub fn set_enabled(&self, enabled: bool) -> EngineResult<()> {
        self.send(Command::SetEnabled(enabled))
    }

    pub fn set_level(&self, level: SecurityLevel) -> EngineResult<()> {
        self.send(Command::SetLevel(level))
    }

    pub fn add_blocked_tracker(&self, domain: &str) -> EngineResult<()> {
        self.send(Command::AddTracker(domain.to_owned()))
    }

    pub fn remove_blocked_tracker(&self, domain: &str) -> EngineResult<()> {
        self.send(Command::RemoveTracker(domain.to_owned()))
    }

    pub fn blocked_trackers(&self) -> EngineResult<Vec<String>> {
        let (reply, rx) = mpsc::channel();
        self.send(Command::ListTrackers { reply })?;
        recv_reply(&rx)
    }

    /// Queues policy application and waits for the action list.
    pub fn apply_security(
        &self,
        url: &str,
        capabilities: &CapabilityDescriptor,
    ) -> EngineResult<Vec<Action>> {
        let (reply, rx) = mpsc::channel();
        self.send(Command::Apply {
            url: url.to_owned(),
            capabilities: *capabilities,
            reply,
        })?;
        recv_reply(&rx)
    }

    /// Stops the worker and joins its thread. Safe to call repeatedly;
    /// later calls are no-ops.
    pub fn dispose(&mut self) {
        if let Some(tx) = self.tx.take() {
            // The worker may already be gone; drop the handle regardless.
            let _ = tx.send(Command::Shutdown);
        }

        if let Some(join) = self.join.take() {
            if join.join().is_err() {
                warn!("security worker thread panicked during shutdown");
            }
        }
    }

    fn send(&self, command: Command) -> EngineResult<()> {
        let tx = self.tx.as_ref().ok_or_else(|| {
            EngineError::new("engine.worker_disposed", "security worker was disposed")
        })?;

        tx.send(command).map_err(|_| {
            EngineError::new(
                "engine.worker_disposed",
                "security worker stopped accepting commands",
            )
        })
    }
}

impl Drop for EngineWorker {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn run_worker(rx: mpsc::Receiver<Command>) {
    let mut engine = SecurityEngine::new();

    while let Ok(command) = rx.recv() {
        match command {
            Command::SetEnabled(enabled) => engine.set_enabled(enabled),
            Command::SetLevel(level) => engine.set_level(level),
            Command::AddTracker(domain) => engine.add_blocked_tracker(&domain),
            Command::RemoveTracker(domain) => engine.remove_blocked_tracker(&domain),
            Command::ListTrackers { reply } => {
                if reply.send(engine.blocked_trackers()).is_err() {
                    warn!("tracker-list reply receiver dropped");
                }
            }
            Command::Apply {
                url,
                capabilities,
                reply,
            } => {
                let actions = engine.apply_security(&url, &capabilities);
                if reply.send(actions).is_err() {
                    warn!(url = %url, "apply-security reply receiver dropped");
                }
            }
            Command::Shutdown => break,
        }
    }

    debug!("security worker stopped");
}

fn recv_reply<T>(rx: &mpsc::Receiver<T>) -> EngineResult<T> {
    rx.recv().map_err(|_| {
        EngineError::new(
            "engine.worker_reply_lost",
            "security worker dropped the reply channel",
        )
    })
}
