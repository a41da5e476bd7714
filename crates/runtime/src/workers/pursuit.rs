//! Pursuit worker driving the wolf on a fixed timer.
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Duration, MissedTickBehavior};
use tracing::{debug, warn};

use wolfhunt_core::{Action, PursuitAction};

use crate::workers::Command;

/// Background task submitting one wolf step per tick.
///
/// The first step fires immediately: the wolf moves as soon as the hunt
/// begins. The worker stops as soon as the game reaches a terminal outcome or
/// the runtime shuts down; no tick is ever scheduled against a finished hunt.
pub struct PursuitWorker {
    command_tx: mpsc::Sender<Command>,
    shutdown_rx: watch::Receiver<bool>,
    tick_interval: Duration,
}

impl PursuitWorker {
    pub fn new(
        command_tx: mpsc::Sender<Command>,
        shutdown_rx: watch::Receiver<bool>,
        tick_interval: Duration,
    ) -> Self {
        Self {
            command_tx,
            shutdown_rx,
            tick_interval,
        }
    }

    pub async fn run(mut self) {
        let mut ticker = time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if self.step().await {
                        break;
                    }
                }
                _ = self.shutdown_rx.changed() => {
                    debug!("pursuit worker stopping (shutdown)");
                    break;
                }
            }
        }
    }

    /// Submits one pursuit step. Returns true when the worker should stop.
    async fn step(&self) -> bool {
        let (reply_tx, reply_rx) = oneshot::channel();
        let command = Command::ExecuteAction {
            action: Action::Pursue(PursuitAction),
            reply: reply_tx,
        };

        if self.command_tx.send(command).await.is_err() {
            debug!("pursuit worker stopping (command channel closed)");
            return true;
        }

        match reply_rx.await {
            Ok(Ok(outcome)) => {
                if outcome.outcome.is_terminal() {
                    debug!(outcome = ?outcome.outcome, "pursuit worker stopping (hunt finished)");
                    return true;
                }
                false
            }
            Ok(Err(error)) => {
                // Rejection here means the hunter ended the game between
                // ticks, or the board invariant broke.
                if error.is_game_finished() {
                    debug!("pursuit worker stopping (hunt finished)");
                } else {
                    warn!(%error, "pursuit step failed");
                }
                true
            }
            Err(_) => {
                debug!("pursuit worker stopping (reply channel closed)");
                true
            }
        }
    }
}
