//! Simulation worker that owns the authoritative [`GameState`].
//!
//! Receives commands from [`crate::RuntimeHandle`] and the pursuit worker,
//! executes actions via [`GameEngine`], and publishes [`Event`]s. Because the
//! state lives on this single task and commands arrive over one channel,
//! hunter input and wolf ticks can never interleave mid-mutation.
use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use wolfhunt_core::{Action, ExecutionOutcome, GameEngine, GameEnv, GameState, RngOracle};

use crate::error::{Result, RuntimeError};
use crate::events::Event;

/// Commands accepted by the simulation worker.
pub enum Command {
    /// Execute an action and reply with the engine's verdict.
    ExecuteAction {
        action: Action,
        reply: oneshot::Sender<Result<ExecutionOutcome>>,
    },
    /// Read-only snapshot of the current state.
    QueryState { reply: oneshot::Sender<GameState> },
}

/// Background task processing gameplay commands.
pub struct SimulationWorker {
    state: GameState,
    rng: Box<dyn RngOracle>,
    command_rx: mpsc::Receiver<Command>,
    event_tx: broadcast::Sender<Event>,
}

impl SimulationWorker {
    pub fn new(
        state: GameState,
        rng: Box<dyn RngOracle>,
        command_rx: mpsc::Receiver<Command>,
        event_tx: broadcast::Sender<Event>,
    ) -> Self {
        Self {
            state,
            rng,
            command_rx,
            event_tx,
        }
    }

    /// Main worker loop; exits when every command sender is gone.
    pub async fn run(mut self) {
        while let Some(command) = self.command_rx.recv().await {
            self.handle_command(command);
        }
        debug!("simulation worker stopping (command channel closed)");
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::ExecuteAction { action, reply } => {
                let result = self.execute(action);
                if reply.send(result).is_err() {
                    debug!("execute reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(self.state.clone()).is_err() {
                    debug!("query reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn execute(&mut self, action: Action) -> Result<ExecutionOutcome> {
        let env = GameEnv::new(self.rng.as_ref());
        let execution = GameEngine::new(&mut self.state).execute(&env, &action);

        match execution {
            Ok(outcome) => {
                // A send error only means nobody is subscribed right now.
                let _ = self.event_tx.send(Event::ActionExecuted {
                    action,
                    result: outcome.result.clone(),
                    state: Box::new(self.state.clone()),
                });
                if outcome.outcome.is_terminal() {
                    info!(outcome = ?outcome.outcome, "hunt finished");
                }
                Ok(outcome)
            }
            Err(error) => {
                debug!(%error, ?action, "action rejected");
                let _ = self.event_tx.send(Event::ActionRejected {
                    action,
                    error: error.to_string(),
                });
                Err(RuntimeError::Action(error))
            }
        }
    }
}
