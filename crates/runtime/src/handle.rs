//! Cloneable façade for issuing commands to the runtime.
//!
//! [`RuntimeHandle`] hides the channel plumbing and offers async helpers for
//! submitting hunter actions, querying state, and streaming events.
use tokio::sync::{broadcast, mpsc, oneshot};

use wolfhunt_core::{Action, Direction, ExecutionOutcome, GameState, MoveAction, ShootAction};

use crate::error::{Result, RuntimeError};
use crate::events::Event;
use crate::workers::Command;

/// Client-facing handle to interact with the runtime.
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_tx: broadcast::Sender<Event>,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_tx: broadcast::Sender<Event>) -> Self {
        Self {
            command_tx,
            event_tx,
        }
    }

    /// Submits a one-cell hunter move.
    pub async fn move_hunter(&self, direction: Direction) -> Result<ExecutionOutcome> {
        self.execute_action(Action::Move(MoveAction::new(direction)))
            .await
    }

    /// Fires one volley.
    pub async fn shoot(&self) -> Result<ExecutionOutcome> {
        self.execute_action(Action::Shoot(ShootAction)).await
    }

    /// Executes an arbitrary action and waits for the engine's verdict.
    pub async fn execute_action(&self, action: Action) -> Result<ExecutionOutcome> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::ExecuteAction {
                action,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Queries the current game state (read-only snapshot).
    pub async fn query_state(&self) -> Result<GameState> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribes to the runtime event stream.
    pub fn subscribe_events(&self) -> broadcast::Receiver<Event> {
        self.event_tx.subscribe()
    }
}
