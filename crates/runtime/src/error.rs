//! Unified error types surfaced by the runtime API.
use thiserror::Error;
use tokio::sync::oneshot;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The engine rejected the action; the state is untouched.
    #[error(transparent)]
    Action(#[from] wolfhunt_core::ExecuteError),

    #[error("simulation worker command channel closed")]
    CommandChannelClosed,

    #[error("simulation worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// True when the error only means the hunt is already decided.
    pub fn is_game_finished(&self) -> bool {
        matches!(
            self,
            RuntimeError::Action(wolfhunt_core::ExecuteError::GameFinished { .. })
        )
    }
}
