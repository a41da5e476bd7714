//! Deterministic chase logic shared by the runtime and the client.
//!
//! `wolfhunt-core` defines the canonical rules of the hunt: the board, the
//! hunter's moves and shots, the wolf's pursuit, and the terminal outcomes.
//! All state mutation flows through [`engine::GameEngine`], and supporting
//! crates depend on the types re-exported here.
pub mod action;
pub mod config;
pub mod engine;
pub mod env;
pub mod state;

pub use action::{
    Action, ActionResult, ActionTransition, Direction, MoveAction, MoveError, PursuitAction,
    PursuitError, ShootAction, ShootError, VOLLEY_TRIALS, VolleyReport,
};
pub use config::GameConfig;
pub use engine::{
    ExecuteError, ExecutionOutcome, GameEngine, TransitionPhase, TransitionPhaseError,
};
pub use env::{GameEnv, PcgRng, RngOracle, compute_seed};
pub use state::{Board, BoardError, Cell, Entity, GameState, Outcome, PlacementError, Position};
