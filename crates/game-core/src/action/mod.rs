//! Actions that mutate the game state.
//!
//! Every mutation is expressed as an action routed through the engine's
//! transition pipeline: `pre_validate`, then `apply`, then `post_validate`.
//! Validation failures leave the state untouched, which is how illegal moves
//! and empty-gun shots become silent no-ops at the presentation layer.
mod movement;
mod pursuit;
mod shoot;

pub use movement::{Direction, MoveAction, MoveError};
pub use pursuit::{PursuitAction, PursuitError};
pub use shoot::{ShootAction, ShootError, VOLLEY_TRIALS, VolleyReport};

use crate::env::GameEnv;
use crate::state::{Entity, GameState, Position};

/// Three-phase state transition implemented by every action.
pub trait ActionTransition {
    type Error;

    /// Checks the action against the current state without mutating it.
    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error>;

    /// Performs the mutation and reports what happened.
    fn apply(&self, state: &mut GameState, env: &GameEnv<'_>) -> Result<ActionResult, Self::Error>;

    /// Re-checks state invariants after the mutation.
    fn post_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), Self::Error>;
}

/// Union of all executable actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Move(MoveAction),
    Shoot(ShootAction),
    Pursue(PursuitAction),
}

impl Action {
    /// The entity performing the action.
    pub fn actor(&self) -> Entity {
        match self {
            Action::Move(_) | Action::Shoot(_) => Entity::Hunter,
            Action::Pursue(_) => Entity::Wolf,
        }
    }
}

/// What an executed action did, for event consumers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    /// The hunter moved.
    Moved { from: Position, to: Position },
    /// The hunter fired a volley.
    Volley(VolleyReport),
    /// The wolf took its pursuit step. `to == from` when it stayed put.
    Pursued { from: Position, to: Position },
}
