//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! mutation, whether triggered by player input or the wolf's timer, flows
//! through [`GameEngine::execute`], which enforces the terminal-state freeze
//! and runs the three-phase transition for the action.

mod errors;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::{GameState, Outcome};

/// Complete outcome of a single action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// What the action did.
    pub result: ActionResult,
    /// Game outcome after the action; terminal values end the session.
    pub outcome: Outcome,
}

/// Reducer owning a mutable borrow of the state for one or more executions.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    /// Executes an action through its transition pipeline.
    ///
    /// A terminal state rejects everything with [`ExecuteError::GameFinished`]
    /// before any phase runs, so no entity moves and no bullet is spent once
    /// the hunt has ended. The nonce increments only on success.
    pub fn execute(
        &mut self,
        env: &GameEnv<'_>,
        action: &Action,
    ) -> Result<ExecutionOutcome, ExecuteError> {
        if self.state.is_over() {
            return Err(ExecuteError::GameFinished {
                outcome: self.state.outcome,
            });
        }

        let result = match action {
            Action::Move(move_action) => {
                run_transition(move_action, self.state, env).map_err(ExecuteError::Move)?
            }
            Action::Shoot(shoot_action) => {
                run_transition(shoot_action, self.state, env).map_err(ExecuteError::Shoot)?
            }
            Action::Pursue(pursuit_action) => {
                run_transition(pursuit_action, self.state, env).map_err(ExecuteError::Pursue)?
            }
        };

        self.state.nonce += 1;

        Ok(ExecutionOutcome {
            result,
            outcome: self.state.outcome,
        })
    }
}

/// Runs the three phases, tagging errors with the phase that produced them.
fn run_transition<T: ActionTransition>(
    action: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
) -> Result<ActionResult, TransitionPhaseError<T::Error>> {
    action
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = action
        .apply(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    action
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{Direction, MoveAction, PursuitAction, ShootAction};
    use crate::config::GameConfig;
    use crate::env::PcgRng;
    use crate::state::Position;

    fn running_state() -> GameState {
        GameState::from_positions(
            &GameConfig::default(),
            0,
            Position::new(1, 1),
            Position::new(8, 8),
            Position::new(5, 5),
        )
        .unwrap()
    }

    #[test]
    fn terminal_state_rejects_every_action() {
        for outcome in [
            Outcome::WolfCaughtHunter,
            Outcome::HunterReachedSafety,
            Outcome::HunterShotWolf,
        ] {
            let mut state = running_state();
            state.outcome = outcome;
            let before = state.clone();
            let env = GameEnv::new(&PcgRng);

            for action in [
                Action::Move(MoveAction::new(Direction::Down)),
                Action::Shoot(ShootAction),
                Action::Pursue(PursuitAction),
            ] {
                let err = GameEngine::new(&mut state).execute(&env, &action);
                assert!(matches!(err, Err(ExecuteError::GameFinished { .. })));
                assert_eq!(state, before, "state must stay frozen after {outcome:?}");
            }
        }
    }

    #[test]
    fn nonce_advances_per_executed_action() {
        let mut state = running_state();
        let env = GameEnv::new(&PcgRng);

        GameEngine::new(&mut state)
            .execute(&env, &Action::Move(MoveAction::new(Direction::Down)))
            .unwrap();
        GameEngine::new(&mut state)
            .execute(&env, &Action::Pursue(PursuitAction))
            .unwrap();
        assert_eq!(state.nonce, 2);
    }

    #[test]
    fn rejected_action_leaves_nonce_untouched() {
        let mut state = running_state();
        state.bullets = 0;
        let env = GameEnv::new(&PcgRng);

        let err = GameEngine::new(&mut state).execute(&env, &Action::Shoot(ShootAction));
        assert!(matches!(err, Err(ExecuteError::Shoot(_))));
        assert_eq!(state.nonce, 0);
    }
}
