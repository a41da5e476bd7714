use crate::action::{ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::{Cell, Entity, GameState, Outcome, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PursuitError {
    #[error("board desync at {position}")]
    Desync { position: Position },
}

/// One greedy wolf step toward the hunter.
///
/// Strict axis priority: the vertical gap closes before the horizontal one,
/// and only one axis moves per tick. A co-located wolf does not move; that is
/// the catch condition itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuitAction;

impl PursuitAction {
    fn destination(state: &GameState) -> Position {
        let wolf = state.wolf_pos;
        let hunter = state.hunter_pos;

        if hunter.y > wolf.y {
            wolf.offset(0, 1)
        } else if hunter.y < wolf.y {
            wolf.offset(0, -1)
        } else if hunter.x > wolf.x {
            wolf.offset(1, 0)
        } else if hunter.x < wolf.x {
            wolf.offset(-1, 0)
        } else {
            wolf
        }
    }
}

impl ActionTransition for PursuitAction {
    type Error = PursuitError;

    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let origin = state.wolf_pos;
        let destination = Self::destination(state);

        // The wolf ignores occupancy: it may cross the safe zone freely and
        // stepping onto the hunter is the catch. Out-of-bounds steps are
        // skipped (cannot happen while chasing, but the rule is explicit).
        if destination != origin && state.board.in_bounds(destination) {
            if origin == state.safe_zone_pos {
                state
                    .board
                    .place(Entity::SafeZone, origin)
                    .map_err(|_| PursuitError::Desync { position: origin })?;
            } else {
                state
                    .board
                    .clear(origin)
                    .map_err(|_| PursuitError::Desync { position: origin })?;
            }
            state
                .board
                .place(Entity::Wolf, destination)
                .map_err(|_| PursuitError::Desync {
                    position: destination,
                })?;
            state.wolf_pos = destination;
        }

        if state.wolf_pos == state.hunter_pos {
            state.outcome = Outcome::WolfCaughtHunter;
        }

        Ok(ActionResult::Pursued {
            from: origin,
            to: state.wolf_pos,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let present = state.board.cell(state.wolf_pos) == Some(Cell::Wolf);
        if present && state.board.count(Cell::Wolf) == 1 {
            Ok(())
        } else {
            Err(PursuitError::Desync {
                position: state.wolf_pos,
            })
        }
    }
}
