use crate::action::{ActionResult, ActionTransition};
use crate::env::GameEnv;
use crate::state::{Cell, Entity, GameState, Outcome, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("destination {destination} is out of bounds")]
    OutOfBounds { destination: Position },

    #[error("destination {destination} is occupied by the wolf")]
    Blocked { destination: Position },

    #[error("board desync at {position}")]
    Desync { position: Position },
}

/// One-cell directional step on the board. `Up` decreases the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Hunter movement intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: Direction,
}

impl MoveAction {
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    fn destination_from(&self, origin: Position) -> Position {
        let (dx, dy) = self.direction.delta();
        origin.offset(dx, dy)
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let destination = self.destination_from(state.hunter_pos);

        if !state.board.in_bounds(destination) {
            return Err(MoveError::OutOfBounds { destination });
        }
        // Walking onto the wolf's cell is disallowed; the catch only happens
        // on the wolf's own tick.
        if state.board.cell(destination) == Some(Cell::Wolf) {
            return Err(MoveError::Blocked { destination });
        }

        Ok(())
    }

    fn apply(&self, state: &mut GameState, _env: &GameEnv<'_>) -> Result<ActionResult, Self::Error> {
        let origin = state.hunter_pos;
        let destination = self.destination_from(origin);

        state
            .board
            .clear(origin)
            .map_err(|_| MoveError::Desync { position: origin })?;
        state
            .board
            .place(Entity::Hunter, destination)
            .map_err(|_| MoveError::Desync {
                position: destination,
            })?;
        state.hunter_pos = destination;

        if state.hunter_pos == state.safe_zone_pos {
            state.outcome = Outcome::HunterReachedSafety;
        }

        Ok(ActionResult::Moved {
            from: origin,
            to: destination,
        })
    }

    fn post_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        let present = state.board.cell(state.hunter_pos) == Some(Cell::Hunter);
        if present && state.board.count(Cell::Hunter) == 1 {
            Ok(())
        } else {
            Err(MoveError::Desync {
                position: state.hunter_pos,
            })
        }
    }
}
