//! Authoritative game state representation.
//!
//! This module owns the board, the entity coordinates, and the outcome flag.
//! Runtime layers clone or query this state but mutate it exclusively through
//! the engine.
pub mod board;
pub mod types;

pub use board::{Board, BoardError, Cell};
pub use types::{Entity, Outcome, Position};

use crate::config::GameConfig;
use crate::env::{RngOracle, compute_seed};

/// Canonical snapshot of the hunt.
///
/// Invariant: `board` always mirrors the three coordinate fields, with each
/// entity tagged on exactly one cell, except that a terminal cell may be
/// overdrawn by the entity that ended the game on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed fixed at initialization; combined with `nonce` to derive a
    /// fresh seed for every roll.
    pub game_seed: u64,
    /// Action sequence number, incremented by the engine per executed action.
    pub nonce: u64,
    pub board: Board,
    pub hunter_pos: Position,
    pub wolf_pos: Position,
    pub safe_zone_pos: Position,
    /// Shots the hunter still has.
    pub bullets: u8,
    pub outcome: Outcome,
}

/// Errors from explicit (non-random) state construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("{entity} placement failed: {source}")]
    OutOfBounds {
        entity: Entity,
        source: BoardError,
    },

    #[error("{entity} overlaps another entity at {position}")]
    Overlapping { entity: Entity, position: Position },
}

impl GameState {
    /// Generates a fresh state with randomized non-colliding placement.
    ///
    /// The hunter lands uniformly at random; wolf and safe zone resample
    /// until they find an empty cell, matching the original rules. The board
    /// is small, so retry counts stay tiny in practice.
    pub fn generate(config: &GameConfig, game_seed: u64, rng: &dyn RngOracle) -> Self {
        let mut board = Board::new(config.grid_size.max(GameConfig::MIN_GRID_SIZE));
        let size = board.size();

        let hunter_pos = sample_position(rng, game_seed, Entity::Hunter, 0, size);
        board
            .place(Entity::Hunter, hunter_pos)
            .expect("sampled position is in bounds");

        let wolf_pos = place_on_empty(&mut board, rng, game_seed, Entity::Wolf, size);
        let safe_zone_pos = place_on_empty(&mut board, rng, game_seed, Entity::SafeZone, size);

        Self {
            game_seed,
            nonce: 0,
            board,
            hunter_pos,
            wolf_pos,
            safe_zone_pos,
            bullets: config.starting_bullets,
            outcome: Outcome::Ongoing,
        }
    }

    /// Builds a state from explicit coordinates. Scenario and test entry
    /// point; rejects out-of-bounds or overlapping placements.
    pub fn from_positions(
        config: &GameConfig,
        game_seed: u64,
        hunter_pos: Position,
        wolf_pos: Position,
        safe_zone_pos: Position,
    ) -> Result<Self, PlacementError> {
        let mut board = Board::new(config.grid_size);

        for (entity, position) in [
            (Entity::Hunter, hunter_pos),
            (Entity::Wolf, wolf_pos),
            (Entity::SafeZone, safe_zone_pos),
        ] {
            if board.in_bounds(position) && !board.is_empty(position) {
                return Err(PlacementError::Overlapping { entity, position });
            }
            board
                .place(entity, position)
                .map_err(|source| PlacementError::OutOfBounds { entity, source })?;
        }

        Ok(Self {
            game_seed,
            nonce: 0,
            board,
            hunter_pos,
            wolf_pos,
            safe_zone_pos,
            bullets: config.starting_bullets,
            outcome: Outcome::Ongoing,
        })
    }

    pub fn grid_size(&self) -> i32 {
        self.board.size()
    }

    /// True once a terminal outcome has been reached.
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn position_of(&self, entity: Entity) -> Position {
        match entity {
            Entity::Hunter => self.hunter_pos,
            Entity::Wolf => self.wolf_pos,
            Entity::SafeZone => self.safe_zone_pos,
        }
    }
}

/// Uniform cell sample for `entity`, one RNG context per axis per attempt.
fn sample_position(
    rng: &dyn RngOracle,
    game_seed: u64,
    entity: Entity,
    attempt: u32,
    size: i32,
) -> Position {
    let x = rng.index(compute_seed(game_seed, 0, entity.id(), attempt * 2), size);
    let y = rng.index(
        compute_seed(game_seed, 0, entity.id(), attempt * 2 + 1),
        size,
    );
    Position::new(x, y)
}

/// Retry-until-empty sampling, then place.
fn place_on_empty(
    board: &mut Board,
    rng: &dyn RngOracle,
    game_seed: u64,
    entity: Entity,
    size: i32,
) -> Position {
    let mut attempt = 0;
    loop {
        let position = sample_position(rng, game_seed, entity, attempt, size);
        if board.is_empty(position) {
            board
                .place(entity, position)
                .expect("sampled position is in bounds");
            return position;
        }
        attempt += 1;
    }
}
