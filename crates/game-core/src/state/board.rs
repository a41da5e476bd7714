//! Cell-level view of the board.
//!
//! The board stores one [`Cell`] tag per grid square. Entity coordinates are
//! authoritative and live on [`super::GameState`]; the board mirrors them so
//! the presentation layer can render a snapshot without chasing positions.
use super::types::{Entity, Position};

/// Occupancy tag for a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Wolf,
    Hunter,
    SafeZone,
}

impl From<Entity> for Cell {
    fn from(entity: Entity) -> Self {
        match entity {
            Entity::Hunter => Cell::Hunter,
            Entity::Wolf => Cell::Wolf,
            Entity::SafeZone => Cell::SafeZone,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfBounds { position: Position, size: i32 },
}

/// Fixed-size square grid of [`Cell`] tags, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    size: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: i32) -> Self {
        let side = size.max(1);
        Self {
            size: side,
            cells: vec![Cell::Empty; (side * side) as usize],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    /// Cell tag at `position`, or `None` outside the board.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.in_bounds(position)
            .then(|| self.cells[self.index(position)])
    }

    /// True when `position` is in bounds and unoccupied.
    pub fn is_empty(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Empty)
    }

    /// Writes the entity's tag at `position`. The caller is responsible for
    /// clearing the entity's previous cell first.
    pub fn place(&mut self, entity: Entity, position: Position) -> Result<(), BoardError> {
        let index = self.checked_index(position)?;
        self.cells[index] = entity.into();
        Ok(())
    }

    /// Resets the cell at `position` to empty.
    pub fn clear(&mut self, position: Position) -> Result<(), BoardError> {
        let index = self.checked_index(position)?;
        self.cells[index] = Cell::Empty;
        Ok(())
    }

    /// Number of cells currently holding `cell`. Used by invariant checks.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Iterates rows top to bottom, each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size as usize)
    }

    fn index(&self, position: Position) -> usize {
        (position.y * self.size + position.x) as usize
    }

    fn checked_index(&self, position: Position) -> Result<usize, BoardError> {
        if !self.in_bounds(position) {
            return Err(BoardError::OutOfBounds {
                position,
                size: self.size,
            });
        }
        Ok(self.index(position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(10);
        assert_eq!(board.count(Cell::Empty), 100);
        assert!(board.is_empty(Position::new(0, 0)));
        assert!(board.is_empty(Position::new(9, 9)));
    }

    #[test]
    fn place_and_clear_round_trip() {
        let mut board = Board::new(10);
        let pos = Position::new(3, 4);

        board.place(Entity::Wolf, pos).unwrap();
        assert_eq!(board.cell(pos), Some(Cell::Wolf));
        assert!(!board.is_empty(pos));

        board.clear(pos).unwrap();
        assert!(board.is_empty(pos));
    }

    #[test]
    fn place_out_of_bounds_fails() {
        let mut board = Board::new(10);
        for pos in [
            Position::new(-1, 0),
            Position::new(0, -1),
            Position::new(10, 0),
            Position::new(0, 10),
        ] {
            assert!(matches!(
                board.place(Entity::Hunter, pos),
                Err(BoardError::OutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn out_of_bounds_queries_are_safe() {
        let board = Board::new(10);
        assert!(!board.in_bounds(Position::new(10, 3)));
        assert!(!board.is_empty(Position::new(-5, -5)));
        assert_eq!(board.cell(Position::new(42, 0)), None);
    }
}
