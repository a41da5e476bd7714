/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Side length of the square board, in cells.
    pub grid_size: i32,
    /// Bullets the hunter starts the hunt with.
    pub starting_bullets: u8,
}

impl GameConfig {
    pub const DEFAULT_GRID_SIZE: i32 = 10;
    pub const DEFAULT_STARTING_BULLETS: u8 = 2;
    /// Smallest board that can host three distinct entities.
    pub const MIN_GRID_SIZE: i32 = 2;

    pub fn new() -> Self {
        Self {
            grid_size: Self::DEFAULT_GRID_SIZE,
            starting_bullets: Self::DEFAULT_STARTING_BULLETS,
        }
    }

    pub fn with_grid_size(grid_size: i32) -> Self {
        Self {
            grid_size,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
