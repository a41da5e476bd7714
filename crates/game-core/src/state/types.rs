use std::fmt;

/// The three occupants tracked on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Hunter,
    Wolf,
    SafeZone,
}

impl Entity {
    /// Stable numeric identifier, used for RNG seed derivation.
    pub const fn id(self) -> u32 {
        match self {
            Entity::Hunter => 0,
            Entity::Wolf => 1,
            Entity::SafeZone => 2,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Entity::Hunter => "hunter",
            Entity::Wolf => "wolf",
            Entity::SafeZone => "safe zone",
        };
        write!(f, "{}", label)
    }
}

/// Discrete board position. `x` is the column, `y` the row; both count from
/// the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by the given deltas. No bounds check.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// How the hunt ended, if it has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[default]
    Ongoing,
    WolfCaughtHunter,
    HunterReachedSafety,
    HunterShotWolf,
}

impl Outcome {
    /// Terminal outcomes freeze the state; only `Ongoing` accepts actions.
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}
