//! Common types for the game core: cells, coordinates, sides, shot outcomes and errors.

use core::fmt;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Ship,
    Miss,
    Hit,
}

impl Cell {
    /// `true` once the cell has been fired upon.
    pub fn is_tried(self) -> bool {
        matches!(self, Cell::Miss | Cell::Hit)
    }
}

/// Column (`x`) and row (`y`) of a cell, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // letter column, 1-based row: (1, 3) -> B4
        if self.x < 26 {
            write!(f, "{}{}", (b'A' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    /// The other participant.
    pub fn opposite(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    Miss,
    Hit,
    /// The cell was already a Miss or a Hit; nothing changed.
    AlreadyTried,
}

/// Lifecycle of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Placement,
    Battle,
    Finished,
}

/// Why a ship placement was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Part of the ship would lie outside the board.
    OutOfBounds,
    /// The ship would overlap or touch (including diagonally) another ship.
    Touching,
    /// No ships of this length remain to be placed.
    NoShipsOfLength(usize),
}

/// Errors returned by board and turn controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Placement request rejected; nothing was mutated.
    InvalidPlacement(PlacementError),
    /// Operation not valid in the current phase.
    WrongPhase { expected: Phase, actual: Phase },
    /// Attack requested by the side not holding the turn.
    NotYourTurn,
    /// Target cell was already fired upon.
    AlreadyTargeted,
    /// Coordinate outside the board.
    OutOfBounds,
    /// Random placement and fallback scan both failed to find a slot.
    UnableToPlaceShip,
    /// Every cell of the target board has already been tried.
    NoTargetsLeft,
    /// Rejected configuration value.
    InvalidConfig(&'static str),
}

impl From<PlacementError> for GameError {
    fn from(err: PlacementError) -> Self {
        GameError::InvalidPlacement(err)
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "ship would extend past the board edge"),
            PlacementError::Touching => write!(f, "ship would touch another ship"),
            PlacementError::NoShipsOfLength(len) => {
                write!(f, "no ships of length {} left to place", len)
            }
        }
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidPlacement(e) => write!(f, "Invalid placement: {}", e),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "Operation requires {:?} phase, game is in {:?}", expected, actual)
            }
            GameError::NotYourTurn => write!(f, "It is not your turn"),
            GameError::AlreadyTargeted => write!(f, "Cell was already targeted"),
            GameError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::NoTargetsLeft => write!(f, "No untried cells left to target"),
            GameError::InvalidConfig(reason) => write!(f, "Invalid configuration: {}", reason),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
