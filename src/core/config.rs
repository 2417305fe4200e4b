use crate::core::common::GameError;
use crate::core::fleet::{plan_fleet_with_budget, Fleet};

pub const DEFAULT_BOARD_SIZE: usize = 8;
/// Largest supported board; every column keeps a single-letter label.
pub const MAX_BOARD_SIZE: usize = 26;
pub const DEFAULT_CELL_BUDGET_FRACTION: f64 = 0.25;
pub const DEFAULT_OPPONENT_MOVE_DELAY_MS: u64 = 500;
/// Random samples tried before falling back to a deterministic scan.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
/// Fresh starts allowed when an early ship boxes in a later one.
pub const PLACEMENT_RESTARTS: usize = 100;

/// Game configuration, fixed at start-up and passed to constructors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub board_size: usize,
    /// Share of the board's cells the planned fleet may cover.
    pub cell_budget_fraction: f64,
    /// Pause before each opponent shot; honoured by the driver loop only.
    pub opponent_move_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            cell_budget_fraction: DEFAULT_CELL_BUDGET_FRACTION,
            opponent_move_delay_ms: DEFAULT_OPPONENT_MOVE_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Default configuration on a board of `board_size`.
    pub fn with_board_size(board_size: usize) -> Self {
        Self {
            board_size,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 {
            return Err(GameError::InvalidConfig("board size must be at least 1"));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig("board size must be at most 26"));
        }
        if !(self.cell_budget_fraction > 0.0 && self.cell_budget_fraction <= 1.0) {
            return Err(GameError::InvalidConfig(
                "cell budget fraction must be in (0, 1]",
            ));
        }
        Ok(())
    }

    /// Fleet planned for this board size and budget.
    pub fn fleet(&self) -> Fleet {
        plan_fleet_with_budget(self.board_size, self.cell_budget_fraction)
    }
}
