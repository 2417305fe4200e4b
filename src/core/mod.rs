//! Game core: rules and state machine (no_std compatible)
//!
//! Everything here builds on `alloc` alone: fleet planning, board grids with
//! placement and shot rules, and the turn controller sequencing a game.

pub mod board;
pub mod common;
pub mod config;
pub mod fleet;
pub mod game;
pub mod input;
pub mod ship;

// Re-export commonly used types
pub use board::{Board, BoardState, BoardView, FogView};
pub use common::{Cell, Coord, GameError, Phase, PlacementError, ShotOutcome, Side};
pub use config::*;
pub use fleet::{max_ship_length, plan_fleet, plan_fleet_with_budget, Fleet};
pub use game::{GameSnapshot, Shot, TurnController};
pub use input::{InputEvent, InputOutcome, MouseButton};
pub use ship::{Orientation, Placement};
