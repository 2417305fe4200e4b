//! Commonly used types and utilities for ease of import.

pub use crate::{
    Coord, GameConfig, GameError, InputEvent, OpponentPolicy, Orientation, Phase, Placement,
    RandomPolicy, ShotOutcome, Side, TurnController,
};

#[cfg(feature = "std")]
pub use crate::cli::{StdinInput, TerminalRenderer};
#[cfg(feature = "std")]
pub use crate::driver::{run_game, InputSource, Renderer};
