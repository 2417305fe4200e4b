//! Opponent move policies.
//!
//! A policy decides where the computer puts its ships and where it fires
//! next. The turn controller only talks to the [`OpponentPolicy`] trait, so
//! scripted test doubles or smarter strategies slot in without touching it.

use crate::core::{
    board::{Board, FogView},
    common::{Coord, GameError, ShotOutcome},
    fleet::Fleet,
};
use rand::rngs::SmallRng;

/// Interface implemented by computer opponents.
pub trait OpponentPolicy: Send {
    /// Place every ship of `fleet` onto `board`.
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), GameError>;

    /// Choose the next cell to fire at. `target` hides ships that have not
    /// been hit; the returned cell must not have been tried yet.
    fn choose_target(&mut self, rng: &mut SmallRng, target: FogView<'_>)
        -> Result<Coord, GameError>;

    /// Inform the policy of the outcome of its last shot.
    fn handle_shot_result(&mut self, _target: Coord, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::RandomPolicy;
