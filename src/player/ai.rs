use crate::core::{
    board::{Board, FogView},
    common::{Coord, GameError},
    config::{DEFAULT_MAX_ATTEMPTS, PLACEMENT_RESTARTS},
    fleet::Fleet,
};
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use super::OpponentPolicy;

/// Places ships at random and fires uniformly at random among untried cells.
#[derive(Debug, Clone, Copy)]
pub struct RandomPolicy {
    max_attempts: usize,
}

impl RandomPolicy {
    pub fn new() -> Self {
        Self::with_max_attempts(DEFAULT_MAX_ATTEMPTS)
    }

    /// Limit rejection sampling to `max_attempts` draws before falling back
    /// to a scan of the remaining cells.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        Self { max_attempts }
    }
}

impl RandomPolicy {
    fn place_all(
        &self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), GameError> {
        for (length, count) in fleet.iter() {
            for _ in 0..count {
                let placement = board.random_placement(rng, length, self.max_attempts)?;
                board.place(&placement);
            }
        }
        Ok(())
    }
}

impl Default for RandomPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl OpponentPolicy for RandomPolicy {
    fn place_fleet(
        &mut self,
        rng: &mut SmallRng,
        board: &mut Board,
        fleet: &Fleet,
    ) -> Result<(), GameError> {
        // Each start works on a copy so a dead end leaves `board` untouched.
        for _ in 0..PLACEMENT_RESTARTS {
            let mut trial = board.clone();
            if self.place_all(rng, &mut trial, fleet).is_ok() {
                *board = trial;
                return Ok(());
            }
        }
        log::warn!("gave up placing fleet {:?} after {} starts", fleet, PLACEMENT_RESTARTS);
        Err(GameError::UnableToPlaceShip)
    }

    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        target: FogView<'_>,
    ) -> Result<Coord, GameError> {
        let size = target.size();
        if size == 0 {
            return Err(GameError::NoTargetsLeft);
        }
        for _ in 0..self.max_attempts {
            let coord = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
            if target.is_untried(coord) {
                return Ok(coord);
            }
        }
        target
            .untried()
            .choose(rng)
            .copied()
            .ok_or(GameError::NoTargetsLeft)
    }
}
