//! Fleet composition and the planner deriving it from the board size.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;

use crate::core::common::PlacementError;
use crate::core::config::DEFAULT_CELL_BUDGET_FRACTION;

/// Ship lengths mapped to the number of ships of that length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Fleet {
    counts: BTreeMap<usize, usize>,
}

impl Fleet {
    /// Build a fleet from `(length, count)` pairs. Zero lengths and zero
    /// counts are dropped; repeated lengths are summed.
    pub fn from_counts<I: IntoIterator<Item = (usize, usize)>>(counts: I) -> Self {
        let mut fleet = Fleet::default();
        for (length, count) in counts {
            if length > 0 && count > 0 {
                *fleet.counts.entry(length).or_insert(0) += count;
            }
        }
        fleet
    }

    /// Remaining count for `length` (zero if absent).
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// `(length, count)` pairs, largest length first. Lengths whose count
    /// dropped to zero during placement are still listed.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().rev().map(|(&len, &count)| (len, count))
    }

    /// Lengths that still have ships left, largest first.
    pub fn remaining_lengths(&self) -> Vec<usize> {
        self.iter()
            .filter(|&(_, count)| count > 0)
            .map(|(len, _)| len)
            .collect()
    }

    /// Largest length with a non-zero count.
    pub fn largest_remaining(&self) -> Option<usize> {
        self.iter().find(|&(_, count)| count > 0).map(|(len, _)| len)
    }

    /// Total cells covered by every ship in the fleet.
    pub fn total_cells(&self) -> usize {
        self.counts.iter().map(|(len, count)| len * count).sum()
    }

    /// Number of ships across all lengths.
    pub fn ship_count(&self) -> usize {
        self.counts.values().sum()
    }

    /// `true` when every count is zero.
    pub fn is_fully_placed(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    /// Take one ship of `length` off the fleet.
    pub fn decrement(&mut self, length: usize) -> Result<(), PlacementError> {
        match self.counts.get_mut(&length) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(PlacementError::NoShipsOfLength(length)),
        }
    }
}

/// Longest ship allowed on a board of `board_size`.
pub fn max_ship_length(board_size: usize) -> usize {
    if board_size <= 6 {
        2
    } else if board_size <= 8 {
        3
    } else {
        4
    }
}

/// Plan a fleet for `board_size` using the default 25% cell budget.
pub fn plan_fleet(board_size: usize) -> Fleet {
    plan_fleet_with_budget(board_size, DEFAULT_CELL_BUDGET_FRACTION)
}

/// Plan a fleet whose ships cover at most `budget_fraction` of the board.
/// Sizes too large for `usize` arithmetic saturate instead of overflowing.
///
/// Lengths run from the longest down to 1. Each length gets a nominal count
/// (1 for length 4, `n/3` for 3, `n/2` for 2, `n/2 + 1` for single cells),
/// clamped to what the remaining budget can still hold. A single-cell ship
/// is always present, even if it pushes the total one cell over budget.
pub fn plan_fleet_with_budget(board_size: usize, budget_fraction: f64) -> Fleet {
    let budget = (board_size.saturating_mul(board_size) as f64 * budget_fraction) as usize;
    let mut fleet = Fleet::default();
    let mut used = 0usize;

    for length in (1..=max_ship_length(board_size)).rev() {
        let nominal = match length {
            4 => 1,
            3 => board_size / 3,
            2 => board_size / 2,
            _ => board_size / 2 + 1,
        };
        let remaining = budget.saturating_sub(used);
        let count = if length * nominal <= remaining {
            nominal
        } else {
            remaining / length
        };
        if count > 0 {
            fleet.counts.insert(length, count);
            used += length * count;
        }
    }

    if fleet.count(1) == 0 {
        fleet.counts.insert(1, 1);
    }
    log::debug!(
        "planned fleet for {}x{} board: {:?} ({} of {} budget cells)",
        board_size,
        board_size,
        fleet.counts,
        fleet.total_cells(),
        budget
    );
    fleet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrement_past_zero_is_rejected() {
        let mut fleet = Fleet::from_counts([(2, 1)]);
        assert_eq!(fleet.decrement(2), Ok(()));
        assert_eq!(fleet.decrement(2), Err(PlacementError::NoShipsOfLength(2)));
        assert_eq!(fleet.decrement(5), Err(PlacementError::NoShipsOfLength(5)));
        assert!(fleet.is_fully_placed());
    }

    #[test]
    fn largest_remaining_skips_exhausted_lengths() {
        let mut fleet = Fleet::from_counts([(3, 1), (1, 2)]);
        assert_eq!(fleet.largest_remaining(), Some(3));
        fleet.decrement(3).unwrap();
        assert_eq!(fleet.largest_remaining(), Some(1));
        assert_eq!(fleet.remaining_lengths(), alloc::vec![1]);
    }
}
