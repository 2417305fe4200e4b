//! Ship placement geometry: orientation, footprint and halo.

use crate::core::common::{Coord, PlacementError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other orientation.
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A request to put a ship of `length` cells at `origin`, extending right
/// (horizontal) or down (vertical).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub origin: Coord,
    pub length: usize,
    pub orientation: Orientation,
}

impl Placement {
    pub const fn new(origin: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
        }
    }

    /// Cells occupied by the ship, origin first.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => Coord::new(self.origin.x + i, self.origin.y),
            Orientation::Vertical => Coord::new(self.origin.x, self.origin.y + i),
        })
    }

    /// Exclusive end of the footprint as (x, y); both bounds must be `<= size`.
    fn end(&self) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.origin.x + self.length, self.origin.y + 1),
            Orientation::Vertical => (self.origin.x + 1, self.origin.y + self.length),
        }
    }

    /// Check that the whole footprint lies on a `size`×`size` board.
    pub fn check_bounds(&self, size: usize) -> Result<(), PlacementError> {
        let (end_x, end_y) = self.end();
        if self.length == 0 || end_x > size || end_y > size {
            return Err(PlacementError::OutOfBounds);
        }
        Ok(())
    }

    /// Cells of the footprint plus the one-cell ring around it, clamped to
    /// the board edges.
    pub fn halo(&self, size: usize) -> impl Iterator<Item = Coord> {
        let (end_x, end_y) = self.end();
        let xs = self.origin.x.saturating_sub(1)..(end_x + 1).min(size);
        let ys = self.origin.y.saturating_sub(1)..(end_y + 1).min(size);
        ys.flat_map(move |y| xs.clone().map(move |x| Coord::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn halo_is_clamped_at_corner() {
        let p = Placement::new(Coord::new(0, 0), 2, Orientation::Horizontal);
        let halo: Vec<_> = p.halo(8).collect();
        // 3 columns x 2 rows
        assert_eq!(halo.len(), 6);
        assert!(halo.contains(&Coord::new(2, 1)));
    }

    #[test]
    fn vertical_ship_past_bottom_is_out_of_bounds() {
        let p = Placement::new(Coord::new(3, 6), 3, Orientation::Vertical);
        assert_eq!(p.check_bounds(8), Err(PlacementError::OutOfBounds));
        let p = Placement::new(Coord::new(3, 5), 3, Orientation::Vertical);
        assert_eq!(p.check_bounds(8), Ok(()));
    }
}
