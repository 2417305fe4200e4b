//! Board grids, placement validation and shot resolution.

use alloc::vec;
use alloc::vec::Vec;

use crate::core::common::{Cell, Coord, GameError, PlacementError, ShotOutcome};
use crate::core::fleet::Fleet;
use crate::core::ship::{Orientation, Placement};
use rand::Rng;

/// An N×N grid of cells. All mutation goes through [`Board::place`] and
/// [`Board::resolve_shot`]; reads go through [`Board::view`] or [`Board::fog`].
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    ship_cells: usize,
    hits: usize,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            ship_cells: 0,
            hits: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.size && coord.y < self.size
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord).then(|| coord.y * self.size + coord.x)
    }

    fn cell(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Owner's view: ships visible.
    pub fn view(&self) -> BoardView<'_> {
        BoardView { board: self }
    }

    /// Observer's view: unrevealed ships read as `Empty`.
    pub fn fog(&self) -> FogView<'_> {
        FogView { board: self }
    }

    /// Number of cells covered by placed ships.
    pub fn ship_cells(&self) -> usize {
        self.ship_cells
    }

    /// Number of ship cells already hit.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// `true` once at least one ship is placed and every ship cell is hit.
    pub fn all_sunk(&self) -> bool {
        self.ship_cells > 0 && self.hits == self.ship_cells
    }

    /// Validate a placement: the footprint must lie on the board and neither
    /// it nor its surrounding ring may contain anything but `Empty`.
    pub fn check_placement(&self, placement: &Placement) -> Result<(), PlacementError> {
        placement.check_bounds(self.size)?;
        let blocked = placement
            .halo(self.size)
            .any(|c| self.cell(c) != Some(Cell::Empty));
        if blocked {
            return Err(PlacementError::Touching);
        }
        Ok(())
    }

    pub fn can_place(&self, placement: &Placement) -> bool {
        self.check_placement(placement).is_ok()
    }

    /// Mark the footprint as `Ship` without validating it. Callers check
    /// with [`Board::can_place`] first or use [`Board::try_place`]. Cells
    /// past the edge are skipped.
    pub fn place(&mut self, placement: &Placement) {
        for coord in placement.cells() {
            if let Some(i) = self.index(coord) {
                if self.cells[i] == Cell::Empty {
                    self.ship_cells += 1;
                }
                self.cells[i] = Cell::Ship;
            }
        }
    }

    /// Validate and place in one step.
    pub fn try_place(&mut self, placement: &Placement) -> Result<(), GameError> {
        self.check_placement(placement)?;
        self.place(placement);
        Ok(())
    }

    /// Pick a valid slot for a ship of `length` at random, rejecting
    /// candidates that touch existing ships. After `max_attempts` samples the
    /// board is scanned in row-major order, horizontal before vertical.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        max_attempts: usize,
    ) -> Result<Placement, GameError> {
        if length == 0 || length > self.size {
            return Err(GameError::UnableToPlaceShip);
        }
        for _ in 0..max_attempts {
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.size - length, self.size - 1),
                Orientation::Vertical => (self.size - 1, self.size - length),
            };
            let origin = Coord::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let candidate = Placement::new(origin, length, orientation);
            if self.can_place(&candidate) {
                return Ok(candidate);
            }
        }

        log::debug!(
            "no random slot for length {} after {} attempts, scanning",
            length,
            max_attempts
        );
        (0..self.size * self.size)
            .flat_map(|i| {
                let origin = Coord::new(i % self.size, i / self.size);
                [Orientation::Horizontal, Orientation::Vertical]
                    .map(|o| Placement::new(origin, length, o))
            })
            .find(|p| self.can_place(p))
            .ok_or(GameError::UnableToPlaceShip)
    }

    /// Fire at `target`. A cell already hit or missed is left untouched and
    /// reported as [`ShotOutcome::AlreadyTried`].
    pub fn resolve_shot(&mut self, target: Coord) -> Result<ShotOutcome, GameError> {
        let i = self.index(target).ok_or(GameError::OutOfBounds)?;
        let outcome = match self.cells[i] {
            Cell::Ship => {
                self.cells[i] = Cell::Hit;
                self.hits += 1;
                ShotOutcome::Hit
            }
            Cell::Empty => {
                self.cells[i] = Cell::Miss;
                ShotOutcome::Miss
            }
            Cell::Miss | Cell::Hit => ShotOutcome::AlreadyTried,
        };
        Ok(outcome)
    }
}

impl core::fmt::Debug for Board {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(
            f,
            "Board {{ size: {}, ship_cells: {}, hits: {} }}",
            self.size, self.ship_cells, self.hits
        )?;
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship => 'S',
                    Cell::Miss => 'o',
                    Cell::Hit => 'X',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Read-only view of a board as its owner sees it.
#[derive(Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
}

impl<'a> BoardView<'a> {
    pub fn size(&self) -> usize {
        self.board.size
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.board.cell(coord)
    }

    /// Cells row by row.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        self.board
            .cells
            .chunks(self.board.size.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}

/// Read-only view of a board as the shooter sees it: only `Miss` and `Hit`
/// are revealed.
#[derive(Clone, Copy)]
pub struct FogView<'a> {
    board: &'a Board,
}

impl<'a> FogView<'a> {
    pub fn size(&self) -> usize {
        self.board.size
    }

    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.board.cell(coord).map(|c| match c {
            Cell::Ship => Cell::Empty,
            other => other,
        })
    }

    /// `true` if `coord` is on the board and has not been fired upon.
    pub fn is_untried(&self, coord: Coord) -> bool {
        matches!(self.board.cell(coord), Some(c) if !c.is_tried())
    }

    /// All cells not yet fired upon, in row-major order.
    pub fn untried(&self) -> Vec<Coord> {
        let size = self.board.size;
        (0..size * size)
            .map(|i| Coord::new(i % size, i / size))
            .filter(|&c| self.is_untried(c))
            .collect()
    }

    /// Cells row by row with ships hidden.
    pub fn rows(&self) -> Vec<Vec<Cell>> {
        let size = self.board.size;
        (0..size)
            .map(|y| {
                (0..size)
                    .filter_map(|x| self.get(Coord::new(x, y)))
                    .collect()
            })
            .collect()
    }
}

/// Both sides' boards plus the player's fleet still to be placed.
#[derive(Debug, Clone)]
pub struct BoardState {
    player: Board,
    opponent: Board,
    fleet_remaining: Fleet,
}

impl BoardState {
    pub fn new(size: usize, fleet: Fleet) -> Self {
        Self {
            player: Board::new(size),
            opponent: Board::new(size),
            fleet_remaining: fleet,
        }
    }

    pub fn size(&self) -> usize {
        self.player.size()
    }

    /// The player's own board.
    pub fn player(&self) -> &Board {
        &self.player
    }

    /// The opponent's board; present it through [`Board::fog`] to the player.
    pub fn opponent(&self) -> &Board {
        &self.opponent
    }

    pub(crate) fn player_mut(&mut self) -> &mut Board {
        &mut self.player
    }

    pub(crate) fn opponent_mut(&mut self) -> &mut Board {
        &mut self.opponent
    }

    pub fn fleet_remaining(&self) -> &Fleet {
        &self.fleet_remaining
    }

    /// Place one of the player's remaining ships, validating the request and
    /// taking the ship off the remaining fleet.
    pub fn place_player_ship(&mut self, placement: &Placement) -> Result<(), GameError> {
        if self.fleet_remaining.count(placement.length) == 0 {
            return Err(PlacementError::NoShipsOfLength(placement.length).into());
        }
        self.player.try_place(placement)?;
        self.fleet_remaining.decrement(placement.length)?;
        Ok(())
    }

    pub fn is_fleet_fully_placed(&self) -> bool {
        self.fleet_remaining.is_fully_placed()
    }
}
