use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::core::{
    board::BoardState,
    common::{Cell, Coord, GameError, Phase, PlacementError, Side, ShotOutcome},
    config::{GameConfig, DEFAULT_MAX_ATTEMPTS, PLACEMENT_RESTARTS},
    fleet::Fleet,
    input::{InputEvent, InputOutcome, MouseButton},
    ship::{Orientation, Placement},
};
use crate::player::OpponentPolicy;
use rand::rngs::SmallRng;

/// A resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub shooter: Side,
    pub target: Coord,
    pub outcome: ShotOutcome,
}

/// Everything a front end needs to redraw after a mutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board_size: usize,
    /// Player's own board, ships visible.
    pub player_board: Vec<Vec<Cell>>,
    /// Opponent's board as the player sees it.
    pub opponent_view: Vec<Vec<Cell>>,
    pub phase: Phase,
    pub turn: Side,
    pub player_hits: usize,
    pub opponent_hits: usize,
    pub total_ship_cells: usize,
    /// `(length, count)` still to place, largest first.
    pub fleet_remaining: Vec<(usize, usize)>,
    pub current_ship_size: Option<usize>,
    pub orientation: Orientation,
    pub winner: Option<Side>,
}

impl GameSnapshot {
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }
}

/// Turn controller: sequences placement, alternating fire and the end of the
/// game. The opponent's fleet is placed on construction; the player's fleet
/// is placed one request at a time.
pub struct TurnController {
    config: GameConfig,
    boards: BoardState,
    fleet: Fleet,
    policy: Box<dyn OpponentPolicy>,
    rng: SmallRng,
    phase: Phase,
    turn: Side,
    orientation: Orientation,
    current_ship_size: Option<usize>,
    player_hits: usize,
    opponent_hits: usize,
    total_ship_cells: usize,
    winner: Option<Side>,
}

impl TurnController {
    /// Start a game with the fleet planned from `config`.
    pub fn new(
        config: GameConfig,
        policy: Box<dyn OpponentPolicy>,
        rng: SmallRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let fleet = config.fleet();
        Self::with_fleet(config, fleet, policy, rng)
    }

    /// Start a game with an explicit fleet.
    pub fn with_fleet(
        config: GameConfig,
        fleet: Fleet,
        mut policy: Box<dyn OpponentPolicy>,
        mut rng: SmallRng,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if fleet.ship_count() == 0 {
            return Err(GameError::InvalidConfig("fleet must contain at least one ship"));
        }
        let mut boards = BoardState::new(config.board_size, fleet.clone());
        policy.place_fleet(&mut rng, boards.opponent_mut(), &fleet)?;
        // Both sides race to the same total, so the opponent board must hold
        // exactly the planned fleet.
        if boards.opponent().ship_cells() != fleet.total_cells() {
            log::warn!(
                "opponent placed {} ship cells, fleet {:?} needs {}",
                boards.opponent().ship_cells(),
                fleet,
                fleet.total_cells()
            );
            return Err(GameError::InvalidConfig(
                "opponent fleet does not match the planned fleet",
            ));
        }
        log::info!(
            "new {}x{} game, fleet {:?}, {} ship cells",
            config.board_size,
            config.board_size,
            fleet,
            fleet.total_cells()
        );
        Ok(Self {
            config,
            total_ship_cells: fleet.total_cells(),
            current_ship_size: fleet.largest_remaining(),
            boards,
            fleet,
            policy,
            rng,
            phase: Phase::Placement,
            turn: Side::Player,
            orientation: Orientation::Horizontal,
            player_hits: 0,
            opponent_hits: 0,
            winner: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn boards(&self) -> &BoardState {
        &self.boards
    }

    /// Fleet each side started with.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of the next ship to place, `None` once placement is over.
    pub fn current_ship_size(&self) -> Option<usize> {
        self.current_ship_size
    }

    /// Ship cells the player has hit.
    pub fn player_hits(&self) -> usize {
        self.player_hits
    }

    /// Ship cells the opponent has hit.
    pub fn opponent_hits(&self) -> usize {
        self.opponent_hits
    }

    pub fn total_ship_cells(&self) -> usize {
        self.total_ship_cells
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn toggle_orientation(&mut self) -> Orientation {
        self.orientation = self.orientation.toggled();
        self.orientation
    }

    fn require_phase(&self, expected: Phase) -> Result<(), GameError> {
        if self.phase != expected {
            return Err(GameError::WrongPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    /// Place one of the player's ships. On success the remaining count for
    /// its length drops by one; once every length is exhausted the game
    /// moves to battle.
    pub fn place_ship(&mut self, placement: Placement) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        self.boards.place_player_ship(&placement)?;
        log::debug!(
            "player placed length {} at {} ({:?})",
            placement.length,
            placement.origin,
            placement.orientation
        );
        self.after_placement();
        Ok(())
    }

    /// Place a ship of the current length at `origin` using the current
    /// orientation.
    pub fn place_current(&mut self, origin: Coord) -> Result<usize, GameError> {
        self.require_phase(Phase::Placement)?;
        let length = self
            .current_ship_size
            .ok_or(GameError::InvalidPlacement(PlacementError::NoShipsOfLength(0)))?;
        self.place_ship(Placement::new(origin, length, self.orientation))?;
        Ok(length)
    }

    /// Place the player's remaining ships at random. Ships already placed by
    /// hand stay where they are.
    pub fn auto_place_player(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::Placement)?;
        for _ in 0..PLACEMENT_RESTARTS {
            let mut trial = self.boards.clone();
            if Self::fill_remaining(&mut trial, &mut self.rng).is_ok() {
                self.boards = trial;
                self.after_placement();
                return Ok(());
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    fn fill_remaining(boards: &mut BoardState, rng: &mut SmallRng) -> Result<(), GameError> {
        while let Some(length) = boards.fleet_remaining().largest_remaining() {
            let placement = boards
                .player()
                .random_placement(rng, length, DEFAULT_MAX_ATTEMPTS)?;
            boards.place_player_ship(&placement)?;
        }
        Ok(())
    }

    fn after_placement(&mut self) {
        let remaining = self.boards.fleet_remaining();
        let current_done = self
            .current_ship_size
            .map_or(true, |len| remaining.count(len) == 0);
        if current_done {
            self.current_ship_size = remaining.largest_remaining();
        }
        if self.boards.is_fleet_fully_placed() {
            self.phase = Phase::Battle;
            self.turn = Side::Player;
            log::info!("fleet placed, battle begins");
        }
    }

    /// Player fires at the opponent's board.
    pub fn player_attack(&mut self, target: Coord) -> Result<Shot, GameError> {
        self.require_phase(Phase::Battle)?;
        if self.turn != Side::Player {
            return Err(GameError::NotYourTurn);
        }
        self.fire(Side::Player, target)
    }

    /// Let the opponent fire one shot. The driver calls this once per
    /// opponent turn, after its presentation delay.
    pub fn advance_opponent_turn(&mut self) -> Result<Shot, GameError> {
        self.require_phase(Phase::Battle)?;
        if self.turn != Side::Opponent {
            return Err(GameError::NotYourTurn);
        }
        let target = self
            .policy
            .choose_target(&mut self.rng, self.boards.player().fog())?;
        let shot = self.fire(Side::Opponent, target)?;
        self.policy.handle_shot_result(shot.target, shot.outcome);
        Ok(shot)
    }

    fn fire(&mut self, shooter: Side, target: Coord) -> Result<Shot, GameError> {
        let board = match shooter {
            Side::Player => self.boards.opponent_mut(),
            Side::Opponent => self.boards.player_mut(),
        };
        let outcome = board.resolve_shot(target)?;
        match outcome {
            ShotOutcome::AlreadyTried => return Err(GameError::AlreadyTargeted),
            ShotOutcome::Hit => {
                let score = match shooter {
                    Side::Player => &mut self.player_hits,
                    Side::Opponent => &mut self.opponent_hits,
                };
                *score += 1;
                if *score == self.total_ship_cells {
                    self.phase = Phase::Finished;
                    self.winner = Some(shooter);
                    log::info!("{:?} wins", shooter);
                }
            }
            ShotOutcome::Miss => self.turn = shooter.opposite(),
        }
        log::debug!("{:?} fired at {}: {:?}", shooter, target, outcome);
        Ok(Shot {
            shooter,
            target,
            outcome,
        })
    }

    /// Apply a front-end event.
    pub fn handle_input(&mut self, event: InputEvent) -> Result<InputOutcome, GameError> {
        match event {
            InputEvent::QuitRequested => Ok(InputOutcome::Quit),
            InputEvent::OrientationToggleRequested => {
                self.toggle_orientation();
                Ok(InputOutcome::OrientationToggled)
            }
            InputEvent::CellClicked { side, x, y, button } => {
                let coord = Coord::new(x, y);
                if coord.x >= self.config.board_size || coord.y >= self.config.board_size {
                    return Ok(InputOutcome::Ignored);
                }
                match (self.phase, side, button) {
                    (Phase::Placement, Side::Player, MouseButton::Secondary) => {
                        self.toggle_orientation();
                        Ok(InputOutcome::OrientationToggled)
                    }
                    (Phase::Placement, Side::Player, MouseButton::Primary) => {
                        self.place_current(coord).map(InputOutcome::Placed)
                    }
                    (Phase::Battle, Side::Opponent, MouseButton::Primary) => {
                        self.player_attack(coord).map(InputOutcome::Fired)
                    }
                    _ => Ok(InputOutcome::Ignored),
                }
            }
        }
    }

    /// Read-only snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board_size: self.config.board_size,
            player_board: self.boards.player().view().rows(),
            opponent_view: self.boards.opponent().fog().rows(),
            phase: self.phase,
            turn: self.turn,
            player_hits: self.player_hits,
            opponent_hits: self.opponent_hits,
            total_ship_cells: self.total_ship_cells,
            fleet_remaining: self.boards.fleet_remaining().iter().collect(),
            current_ship_size: self.current_ship_size,
            orientation: self.orientation,
            winner: self.winner,
        }
    }
}

impl core::fmt::Debug for TurnController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TurnController")
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("player_hits", &self.player_hits)
            .field("opponent_hits", &self.opponent_hits)
            .field("total_ship_cells", &self.total_ship_cells)
            .field("boards", &self.boards)
            .finish()
    }
}
