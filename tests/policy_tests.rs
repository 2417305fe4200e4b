use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    plan_fleet, Board, Coord, Fleet, GameError, OpponentPolicy, RandomPolicy, ShotOutcome,
};

#[test]
fn test_random_fleet_fits_every_board_size() {
    let mut rng = SmallRng::seed_from_u64(2024);
    for size in 1..=26 {
        let fleet = plan_fleet(size);
        let mut board = Board::new(size);
        RandomPolicy::new()
            .place_fleet(&mut rng, &mut board, &fleet)
            .unwrap_or_else(|e| panic!("size {}: {}", size, e));
        assert_eq!(board.ship_cells(), fleet.total_cells(), "size {}", size);
    }
}

#[test]
fn test_fallback_scan_places_without_sampling() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new(5);
    let fleet = Fleet::from_counts([(3, 1), (1, 2)]);
    RandomPolicy::with_max_attempts(0)
        .place_fleet(&mut rng, &mut board, &fleet)
        .unwrap();
    assert_eq!(board.ship_cells(), 5);
    // row-major scan puts the first ship in the top-left corner
    assert_eq!(board.view().get(Coord::new(0, 0)), Some(seabattle::Cell::Ship));
}

#[test]
fn test_impossible_fleet_reports_error() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut board = Board::new(3);
    let fleet = Fleet::from_counts([(1, 5)]);
    let err = RandomPolicy::with_max_attempts(10)
        .place_fleet(&mut rng, &mut board, &fleet)
        .unwrap_err();
    assert_eq!(err, GameError::UnableToPlaceShip);
}

#[test]
fn test_targets_are_never_repeated() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut board = Board::new(6);
    let mut policy = RandomPolicy::new();
    policy
        .place_fleet(&mut rng, &mut board, &plan_fleet(6))
        .unwrap();

    for _ in 0..36 {
        let target = policy.choose_target(&mut rng, board.fog()).unwrap();
        assert!(board.fog().is_untried(target));
        assert_ne!(board.resolve_shot(target).unwrap(), ShotOutcome::AlreadyTried);
    }
    assert_eq!(board.hits(), board.ship_cells());
    assert_eq!(
        policy.choose_target(&mut rng, board.fog()).unwrap_err(),
        GameError::NoTargetsLeft
    );
}

#[test]
fn test_single_untried_cell_found_after_sampling_gives_up() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut board = Board::new(4);
    for y in 0..4 {
        for x in 0..4 {
            if (x, y) != (2, 3) {
                board.resolve_shot(Coord::new(x, y)).unwrap();
            }
        }
    }
    let target = RandomPolicy::with_max_attempts(0)
        .choose_target(&mut rng, board.fog())
        .unwrap();
    assert_eq!(target, Coord::new(2, 3));
}
