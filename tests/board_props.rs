use seabattle::{Board, Coord, Orientation, Placement, ShotOutcome};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn near(a: Coord, b: Coord) -> bool {
    a.x.abs_diff(b.x) <= 1 && a.y.abs_diff(b.y) <= 1
}

fn random_board(seed: u64, size: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(size);
    for len in [3, 2, 2, 1, 1] {
        if let Ok(p) = board.random_placement(&mut rng, len, 100) {
            board.place(&p);
        }
    }
    let shots = rng.random_range(0..size * size);
    for _ in 0..shots {
        let c = Coord::new(rng.random_range(0..size), rng.random_range(0..size));
        let _ = board.resolve_shot(c);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A second ship is accepted exactly when it is on the board and none of
    /// its cells equals or neighbours (8-way) a cell of the first ship.
    #[test]
    fn placement_never_touches(
        size in 3usize..12,
        x1 in 0usize..12, y1 in 0usize..12, len1 in 1usize..5, o1 in orientation(),
        x2 in 0usize..12, y2 in 0usize..12, len2 in 1usize..5, o2 in orientation(),
    ) {
        let first = Placement::new(Coord::new(x1 % size, y1 % size), len1, o1);
        let second = Placement::new(Coord::new(x2, y2), len2, o2);
        let mut board = Board::new(size);
        prop_assume!(board.can_place(&first));
        board.place(&first);

        let in_bounds = second.check_bounds(size).is_ok();
        let touching = second.cells().any(|a| first.cells().any(|b| near(a, b)));
        prop_assert_eq!(board.can_place(&second), in_bounds && !touching);
    }

    #[test]
    fn random_placements_keep_ships_apart(seed in any::<u64>(), size in 4usize..=12) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new(size);
        let mut placed: Vec<Placement> = Vec::new();
        for len in [3, 2, 2, 1, 1, 1] {
            if let Ok(p) = board.random_placement(&mut rng, len, 50) {
                prop_assert!(board.can_place(&p));
                board.place(&p);
                placed.push(p);
            }
        }
        for (i, a) in placed.iter().enumerate() {
            for b in placed.iter().skip(i + 1) {
                prop_assert!(!a.cells().any(|ca| b.cells().any(|cb| near(ca, cb))));
            }
        }
        let cells: usize = placed.iter().map(|p| p.length).sum();
        prop_assert_eq!(board.ship_cells(), cells);
    }

    #[test]
    fn repeated_shot_changes_nothing(
        seed in any::<u64>(),
        x in 0usize..8,
        y in 0usize..8,
    ) {
        let mut board = random_board(seed, 8);
        let target = Coord::new(x, y);
        let _ = board.resolve_shot(target).unwrap();
        let after_first = board.clone();
        prop_assert_eq!(board.resolve_shot(target).unwrap(), ShotOutcome::AlreadyTried);
        prop_assert_eq!(&board, &after_first);
        prop_assert!(board.hits() <= board.ship_cells());
    }
}
