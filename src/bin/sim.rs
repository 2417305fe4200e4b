use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    GameConfig, OpponentPolicy, Phase, RandomPolicy, Side, TurnController, DEFAULT_BOARD_SIZE,
};
use serde_json::json;

/// Computer vs computer: both sides place at random and fire at random.
fn main() -> anyhow::Result<()> {
    seabattle::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [board_size]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let size: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => DEFAULT_BOARD_SIZE,
    };

    let config = GameConfig::with_board_size(size);
    let mut controller = TurnController::new(
        config,
        Box::new(RandomPolicy::new()),
        SmallRng::seed_from_u64(seed),
    )
    .map_err(|e| anyhow::anyhow!(e))?;
    controller
        .auto_place_player()
        .map_err(|e| anyhow::anyhow!(e))?;

    let mut shooter = RandomPolicy::new();
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut shots = 0usize;
    while controller.phase() == Phase::Battle {
        let shot = match controller.turn() {
            Side::Player => {
                let target =
                    shooter.choose_target(&mut rng, controller.boards().opponent().fog());
                let target = target.map_err(|e| anyhow::anyhow!(e))?;
                controller.player_attack(target)
            }
            Side::Opponent => controller.advance_opponent_turn(),
        }
        .map_err(|e| anyhow::anyhow!(e))?;
        if shot.shooter == Side::Player {
            shooter.handle_shot_result(shot.target, shot.outcome);
        }
        shots += 1;
    }

    let result = json!({
        "size": size,
        "winner": controller.winner(),
        "player_hits": controller.player_hits(),
        "opponent_hits": controller.opponent_hits(),
        "shots": shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
