#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use seabattle::{
    cli::{StdinInput, TerminalRenderer},
    driver::run_game,
    init_logging, GameConfig, RandomPolicy, Side, TurnController, DEFAULT_BOARD_SIZE,
    DEFAULT_CELL_BUDGET_FRACTION, DEFAULT_OPPONENT_MOVE_DELAY_MS,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board edge length (1-26)")]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_CELL_BUDGET_FRACTION, help = "Share of cells covered by ships")]
    budget: f64,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
        #[arg(long, default_value_t = DEFAULT_OPPONENT_MOVE_DELAY_MS, help = "Pause before each computer shot")]
        delay_ms: u64,
        #[arg(long, help = "Place your fleet at random instead of by hand")]
        auto_place: bool,
    },
    /// Print the fleet planned for a board size.
    Fleet {
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
    },
}

#[cfg(feature = "std")]
fn seeded_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            game,
            delay_ms,
            auto_place,
        } => {
            let config = GameConfig {
                board_size: game.size,
                cell_budget_fraction: game.budget,
                opponent_move_delay_ms: delay_ms,
            };
            if let Some(s) = game.seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut controller =
                TurnController::new(config, Box::new(RandomPolicy::new()), seeded_rng(game.seed))
                    .map_err(|e| anyhow::anyhow!(e))?;
            println!(
                "Board {}x{}, fleet: {:?}",
                config.board_size,
                config.board_size,
                controller.fleet().iter().collect::<Vec<_>>()
            );
            if auto_place {
                controller
                    .auto_place_player()
                    .map_err(|e| anyhow::anyhow!(e))?;
            }

            let mut renderer = TerminalRenderer::new();
            let mut input = StdinInput::new();
            let winner = run_game(
                &mut controller,
                &mut renderer,
                &mut input,
                Duration::from_millis(config.opponent_move_delay_ms),
            )
            .await?;
            match winner {
                Some(Side::Player) => println!("\nVICTORY! You sank the whole enemy fleet."),
                Some(Side::Opponent) => println!("\nDEFEAT. All your ships were destroyed."),
                None => println!("\nGame abandoned."),
            }
        }
        Commands::Fleet { size } => {
            let config = GameConfig::with_board_size(size);
            config.validate().map_err(|e| anyhow::anyhow!(e))?;
            let fleet = config.fleet();
            for (length, count) in fleet.iter() {
                println!("{} x length {}", count, length);
            }
            println!("{} ship cells on {} cells", fleet.total_cells(), size * size);
        }
    }
    Ok(())
}
