use std::collections::VecDeque;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::cli::TerminalRenderer;
use seabattle::driver::{run_game, InputSource, Renderer};
use seabattle::{
    Board, Coord, Fleet, FogView, GameConfig, GameError, GameSnapshot, InputEvent, MouseButton,
    OpponentPolicy, Orientation, Phase, Placement, Side, TurnController,
};

struct ScriptedPolicy {
    targets: VecDeque<Coord>,
}

impl OpponentPolicy for ScriptedPolicy {
    fn place_fleet(
        &mut self,
        _rng: &mut SmallRng,
        board: &mut Board,
        _fleet: &Fleet,
    ) -> Result<(), GameError> {
        board.try_place(&Placement::new(Coord::new(0, 0), 2, Orientation::Horizontal))
    }

    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _target: FogView<'_>,
    ) -> Result<Coord, GameError> {
        self.targets.pop_front().ok_or(GameError::NoTargetsLeft)
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<GameSnapshot>,
    errors: Vec<GameError>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        self.frames.push(snapshot.clone());
        Ok(())
    }

    fn report(&mut self, err: &GameError) -> anyhow::Result<()> {
        self.errors.push(*err);
        Ok(())
    }
}

struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

#[async_trait::async_trait]
impl InputSource for ScriptedInput {
    async fn next_event(&mut self, _snapshot: &GameSnapshot) -> anyhow::Result<Option<InputEvent>> {
        Ok(self.events.pop_front())
    }
}

fn click(side: Side, x: usize, y: usize) -> InputEvent {
    InputEvent::CellClicked {
        side,
        x,
        y,
        button: MouseButton::Primary,
    }
}

/// 4x4 board with a single length-2 ship per side at the top-left corner.
fn game(targets: &[Coord]) -> TurnController {
    TurnController::with_fleet(
        GameConfig::with_board_size(4),
        Fleet::from_counts([(2, 1)]),
        Box::new(ScriptedPolicy {
            targets: targets.iter().copied().collect(),
        }),
        SmallRng::seed_from_u64(0),
    )
    .unwrap()
}

#[tokio::test]
async fn test_player_wins_through_driver() -> anyhow::Result<()> {
    let mut controller = game(&[Coord::new(3, 3)]);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput {
        events: VecDeque::from(vec![
            click(Side::Player, 0, 3),
            click(Side::Opponent, 2, 2),
            click(Side::Opponent, 0, 0),
            click(Side::Opponent, 1, 0),
        ]),
    };

    let winner = run_game(&mut controller, &mut renderer, &mut input, Duration::ZERO).await?;
    assert_eq!(winner, Some(Side::Player));
    assert!(renderer.errors.is_empty());

    let last = renderer.frames.last().unwrap();
    assert_eq!(last.phase, Phase::Finished);
    assert_eq!(last.player_hits, 2);
    // opponent fired once, missed, and handed the turn back
    assert_eq!(last.opponent_hits, 0);
    assert!(renderer.frames.iter().any(|f| f.turn == Side::Opponent));
    Ok(())
}

#[tokio::test]
async fn test_opponent_keeps_firing_after_hits() -> anyhow::Result<()> {
    let mut controller = game(&[Coord::new(0, 3), Coord::new(1, 3)]);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput {
        events: VecDeque::from(vec![click(Side::Player, 0, 3), click(Side::Opponent, 3, 3)]),
    };

    let winner = run_game(&mut controller, &mut renderer, &mut input, Duration::from_millis(1)).await?;
    assert_eq!(winner, Some(Side::Opponent));
    assert_eq!(controller.opponent_hits(), 2);
    Ok(())
}

#[tokio::test]
async fn test_rejected_input_is_reported_and_quit_ends_loop() -> anyhow::Result<()> {
    let mut controller = game(&[]);
    let mut renderer = RecordingRenderer::default();
    let mut input = ScriptedInput {
        events: VecDeque::from(vec![
            click(Side::Player, 3, 0),
            InputEvent::OrientationToggleRequested,
            click(Side::Player, 3, 3),
            InputEvent::QuitRequested,
            click(Side::Player, 0, 0),
        ]),
    };

    let winner = run_game(&mut controller, &mut renderer, &mut input, Duration::ZERO).await?;
    assert_eq!(winner, None);
    assert_eq!(renderer.errors.len(), 2);
    assert_eq!(controller.phase(), Phase::Placement);
    // initial frame plus the orientation toggle
    assert_eq!(renderer.frames.len(), 2);
    assert_eq!(input.events.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_end_of_input_leaves_game_unfinished() -> anyhow::Result<()> {
    let mut controller = game(&[]);
    let mut renderer = TerminalRenderer::with_writer(Vec::new());
    let mut input = ScriptedInput {
        events: VecDeque::from(vec![click(Side::Player, 2, 2)]),
    };

    let winner = run_game(&mut controller, &mut renderer, &mut input, Duration::ZERO).await?;
    assert_eq!(winner, None);
    assert_eq!(controller.phase(), Phase::Battle);

    let output = String::from_utf8(renderer.into_inner())?;
    assert!(output.contains("Your board:"));
    assert!(output.contains("Your turn"));
    Ok(())
}
