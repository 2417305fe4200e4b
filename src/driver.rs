#![cfg(feature = "std")]

//! Game loop tying the turn controller to a front end.

use crate::core::{GameError, GameSnapshot, InputEvent, InputOutcome, Phase, Side, TurnController};
use std::time::Duration;

/// Draws snapshots of the game. Called after every mutation.
pub trait Renderer {
    fn render(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()>;

    /// Show a rejected request so the user can try again.
    fn report(&mut self, _err: &GameError) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Source of discrete input events.
#[async_trait::async_trait]
pub trait InputSource: Send {
    /// Next event, or `None` once the source is exhausted. `snapshot` is the
    /// state currently on screen, for sources that map positions to boards.
    async fn next_event(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<Option<InputEvent>>;
}

/// Drive a game until it finishes, the user quits or input runs dry.
///
/// The opponent moves one shot at a time after `delay`; a hit keeps it on
/// turn and the next shot waits again. Returns the winner, if any.
pub async fn run_game<R, I>(
    controller: &mut TurnController,
    renderer: &mut R,
    input: &mut I,
    delay: Duration,
) -> anyhow::Result<Option<Side>>
where
    R: Renderer + ?Sized,
    I: InputSource + ?Sized,
{
    renderer.render(&controller.snapshot())?;
    loop {
        match controller.phase() {
            Phase::Finished => return Ok(controller.winner()),
            Phase::Battle if controller.turn() == Side::Opponent => {
                tokio::time::sleep(delay).await;
                let shot = controller
                    .advance_opponent_turn()
                    .map_err(|e| anyhow::anyhow!(e))?;
                log::debug!("opponent shot {:?}", shot);
                renderer.render(&controller.snapshot())?;
                continue;
            }
            _ => {}
        }

        let Some(event) = input.next_event(&controller.snapshot()).await? else {
            log::info!("input closed, leaving game");
            return Ok(controller.winner());
        };
        match controller.handle_input(event) {
            Ok(InputOutcome::Quit) => return Ok(controller.winner()),
            Ok(InputOutcome::Ignored) => {
                log::debug!("ignored {:?} in {:?}", event, controller.phase())
            }
            Ok(_) => renderer.render(&controller.snapshot())?,
            Err(e) => {
                log::debug!("rejected {:?}: {}", event, e);
                renderer.report(&e)?;
            }
        }
    }
}
