use std::io::{self, Write};

use crate::core::{
    Cell, Coord, GameError, GameSnapshot, InputEvent, MouseButton, Orientation, Phase, Side,
};
use crate::driver::{InputSource, Renderer};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

/// Format a coordinate as a letter column and 1-based row, e.g. `B4`.
pub fn coord_to_string(coord: Coord) -> String {
    coord.to_string()
}

/// Parse `B4`-style input (case-insensitive) into a zero-based coordinate.
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new((col_ch as u8 - b'A') as usize, row - 1))
}

/// A line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Cell(Coord),
    Rotate,
    Quit,
}

/// Parse a line of input. Cells outside a `board_size` board are rejected.
pub fn parse_command(line: &str, board_size: usize) -> Option<Command> {
    match line.trim().to_ascii_lowercase().as_str() {
        "r" | "rotate" => Some(Command::Rotate),
        "q" | "quit" | "exit" => Some(Command::Quit),
        other => parse_coord(other)
            .filter(|c| c.x < board_size && c.y < board_size)
            .map(Command::Cell),
    }
}

/// Translate a command into an event. Cells land on the player's own board
/// while placing and on the opponent's board once battle starts.
pub fn command_to_event(command: Command, phase: Phase) -> InputEvent {
    match command {
        Command::Rotate => InputEvent::OrientationToggleRequested,
        Command::Quit => InputEvent::QuitRequested,
        Command::Cell(coord) => InputEvent::CellClicked {
            side: if phase == Phase::Placement {
                Side::Player
            } else {
                Side::Opponent
            },
            x: coord.x,
            y: coord.y,
            button: MouseButton::Primary,
        },
    }
}

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => '.',
        Cell::Ship => 'S',
        Cell::Miss => 'o',
        Cell::Hit => 'X',
    }
}

/// Render a grid with column letters and row numbers.
pub fn format_grid(rows: &[Vec<Cell>]) -> String {
    let mut out = String::from("   ");
    for c in 0..rows.len() {
        out.push(' ');
        out.push((b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in rows.iter().enumerate() {
        out.push_str(&format!("{:2} ", r + 1));
        for &cell in row {
            out.push(' ');
            out.push(cell_char(cell));
        }
        out.push('\n');
    }
    out
}

/// Status lines shown under the boards.
pub fn status_lines(snapshot: &GameSnapshot) -> Vec<String> {
    let mut lines = Vec::new();
    match snapshot.phase {
        Phase::Placement => {
            if let Some(len) = snapshot.current_ship_size {
                let left = snapshot
                    .fleet_remaining
                    .iter()
                    .find(|&&(l, _)| l == len)
                    .map_or(0, |&(_, c)| c);
                lines.push(format!("Place ship of length {} ({} left)", len, left));
            }
            let orientation = match snapshot.orientation {
                Orientation::Horizontal => "horizontal",
                Orientation::Vertical => "vertical",
            };
            lines.push(format!("Orientation: {} (r to rotate)", orientation));
            let remaining: Vec<String> = snapshot
                .fleet_remaining
                .iter()
                .filter(|&&(_, c)| c > 0)
                .map(|&(l, c)| format!("{}x{}", c, l))
                .collect();
            lines.push(format!("Still to place: {}", remaining.join(" ")));
        }
        Phase::Battle => {
            lines.push(match snapshot.turn {
                Side::Player => "Your turn: enter a cell on the enemy board".to_string(),
                Side::Opponent => "Opponent's turn".to_string(),
            });
            lines.push(format!(
                "You hit: {}/{}  Opponent hit: {}/{}",
                snapshot.player_hits,
                snapshot.total_ship_cells,
                snapshot.opponent_hits,
                snapshot.total_ship_cells
            ));
        }
        Phase::Finished => lines.push(match snapshot.winner {
            Some(Side::Player) => "You win!".to_string(),
            _ => "The computer wins!".to_string(),
        }),
    }
    lines
}

/// Renderer printing both boards to stdout.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        writeln!(self.out, "\nYour board:")?;
        write!(self.out, "{}", format_grid(&snapshot.player_board))?;
        writeln!(self.out, "\nEnemy board:")?;
        write!(self.out, "{}", format_grid(&snapshot.opponent_view))?;
        for line in status_lines(snapshot) {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn report(&mut self, err: &GameError) -> anyhow::Result<()> {
        writeln!(self.out, "{}", err)?;
        Ok(())
    }
}

/// Input source reading commands line by line from stdin.
pub struct StdinInput {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinInput {
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinInput {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl InputSource for StdinInput {
    async fn next_event(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<Option<InputEvent>> {
        loop {
            print!("> ");
            io::stdout().flush()?;
            let Some(line) = self.lines.next_line().await? else {
                return Ok(None);
            };
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line, snapshot.board_size) {
                Some(command) => return Ok(Some(command_to_event(command, snapshot.phase))),
                None => {
                    let last = snapshot.board_size.saturating_sub(1);
                    println!(
                        "Unrecognised input '{}': use a cell from A1 to {}, r or q",
                        line.trim(),
                        Coord::new(last, last)
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cells_and_commands() {
        assert_eq!(parse_coord("b4"), Some(Coord::new(1, 3)));
        assert_eq!(parse_coord("A0"), None);
        assert_eq!(parse_coord("4B"), None);
        assert_eq!(parse_command(" R ", 8), Some(Command::Rotate));
        assert_eq!(parse_command("q", 8), Some(Command::Quit));
        assert_eq!(coord_to_string(Coord::new(2, 0)), "C1");
    }

    #[test]
    fn cells_off_the_board_are_rejected() {
        assert_eq!(parse_command("H8", 8), Some(Command::Cell(Coord::new(7, 7))));
        assert_eq!(parse_command("Z9", 8), None);
        assert_eq!(parse_command("I1", 8), None);
        assert_eq!(parse_command("A9", 8), None);
    }

    #[test]
    fn cells_target_the_enemy_board_in_battle() {
        let event = command_to_event(Command::Cell(Coord::new(0, 1)), Phase::Battle);
        assert_eq!(
            event,
            InputEvent::CellClicked {
                side: Side::Opponent,
                x: 0,
                y: 1,
                button: MouseButton::Primary
            }
        );
    }
}
