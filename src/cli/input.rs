//! Parsing of typed commands from the terminal.

use crate::core::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Guess a cell of the computer board.
    Guess { row: usize, col: usize },
    /// Pixel click on the windowed layout, e.g. `click 500 100`.
    Click { x: i32, y: i32 },
    Board,
    Restart,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  A1..G7        fire at a cell of the computer board
  click X Y     fire at the pixel position of the windowed layout
  board         redraw both boards
  restart       start a new game
  help, ?       show this help
  quit, exit    leave the game";

fn last_col_letter() -> char {
    (b'A' + GRID as u8 - 1) as char
}

/// Human-readable name of a cell, e.g. `(2, 3)` -> `D3`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let col = (b'A' + col as u8) as char;
    format!("{}{}", col, row + 1)
}

/// Parse a column letter followed by a 1-based row number, e.g. `C4`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., C4)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch,
            last_col_letter()
        ));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= GRID {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch,
            last_col_letter()
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, GRID))?;
    if row == 0 || row > GRID {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, GRID));
    }
    Ok((row - 1, col))
}

/// Parse one line of input into a [`Command`].
pub fn parse_command(input: &str) -> Result<Command, String> {
    let line = input.trim();
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or("").to_ascii_lowercase();
    match head.as_str() {
        "quit" | "exit" => Ok(Command::Quit),
        "restart" | "new" => Ok(Command::Restart),
        "help" | "?" => Ok(Command::Help),
        "board" => Ok(Command::Board),
        "click" => {
            let mut next_px = |axis: &str| -> Result<i32, String> {
                let raw = words
                    .next()
                    .ok_or_else(|| format!("click needs an {} position", axis))?;
                raw.parse()
                    .map_err(|_| format!("Invalid {} position '{}'", axis, raw))
            };
            let x = next_px("x")?;
            let y = next_px("y")?;
            Ok(Command::Click { x, y })
        }
        _ => parse_coord(line).map(|(row, col)| Command::Guess { row, col }),
    }
}
