//! Text rendering of the boards and the score line.

use std::io::{self, Write};

use crate::core::{Board, CellState, GameSession, BOARD_SIZE};

const GRID: usize = BOARD_SIZE as usize;

fn cell_char(state: CellState, reveal: bool) -> char {
    match state {
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Ship if reveal => 'S',
        CellState::Ship | CellState::Empty => '.',
    }
}

/// Draw one board. With `reveal` unstruck ships are shown, otherwise the
/// board is drawn the way the opponent sees it.
pub fn render_board<W: Write>(out: &mut W, title: &str, board: &Board, reveal: bool) -> io::Result<()> {
    writeln!(out, "    {}", title)?;
    writeln!(out, "    ╔{}╗", "═".repeat(GRID * 2 + 3))?;
    write!(out, "    ║  ")?;
    for c in 0..GRID {
        write!(out, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠{}╣", "═".repeat(GRID * 2 + 3))?;
    for r in 0..GRID {
        write!(out, "    ║ {}", r + 1)?;
        for c in 0..GRID {
            let state = board.query_cell(r, c).unwrap_or(CellState::Empty);
            write!(out, " {}", cell_char(state, reveal))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚{}╝", "═".repeat(GRID * 2 + 3))?;
    if reveal {
        writeln!(out, "    Legend: S=Ship  X=Hit  o=Miss  .=Water")?;
    } else {
        writeln!(out, "    Legend: X=Hit  o=Miss  .=Unknown")?;
    }
    Ok(())
}

/// Score, guess counters and remaining ship segments on one line.
pub fn render_status<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    let parts = |board: &Board| board.ship_parts_remaining().unwrap_or(0);
    writeln!(
        out,
        "Score: {}   Your guesses: {}   Computer guesses: {}   Your ship parts: {}   Enemy ship parts: {}",
        session.score(),
        session.player_guess_count(),
        session.computer_guess_count(),
        parts(session.player_board()),
        parts(session.computer_board()),
    )
}

/// Both boards followed by the status line.
pub fn render_session<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out)?;
    render_board(out, "YOUR FLEET", session.player_board(), true)?;
    writeln!(out)?;
    render_board(out, "ENEMY WATERS", session.computer_board(), false)?;
    render_status(out, session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Orientation;

    fn render(board: &Board, reveal: bool) -> String {
        let mut out = Vec::new();
        render_board(&mut out, "T", board, reveal).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn hidden_board_does_not_leak_ships() {
        let mut board = Board::new();
        board.try_place(0, 0, Orientation::Horizontal, 3).unwrap();
        board.apply_guess(0, 0).unwrap();
        board.apply_guess(6, 6).unwrap();

        let hidden = render(&board, false);
        assert!(hidden.contains("║ 1 X . . . . . . ║"));
        assert!(hidden.contains("║ 7 . . . . . . o ║"));
        assert!(!hidden.contains(" S"));

        let shown = render(&board, true);
        assert!(shown.contains("║ 1 X S S . . . . ║"));
    }
}
