// Target selection for the computer side.
// Uses no_std and avoids heap allocations.

use rand::Rng;

use super::board::Board;
use super::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Pick a cell on `board` that has not been guessed yet.
///
/// Samples row and column uniformly over the whole grid and resamples while
/// the chosen cell is already Hit or Miss. Returns `None` only when every
/// cell has been visited, so the caller never wastes a turn on a repeat.
pub fn pick_unvisited_cell<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if board.unvisited_count() == 0 {
        return None;
    }
    loop {
        let row = rng.random_range(0..GRID_SIZE);
        let col = rng.random_range(0..GRID_SIZE);
        match board.query_cell(row, col) {
            Ok(state) if !state.is_visited() => return Some((row, col)),
            _ => continue,
        }
    }
}
