//! Pixel geometry of the two boards as drawn by the windowed game.

use crate::core::BOARD_SIZE;

const GRID: i32 = BOARD_SIZE as i32;

/// A square grid of `BOARD_SIZE` cells drawn at a pixel origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    pub origin_x: i32,
    pub origin_y: i32,
    pub cell_size: i32,
}

/// Where the player's own fleet is drawn.
pub const PLAYER_LAYOUT: BoardLayout = BoardLayout::new(10, 40, 60);
/// Where the computer's board is drawn; clicks here are guesses.
pub const COMPUTER_LAYOUT: BoardLayout = BoardLayout::new(470, 40, 60);

impl BoardLayout {
    pub const fn new(origin_x: i32, origin_y: i32, cell_size: i32) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
        }
    }

    /// Width and height of the grid in pixels.
    pub fn extent(&self) -> i32 {
        self.cell_size * GRID
    }

    /// The `(row, col)` under pixel (x, y), or `None` outside the grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let dx = x.checked_sub(self.origin_x)?;
        let dy = y.checked_sub(self.origin_y)?;
        if self.cell_size <= 0 || dx < 0 || dy < 0 || dx >= self.extent() || dy >= self.extent() {
            return None;
        }
        Some(((dy / self.cell_size) as usize, (dx / self.cell_size) as usize))
    }

    /// Top-left pixel of a cell.
    pub fn cell_origin(&self, row: usize, col: usize) -> (i32, i32) {
        (
            self.origin_x + col as i32 * self.cell_size,
            self.origin_y + row as i32 * self.cell_size,
        )
    }
}
