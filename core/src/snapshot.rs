use alloc::format;
use alloc::string::String;
use core::time::Duration;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only view of a game handed to renderers, hidden mines stay hidden.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub flags_remaining: isize,
    pub phase: Phase,
    pub elapsed: Option<Duration>,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn from_game<C: Clock>(game: &Game<C>) -> Self {
        let board = game.board();
        let size = board.size();
        let mut cells = Array2::from_elem(size.to_nd_index(), CellView::Hidden);
        for coords in board.iter_coords() {
            cells[coords.to_nd_index()] = board[coords].view();
        }

        Self {
            size,
            mine_count: board.mine_count(),
            flags_remaining: game.flags_remaining(),
            phase: game.phase(),
            elapsed: game.elapsed(),
            cells,
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }

    /// One-line summary suitable for a window title or status bar.
    pub fn status_line(&self) -> String {
        let (rows, cols) = self.size;
        match self.phase {
            Phase::Ready | Phase::Playing => format!(
                "Minesweeper: {}x{} {} Bombs Left",
                rows, cols, self.flags_remaining
            ),
            Phase::Won => String::from("You Win! Press 'r' to Reset"),
            Phase::Lost => String::from("Game Over! Press 'r' to Reset"),
        }
    }
}
