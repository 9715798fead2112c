use serde::{Deserialize, Serialize};

/// Adjacency value stored on mine cells, never read as a count.
pub const MINE_SENTINEL: i8 = -1;

/// Full truth about a single board cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub(crate) is_mine: bool,
    pub(crate) adjacent_mine_count: i8,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        self.is_mine
    }

    /// Number of mines around this cell, or [`MINE_SENTINEL`] for a mine.
    pub const fn adjacent_mine_count(self) -> i8 {
        self.adjacent_mine_count
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// What a player is allowed to see of this cell.
    pub const fn view(self) -> CellView {
        match (self.revealed, self.flagged, self.is_mine) {
            (false, false, _) => CellView::Hidden,
            (false, true, _) => CellView::Flagged,
            (true, _, true) => CellView::Mine,
            (true, _, false) => CellView::Revealed(self.adjacent_mine_count as u8),
        }
    }
}

/// Player-visible state of a cell, hides mines until they are revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    Mine,
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
