use core::ops::Index;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// Owns the grid of cells and their derived adjacency counts.
///
/// Construction is two-phase: place mines with [`Board::set_mine`], then call
/// [`Board::recompute_adjacency_counts`] once before the board is used for play.
/// [`generate`] and [`Board::from_mine_coords`] do both.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// Empty board, no mines and every count zero.
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidConfiguration {
                rows,
                cols,
                mines: 0,
            });
        }

        Ok(Self {
            cells: Array2::default((rows, cols).to_nd_index()),
            mine_count: 0,
        })
    }

    /// Finalized board with mines at exactly the given coordinates.
    ///
    /// At least one cell has to stay safe, same as for [`generate`].
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size.0, size.1)?;
        for &coords in mine_coords {
            board.set_mine(coords)?;
        }
        if board.mine_count >= board.total_cells() {
            return Err(GameError::InvalidConfiguration {
                rows: size.0,
                cols: size.1,
                mines: board.mine_count,
            });
        }
        board.recompute_adjacency_counts();
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // dimensions come from `Coord` values in `new`
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn is_in_bounds(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    /// Moore neighborhood of `coords`, clipped to the board.
    pub fn neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// All coordinates in row-major order.
    pub fn iter_coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    pub fn cell(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Places a mine, returns whether the cell was not a mine before.
    pub fn set_mine(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_mine {
            return Ok(false);
        }

        cell.is_mine = true;
        self.mine_count += 1;
        Ok(true)
    }

    /// Derives every adjacency count from the current mine placement.
    pub fn recompute_adjacency_counts(&mut self) {
        for coords in self.iter_coords() {
            let count = if self[coords].is_mine {
                MINE_SENTINEL
            } else {
                // at most 8 neighbors
                self.neighbors(coords).filter(|&pos| self[pos].is_mine).count() as i8
            };
            self.cells[coords.to_nd_index()].adjacent_mine_count = count;
        }
    }

    /// Marks a cell revealed, returns whether it was hidden before.
    ///
    /// Flagged cells are left alone, they have to be unflagged first.
    pub fn reveal(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.revealed || cell.flagged {
            return Ok(false);
        }

        cell.revealed = true;
        Ok(true)
    }

    /// Flips the flag on a hidden cell, returns the new flag state.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.revealed {
            return Err(GameError::CellRevealed);
        }

        cell.flagged = !cell.flagged;
        Ok(cell.flagged)
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        self.cell(coords).map(Cell::is_revealed)
    }

    pub fn is_flagged(&self, coords: Coord2) -> Result<bool> {
        self.cell(coords).map(Cell::is_flagged)
    }

    pub fn is_mine(&self, coords: Coord2) -> Result<bool> {
        self.cell(coords).map(Cell::is_mine)
    }

    pub fn adjacent_count(&self, coords: Coord2) -> Result<i8> {
        self.cell(coords).map(Cell::adjacent_mine_count)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.revealed)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.flagged)
    }

    pub fn flagged_mine_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_mine && cell.flagged)
    }

    fn count_cells(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        // bounded by `total_cells`, which fits
        self.cells.iter().filter(|cell| pred(cell)).count() as CellCount
    }
}

impl Board {
    /// Raw cell access for whole-board updates; keeps `mine_count` untouched.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
