#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use clock::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use reveal::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod clock;
mod error;
mod game;
mod generator;
mod reveal;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// Square board, `size` cells per side.
    pub fn square(size: Coord, mines: CellCount) -> Result<Self> {
        Self::new(size, size, mines)
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// At least one row and column, and room for at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.mines >= self.total_cells() {
            Err(GameError::InvalidConfiguration {
                rows: self.rows,
                cols: self.cols,
                mines: self.mines,
            })
        } else {
            Ok(())
        }
    }

    pub fn generate<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Result<Board> {
        generate(self.rows, self.cols, self.mines, rng)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::beginner()
    }
}
