use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of range")]
    OutOfRange,
    #[error("Cannot place {mines} mines on a {rows}x{cols} board")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
    #[error("Cell is already revealed")]
    CellRevealed,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

/// Coarse classification of [`GameError`].
///
/// `OutOfRange` and `InvalidState` reject a single action and leave the game untouched,
/// `InvalidConfiguration` means no board could be produced at all.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    InvalidConfiguration,
    InvalidState,
}

impl GameError {
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::OutOfRange => ErrorKind::OutOfRange,
            Self::InvalidConfiguration { .. } => ErrorKind::InvalidConfiguration,
            Self::CellRevealed | Self::AlreadyEnded => ErrorKind::InvalidState,
        }
    }

    pub const fn is_fatal(self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidConfiguration)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
