use core::time::Duration;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Ready -> Playing
/// - Ready -> Won
/// - Ready -> Lost
/// - Playing -> Won
/// - Playing -> Lost
///
/// `Won` and `Lost` only leave through a reset.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No cell revealed yet
    Ready,
    /// At least one reveal, no mine hit
    Playing,
    /// Every mine is flagged
    Won,
    /// A mine was revealed
    Lost,
}

impl Phase {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Ready
    }
}

/// Input already translated into cell indices by the front-end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Coord2),
    ToggleFlag(Coord2),
    Reset,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    Flagged,
    Unflagged,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Reveal(RevealOutcome),
    Mark(MarkOutcome),
    Reset,
}

impl ActionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Reveal(outcome) => outcome.has_update(),
            Self::Mark(_) | Self::Reset => true,
        }
    }
}

/// A board together with the play state derived from it.
///
/// Board and state always travel together: resetting swaps both in one step.
#[derive(Clone, Debug)]
pub struct Game<C: Clock = SystemClock> {
    config: GameConfig,
    board: Board,
    phase: Phase,
    flags_remaining: isize,
    started_at: Option<Timestamp>,
    ended_at: Option<Timestamp>,
    clock: C,
}

impl Game<SystemClock> {
    pub fn new<R: RandomSource + ?Sized>(config: GameConfig, rng: &mut R) -> Result<Self> {
        Self::with_clock(config, rng, SystemClock::new())
    }
}

impl<C: Clock> Game<C> {
    pub fn with_clock<R: RandomSource + ?Sized>(
        config: GameConfig,
        rng: &mut R,
        clock: C,
    ) -> Result<Self> {
        let board = config.generate(rng)?;
        Ok(Self::from_board(board, clock))
    }

    /// Starts a game on an already finalized board.
    pub fn from_board(board: Board, clock: C) -> Self {
        let (rows, cols) = board.size();
        let config = GameConfig::new_unchecked(rows, cols, board.mine_count());
        Self {
            config,
            flags_remaining: board.mine_count() as isize,
            board,
            phase: Default::default(),
            started_at: None,
            ended_at: None,
            clock,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Mine count minus placed flags, negative when over-flagged.
    pub fn flags_remaining(&self) -> isize {
        self.flags_remaining
    }

    pub fn started_at(&self) -> Option<Timestamp> {
        self.started_at
    }

    /// Time since the first reveal, frozen once the game ends. `None` before the first reveal.
    pub fn elapsed(&self) -> Option<Duration> {
        let started_at = self.started_at?;
        let until = self.ended_at.unwrap_or_else(|| self.clock.now());
        Some(until.saturating_sub(started_at))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    /// Applies one input action, `Reset` regenerates with the current configuration.
    pub fn handle<R: RandomSource + ?Sized>(
        &mut self,
        action: Action,
        rng: &mut R,
    ) -> Result<ActionOutcome> {
        log::trace!("Handle {:?} in {:?}", action, self.phase);
        Ok(match action {
            Action::Reveal(coords) => ActionOutcome::Reveal(self.handle_reveal(coords)?),
            Action::ToggleFlag(coords) => ActionOutcome::Mark(self.handle_toggle_flag(coords)?),
            Action::Reset => {
                self.reset(self.config, rng)?;
                ActionOutcome::Reset
            }
        })
    }

    pub fn handle_reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        if self.board[coords].is_flagged() {
            return Ok(RevealOutcome::NoChange);
        }

        let outcome = reveal_single(&mut self.board, coords);
        match outcome {
            RevealOutcome::DetonatedMine => {
                self.mark_started();
                reveal_all_mines(&mut self.board);
                self.end_game(false);
            }
            RevealOutcome::Revealed(_) => self.mark_started(),
            RevealOutcome::NoChange => {}
        }
        Ok(outcome)
    }

    pub fn handle_toggle_flag(&mut self, coords: Coord2) -> Result<MarkOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_finished()?;

        let outcome = if self.board.toggle_flag(coords)? {
            self.flags_remaining -= 1;
            MarkOutcome::Flagged
        } else {
            self.flags_remaining += 1;
            MarkOutcome::Unflagged
        };

        // only flagged mines count, extra flags on safe cells do not block a win
        if self.board.flagged_mine_count() == self.board.mine_count() {
            self.end_game(true);
        }

        Ok(outcome)
    }

    /// Replaces the board with a freshly generated one, allowed in any phase.
    ///
    /// On error the current game is kept as is.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, config: GameConfig, rng: &mut R) -> Result<()> {
        let board = config.generate(rng)?;
        self.config = config;
        self.flags_remaining = board.mine_count() as isize;
        self.board = board;
        self.phase = Phase::Ready;
        self.started_at = None;
        self.ended_at = None;
        log::debug!("Reset to {:?}", config);
        Ok(())
    }

    fn mark_started(&mut self) {
        if self.phase.is_ready() {
            self.phase = Phase::Playing;
            self.started_at = Some(self.clock.now());
            log::debug!("Game started");
        }
    }

    fn end_game(&mut self, won: bool) {
        if self.phase.is_finished() {
            return;
        }

        self.phase = if won { Phase::Won } else { Phase::Lost };
        self.ended_at = Some(self.clock.now());
        log::debug!("Game ended: {:?}, elapsed: {:?}", self.phase, self.elapsed());
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.phase.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
