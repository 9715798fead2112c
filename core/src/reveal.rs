use alloc::collections::VecDeque;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Target was out of bounds, already revealed, or flagged.
    NoChange,
    /// Number of cells newly revealed, including cascaded ones.
    Revealed(CellCount),
    DetonatedMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Reveals one cell and floods through zero-count regions.
///
/// The flood uses an explicit frontier with `revealed` doubling as the visited mark, so every cell
/// is revealed at most once and memory is bounded by the board size.
pub fn reveal_single(board: &mut Board, coords: Coord2) -> RevealOutcome {
    if !board.is_in_bounds(coords) {
        return RevealOutcome::NoChange;
    }

    let cell = board[coords];
    if cell.is_revealed() || cell.is_flagged() {
        return RevealOutcome::NoChange;
    }

    if !matches!(board.reveal(coords), Ok(true)) {
        return RevealOutcome::NoChange;
    }

    if cell.is_mine() {
        log::debug!("Detonated mine at {:?}", coords);
        return RevealOutcome::DetonatedMine;
    }

    let mut revealed: CellCount = 1;
    log::debug!(
        "Reveal cell at {:?}, mine count: {}",
        coords,
        cell.adjacent_mine_count()
    );

    if cell.adjacent_mine_count() == 0 {
        let mut frontier = VecDeque::from([coords]);

        while let Some(visit_coords) = frontier.pop_front() {
            for pos in board.neighbors(visit_coords) {
                let neighbor = board[pos];
                if neighbor.is_revealed() || neighbor.is_flagged() || neighbor.is_mine() {
                    continue;
                }

                if matches!(board.reveal(pos), Ok(true)) {
                    revealed += 1;
                    log::trace!(
                        "Flood revealed cell at {:?}, mine count: {}",
                        pos,
                        neighbor.adjacent_mine_count()
                    );

                    if neighbor.adjacent_mine_count() == 0 {
                        frontier.push_back(pos);
                    }
                }
            }
        }
    }

    RevealOutcome::Revealed(revealed)
}

/// Exposes the full board after a loss: every mine revealed, every flag removed.
pub fn reveal_all_mines(board: &mut Board) {
    for cell in board.cells_mut() {
        cell.flagged = false;
        if cell.is_mine {
            cell.revealed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn empty_board_reveals_everything_once() {
        let mut board = board((7, 5), &[]);

        let outcome = reveal_single(&mut board, (3, 2));

        assert_eq!(outcome, RevealOutcome::Revealed(35));
        assert_eq!(board.revealed_count(), 35);
        assert_eq!(reveal_single(&mut board, (0, 0)), RevealOutcome::NoChange);
    }

    #[test]
    fn numbered_cell_does_not_cascade() {
        let mut board = board((3, 3), &[(1, 1)]);

        let outcome = reveal_single(&mut board, (0, 0));

        assert_eq!(outcome, RevealOutcome::Revealed(1));
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.is_revealed((0, 0)), Ok(true));
        assert_eq!(board.is_revealed((1, 1)), Ok(false));
    }

    #[test]
    fn flood_stops_at_numbered_border() {
        // mine in the corner, the rest opens from the opposite corner
        let mut board = board((3, 3), &[(2, 2)]);

        let outcome = reveal_single(&mut board, (0, 0));

        assert_eq!(outcome, RevealOutcome::Revealed(8));
        assert_eq!(board.adjacent_count((1, 1)), Ok(1));
        assert!(board.iter_coords().all(|pos| board[pos].is_revealed() != board[pos].is_mine()));
    }

    #[test]
    fn flood_is_contained_by_wall_of_mines() {
        let mut board = board((3, 5), &[(0, 2), (1, 2), (2, 2)]);

        let outcome = reveal_single(&mut board, (1, 0));

        // left column is zero, next column numbered, right side untouched
        assert_eq!(outcome, RevealOutcome::Revealed(6));
        for row in 0..3 {
            assert_eq!(board.is_revealed((row, 3)), Ok(false));
            assert_eq!(board.is_revealed((row, 4)), Ok(false));
        }
    }

    #[test]
    fn flood_skips_flagged_cells() {
        let mut board = board((1, 5), &[]);
        board.toggle_flag((0, 2)).unwrap();

        let outcome = reveal_single(&mut board, (0, 0));

        assert_eq!(outcome, RevealOutcome::Revealed(2));
        assert_eq!(board.is_revealed((0, 2)), Ok(false));
        assert_eq!(board.is_revealed((0, 3)), Ok(false));
        assert_eq!(board.is_flagged((0, 2)), Ok(true));
    }

    #[test]
    fn flagged_target_is_protected() {
        let mut board = board((2, 2), &[(0, 0)]);
        board.toggle_flag((0, 0)).unwrap();
        let before = board.clone();

        assert_eq!(reveal_single(&mut board, (0, 0)), RevealOutcome::NoChange);
        assert_eq!(board, before);
    }

    #[test]
    fn out_of_bounds_is_ignored() {
        let mut board = board((2, 2), &[]);

        assert_eq!(reveal_single(&mut board, (2, 0)), RevealOutcome::NoChange);
        assert_eq!(board.revealed_count(), 0);
    }

    #[test]
    fn mine_detonates() {
        let mut board = board((2, 2), &[(1, 0)]);

        assert_eq!(reveal_single(&mut board, (1, 0)), RevealOutcome::DetonatedMine);
        assert_eq!(board.is_revealed((1, 0)), Ok(true));
        assert_eq!(board.revealed_count(), 1);
    }

    #[test]
    fn large_board_does_not_overflow_stack() {
        let mut board = board((512, 512), &[]);

        assert_eq!(
            reveal_single(&mut board, (300, 200)),
            RevealOutcome::Revealed(512 * 512)
        );
    }

    #[test]
    fn reveal_all_mines_exposes_and_unflags() {
        let mut board = board((3, 3), &[(0, 0), (2, 2)]);
        board.toggle_flag((0, 0)).unwrap();
        board.toggle_flag((1, 1)).unwrap();

        reveal_all_mines(&mut board);

        assert_eq!(board.is_revealed((0, 0)), Ok(true));
        assert_eq!(board.is_revealed((2, 2)), Ok(true));
        assert_eq!(board.is_revealed((1, 1)), Ok(false));
        assert_eq!(board.flagged_count(), 0);
        assert_eq!(board.revealed_count(), 2);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.adjacent_count((1, 1)), Ok(2));
    }

    #[test]
    fn only_no_change_has_no_update() {
        assert!(!RevealOutcome::NoChange.has_update());
        assert!(RevealOutcome::Revealed(1).has_update());
        assert!(RevealOutcome::DetonatedMine.has_update());
    }
}
