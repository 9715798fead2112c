use super::*;

/// Builds a finalized board with exactly `mine_count` uniformly placed mines.
///
/// Mines are placed by rejection sampling: a row and a column are drawn from `rng`, and draws
/// landing on an existing mine are thrown away. The number of draws is unbounded in theory but
/// stays close to `mine_count` while the board is sparse.
pub fn generate<R: RandomSource + ?Sized>(
    rows: Coord,
    cols: Coord,
    mine_count: CellCount,
    rng: &mut R,
) -> Result<Board> {
    let invalid = GameError::InvalidConfiguration {
        rows,
        cols,
        mines: mine_count,
    };
    if rows == 0 || cols == 0 || mine_count >= mult(rows, cols) {
        return Err(invalid);
    }

    let mut board = Board::new(rows, cols)?;
    let mut draws: u64 = 0;

    while board.mine_count() < mine_count {
        let coords = (rng.draw(rows), rng.draw(cols));
        draws += 1;
        if !board.set_mine(coords)? {
            log::trace!("Discarded duplicate mine draw at {:?}", coords);
        }
    }

    board.recompute_adjacency_counts();
    log::debug!(
        "Generated {}x{} board with {} mines in {} draws",
        rows,
        cols,
        mine_count,
        draws
    );
    Ok(board)
}
