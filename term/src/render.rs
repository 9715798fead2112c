use sapper_core::{CellView, Snapshot};
use std::fmt::Write;

fn glyph(cell: CellView) -> char {
    match cell {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from_digit(count.into(), 10).unwrap_or('?'),
        CellView::Mine => '*',
    }
}

/// Draws the status line, the timer and the grid with row/column indices.
pub fn render(snapshot: &Snapshot) -> String {
    let (rows, cols) = snapshot.size;
    let width = rows.max(cols).saturating_sub(1).to_string().len();
    let mut out = String::new();

    let _ = writeln!(out, "{}", snapshot.status_line());
    if let Some(elapsed) = snapshot.elapsed {
        let _ = writeln!(out, "Time: {}s", elapsed.as_secs());
    }

    let _ = write!(out, "{:width$} ", "");
    for col in 0..cols {
        let _ = write!(out, " {:>width$}", col);
    }
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{:>width$} ", row);
        for col in 0..cols {
            let _ = write!(out, " {:>width$}", glyph(snapshot.cell_at((row, col))));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::{Board, Game, ManualClock};

    fn game(size: (u16, u16), mines: &[(u16, u16)]) -> Game<ManualClock> {
        Game::from_board(
            Board::from_mine_coords(size, mines).unwrap(),
            ManualClock::new(),
        )
    }

    #[test]
    fn renders_fresh_board() {
        let game = game((2, 3), &[(0, 0)]);

        assert_eq!(
            render(&game.snapshot()),
            "Minesweeper: 2x3 1 Bombs Left\n   0 1 2\n0  # # #\n1  # # #\n"
        );
    }

    #[test]
    fn renders_revealed_flagged_and_lost() {
        let mut game = game((2, 3), &[(0, 0)]);
        game.handle_reveal((1, 2)).unwrap();
        game.handle_toggle_flag((1, 0)).unwrap();

        assert_eq!(
            render(&game.snapshot()),
            "Minesweeper: 2x3 0 Bombs Left\nTime: 0s\n   0 1 2\n0  # 1 .\n1  F 1 .\n"
        );

        game.handle_reveal((0, 0)).unwrap();
        assert_eq!(
            render(&game.snapshot()),
            "Game Over! Press 'r' to Reset\nTime: 0s\n   0 1 2\n0  * 1 .\n1  # 1 .\n"
        );
    }

    #[test]
    fn wide_boards_pad_indices() {
        let game = game((1, 11), &[]);
        let text = render(&game.snapshot());
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[1], "     0  1  2  3  4  5  6  7  8  9 10");
        assert_eq!(lines[2], " 0   .  .  .  .  .  .  .  .  .  .  .".replace('.', "#"));
    }
}
