use std::io::{BufRead, Write};

use sapper_core::{Clock, Game, RandomSource};

use crate::input::{self, Command};
use crate::render;

/// Feeds input lines into the game until `quit` or end of input, redrawing after every change.
pub fn run<C, R, I, O>(game: &mut Game<C>, rng: &mut R, input: I, mut output: O) -> anyhow::Result<()>
where
    C: Clock,
    R: RandomSource + ?Sized,
    I: BufRead,
    O: Write,
{
    write!(output, "{}", render::render(&game.snapshot()))?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        let command = match input::parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                writeln!(output, "{}", err)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(output, "{}", input::HELP)?;
                continue;
            }
            Command::Play(action) => match game.handle(action, rng) {
                Ok(outcome) => {
                    log::debug!("{:?} -> {:?}", action, outcome);
                    if !outcome.has_update() {
                        continue;
                    }
                }
                Err(err) => {
                    log::warn!("Rejected {:?}: {}", action, err);
                    writeln!(output, "{}", err)?;
                    continue;
                }
            },
        }

        write!(output, "{}", render::render(&game.snapshot()))?;
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use sapper_core::{Board, ManualClock, Phase};

    fn play(game: &mut Game<ManualClock>, script: &str) -> String {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut output = Vec::new();
        run(game, &mut rng, script.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn game(size: (u16, u16), mines: &[(u16, u16)]) -> Game<ManualClock> {
        Game::from_board(
            Board::from_mine_coords(size, mines).unwrap(),
            ManualClock::new(),
        )
    }

    #[test]
    fn winning_session() {
        let mut game = game((2, 2), &[(1, 1)]);

        let output = play(&mut game, "r 0 0\nf 1 1\n");

        assert_eq!(game.phase(), Phase::Won);
        assert!(output.ends_with("You Win! Press 'r' to Reset\nTime: 0s\n   0 1\n0  1 #\n1  # F\n"));
    }

    #[test]
    fn rejected_actions_are_reported() {
        let mut game = game((2, 2), &[(1, 1)]);

        let output = play(&mut game, "r 5 5\nbogus\n\nr 1 1\nf 0 0\n");

        assert_eq!(game.phase(), Phase::Lost);
        assert!(output.contains("Coordinates out of range\n"));
        assert!(output.contains("Unknown command \"bogus\""));
        assert!(output.contains("Game Over! Press 'r' to Reset\nTime: 0s\n   0 1\n0  # #\n1  # *\n"));
        assert!(output.ends_with("Game already ended, no new moves are accepted\n"));
    }

    #[test]
    fn unchanged_board_is_not_redrawn() {
        let mut game = game((2, 2), &[(1, 1)]);

        let output = play(&mut game, "r 0 0\nr 0 0\n");

        assert_eq!(game.board().revealed_count(), 1);
        assert_eq!(output.matches("Minesweeper: 2x2 1 Bombs Left").count(), 2);
        assert!(output.ends_with("1  # #\n"));
    }

    #[test]
    fn quit_stops_reading() {
        let mut game = game((2, 2), &[(1, 1)]);

        play(&mut game, "q\nr 1 1\n");

        assert_eq!(game.phase(), Phase::Ready);
    }

    #[test]
    fn reset_starts_over() {
        let mut game = game((3, 3), &[(1, 1)]);

        play(&mut game, "r 1 1\nn\n");

        assert_eq!(game.phase(), Phase::Ready);
        assert_eq!(game.board().revealed_count(), 0);
        assert_eq!(game.mine_count(), 1);
    }
}
