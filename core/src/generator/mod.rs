use crate::*;
pub use rejection::*;

mod rejection;

/// Uniform random draws consumed by board generation.
pub trait RandomSource {
    /// Uniform value in `0..upper`, `upper` is never zero.
    fn draw(&mut self, upper: Coord) -> Coord;
}

impl<R: rand::Rng> RandomSource for R {
    fn draw(&mut self, upper: Coord) -> Coord {
        self.random_range(0..upper)
    }
}
