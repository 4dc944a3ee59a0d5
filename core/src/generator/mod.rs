use crate::*;
pub use random::*;

mod random;

/// Source of freshly spawned tiles and of shuffle permutations.
///
/// Injected into the session so spawn and shuffle outcomes are reproducible
/// under a fixed seed; tests script it outright.
pub trait TileGenerator {
    /// Kind for the next spawned tile. The current board is passed in because
    /// the spawn policy depends on what is already placed.
    fn spawn(&mut self, board: &Board) -> TileKind;

    /// Uniformly permutes `kinds` in place; the shuffle booster's randomness.
    fn shuffle(&mut self, kinds: &mut [TileKind]);
}
