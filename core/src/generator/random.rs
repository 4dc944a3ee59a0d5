use super::*;
use rand::prelude::*;

/// Probability that a spawned tile is a bomb when no bomb is on the board.
pub const BOMB_SPAWN_CHANCE: f64 = 0.05;

/// Seeded production generator.
///
/// While any bomb tile sits on the board only color tiles are produced, which
/// keeps the live bomb population at roughly one. The cap is probabilistic, a
/// property of repeated spawns rather than an invariant enforced elsewhere:
/// several empty cells refilled in one pass can briefly admit a second bomb
/// once the first one burns.
#[derive(Clone, Debug)]
pub struct RandomTileGenerator {
    rng: SmallRng,
}

impl RandomTileGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    fn color(&mut self) -> TileKind {
        let index = self.rng.random_range(0..TileKind::COLORS.len());
        TileKind::COLORS[index]
    }
}

impl TileGenerator for RandomTileGenerator {
    fn spawn(&mut self, board: &Board) -> TileKind {
        if board.contains_bomb() {
            return self.color();
        }
        if self.rng.random_bool(BOMB_SPAWN_CHANCE) {
            return TileKind::Bomb;
        }
        self.color()
    }

    fn shuffle(&mut self, kinds: &mut [TileKind]) {
        kinds.shuffle(&mut self.rng);
    }
}
