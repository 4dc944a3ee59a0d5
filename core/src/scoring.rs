use serde::{Deserialize, Serialize};

use crate::GameConfig;

/// Points per burned tile in a regular match.
pub const TILE_SCORE: u32 = 10;
/// Bonus for groups of five or more tiles.
pub const BIG_GROUP_BONUS: u32 = 50;
/// Additional bonus for groups of seven or more tiles.
pub const HUGE_GROUP_BONUS: u32 = 100;

/// Flat score for a bomb-tile row explosion.
pub const ROW_BLAST_SCORE: u32 = 50;
/// Flat score for a bomb-booster cross detonation.
pub const CROSS_BLAST_SCORE: u32 = 30;

/// Score for a burned group of `tile_count` tiles. The size bonuses are
/// additive: a seven-tile group earns `7 * 10 + 50 + 100 = 220`.
pub fn group_score(tile_count: usize) -> u32 {
    let mut score = tile_count as u32 * TILE_SCORE;
    if tile_count >= 5 {
        score += BIG_GROUP_BONUS;
    }
    if tile_count >= 7 {
        score += HUGE_GROUP_BONUS;
    }
    score
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Won,
    Lost,
}

impl Outcome {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Termination rule: reaching the target score wins even on the last move, so
/// the score check comes first; only then does an empty move counter lose.
pub fn evaluate(score: u32, moves_left: u32, config: &GameConfig) -> Outcome {
    if score >= config.target_score {
        Outcome::Won
    } else if moves_left == 0 {
        Outcome::Lost
    } else {
        Outcome::Ongoing
    }
}
