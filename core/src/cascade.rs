use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Visual burn duration applied before removals take effect.
pub const BURN_DELAY: Duration = Duration::from_millis(500);
/// Pause between gravity settling and the refill scan.
pub const REFILL_DELAY: Duration = Duration::from_millis(300);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CascadePhase {
    Idle,
    Removing,
    Settling,
    Refilling,
}

impl CascadePhase {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl Default for CascadePhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Cue shown while a tile set burns away.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RemovalCue {
    /// Regular match.
    Burn,
    /// Bomb tile or bomb booster.
    Explosion,
}

/// Sequences one removal through `Removing -> Settling -> Refilling` and back
/// to `Idle`. Strictly sequential per invocation; the session's processing
/// flag keeps a second cascade from starting while one is in flight.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CascadeEngine {
    phase: CascadePhase,
}

impl CascadeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CascadePhase {
        self.phase
    }

    /// Runs one full cascade over `removal`. The two `clock.sleep` calls are
    /// the only suspension points in the whole crate.
    pub async fn run<G, R, C>(
        &mut self,
        board: &mut Board,
        removal: &[Coord2],
        cue: RemovalCue,
        generator: &mut G,
        renderer: &mut R,
        clock: &C,
    ) where
        G: TileGenerator,
        R: Renderer,
        C: Clock,
    {
        self.phase = CascadePhase::Removing;
        for &at in removal {
            match cue {
                RemovalCue::Burn => renderer.burn_effect(at),
                RemovalCue::Explosion => renderer.explosion_effect(at),
            }
        }
        clock.sleep(BURN_DELAY).await;
        for &at in removal {
            if board.remove(at).is_some() {
                renderer.tile_removed(at);
            }
        }

        self.phase = CascadePhase::Settling;
        self.settle(board, renderer);

        self.phase = CascadePhase::Refilling;
        clock.sleep(REFILL_DELAY).await;
        self.refill(board, generator, renderer);

        self.phase = CascadePhase::Idle;
    }

    /// Compacts every column toward the bottom row, preserving the vertical
    /// order of the surviving tiles. Columns are independent.
    fn settle(&self, board: &mut Board, renderer: &mut impl Renderer) {
        let (width, height) = board.size();

        for x in 0..width {
            // Bottom-to-top, so re-anchoring to the bottom keeps the order.
            let mut survivors: SmallVec<[(Coord, TileKind); 8]> = SmallVec::new();
            for y in (0..height).rev() {
                if let Some(kind) = board.remove((x, y)) {
                    survivors.push((y, kind));
                }
            }

            for (offset, (old_y, kind)) in survivors.into_iter().enumerate() {
                let new_y = height - 1 - offset as Coord;
                board.set((x, new_y), kind);
                if new_y != old_y {
                    renderer.tile_moved((x, old_y), (x, new_y));
                }
            }
        }
    }

    /// Fills every hole from the first empty cell of each column downward.
    /// After settling the holes sit at the top, so this repopulates the board
    /// completely; each spawn sees the board as filled so far.
    fn refill(
        &self,
        board: &mut Board,
        generator: &mut impl TileGenerator,
        renderer: &mut impl Renderer,
    ) {
        let (width, height) = board.size();

        for x in 0..width {
            let Some(top) = (0..height).find(|&y| board.get((x, y)).is_none()) else {
                continue;
            };
            for y in top..height {
                if board.get((x, y)).is_none() {
                    let kind = generator.spawn(board);
                    board.set((x, y), kind);
                    renderer.tile_created((x, y), kind);
                }
            }
        }
    }
}
