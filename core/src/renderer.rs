use crate::*;

/// Outbound notifications from the core to whatever draws the game.
///
/// Every method defaults to a no-op so hosts implement only what they render.
/// The core never waits on the renderer; visual timing lives in [`Clock`].
/// Pixel-to-board coordinate translation, asset loading, and UI chrome are the
/// host's side of this boundary.
pub trait Renderer {
    /// A tile at `at` started its burn-away cue (regular match).
    fn burn_effect(&mut self, _at: Coord2) {}

    /// A tile at `at` started its explosion cue (bomb tile or bomb booster).
    fn explosion_effect(&mut self, _at: Coord2) {}

    fn tile_created(&mut self, _at: Coord2, _kind: TileKind) {}

    fn tile_removed(&mut self, _at: Coord2) {}

    fn tile_moved(&mut self, _from: Coord2, _to: Coord2) {}

    /// Score, moves, booster charges, or mode flags changed.
    fn state_changed(&mut self, _state: &GameState, _boosters: &BoosterState) {}

    /// Fires exactly once per session, when the game is decided.
    fn game_ended(&mut self, _won: bool, _final_score: u32) {}
}

/// Renderer that ignores every notification; headless hosts and tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}
