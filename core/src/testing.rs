//! Shared fixtures for the unit tests: scripted randomness, a recording
//! renderer, and literal board construction.

use std::collections::VecDeque;

use crate::*;

/// Generator that replays a fixed spawn script, then repeats a fallback kind.
/// Its "shuffle" reverses the slice, a deterministic non-identity permutation.
pub(crate) struct ScriptedGenerator {
    script: VecDeque<TileKind>,
    fallback: TileKind,
}

impl ScriptedGenerator {
    pub(crate) fn new(script: &[TileKind], fallback: TileKind) -> Self {
        Self {
            script: script.iter().copied().collect(),
            fallback,
        }
    }

    pub(crate) fn constant(kind: TileKind) -> Self {
        Self::new(&[], kind)
    }
}

impl TileGenerator for ScriptedGenerator {
    fn spawn(&mut self, _board: &Board) -> TileKind {
        self.script.pop_front().unwrap_or(self.fallback)
    }

    fn shuffle(&mut self, kinds: &mut [TileKind]) {
        kinds.reverse();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Event {
    Burn(Coord2),
    Explosion(Coord2),
    Created(Coord2, TileKind),
    Removed(Coord2),
    Moved(Coord2, Coord2),
    State(GameState, BoosterState),
    Ended(bool, u32),
}

/// Renderer that records every notification in call order.
#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub(crate) events: Vec<Event>,
}

impl Renderer for RecordingRenderer {
    fn burn_effect(&mut self, at: Coord2) {
        self.events.push(Event::Burn(at));
    }

    fn explosion_effect(&mut self, at: Coord2) {
        self.events.push(Event::Explosion(at));
    }

    fn tile_created(&mut self, at: Coord2, kind: TileKind) {
        self.events.push(Event::Created(at, kind));
    }

    fn tile_removed(&mut self, at: Coord2) {
        self.events.push(Event::Removed(at));
    }

    fn tile_moved(&mut self, from: Coord2, to: Coord2) {
        self.events.push(Event::Moved(from, to));
    }

    fn state_changed(&mut self, state: &GameState, boosters: &BoosterState) {
        self.events.push(Event::State(*state, *boosters));
    }

    fn game_ended(&mut self, won: bool, final_score: u32) {
        self.events.push(Event::Ended(won, final_score));
    }
}

/// Builds a board from row literals, top row first; `None` leaves a hole.
/// Every row must have the same width.
pub(crate) fn board_from_rows(rows: &[&[Option<TileKind>]]) -> Board {
    let height = rows.len() as Coord;
    let width = rows[0].len() as Coord;
    let mut board = Board::new(&GameConfig::new_unchecked(width, height));

    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), usize::from(width), "ragged row literal");
        for (x, slot) in row.iter().enumerate() {
            if let Some(kind) = slot {
                board.set((x as Coord, y as Coord), *kind);
            }
        }
    }
    board
}

/// Flattens row literals into the row-major spawn order used by
/// `GameSession::initialize`.
pub(crate) fn kinds_from_rows(rows: &[&[TileKind]]) -> Vec<TileKind> {
    rows.iter().flat_map(|row| row.iter().copied()).collect()
}
