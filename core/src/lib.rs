use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::ops::Index;

pub use cascade::*;
pub use error::*;
pub use generator::*;
pub use matcher::*;
pub use renderer::*;
pub use scoring::*;
pub use session::*;
pub use tile::*;
pub use timing::*;
pub use types::*;

mod cascade;
mod error;
mod generator;
mod matcher;
mod renderer;
mod scoring;
mod session;
mod tile;
mod timing;
mod types;

#[cfg(test)]
pub(crate) mod testing;

/// Immutable per-session settings. Defaults follow the classic 6x8 layout with
/// a 500 point target, 20 moves, and three charges of each booster.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_width: Coord,
    pub board_height: Coord,
    pub target_score: u32,
    pub max_moves: u32,
    pub shuffle_count: u8,
    pub bomb_count: u8,
}

impl GameConfig {
    pub const fn new_unchecked(board_width: Coord, board_height: Coord) -> Self {
        Self {
            board_width,
            board_height,
            target_score: 500,
            max_moves: 20,
            shuffle_count: 3,
            bomb_count: 3,
        }
    }

    pub fn new(board_width: Coord, board_height: Coord) -> Self {
        if board_width == 0 || board_height == 0 {
            log::warn!(
                "Degenerate board size {}x{} clamped to at least 1x1",
                board_width,
                board_height
            );
        }
        Self::new_unchecked(board_width.max(1), board_height.max(1))
    }

    pub const fn size(&self) -> Coord2 {
        (self.board_width, self.board_height)
    }

    pub const fn total_tiles(&self) -> TileCount {
        mult(self.board_width, self.board_height)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(6, 8)
    }
}

/// The W x H grid of tile slots and the tiles currently occupying them. A pure
/// data container: bounds-checked access, no game rules. The grid may be
/// partially empty mid-cascade but holds exactly W x H tiles whenever the
/// cascade engine is idle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Option<TileKind>>,
}

impl Board {
    /// Creates an empty board sized to `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            tiles: Array2::default(config.size().to_nd_index()),
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Tile at `coords`, if any. Out-of-bounds coordinates are a programming
    /// error and panic.
    pub fn get(&self, coords: Coord2) -> Option<TileKind> {
        self.tiles[coords.to_nd_index()]
    }

    pub fn set(&mut self, coords: Coord2, kind: TileKind) {
        self.tiles[coords.to_nd_index()] = Some(kind);
    }

    /// Removes and returns the tile at `coords`.
    pub fn remove(&mut self, coords: Coord2) -> Option<TileKind> {
        self.tiles[coords.to_nd_index()].take()
    }

    pub fn tile_count(&self) -> TileCount {
        self.tiles
            .iter()
            .filter(|slot| slot.is_some())
            .count()
            .try_into()
            .unwrap()
    }

    /// True iff every one of the W x H slots holds a tile.
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(Option::is_some)
    }

    pub fn contains_bomb(&self) -> bool {
        self.tiles.iter().flatten().any(|kind| kind.is_bomb())
    }

    /// All board coordinates in row-major order, `x` varying fastest.
    pub fn coords(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (width, height) = self.size();
        (0..height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Every placed tile, in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = Tile> {
        self.coords()
            .filter_map(|pos| self.get(pos).map(|kind| Tile { pos, kind }))
    }

    pub(crate) fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.tiles.iter_neighbors(coords)
    }
}

impl Index<Coord2> for Board {
    type Output = Option<TileKind>;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.tiles[coords.to_nd_index()]
    }
}

/// What a call to [`GameSession::handle_click`] did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    /// Dropped without effect: mid-cascade, after game over, or a duplicate.
    Ignored,
    /// A valid click that resolved no removable tiles.
    NoMatch,
    /// A contiguous color run burned; costs a move.
    Matched { tiles: u8, points: u32 },
    /// A bomb-tile row or bomb-booster cross exploded; moves are untouched.
    Detonated { tiles: u8, points: u32 },
}

impl ClickOutcome {
    pub const fn has_update(self) -> bool {
        use ClickOutcome::*;
        match self {
            Ignored => false,
            NoMatch => false,
            Matched { .. } => true,
            Detonated { .. } => true,
        }
    }
}
