use serde::{Deserialize, Serialize};

use crate::Coord2;

/// Tile variants that can occupy a board cell: five colors plus the bomb.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Blue,
    Green,
    Red,
    Purple,
    Orange,
    Bomb,
}

impl TileKind {
    pub const COLORS: [TileKind; 5] = [
        Self::Blue,
        Self::Green,
        Self::Red,
        Self::Purple,
        Self::Orange,
    ];

    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    pub const fn is_color(self) -> bool {
        !self.is_bomb()
    }
}

/// A placed tile. Identity is positional: moving a tile is modeled as a remove
/// at the old coordinate plus an insert at the new one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub pos: Coord2,
    pub kind: TileKind,
}
