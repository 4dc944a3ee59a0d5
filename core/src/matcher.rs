use smallvec::SmallVec;

use crate::*;

/// Removal set resolved from one click; rows are short so this stays inline.
pub type TileSet = SmallVec<[Coord2; 8]>;

/// Maximal contiguous horizontal run of `kind` through `origin`.
///
/// The full row is scanned first: when `kind` occurs fewer than two times in
/// the whole row there is nothing to match and the result is empty. Otherwise
/// the run grows left and right from the origin, stopping at the first hole or
/// differently-colored tile. A run shorter than two tiles is still no match,
/// even when the row holds a larger non-contiguous count. Matching is
/// horizontal-only by design; there is no vertical or diagonal case.
pub fn horizontal_group(board: &Board, origin: Coord2, kind: TileKind) -> TileSet {
    let (ox, oy) = origin;
    let width = board.width();

    if board.get(origin) != Some(kind) {
        return TileSet::new();
    }

    let row_total = (0..width).filter(|&x| board.get((x, oy)) == Some(kind)).count();
    if row_total < 2 {
        return TileSet::new();
    }

    let mut run = TileSet::new();
    run.push(origin);

    for x in (0..ox).rev() {
        if board.get((x, oy)) == Some(kind) {
            run.insert(0, (x, oy));
        } else {
            break;
        }
    }

    for x in ox + 1..width {
        if board.get((x, oy)) == Some(kind) {
            run.push((x, oy));
        } else {
            break;
        }
    }

    if run.len() < 2 {
        return TileSet::new();
    }
    run
}

/// Every occupied cell of row `y`; the bomb-tile explosion set.
pub fn row_coords(board: &Board, y: Coord) -> TileSet {
    (0..board.width())
        .map(|x| (x, y))
        .filter(|&at| board.get(at).is_some())
        .collect()
}

/// The occupied cells of the cross centered at `center`: the center itself
/// plus its in-bounds orthogonal neighbors. The bomb-booster detonation set.
pub fn cross_coords(board: &Board, center: Coord2) -> TileSet {
    core::iter::once(center)
        .chain(board.iter_neighbors(center))
        .filter(|&at| board.get(at).is_some())
        .collect()
}
