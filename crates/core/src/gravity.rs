//! Gravity - compacts Items toward the near edge and spawns replacements
//!
//! Compaction walks rows from the near edge (`y = height - 1`) toward the far
//! edge, columns left to right. An Item falls straight while the cell below
//! is empty. Where it comes to rest it may slide diagonally:
//!
//! - down-left, when its left neighbour is occupied and the cell below that
//!   neighbour is empty;
//! - down-right, only around a Block: the right neighbour is a Block, the cell
//!   past it is a Block or off the grid, and the cell below the Block is empty.
//!
//! After a slide the tile keeps falling from its new column. Every step moves
//! one row toward the near edge, so settling ends within `height` steps.
//!
//! The board is updated as each step is decided. The returned paths only tell
//! the animation collaborator how to replay the motion.
//!
//! Spawning then fills each column from the far edge: while `(x, 0)` is empty
//! a new Item appears `k` rows above the grid, drops `k` rows into `(x, 0)` and
//! settles like any other tile.

use tracing::{debug, warn};

use crate::board::Board;
use crate::catalog::VariantDef;
use crate::pool::TilePool;
use crate::rng::SimpleRng;
use crate::types::{Pos, Step, Tile};

/// One tile's motion during a refill
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMove {
    pub tile: Tile,
    /// Where the motion starts; above the grid (`y < 0`) for spawned tiles
    pub from: Pos,
    /// Resting cell
    pub to: Pos,
    pub path: Vec<Step>,
    pub spawned: bool,
}

/// Move the tile at `pos` one step, returning its new position
fn take_step(board: &mut Board, pos: Pos, step: Step, path: &mut Vec<Step>) -> Pos {
    let next = step.apply(pos);
    if let Some(tile) = board.clear(pos.x, pos.y) {
        board.set(next.x, next.y, tile);
    }
    path.push(step);
    next
}

fn can_slide_left(board: &Board, pos: Pos) -> bool {
    let (x, y) = (pos.x, pos.y);
    board.is_occupied(x - 1, y) && board.is_empty_at(x - 1, y + 1)
}

fn can_slide_right(board: &Board, pos: Pos) -> bool {
    let (x, y) = (pos.x, pos.y);
    board.is_block_at(x + 1, y)
        && (!board.is_legal(x + 2, y) || board.is_block_at(x + 2, y))
        && board.is_empty_at(x + 1, y + 1)
}

/// Let the tile at `start` fall as far as it can, appending to `path`
pub fn settle(board: &mut Board, start: Pos, path: &mut Vec<Step>) -> Pos {
    let mut pos = start;
    loop {
        while board.is_empty_at(pos.x, pos.y + 1) {
            pos = take_step(board, pos, Step::Fall, path);
        }

        if can_slide_left(board, pos) {
            pos = take_step(board, pos, Step::FallLeft, path);
        } else if can_slide_right(board, pos) {
            pos = take_step(board, pos, Step::FallRight, path);
        } else {
            return pos;
        }
    }
}

/// Compact every Item, then spawn new Items from `items` until each column's
/// far-edge cell is filled.
///
/// Returns every tile that moved or was spawned, in the order decided.
pub fn refill(
    board: &mut Board,
    items: &[VariantDef],
    pool: &mut TilePool,
    rng: &mut SimpleRng,
) -> Vec<TileMove> {
    let mut moves = Vec::new();
    let w = board.width() as i32;
    let h = board.height() as i32;

    for y in (0..h).rev() {
        for x in 0..w {
            let Some(tile) = board.tile(Pos::new(x, y)).filter(Tile::is_item) else {
                continue;
            };
            let from = Pos::new(x, y);
            let mut path = Vec::new();
            let to = settle(board, from, &mut path);
            if !path.is_empty() {
                moves.push(TileMove {
                    tile,
                    from,
                    to,
                    path,
                    spawned: false,
                });
            }
        }
    }

    for x in 0..w {
        let mut k = 0;
        while board.is_empty_at(x, 0) {
            let Some(def) = rng.pick(items) else {
                warn!("no item variants to spawn from");
                return moves;
            };
            k += 1;
            let tile = pool.take(def);
            board.set(x, 0, tile);

            let mut path = vec![Step::Fall; k as usize];
            let to = settle(board, Pos::new(x, 0), &mut path);
            moves.push(TileMove {
                tile,
                from: Pos::new(x, -k),
                to,
                path,
                spawned: true,
            });
        }
    }

    let left_empty = board.empty_count();
    if left_empty > 0 {
        // Cells shadowed by Blocks that no diagonal route reaches.
        warn!(left_empty, "refill left unreachable empty cells");
    }
    debug!(moved = moves.len(), "refill done");

    moves
}
