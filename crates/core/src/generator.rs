//! Initial board generation
//!
//! Cells are filled in scan order (column-major: `x` ascending, then `y`
//! ascending from the far edge). Each cell either receives a Block, spending
//! the Block quota evenly over the remaining cells, or a random Item whose
//! variant would not complete a run with the two cells before it in its row
//! or column. Boards without a possible move are discarded and regenerated,
//! up to [`MAX_GENERATION_ATTEMPTS`] times.

use arrayvec::ArrayVec;
use tracing::{debug, warn};

use crate::board::Board;
use crate::catalog::{Catalog, VariantDef};
use crate::config::GameConfig;
use crate::error::{CoreError, CoreResult};
use crate::moves::has_possible_move;
use crate::pool::TilePool;
use crate::rng::SimpleRng;
use crate::types::{Pos, VariantId, MAX_GENERATION_ATTEMPTS};

/// Variants that would complete a run at `pos`.
///
/// Looks only backward (`x-1, x-2` and `y-1, y-2`), the cells already filled
/// in scan order. Each axis denies at most one variant.
pub fn denied_variants(board: &Board, pos: Pos) -> ArrayVec<VariantId, 2> {
    let mut denied = ArrayVec::new();
    for (dx, dy) in [(-1, 0), (0, -1)] {
        let prev = board.tile(pos.offset(dx, dy));
        let second = board.tile(pos.offset(2 * dx, 2 * dy));
        if let (Some(prev), Some(second)) = (prev, second) {
            if prev.matches(&second) && !denied.contains(&prev.variant) {
                denied.push(prev.variant);
            }
        }
    }
    denied
}

/// Block placement chance at the current cell, in percent.
///
/// `ceil(100 / (remaining_cells / remaining_blocks))`: when as many cells
/// remain as Blocks, the chance reaches 100 and the quota is always met.
fn block_chance(remaining_cells: usize, remaining_blocks: usize) -> f32 {
    if remaining_blocks == 0 || remaining_cells == 0 {
        return 0.0;
    }
    (100.0 / (remaining_cells as f32 / remaining_blocks as f32)).ceil()
}

/// Fill an empty board once, without checking for possible moves
pub fn fill_board(
    config: &GameConfig,
    catalog: &Catalog,
    items: &[VariantDef],
    pool: &mut TilePool,
    rng: &mut SimpleRng,
) -> Board {
    let mut board = Board::new(config.width as usize, config.height as usize);
    let total = board.area();
    let mut blocks_left = config.blocks_count as usize;

    let positions: Vec<Pos> = board.positions().collect();
    for (filled, pos) in positions.into_iter().enumerate() {
        if blocks_left > 0 && block_chance(total - filled, blocks_left) > rng.next_percent() {
            blocks_left -= 1;
            board.set(pos.x, pos.y, pool.take(catalog.block()));
            continue;
        }

        let denied = denied_variants(&board, pos);
        let allowed: ArrayVec<&VariantDef, 8> = items
            .iter()
            .filter(|d| !denied.contains(&d.id))
            .take(8)
            .collect();
        // At least four variants are active and at most two are denied.
        if let Some(def) = rng.pick(&allowed) {
            board.set(pos.x, pos.y, pool.take(def));
        }
    }

    board
}

/// Generate a board with no runs and at least one possible move
pub fn generate(
    config: &GameConfig,
    catalog: &Catalog,
    pool: &mut TilePool,
    rng: &mut SimpleRng,
) -> CoreResult<Board> {
    config.validate()?;
    let items = catalog.active_items(config.tile_type_count)?;

    for attempt in 1..=MAX_GENERATION_ATTEMPTS {
        let mut board = fill_board(config, catalog, &items, pool, rng);
        if has_possible_move(&board) {
            debug!(attempt, "board generated");
            return Ok(board);
        }
        warn!(attempt, "generated board has no possible move, regenerating");
        pool.give_back_all(board.drain_tiles());
    }

    Err(CoreError::GenerationFailed {
        attempts: MAX_GENERATION_ATTEMPTS,
    })
}
