//! Shuffle - redistributes the Items when the board has no possible move
//!
//! The Items are collected, permuted (Fisher-Yates) and dealt back into the
//! non-Block cells in scan order. Each cell takes the *last* remaining tile
//! whose variant would not complete a run with the two cells already dealt
//! before it in its row or column. If some cell finds no such tile the deal is
//! abandoned and a fresh permutation is tried.
//!
//! Blocks and empty cells stay where they are. A successful shuffle leaves no
//! run on the board but does not promise a possible move; the caller checks
//! and shuffles again if needed.

use tracing::debug;

use crate::board::Board;
use crate::error::{CoreError, CoreResult};
use crate::generator::denied_variants;
use crate::rng::SimpleRng;
use crate::types::{Pos, Tile, MAX_SHUFFLE_ATTEMPTS};

/// Where one Item went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShuffleMove {
    pub tile: Tile,
    pub from: Pos,
    pub to: Pos,
}

/// Deal `deck` into a copy of `board`'s layout, `None` if a cell cannot be filled
fn deal(board: &Board, mut deck: Vec<(Pos, Tile)>) -> Option<(Board, Vec<ShuffleMove>)> {
    let mut dealt = Board::new(board.width(), board.height());
    let mut moves = Vec::with_capacity(deck.len());

    for pos in board.positions() {
        match board.tile(pos) {
            Some(tile) if tile.is_item() => {
                let denied = denied_variants(&dealt, pos);
                let idx = deck
                    .iter()
                    .rposition(|(_, t)| !denied.contains(&t.variant))?;
                let (from, tile) = deck.remove(idx);
                dealt.set(pos.x, pos.y, tile);
                moves.push(ShuffleMove { tile, from, to: pos });
            }
            Some(block) => {
                dealt.set(pos.x, pos.y, block);
            }
            None => {}
        }
    }

    Some((dealt, moves))
}

/// Shuffle the Items on `board` in place.
///
/// Returns one move per Item (including those that end up where they
/// started). On failure the board is left unchanged.
pub fn shuffle(board: &mut Board, rng: &mut SimpleRng) -> CoreResult<Vec<ShuffleMove>> {
    let items: Vec<(Pos, Tile)> = board.items().collect();

    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        let mut deck = items.clone();
        rng.shuffle(&mut deck);

        if let Some((dealt, moves)) = deal(board, deck) {
            debug!(attempt, items = moves.len(), "board shuffled");
            *board = dealt;
            return Ok(moves);
        }
    }

    Err(CoreError::ShuffleFailed {
        attempts: MAX_SHUFFLE_ATTEMPTS,
    })
}
