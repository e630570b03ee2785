//! Text layouts - build boards from strings and print them back
//!
//! One string per row, far edge first:
//!
//! - `A`, `B`, `C`, ... : the 1st, 2nd, 3rd, ... Item variant of the catalog
//! - `#` : the Block variant
//! - `.` : empty cell
//!
//! Handy for tests, debug logs and reproducing reported positions.

use crate::board::Board;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::pool::TilePool;

const BLOCK_CHAR: char = '#';
const EMPTY_CHAR: char = '.';

/// Build a board from text rows, taking tiles from `pool`
pub fn parse_layout(rows: &[&str], catalog: &Catalog, pool: &mut TilePool) -> CoreResult<Board> {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.chars().count());
    if height == 0 || width == 0 {
        return Err(CoreError::Layout {
            message: "layout is empty".to_string(),
        });
    }

    let items: Vec<_> = catalog.items().collect();
    let mut board = Board::new(width, height);

    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(CoreError::Layout {
                message: format!("row {} has {} cells, expected {}", y, row.chars().count(), width),
            });
        }
        for (x, ch) in row.chars().enumerate() {
            let def = match ch {
                EMPTY_CHAR => continue,
                BLOCK_CHAR => catalog.block(),
                'A'..='Z' => {
                    let idx = (ch as u8 - b'A') as usize;
                    *items.get(idx).ok_or_else(|| CoreError::Layout {
                        message: format!("no item variant for '{}'", ch),
                    })?
                }
                other => {
                    return Err(CoreError::Layout {
                        message: format!("unexpected character '{}'", other),
                    })
                }
            };
            board.set(x as i32, y as i32, pool.take(def));
        }
    }

    Ok(board)
}

/// Print a board in the same notation `parse_layout` reads
pub fn render_layout(board: &Board, catalog: &Catalog) -> Vec<String> {
    let items: Vec<_> = catalog.items().map(|d| d.id).collect();
    (0..board.height() as i32)
        .map(|y| {
            (0..board.width() as i32)
                .map(|x| match board.get(x, y).flatten() {
                    None => EMPTY_CHAR,
                    Some(t) if t.is_block() => BLOCK_CHAR,
                    Some(t) => items
                        .iter()
                        .position(|&id| id == t.variant)
                        .map_or('?', |i| (b'A' + i as u8) as char),
                })
                .collect()
        })
        .collect()
}
