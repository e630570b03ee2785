//! Possible-move analysis - is there any swap that would create a run?
//!
//! For every Item on the board six templates describe the situations in which
//! a single swap completes a run through a *landing* cell:
//!
//! ```text
//! immediate right   X P L      immediate up    X        spaced horizontal  X L P
//!                       c                      P                             c
//!                                              L c
//! ```
//!
//! (and their mirrored counterparts). `P` is the partner that must already
//! hold the same variant as `X`, `L` is the landing cell that must hold a
//! swappable Item, and `c` are completion cells: if any holds the same
//! variant, swapping it into `L` makes a run.
//!
//! The analysis only reads the board.

use crate::board::Board;
use crate::types::{Pos, Tile};

/// One swap the player could make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PossibleMove {
    /// Tile that moves into the landing cell
    pub from: Pos,
    /// The landing cell
    pub to: Pos,
}

struct MoveTemplate {
    partner: (i32, i32),
    landing: (i32, i32),
    completions: &'static [(i32, i32)],
}

const TEMPLATES: [MoveTemplate; 6] = [
    // immediate right
    MoveTemplate {
        partner: (1, 0),
        landing: (2, 0),
        completions: &[(2, 1), (2, -1), (3, 0)],
    },
    // immediate left
    MoveTemplate {
        partner: (1, 0),
        landing: (-1, 0),
        completions: &[(-1, 1), (-1, -1), (-2, 0)],
    },
    // immediate up (toward the near edge)
    MoveTemplate {
        partner: (0, 1),
        landing: (0, 2),
        completions: &[(1, 2), (-1, 2), (0, 3)],
    },
    // immediate down
    MoveTemplate {
        partner: (0, -1),
        landing: (0, -2),
        completions: &[(1, -2), (-1, -2), (0, -3)],
    },
    // horizontally spaced
    MoveTemplate {
        partner: (2, 0),
        landing: (1, 0),
        completions: &[(1, 1), (1, -1)],
    },
    // vertically spaced
    MoveTemplate {
        partner: (0, 2),
        landing: (0, 1),
        completions: &[(1, 1), (-1, 1)],
    },
];

fn same_variant_at(board: &Board, pos: Pos, tile: &Tile) -> bool {
    board.is_legal_pos(pos) && board.tile(pos).is_some_and(|t| t.matches(tile))
}

fn check_templates(board: &Board, origin: Pos, tile: &Tile) -> Option<PossibleMove> {
    for template in &TEMPLATES {
        let partner = origin.offset(template.partner.0, template.partner.1);
        if !same_variant_at(board, partner, tile) {
            continue;
        }

        let landing = origin.offset(template.landing.0, template.landing.1);
        let landing_ok = board.is_legal_pos(landing)
            && board
                .tile(landing)
                .is_some_and(|t| t.is_item() && t.swappable);
        if !landing_ok {
            continue;
        }

        for &(dx, dy) in template.completions {
            let completion = origin.offset(dx, dy);
            if same_variant_at(board, completion, tile) {
                return Some(PossibleMove {
                    from: completion,
                    to: landing,
                });
            }
        }
    }
    None
}

/// First possible move in scan order, if any
pub fn find_possible_move(board: &Board) -> Option<PossibleMove> {
    board.positions().find_map(|pos| {
        let tile = board.tile(pos)?;
        if !tile.is_item() {
            return None;
        }
        check_templates(board, pos, &tile)
    })
}

/// Whether at least one swap anywhere on the board would create a run
pub fn has_possible_move(board: &Board) -> bool {
    find_possible_move(board).is_some()
}
