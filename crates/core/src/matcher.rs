//! Match detection - finds runs of three or more identical Items
//!
//! Every row and every column is scanned on its own. A pending run grows while
//! consecutive Items share a variant; a Block, an empty cell, a variant change
//! or the end of the line flushes it. Flushed runs of at least
//! [`MIN_RUN_LEN`] tiles are reported.
//!
//! A tile where a row run crosses a column run appears once in
//! [`MatchResult::tiles`], but each run scores on its own.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{run_score, Pos, VariantId, MIN_RUN_LEN};

/// Direction a run extends in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Row,
    Column,
}

/// A qualifying run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub axis: Axis,
    /// First cell (leftmost for rows, nearest the far edge for columns)
    pub start: Pos,
    pub len: usize,
    pub variant: VariantId,
}

impl Run {
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let (dx, dy) = match self.axis {
            Axis::Row => (1, 0),
            Axis::Column => (0, 1),
        };
        (0..self.len as i32).map(move |i| self.start.offset(dx * i, dy * i))
    }

    pub fn score(&self) -> u32 {
        run_score(self.len)
    }
}

/// Everything one detection pass found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    /// Union of all matched positions
    pub tiles: BTreeSet<Pos>,
    pub runs: Vec<Run>,
    /// Sum of the run scores
    pub score_delta: u32,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    fn push(&mut self, run: Run) {
        self.tiles.extend(run.positions());
        self.score_delta += run.score();
        self.runs.push(run);
    }
}

/// Pending run while a line is scanned
struct Pending {
    start: Pos,
    len: usize,
    variant: VariantId,
}

/// Scan one line, reporting qualifying runs into `out`
fn scan_line(board: &Board, axis: Axis, cells: impl Iterator<Item = Pos>, out: &mut MatchResult) {
    let mut pending: Option<Pending> = None;

    let flush = |pending: &mut Option<Pending>, out: &mut MatchResult| {
        if let Some(p) = pending.take() {
            if p.len >= MIN_RUN_LEN {
                out.push(Run {
                    axis,
                    start: p.start,
                    len: p.len,
                    variant: p.variant,
                });
            }
        }
    };

    for pos in cells {
        match board.tile(pos) {
            Some(tile) if tile.is_item() => {
                let extends = matches!(&pending, Some(p) if p.variant == tile.variant);
                if extends {
                    if let Some(p) = pending.as_mut() {
                        p.len += 1;
                    }
                } else {
                    flush(&mut pending, out);
                    pending = Some(Pending {
                        start: pos,
                        len: 1,
                        variant: tile.variant,
                    });
                }
            }
            // Block or empty cell breaks the run.
            _ => flush(&mut pending, out),
        }
    }
    flush(&mut pending, out);
}

/// Find every run on the board. Never mutates the board.
pub fn find_matches(board: &Board) -> MatchResult {
    let mut result = MatchResult::default();
    let w = board.width() as i32;
    let h = board.height() as i32;

    for y in 0..h {
        scan_line(board, Axis::Row, (0..w).map(|x| Pos::new(x, y)), &mut result);
    }
    for x in 0..w {
        scan_line(board, Axis::Column, (0..h).map(|y| Pos::new(x, y)), &mut result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout::parse_layout;
    use crate::pool::TilePool;

    fn board(rows: &[&str]) -> Board {
        let mut pool = TilePool::new(64);
        parse_layout(rows, &Catalog::builtin(), &mut pool).unwrap()
    }

    #[test]
    fn two_adjacent_runs_in_one_row() {
        let b = board(&["AAABBB"]);
        let result = find_matches(&b);
        assert_eq!(result.tiles.len(), 6);
        assert_eq!(result.runs.len(), 2);
        assert_eq!(result.score_delta, 20);
    }

    #[test]
    fn run_of_five_scores_twenty() {
        let b = board(&["AAAAAB"]);
        let result = find_matches(&b);
        assert_eq!(result.runs.len(), 1);
        assert_eq!(result.runs[0].len, 5);
        assert_eq!(result.score_delta, 20);
    }

    #[test]
    fn block_and_empty_cells_break_runs() {
        let b = board(&["AA#AA.AA"]);
        assert!(find_matches(&b).is_empty());
    }

    #[test]
    fn run_touching_line_end_is_flushed() {
        let b = board(&["BCAAA"]);
        let result = find_matches(&b);
        assert_eq!(result.runs.len(), 1);
        assert_eq!(result.runs[0].start, Pos::new(2, 0));
    }

    #[test]
    fn crossing_runs_share_a_tile_but_score_twice() {
        let b = board(&[
            "BAC", //
            "AAA", //
            "CAB",
        ]);
        let result = find_matches(&b);
        assert_eq!(result.runs.len(), 2);
        assert_eq!(result.tiles.len(), 5);
        assert_eq!(result.score_delta, 20);
        assert!(result.tiles.contains(&Pos::new(1, 1)));
    }

    #[test]
    fn column_runs_are_found() {
        let b = board(&[
            "AB", //
            "AC", //
            "AB", //
            "BC",
        ]);
        let result = find_matches(&b);
        assert_eq!(result.runs.len(), 1);
        assert_eq!(result.runs[0].axis, Axis::Column);
        assert_eq!(
            result.runs[0].positions().collect::<Vec<_>>(),
            vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]
        );
    }

    #[test]
    fn detection_is_idempotent_on_settled_board() {
        let b = board(&[
            "ABAB", //
            "BABA", //
            "ABAB",
        ]);
        assert!(find_matches(&b).is_empty());
        assert!(find_matches(&b).is_empty());
    }
}
