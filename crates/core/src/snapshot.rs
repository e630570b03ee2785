//! Plain-data view of a session for renderers and logs

use serde::Serialize;

use crate::board::Board;
use crate::types::{Cell, Phase, Pos, VariantId};

/// What a renderer needs to know about one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CellSnapshot {
    #[default]
    Empty,
    Item {
        variant: VariantId,
    },
    Block,
}

impl From<Cell> for CellSnapshot {
    fn from(cell: Cell) -> Self {
        match cell {
            None => CellSnapshot::Empty,
            Some(t) if t.is_block() => CellSnapshot::Block,
            Some(t) => CellSnapshot::Item { variant: t.variant },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct BoardSnapshot {
    pub width: usize,
    pub height: usize,
    /// Row-major, far edge first
    pub cells: Vec<CellSnapshot>,
    pub score: u32,
    pub phase: Phase,
    pub input_locked: bool,
    pub selection: Option<Pos>,
    /// Suggested swap, when one was asked for
    pub hint: Option<(Pos, Pos)>,
}

impl BoardSnapshot {
    /// Copy the board's cells, reusing the existing allocation
    pub fn capture_board(&mut self, board: &Board) {
        self.width = board.width();
        self.height = board.height();
        self.cells.clear();
        self.cells
            .extend(board.cells().iter().map(|&c| CellSnapshot::from(c)));
    }

    pub fn from_board(board: &Board) -> Self {
        let mut snap = Self::default();
        snap.capture_board(board);
        snap
    }

    pub fn cell(&self, x: usize, y: usize) -> CellSnapshot {
        if x >= self.width || y >= self.height {
            return CellSnapshot::Empty;
        }
        self.cells[y * self.width + x]
    }

    /// Input is accepted only when idle and unlocked
    pub fn playable(&self) -> bool {
        self.phase == Phase::Idle && !self.input_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::layout::parse_layout;
    use crate::pool::TilePool;

    #[test]
    fn captures_cell_kinds() {
        let catalog = Catalog::builtin();
        let mut pool = TilePool::new(8);
        let board = parse_layout(&["A#", ".B"], &catalog, &mut pool).unwrap();

        let snap = BoardSnapshot::from_board(&board);
        let items = catalog.active_items(4).unwrap();

        assert_eq!(
            snap.cell(0, 0),
            CellSnapshot::Item {
                variant: items[0].id
            }
        );
        assert_eq!(snap.cell(1, 0), CellSnapshot::Block);
        assert_eq!(snap.cell(0, 1), CellSnapshot::Empty);
        assert_eq!(snap.cell(5, 5), CellSnapshot::Empty);
        assert!(snap.playable());
    }

    #[test]
    fn serializes_to_json() {
        let catalog = Catalog::builtin();
        let mut pool = TilePool::new(8);
        let board = parse_layout(&["#A"], &catalog, &mut pool).unwrap();
        let mut snap = BoardSnapshot::from_board(&board);
        snap.score = 25;
        snap.phase = Phase::Shuffling;

        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["score"], 25);
        assert_eq!(json["phase"], "shuffling");
        assert_eq!(json["cells"][0]["kind"], "block");
        assert_eq!(json["cells"][1]["kind"], "item");
        assert_eq!(json["cells"][1]["variant"], 0);
    }
}
