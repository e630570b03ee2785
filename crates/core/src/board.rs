//! Board module - the authoritative grid of tiles
//!
//! The board is a `width x height` grid where each cell is empty or holds one
//! [`Tile`]. It carries no game rules: matching, gravity and shuffling live in
//! their own modules and reach the grid only through the accessors below.
//!
//! Uses a flat vector in row-major order (`y * width + x`).
//! Coordinates: `x` in `0..width` (left to right), `y` in `0..height`
//! (far edge to near edge). [`Board::is_legal`] is the single bounds check;
//! every accessor returns `None`/`false` for illegal coordinates instead of
//! indexing out of range.

use crate::types::{Cell, Pos, Tile};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.is_legal(x, y) {
            return None;
        }
        Some((y as usize) * self.width + (x as usize))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Check if (x, y) lies inside the grid
    #[inline(always)]
    pub fn is_legal(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    pub fn is_legal_pos(&self, pos: Pos) -> bool {
        self.is_legal(pos.x, pos.y)
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Tile at `pos`, `None` for empty or illegal cells
    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.get(pos.x, pos.y).flatten()
    }

    /// Place a tile at (x, y), replacing whatever was there
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, tile: Tile) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Empty the cell at (x, y) and return its previous tile
    pub fn clear(&mut self, x: i32, y: i32) -> Option<Tile> {
        let idx = self.index(x, y)?;
        self.cells[idx].take()
    }

    /// Exchange the contents of two cells
    /// Returns false (and changes nothing) if either is out of bounds
    pub fn swap(&mut self, a: Pos, b: Pos) -> bool {
        match (self.index(a.x, a.y), self.index(b.x, b.y)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Check if position is legal and empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is legal and occupied
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position holds a Block
    pub fn is_block_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(t)) if t.is_block())
    }

    /// Check if position holds an Item
    pub fn is_item_at(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(t)) if t.is_item())
    }

    /// Every position in scan order: column-major, `x` outer, `y` inner
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let h = self.height as i32;
        (0..self.width as i32).flat_map(move |x| (0..h).map(move |y| Pos::new(x, y)))
    }

    /// Occupied cells in scan order
    pub fn tiles(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.positions().filter_map(|p| self.tile(p).map(|t| (p, t)))
    }

    /// Item tiles in scan order
    pub fn items(&self) -> impl Iterator<Item = (Pos, Tile)> + '_ {
        self.tiles().filter(|(_, t)| t.is_item())
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Take every tile off the board, leaving it empty
    pub fn drain_tiles(&mut self) -> Vec<Tile> {
        self.cells.iter_mut().filter_map(Option::take).collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
