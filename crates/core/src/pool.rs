//! Tile pool - hands out tile handles and recycles them
//!
//! Matched tiles go back to the pool and their handles are reused by the next
//! spawn, so the animation collaborator can keep one visual object per
//! handle. The pool is sized from the configuration hint and grows if a board
//! ever needs more. Whoever constructs the pool calls [`TilePool::teardown`]
//! when the session ends.

use std::collections::VecDeque;

use tracing::debug;

use crate::catalog::VariantDef;
use crate::types::{Tile, TileId};

#[derive(Debug, Clone)]
pub struct TilePool {
    free: VecDeque<TileId>,
    next_id: u32,
    capacity: usize,
    live: usize,
}

impl TilePool {
    /// Create a pool pre-filled with `capacity` handles
    pub fn new(capacity: usize) -> Self {
        let free = (0..capacity as u32).map(TileId).collect();
        Self {
            free,
            next_id: capacity as u32,
            capacity,
            live: 0,
        }
    }

    /// Take a handle and initialize it as a tile of `def`
    pub fn take(&mut self, def: &VariantDef) -> Tile {
        let id = match self.free.pop_front() {
            Some(id) => id,
            None => {
                let id = TileId(self.next_id);
                self.next_id += 1;
                self.capacity += 1;
                debug!(capacity = self.capacity, "tile pool grew");
                id
            }
        };
        self.live += 1;
        def.instantiate(id)
    }

    /// Return a tile that left the board
    pub fn give_back(&mut self, tile: Tile) {
        self.live = self.live.saturating_sub(1);
        self.free.push_back(tile.id);
    }

    /// Return every tile in `tiles`
    pub fn give_back_all(&mut self, tiles: impl IntoIterator<Item = Tile>) {
        for tile in tiles {
            self.give_back(tile);
        }
    }

    /// Tiles currently handed out
    pub fn live(&self) -> usize {
        self.live
    }

    /// Handles owned by the pool, in use or not
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Release every handle. Tiles still on a board become invalid.
    pub fn teardown(&mut self) {
        debug!(live = self.live, capacity = self.capacity, "tile pool teardown");
        self.free.clear();
        self.live = 0;
        self.capacity = 0;
    }
}
