//! Tile match (workspace facade crate).
//!
//! Re-exports the workspace crates as `tile_match::{core,engine,input,term,types}`
//! and holds the pieces only the terminal binary needs.

pub mod catalog_file;
pub mod score_file;

pub use tile_match_core as core;
pub use tile_match_engine as engine;
pub use tile_match_input as input;
pub use tile_match_term as term;
pub use tile_match_types as types;
