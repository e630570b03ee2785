//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::BoardAction`]. Cursor
//! movement is resolved by the front-end; the orchestrator only ever sees
//! board positions.

pub mod map;

pub use tile_match_types as types;

pub use map::{handle_key_event, should_quit};
