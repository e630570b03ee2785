//! Simulation core - pure, deterministic, and testable
//!
//! Everything that decides what happens on the board lives here. Nothing in
//! this crate waits, renders or plays sound: the async orchestrator in
//! `tile-match-engine` drives these functions and forwards their results to
//! the animation, audio and score collaborators.
//!
//! # Module Structure
//!
//! - [`board`]: the `width x height` grid with bounds-checked accessors
//! - [`catalog`]: variant definitions, built in or loaded from JSON
//! - [`config`]: board dimensions, variant count, Block quota, seed
//! - [`generator`]: initial boards with no runs and at least one move
//! - [`matcher`]: run detection and scoring
//! - [`moves`]: possible-move analysis and hints
//! - [`gravity`]: compaction, diagonal rerouting around Blocks, spawning
//! - [`shuffle`]: constrained redistribution of the Items
//! - [`pool`]: recycled tile handles
//! - [`rng`]: seeded randomness shared by every random decision
//! - [`snapshot`]: plain-data view for renderers
//! - [`layout`]: text notation for boards
//!
//! # Rules
//!
//! - A **run** is three or more consecutive Items of one variant in a row or
//!   column. Blocks, empty cells and variant changes end a run.
//! - A run of `n` tiles scores `10 + (n - 3) * 5`. Crossing runs score
//!   separately.
//! - Blocks never move and are never matched.
//! - A settled board has no runs. If it also has no possible move, it is
//!   shuffled.
//!
//! # Example
//!
//! ```
//! use tile_match_core::{find_matches, generate, has_possible_move};
//! use tile_match_core::{Catalog, GameConfig, SimpleRng, TilePool};
//!
//! let config = GameConfig::default().with_seed(42);
//! let catalog = Catalog::builtin();
//! let mut pool = TilePool::new(config.pool_capacity());
//! let mut rng = SimpleRng::new(config.seed);
//!
//! let board = generate(&config, &catalog, &mut pool, &mut rng).unwrap();
//! assert!(find_matches(&board).is_empty());
//! assert!(has_possible_move(&board));
//! ```

pub mod board;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod gravity;
pub mod layout;
pub mod matcher;
pub mod moves;
pub mod pool;
pub mod rng;
pub mod shuffle;
pub mod snapshot;

pub use tile_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{Catalog, VariantDef};
pub use config::GameConfig;
pub use error::{CatalogError, ConfigError, CoreError, CoreResult};
pub use generator::{denied_variants, generate};
pub use gravity::{refill, TileMove};
pub use layout::{parse_layout, render_layout};
pub use matcher::{find_matches, Axis, MatchResult, Run};
pub use moves::{find_possible_move, has_possible_move, PossibleMove};
pub use pool::TilePool;
pub use rng::SimpleRng;
pub use shuffle::{shuffle, ShuffleMove};
pub use snapshot::{BoardSnapshot, CellSnapshot};
