//! Error types for the simulation core
//!
//! Catalog and configuration problems are data errors: they stop board
//! construction outright. Generation and shuffle failures are what the
//! bounded retry loops report once they run out of attempts.

use thiserror::Error;

use crate::types::VariantId;

/// Malformed or missing catalog data
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// No Block variant defined
    #[error("Catalog has no block variant")]
    MissingBlock,

    /// More than one Block variant defined
    #[error("Catalog has {count} block variants, expected exactly one")]
    MultipleBlocks { count: usize },

    /// Block variant flagged as swappable
    #[error("Block variant {id:?} must not be swappable")]
    SwappableBlock { id: VariantId },

    /// Two entries share an id
    #[error("Duplicate variant id {id:?}")]
    DuplicateId { id: VariantId },

    /// Fewer Item variants than requested
    #[error("Catalog has {available} item variants, {requested} requested")]
    TooFewItems { available: usize, requested: usize },

    /// Lookup of an id with no definition
    #[error("No catalog entry for variant {id:?}")]
    UnknownVariant { id: VariantId },
}

/// Out-of-range configuration value
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board width {value} out of range ({min}..={max})")]
    Width { value: u8, min: u8, max: u8 },

    #[error("Board height {value} out of range ({min}..={max})")]
    Height { value: u8, min: u8, max: u8 },

    #[error("Tile type count {value} out of range ({min}..={max})")]
    TileTypeCount { value: u8, min: u8, max: u8 },

    #[error("Blocks count {value} out of range (0..={max})")]
    BlocksCount { value: u8, max: u8 },
}

/// Errors that can occur in the simulation core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No generated board offered a possible move
    #[error("Board generation failed after {attempts} attempts")]
    GenerationFailed { attempts: u32 },

    /// No permutation satisfied the placement constraints
    #[error("Shuffle failed after {attempts} attempts")]
    ShuffleFailed { attempts: u32 },

    /// Text layout could not be turned into a board
    #[error("Invalid layout: {message}")]
    Layout { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
