//! Errors surfaced by the move orchestrator

use thiserror::Error;

use tile_match_core::CoreError;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Board construction or a core algorithm failed
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Every shuffle round still left the board without a possible move
    #[error("Board deadlocked after {rounds} shuffle rounds")]
    Deadlocked { rounds: u32 },
}

pub type EngineResult<T> = Result<T, EngineError>;
