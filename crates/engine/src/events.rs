//! Notifications published by the orchestrator

use tile_match_types::{Phase, Pos};

/// Something visible happened on the board.
///
/// Sent over one unbounded channel to a single subscriber (the UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardEvent {
    /// Two tiles started swapping
    SwapStarted { a: Pos, b: Pos },
    /// The swap made no run and was undone
    Reverted { a: Pos, b: Pos },
    /// One round of removal and refill; `pass` counts from 1
    CascadePass {
        pass: u32,
        runs: usize,
        tiles: usize,
        score_delta: u32,
    },
    /// The board had no possible move and is being shuffled
    ShuffleStarted { round: u32 },
    /// The board is stable again and accepts input
    Settled,
}

/// Orchestrator state published on the status watch channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineStatus {
    pub phase: Phase,
    pub input_locked: bool,
    pub selection: Option<Pos>,
}

impl EngineStatus {
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Idle && !self.input_locked
    }
}
