//! Running score with change notification
//!
//! [`ScoreBoard`] is a cheap, cloneable handle: the orchestrator owns one
//! clone as its [`ScoreSink`], the front-end keeps another to read or watch
//! the value and to restore a persisted score.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use tile_match_types::run_score;

use crate::collaborators::ScoreSink;

#[derive(Debug, Clone)]
pub struct ScoreBoard {
    tx: Arc<watch::Sender<u32>>,
}

impl ScoreBoard {
    pub fn new(initial: u32) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx: Arc::new(tx) }
    }

    pub fn value(&self) -> u32 {
        *self.tx.borrow()
    }

    /// Overwrite the score, e.g. with a value loaded from disk
    pub fn set(&self, value: u32) {
        self.tx.send_replace(value);
    }

    /// Receiver notified on every change
    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.tx.subscribe()
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new(0)
    }
}

impl ScoreSink for ScoreBoard {
    fn add_score(&mut self, run_len: usize) {
        let points = run_score(run_len);
        self.tx.send_modify(|score| *score = score.saturating_add(points));
        debug!(run_len, points, total = self.value(), "score");
    }
}
