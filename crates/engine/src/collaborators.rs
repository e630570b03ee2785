//! Interfaces the orchestrator drives: animation, audio and score
//!
//! The orchestrator never draws, plays sound or displays a score itself. It
//! calls these traits and, for animations, awaits the returned [`Motion`]
//! handles before touching the board again.

use tracing::trace;

use tile_match_types::{AudioCue, Pos, Step, Tile};

use crate::motion::Motion;

/// Animates tiles. Every method starts an animation and returns its handle.
pub trait Animator: Send {
    /// Move `tile` straight to the cell `to`
    fn move_to(&mut self, tile: Tile, to: Pos) -> Motion;

    /// Move `tile` from `from` along `path`, one cell per step
    fn move_along(&mut self, tile: Tile, from: Pos, path: &[Step]) -> Motion;

    /// Play the removal effect of a matched tile
    fn play_removal(&mut self, tile: Tile) -> Motion;
}

/// Plays sound cues, fire-and-forget
pub trait AudioSink: Send {
    fn play(&mut self, cue: AudioCue);
}

/// Receives one call per removed run
pub trait ScoreSink: Send {
    fn add_score(&mut self, run_len: usize);
}

/// Everything the orchestrator talks to
pub struct Collaborators {
    pub animator: Box<dyn Animator>,
    pub audio: Box<dyn AudioSink>,
    pub score: Box<dyn ScoreSink>,
}

impl Collaborators {
    pub fn new(
        animator: impl Animator + 'static,
        audio: impl AudioSink + 'static,
        score: impl ScoreSink + 'static,
    ) -> Self {
        Self {
            animator: Box::new(animator),
            audio: Box::new(audio),
            score: Box::new(score),
        }
    }
}

/// Animator for headless use: every motion completes immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct InstantAnimator;

impl Animator for InstantAnimator {
    fn move_to(&mut self, tile: Tile, to: Pos) -> Motion {
        trace!(tile = tile.id.0, x = to.x, y = to.y, "move_to");
        Motion::done()
    }

    fn move_along(&mut self, tile: Tile, from: Pos, path: &[Step]) -> Motion {
        trace!(tile = tile.id.0, x = from.x, y = from.y, steps = path.len(), "move_along");
        Motion::done()
    }

    fn play_removal(&mut self, tile: Tile) -> Motion {
        trace!(tile = tile.id.0, "play_removal");
        Motion::done()
    }
}

/// Audio sink that only logs the cue
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: AudioCue) {
        trace!(cue = cue.key(), "audio");
    }
}
