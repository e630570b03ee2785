//! Move orchestration - drives the simulation core through a player's swap
//!
//! [`MoveOrchestrator`] owns the board and runs the swap, revert, cascade,
//! refill and shuffle sequence as one `async` operation. It suspends only
//! while waiting for the animation collaborator, and reports through three
//! channels:
//!
//! - the [`Animator`], [`AudioSink`] and [`ScoreSink`] collaborators
//! - a status watch channel ([`EngineStatus`]: phase, input lock, selection)
//! - one event subscriber ([`BoardEvent`])
//!
//! # Example
//!
//! ```
//! use tile_match_core::{Catalog, GameConfig};
//! use tile_match_engine::{Collaborators, InstantAnimator, MoveOrchestrator, ScoreBoard, SilentAudio};
//!
//! let score = ScoreBoard::default();
//! let collab = Collaborators::new(InstantAnimator, SilentAudio, score.clone());
//! let mut game = MoveOrchestrator::new(GameConfig::default(), Catalog::builtin(), collab).unwrap();
//!
//! let hint = game.hint().expect("a fresh board always has a move");
//! tokio_test::block_on(game.request_swap(hint.from, hint.to)).unwrap();
//! assert!(score.value() >= 10);
//! ```

pub mod collaborators;
pub mod error;
pub mod events;
pub mod motion;
pub mod orchestrator;
pub mod score;

pub use collaborators::{Animator, AudioSink, Collaborators, InstantAnimator, ScoreSink, SilentAudio};
pub use error::{EngineError, EngineResult};
pub use events::{BoardEvent, EngineStatus};
pub use motion::{wait_all, Motion, MotionDone};
pub use orchestrator::{CascadeReport, MoveOrchestrator, MoveOutcome};
pub use score::ScoreBoard;
