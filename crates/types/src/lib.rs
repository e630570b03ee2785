//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data, usable from the simulation core, the
//! move orchestrator and the terminal front-end alike.
//!
//! # Board Geometry
//!
//! Boards are `width x height` grids addressed by [`Pos`]:
//!
//! - `x` grows to the right, `y` grows downward
//! - Row `y = 0` is the **far edge**: replacement tiles spawn above it
//! - Row `y = height - 1` is the **near edge**: gravity pulls tiles toward it
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_RUN_LEN` | 3 | Shortest sequence that counts as a run |
//! | `RUN_BASE_SCORE` | 10 | Points for a run of exactly `MIN_RUN_LEN` |
//! | `RUN_EXTRA_TILE_SCORE` | 5 | Points for each tile beyond `MIN_RUN_LEN` |
//!
//! # Retry Caps
//!
//! Generation and shuffling are randomized and retried until they produce an
//! acceptable board. Every loop is capped; running out of attempts is an
//! explicit error rather than a hang.
//!
//! # Examples
//!
//! ```
//! use tile_match_types::{Pos, Step, AudioCue, BoardAction};
//!
//! let p = Pos::new(2, 0);
//! assert!(p.is_adjacent(Pos::new(3, 0)));
//! assert!(!p.is_adjacent(Pos::new(3, 1)));
//!
//! assert_eq!(Step::FallLeft.apply(Pos::new(1, 1)), Pos::new(0, 2));
//! assert_eq!(AudioCue::Shuffle.key(), "shuffle");
//! assert_eq!(BoardAction::from_str("hint"), Some(BoardAction::Hint));
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells
pub const DEFAULT_WIDTH: u8 = 6;

/// Default board height in cells
pub const DEFAULT_HEIGHT: u8 = 6;

/// Smallest accepted board side
pub const MIN_BOARD_SIDE: u8 = 3;

/// Largest accepted board side
pub const MAX_BOARD_SIDE: u8 = 16;

/// Default number of active Item variants
pub const DEFAULT_TILE_TYPE_COUNT: u8 = 4;

/// Accepted range for the number of active Item variants
pub const MIN_TILE_TYPE_COUNT: u8 = 4;
pub const MAX_TILE_TYPE_COUNT: u8 = 8;

/// Default Block quota for a generated board
pub const DEFAULT_BLOCKS_COUNT: u8 = 3;

/// Largest accepted Block quota
pub const MAX_BLOCKS_COUNT: u8 = 8;

/// Shortest run that is removed
pub const MIN_RUN_LEN: usize = 3;

/// Score of a run of exactly `MIN_RUN_LEN` tiles
pub const RUN_BASE_SCORE: u32 = 10;

/// Extra score per tile beyond `MIN_RUN_LEN`
pub const RUN_EXTRA_TILE_SCORE: u32 = 5;

/// Full boards generated before giving up
pub const MAX_GENERATION_ATTEMPTS: u32 = 100;

/// Permutations tried by one shuffle before giving up
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 100;

/// Successful shuffles tried while looking for a board with a possible move
pub const MAX_SHUFFLE_ROUNDS: u32 = 100;

/// Tile pool capacity as a multiple of the cell count (3/2 = 1.5x)
pub const POOL_CAPACITY_NUMERATOR: usize = 3;
pub const POOL_CAPACITY_DENOMINATOR: usize = 2;

/// Score awarded for a single run of `len` tiles.
///
/// # Examples
///
/// ```
/// use tile_match_types::run_score;
///
/// assert_eq!(run_score(3), 10);
/// assert_eq!(run_score(4), 15);
/// assert_eq!(run_score(5), 20);
/// ```
pub fn run_score(len: usize) -> u32 {
    let extra = len.saturating_sub(MIN_RUN_LEN) as u32;
    RUN_BASE_SCORE + extra * RUN_EXTRA_TILE_SCORE
}

/// A board coordinate.
///
/// Signed so that spawn positions above the far edge (negative `y`) and
/// neighbour lookups past the edges can be expressed without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Orthogonal neighbours: same row one column apart, or same column one row apart
    pub fn is_adjacent(self, other: Pos) -> bool {
        let dx = (self.x - other.x).abs();
        let dy = (self.y - other.y).abs();
        (dx == 1 && dy == 0) || (dx == 0 && dy == 1)
    }
}

/// Tile category
///
/// - **Item**: matchable, movable, swappable
/// - **Block**: immovable obstacle placed at generation time only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Item,
    Block,
}

/// Identifier of a catalog variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u16);

/// Handle of a pooled tile, stable for the tile's lifetime on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// A tile placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub variant: VariantId,
    pub category: Category,
    pub swappable: bool,
}

impl Tile {
    pub fn is_item(&self) -> bool {
        self.category == Category::Item
    }

    pub fn is_block(&self) -> bool {
        self.category == Category::Block
    }

    /// Two tiles match when both are Items of one variant
    pub fn matches(&self, other: &Tile) -> bool {
        self.is_item() && other.is_item() && self.variant == other.variant
    }
}

/// A cell on the board
///
/// - `None`: Empty cell (only transiently, while a refill is in progress)
/// - `Some(Tile)`: occupied
pub type Cell = Option<Tile>;

/// One unit step of a tile's movement path.
///
/// Steps always advance one row toward the near edge; diagonal steps also
/// shift one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Fall,
    FallLeft,
    FallRight,
}

impl Step {
    /// Position reached by taking this step from `from`
    pub fn apply(self, from: Pos) -> Pos {
        match self {
            Step::Fall => from.offset(0, 1),
            Step::FallLeft => from.offset(-1, 1),
            Step::FallRight => from.offset(1, 1),
        }
    }
}

/// Sound cues the core asks the audio collaborator to play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    Select,
    Match,
    Shuffle,
}

impl AudioCue {
    /// Asset key of the cue
    pub fn key(&self) -> &'static str {
        match self {
            AudioCue::Select => "select",
            AudioCue::Match => "match",
            AudioCue::Shuffle => "shuffle",
        }
    }
}

/// Orchestrator state
///
/// Only `Idle` accepts input. `Deadlocked` is terminal: the board could not be
/// shuffled into a playable state and input stays locked until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Swapping,
    Reverting,
    Resolving,
    Refilling,
    Shuffling,
    Deadlocked,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Swapping => "swapping",
            Phase::Reverting => "reverting",
            Phase::Resolving => "resolving",
            Phase::Refilling => "refilling",
            Phase::Shuffling => "shuffling",
            Phase::Deadlocked => "deadlocked",
        }
    }
}

/// Player actions on the board
///
/// Used by the terminal front-end; the orchestrator itself only sees
/// positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardAction {
    /// Move the cursor one cell left
    CursorLeft,
    /// Move the cursor one cell right
    CursorRight,
    /// Move the cursor one cell up
    CursorUp,
    /// Move the cursor one cell down
    CursorDown,
    /// Select the tile under the cursor (or swap with the selected one)
    Select,
    /// Show a possible move
    Hint,
    /// Throw the board away and generate a new one
    Restart,
}

impl BoardAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_match_types::BoardAction;
    ///
    /// assert_eq!(BoardAction::from_str("cursorLeft"), Some(BoardAction::CursorLeft));
    /// assert_eq!(BoardAction::from_str("SELECT"), Some(BoardAction::Select));
    /// assert_eq!(BoardAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cursorleft" => Some(BoardAction::CursorLeft),
            "cursorright" => Some(BoardAction::CursorRight),
            "cursorup" => Some(BoardAction::CursorUp),
            "cursordown" => Some(BoardAction::CursorDown),
            "select" => Some(BoardAction::Select),
            "hint" => Some(BoardAction::Hint),
            "restart" => Some(BoardAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoardAction::CursorLeft => "cursorLeft",
            BoardAction::CursorRight => "cursorRight",
            BoardAction::CursorUp => "cursorUp",
            BoardAction::CursorDown => "cursorDown",
            BoardAction::Select => "select",
            BoardAction::Hint => "hint",
            BoardAction::Restart => "restart",
        }
    }

    /// Cursor delta for the movement actions
    pub fn cursor_delta(&self) -> Option<(i32, i32)> {
        match self {
            BoardAction::CursorLeft => Some((-1, 0)),
            BoardAction::CursorRight => Some((1, 0)),
            BoardAction::CursorUp => Some((0, -1)),
            BoardAction::CursorDown => Some((0, 1)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_score_matches_scoring_rule() {
        assert_eq!(run_score(3), 10);
        assert_eq!(run_score(4), 15);
        assert_eq!(run_score(6), 25);
        // Anything shorter than a run is never scored, but stays well-defined.
        assert_eq!(run_score(2), 10);
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let p = Pos::new(2, 2);
        assert!(p.is_adjacent(Pos::new(1, 2)));
        assert!(p.is_adjacent(Pos::new(3, 2)));
        assert!(p.is_adjacent(Pos::new(2, 1)));
        assert!(p.is_adjacent(Pos::new(2, 3)));

        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Pos::new(3, 3)));
        assert!(!p.is_adjacent(Pos::new(4, 2)));
    }

    #[test]
    fn phase_defaults_to_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
        assert_eq!(Phase::Deadlocked.as_str(), "deadlocked");
    }

    #[test]
    fn steps_advance_toward_near_edge() {
        let p = Pos::new(3, 0);
        assert_eq!(Step::Fall.apply(p), Pos::new(3, 1));
        assert_eq!(Step::FallLeft.apply(p), Pos::new(2, 1));
        assert_eq!(Step::FallRight.apply(p), Pos::new(4, 1));
    }

    #[test]
    fn tiles_match_only_as_items_of_one_variant() {
        let a = Tile {
            id: TileId(1),
            variant: VariantId(0),
            category: Category::Item,
            swappable: true,
        };
        let b = Tile { id: TileId(2), ..a };
        let other = Tile {
            id: TileId(3),
            variant: VariantId(1),
            ..a
        };
        let block = Tile {
            id: TileId(4),
            category: Category::Block,
            swappable: false,
            ..a
        };

        assert!(a.matches(&b));
        assert!(!a.matches(&other));
        assert!(!a.matches(&block));
        assert!(!block.matches(&block));
    }

    #[test]
    fn action_strings_round_trip() {
        for action in [
            BoardAction::CursorLeft,
            BoardAction::CursorRight,
            BoardAction::CursorUp,
            BoardAction::CursorDown,
            BoardAction::Select,
            BoardAction::Hint,
            BoardAction::Restart,
        ] {
            assert_eq!(BoardAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn audio_cue_keys() {
        assert_eq!(AudioCue::Select.key(), "select");
        assert_eq!(AudioCue::Match.key(), "match");
        assert_eq!(AudioCue::Shuffle.key(), "shuffle");
    }
}
