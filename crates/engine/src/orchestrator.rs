//! Move orchestrator - the state machine around a player's swap
//!
//! ```text
//! Idle -> Swapping -> Resolving --(no run)--> Reverting -> Idle
//!                        |  ^
//!                        v  |  (cascade)
//!                     Refilling
//!                        |
//!                        v
//!          (no possible move) Shuffling -> Idle
//!                        |
//!                        v  (rounds exhausted)
//!                    Deadlocked
//! ```
//!
//! The orchestrator is the only writer of the board. Every operation takes
//! `&mut self` for its whole run, so two steps never interleave; the awaits
//! inside are on animation handles only. Input is locked from the first step
//! of a swap until the board is settled and playable again.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use tile_match_core::{
    find_matches, find_possible_move, generate, has_possible_move, refill, shuffle, Board,
    BoardSnapshot, Catalog, GameConfig, MatchResult, PossibleMove, SimpleRng, TilePool,
    VariantDef,
};
use tile_match_types::{AudioCue, Phase, Pos, MAX_SHUFFLE_ROUNDS};

use crate::collaborators::Collaborators;
use crate::error::{EngineError, EngineResult};
use crate::events::{BoardEvent, EngineStatus};
use crate::motion::{wait_all, Motion};

/// What a request led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Rejected without touching the board
    Ignored,
    /// A tile is now selected
    Selected(Pos),
    /// The selection was cleared
    Deselected,
    /// The swap made no run and was undone
    Reverted,
    /// The swap made at least one run; the board has settled
    Resolved(CascadeReport),
}

/// Summary of a resolved swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub passes: u32,
    pub runs: usize,
    pub tiles_removed: usize,
    pub score_delta: u32,
    pub shuffles: u32,
}

pub struct MoveOrchestrator {
    config: GameConfig,
    catalog: Catalog,
    items: Vec<VariantDef>,
    board: Board,
    pool: TilePool,
    rng: SimpleRng,
    collab: Collaborators,
    phase: Phase,
    input_locked: bool,
    selection: Option<Pos>,
    status_tx: watch::Sender<EngineStatus>,
    events_tx: Option<mpsc::UnboundedSender<BoardEvent>>,
}

impl MoveOrchestrator {
    /// Generate a board from `config` and wrap it
    pub fn new(config: GameConfig, catalog: Catalog, collab: Collaborators) -> EngineResult<Self> {
        let mut pool = TilePool::new(config.pool_capacity());
        let mut rng = SimpleRng::new(config.seed);
        let board = generate(&config, &catalog, &mut pool, &mut rng)?;
        info!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            "board ready"
        );
        Self::assemble(config, catalog, board, pool, rng, collab)
    }

    /// Wrap an existing board, e.g. one built from a layout.
    ///
    /// The board is taken as is; it is not checked for runs or moves.
    pub fn with_board(
        config: GameConfig,
        catalog: Catalog,
        board: Board,
        pool: TilePool,
        collab: Collaborators,
    ) -> EngineResult<Self> {
        let rng = SimpleRng::new(config.seed);
        Self::assemble(config, catalog, board, pool, rng, collab)
    }

    fn assemble(
        config: GameConfig,
        catalog: Catalog,
        board: Board,
        pool: TilePool,
        rng: SimpleRng,
        collab: Collaborators,
    ) -> EngineResult<Self> {
        let items = catalog
            .active_items(config.tile_type_count)
            .map_err(tile_match_core::CoreError::from)?;
        let (status_tx, _status_rx) = watch::channel(EngineStatus::default());
        Ok(Self {
            config,
            catalog,
            items,
            board,
            pool,
            rng,
            collab,
            phase: Phase::Idle,
            input_locked: false,
            selection: None,
            status_tx,
            events_tx: None,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_input_locked(&self) -> bool {
        self.input_locked
    }

    pub fn selection(&self) -> Option<Pos> {
        self.selection
    }

    /// Tile handles currently on the board, as counted by the pool
    pub fn live_tiles(&self) -> usize {
        self.pool.live()
    }

    /// Watch the phase, input lock and selection
    pub fn subscribe_status(&self) -> watch::Receiver<EngineStatus> {
        self.status_tx.subscribe()
    }

    /// Register the event subscriber, replacing any previous one
    pub fn subscribe_events(&mut self) -> mpsc::UnboundedReceiver<BoardEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.events_tx = Some(tx);
        rx
    }

    /// A swap that would create a run, if any
    pub fn hint(&self) -> Option<PossibleMove> {
        find_possible_move(&self.board)
    }

    /// Fill `out` with the board and orchestrator state. The score is left
    /// to the caller, who owns the score display.
    pub fn snapshot_into(&self, out: &mut BoardSnapshot) {
        out.capture_board(&self.board);
        out.phase = self.phase;
        out.input_locked = self.input_locked;
        out.selection = self.selection;
    }

    fn status(&self) -> EngineStatus {
        EngineStatus {
            phase: self.phase,
            input_locked: self.input_locked,
            selection: self.selection,
        }
    }

    fn publish(&self) {
        self.status_tx.send_replace(self.status());
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!(from = self.phase.as_str(), to = phase.as_str(), "phase");
        self.phase = phase;
        self.publish();
    }

    fn lock(&mut self, phase: Phase) {
        self.input_locked = true;
        self.set_phase(phase);
    }

    fn unlock(&mut self) {
        self.input_locked = false;
        self.set_phase(Phase::Idle);
    }

    fn emit(&mut self, event: BoardEvent) {
        let gone = self
            .events_tx
            .as_ref()
            .is_some_and(|tx| tx.send(event).is_err());
        if gone {
            debug!("event subscriber gone");
            self.events_tx = None;
        }
    }

    fn accepts_input(&self) -> bool {
        !self.input_locked && self.phase == Phase::Idle
    }

    fn is_swappable(&self, pos: Pos) -> bool {
        self.board
            .tile(pos)
            .is_some_and(|t| t.is_item() && t.swappable)
    }

    /// Tap-to-select: select, deselect, swap with a neighbour, or move the
    /// selection elsewhere.
    pub async fn click(&mut self, pos: Pos) -> EngineResult<MoveOutcome> {
        if !self.accepts_input() {
            debug!(x = pos.x, y = pos.y, "click ignored, input locked");
            return Ok(MoveOutcome::Ignored);
        }

        match self.selection {
            Some(selected) if selected == pos => {
                self.selection = None;
                self.publish();
                Ok(MoveOutcome::Deselected)
            }
            Some(selected) if selected.is_adjacent(pos) && self.is_swappable(pos) => {
                self.request_swap(selected, pos).await
            }
            _ if self.is_swappable(pos) => {
                self.selection = Some(pos);
                self.publish();
                Ok(MoveOutcome::Selected(pos))
            }
            _ => Ok(MoveOutcome::Ignored),
        }
    }

    /// Swap two tiles and resolve the consequences.
    ///
    /// Requests are ignored unless input is unlocked, the positions are
    /// orthogonal neighbours and both hold swappable Items.
    pub async fn request_swap(&mut self, a: Pos, b: Pos) -> EngineResult<MoveOutcome> {
        if !self.accepts_input() {
            debug!("swap ignored, input locked");
            return Ok(MoveOutcome::Ignored);
        }
        if !a.is_adjacent(b) || !self.is_swappable(a) || !self.is_swappable(b) {
            debug!(?a, ?b, "swap ignored");
            return Ok(MoveOutcome::Ignored);
        }

        self.selection = None;
        self.lock(Phase::Swapping);
        self.emit(BoardEvent::SwapStarted { a, b });
        self.swap_tiles(a, b).await;

        self.set_phase(Phase::Resolving);
        let found = find_matches(&self.board);
        if found.is_empty() {
            self.set_phase(Phase::Reverting);
            self.swap_tiles(a, b).await;
            self.emit(BoardEvent::Reverted { a, b });
            debug!(?a, ?b, "swap reverted");
            self.ensure_playable().await?;
            self.unlock();
            return Ok(MoveOutcome::Reverted);
        }

        let mut report = self.resolve_cascade(found).await;
        report.shuffles = self.ensure_playable().await?;

        self.emit(BoardEvent::Settled);
        self.unlock();
        info!(
            passes = report.passes,
            runs = report.runs,
            score = report.score_delta,
            shuffles = report.shuffles,
            "swap resolved"
        );
        Ok(MoveOutcome::Resolved(report))
    }

    /// Throw the board away and generate a new one. Also recovers from
    /// `Deadlocked`.
    ///
    /// If generation fails the old board stays in place and the phase is
    /// `Deadlocked`.
    pub async fn restart(&mut self) -> EngineResult<()> {
        self.lock(Phase::Refilling);
        self.selection = None;

        let board = match generate(&self.config, &self.catalog, &mut self.pool, &mut self.rng) {
            Ok(board) => board,
            Err(err) => {
                warn!(%err, "restart failed");
                self.set_phase(Phase::Deadlocked);
                return Err(err.into());
            }
        };
        let mut old = std::mem::replace(&mut self.board, board);
        self.pool.give_back_all(old.drain_tiles());
        info!(rng_state = self.rng.state(), "board restarted");

        let motions: Vec<Motion> = self
            .board
            .tiles()
            .map(|(pos, tile)| self.collab.animator.move_to(tile, pos))
            .collect();
        wait_all(motions).await;

        self.emit(BoardEvent::Settled);
        self.unlock();
        Ok(())
    }

    /// Return every tile to the pool and release it
    pub fn teardown(&mut self) {
        self.pool.give_back_all(self.board.drain_tiles());
        self.pool.teardown();
        self.selection = None;
        self.input_locked = true;
        self.publish();
    }

    async fn swap_tiles(&mut self, a: Pos, b: Pos) {
        self.collab.audio.play(AudioCue::Select);
        self.board.swap(a, b);

        let mut motions = Vec::with_capacity(2);
        for pos in [a, b] {
            if let Some(tile) = self.board.tile(pos) {
                motions.push(self.collab.animator.move_to(tile, pos));
            }
        }
        wait_all(motions).await;
    }

    async fn resolve_cascade(&mut self, mut found: MatchResult) -> CascadeReport {
        let mut report = CascadeReport::default();

        while !found.is_empty() {
            report.passes += 1;
            report.runs += found.runs.len();
            report.tiles_removed += found.tiles.len();
            report.score_delta += found.score_delta;
            debug!(
                pass = report.passes,
                runs = found.runs.len(),
                tiles = found.tiles.len(),
                "cascade pass"
            );

            self.collab.audio.play(AudioCue::Match);
            for run in &found.runs {
                self.collab.score.add_score(run.len);
            }
            self.emit(BoardEvent::CascadePass {
                pass: report.passes,
                runs: found.runs.len(),
                tiles: found.tiles.len(),
                score_delta: found.score_delta,
            });

            let removals: Vec<Motion> = found
                .tiles
                .iter()
                .filter_map(|&pos| self.board.tile(pos))
                .map(|tile| self.collab.animator.play_removal(tile))
                .collect();
            wait_all(removals).await;

            for pos in &found.tiles {
                if let Some(tile) = self.board.clear(pos.x, pos.y) {
                    self.pool.give_back(tile);
                }
            }

            self.set_phase(Phase::Refilling);
            let moves = refill(&mut self.board, &self.items, &mut self.pool, &mut self.rng);
            let motions: Vec<Motion> = moves
                .iter()
                .map(|m| self.collab.animator.move_along(m.tile, m.from, &m.path))
                .collect();
            wait_all(motions).await;

            self.set_phase(Phase::Resolving);
            found = find_matches(&self.board);
        }

        report
    }

    /// Shuffle until the board has a possible move. Returns the number of
    /// shuffles performed.
    async fn ensure_playable(&mut self) -> EngineResult<u32> {
        let mut rounds = 0;

        while !has_possible_move(&self.board) {
            if rounds == MAX_SHUFFLE_ROUNDS {
                warn!(rounds, "no playable board after shuffling");
                self.set_phase(Phase::Deadlocked);
                return Err(EngineError::Deadlocked { rounds });
            }
            rounds += 1;

            self.set_phase(Phase::Shuffling);
            self.emit(BoardEvent::ShuffleStarted { round: rounds });
            warn!(round = rounds, "no possible move, shuffling");

            // A failed shuffle leaves the board as it was and uses up the round.
            let moves = match shuffle(&mut self.board, &mut self.rng) {
                Ok(moves) => moves,
                Err(err) => {
                    warn!(round = rounds, %err, "shuffle failed");
                    continue;
                }
            };
            self.collab.audio.play(AudioCue::Shuffle);

            let motions: Vec<Motion> = moves
                .iter()
                .map(|m| self.collab.animator.move_to(m.tile, m.to))
                .collect();
            wait_all(motions).await;
        }

        Ok(rounds)
    }
}
