//! Integration tests for a whole session: generate, play hinted swaps,
//! restart, and wait on real animation handles.

use std::sync::{Arc, Mutex};

use tile_match::core::{find_matches, parse_layout, Catalog, GameConfig, TilePool};
use tile_match::engine::{
    Animator, Collaborators, InstantAnimator, Motion, MotionDone, MoveOrchestrator, MoveOutcome,
    ScoreBoard, SilentAudio,
};
use tile_match::types::{Phase, Pos, Step, Tile};

fn session(seed: u32) -> (MoveOrchestrator, ScoreBoard) {
    let score = ScoreBoard::default();
    let collab = Collaborators::new(InstantAnimator, SilentAudio, score.clone());
    let config = GameConfig::default().with_seed(seed);
    let orch = MoveOrchestrator::new(config, Catalog::builtin(), collab).unwrap();
    (orch, score)
}

#[tokio::test]
async fn test_hinted_swaps_keep_the_board_stable() {
    for seed in [1, 3, 7] {
        let (mut orch, score) = session(seed);
        let mut last_score = score.value();

        for turn in 0..8 {
            let hint = orch.hint().expect("settled boards always have a move");
            let outcome = orch.request_swap(hint.from, hint.to).await.unwrap();

            let MoveOutcome::Resolved(report) = outcome else {
                panic!("seed {seed} turn {turn}: hinted swap gave {outcome:?}");
            };
            assert!(report.passes >= 1);
            assert_eq!(score.value(), last_score + report.score_delta);
            last_score = score.value();

            let board = orch.board();
            assert!(find_matches(board).is_empty());
            assert!(orch.hint().is_some());
            assert_eq!(orch.live_tiles(), board.area() - board.empty_count());
            assert_eq!(orch.phase(), Phase::Idle);
        }
    }
}

#[tokio::test]
async fn test_restart_generates_a_fresh_board() {
    let (mut orch, _score) = session(5);
    let hint = orch.hint().unwrap();
    orch.request_swap(hint.from, hint.to).await.unwrap();
    orch.click(Pos::new(0, 0)).await.unwrap();

    orch.restart().await.unwrap();

    let board = orch.board();
    assert_eq!(board.empty_count(), 0);
    assert!(find_matches(board).is_empty());
    assert!(orch.hint().is_some());
    assert_eq!(orch.live_tiles(), board.area());
    assert_eq!(orch.selection(), None);
    assert_eq!(orch.phase(), Phase::Idle);
}

/// Animator whose motions finish only when the test says so
#[derive(Clone, Default)]
struct HeldAnimator(Arc<Mutex<Vec<MotionDone>>>);

impl HeldAnimator {
    fn hold(&self) -> Motion {
        let (done, motion) = Motion::channel();
        self.0.lock().unwrap().push(done);
        motion
    }

    fn take_pending(&self) -> Vec<MotionDone> {
        self.0.lock().unwrap().drain(..).collect()
    }
}

impl Animator for HeldAnimator {
    fn move_to(&mut self, _tile: Tile, _to: Pos) -> Motion {
        self.hold()
    }

    fn move_along(&mut self, _tile: Tile, _from: Pos, _path: &[Step]) -> Motion {
        self.hold()
    }

    fn play_removal(&mut self, _tile: Tile) -> Motion {
        self.hold()
    }
}

#[tokio::test]
async fn test_input_stays_locked_until_animations_finish() {
    let catalog = Catalog::builtin();
    let mut pool = TilePool::new(64);
    let board = parse_layout(
        &["AABACD", "CDCDBA", "DCDCAB", "ABABCD", "CDCDAB", "ABABDC"],
        &catalog,
        &mut pool,
    )
    .unwrap();
    let animator = HeldAnimator::default();
    let collab = Collaborators::new(animator.clone(), SilentAudio, ScoreBoard::default());
    let mut orch = MoveOrchestrator::with_board(GameConfig::default(), catalog, board, pool, collab)
        .unwrap();
    let status = orch.subscribe_status();

    let driver = async {
        let mut finished = 0;
        loop {
            tokio::task::yield_now().await;
            let pending = animator.take_pending();
            if !pending.is_empty() {
                assert!(status.borrow().input_locked);
            }
            for done in pending {
                done.finish();
                finished += 1;
            }
            if finished > 0 && status.borrow().accepts_input() {
                return finished;
            }
        }
    };

    let (outcome, finished) = tokio::join!(
        orch.request_swap(Pos::new(2, 0), Pos::new(3, 0)),
        driver
    );

    assert!(matches!(outcome.unwrap(), MoveOutcome::Resolved(_)));
    // Two swap moves, three removals and three spawns.
    assert_eq!(finished, 8);
}

#[tokio::test]
async fn test_dropped_motion_counts_as_finished() {
    let animator = HeldAnimator::default();
    let motion = animator.hold();
    drop(animator.take_pending());
    motion.wait().await;
}
