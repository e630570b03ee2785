//! Match detection tests

use tile_match::core::{find_matches, parse_layout, Axis, Board, Catalog, TilePool};
use tile_match::types::Pos;

fn board(rows: &[&str]) -> Board {
    let catalog = Catalog::builtin();
    let mut pool = TilePool::new(64);
    parse_layout(rows, &catalog, &mut pool).unwrap()
}

#[test]
fn test_two_adjacent_runs_in_one_row() {
    let found = find_matches(&board(&["AAABBB", "CDCDCD"]));

    assert_eq!(found.runs.len(), 2);
    assert_eq!(found.tiles.len(), 6);
    assert_eq!(found.score_delta, 20);
    assert!(found.runs.iter().all(|r| r.axis == Axis::Row && r.len == 3));
    assert_eq!(found.runs[0].start, Pos::new(0, 0));
    assert_eq!(found.runs[1].start, Pos::new(3, 0));
}

#[test]
fn test_no_runs_on_a_checkerboard() {
    let found = find_matches(&board(&["ABAB", "BABA", "ABAB"]));
    assert!(found.is_empty());
    assert_eq!(found.score_delta, 0);
}

#[test]
fn test_blocks_and_empty_cells_break_runs() {
    let found = find_matches(&board(&["AA#AA", "BB.BB"]));
    assert!(found.is_empty());
}

#[test]
fn test_crossing_runs_share_a_tile() {
    let found = find_matches(&board(&["BAC", "AAA", "CAB"]));

    assert_eq!(found.runs.len(), 2);
    assert_eq!(found.tiles.len(), 5);
    assert_eq!(found.score_delta, 20);
    assert!(found.tiles.contains(&Pos::new(1, 1)));
}

#[test]
fn test_long_column_run_scores_extra() {
    let found = find_matches(&board(&["A", "A", "A", "A", "A"]));

    assert_eq!(found.runs.len(), 1);
    let run = found.runs[0];
    assert_eq!(run.axis, Axis::Column);
    assert_eq!(run.len, 5);
    assert_eq!(found.score_delta, 20);
    assert_eq!(run.positions().last(), Some(Pos::new(0, 4)));
}

#[test]
fn test_detection_does_not_mutate() {
    let b = board(&["AAAB", "CDCD"]);
    let before = b.clone();
    let _ = find_matches(&b);
    assert_eq!(b, before);
}
