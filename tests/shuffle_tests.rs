//! Shuffle tests

use std::collections::HashMap;

use tile_match::core::{
    find_matches, has_possible_move, parse_layout, shuffle, Board, Catalog, CoreError, SimpleRng,
    TilePool,
};
use tile_match::types::VariantId;

fn board(rows: &[&str]) -> Board {
    let mut pool = TilePool::new(64);
    parse_layout(rows, &Catalog::builtin(), &mut pool).unwrap()
}

fn variant_counts(board: &Board) -> HashMap<VariantId, usize> {
    let mut counts = HashMap::new();
    for (_, tile) in board.items() {
        *counts.entry(tile.variant).or_default() += 1;
    }
    counts
}

#[test]
fn test_shuffle_keeps_blocks_and_tile_multiset() {
    let mut b = board(&["ABCD", "B#DA", "CDA#", "DABC"]);
    let counts = variant_counts(&b);
    let mut rng = SimpleRng::new(5);

    let moves = shuffle(&mut b, &mut rng).unwrap();

    assert_eq!(moves.len(), 14);
    assert!(b.is_block_at(1, 1));
    assert!(b.is_block_at(3, 2));
    assert_eq!(variant_counts(&b), counts);
    assert!(find_matches(&b).is_empty());
    for m in &moves {
        assert_eq!(b.tile(m.to).map(|t| t.id), Some(m.tile.id));
    }
}

#[test]
fn test_shuffle_can_unstick_a_board() {
    let mut b = board(&["ABAB", "CDCD", "ABAB", "CDCD"]);
    assert!(!has_possible_move(&b));
    let mut rng = SimpleRng::new(2);

    shuffle(&mut b, &mut rng).unwrap();

    assert!(has_possible_move(&b));
}

#[test]
fn test_impossible_shuffle_fails_without_touching_the_board() {
    let mut b = board(&["AAA"]);
    let before = b.clone();
    let mut rng = SimpleRng::new(1);

    let err = shuffle(&mut b, &mut rng).unwrap_err();

    assert!(matches!(err, CoreError::ShuffleFailed { attempts: 100 }));
    assert_eq!(b, before);
}
