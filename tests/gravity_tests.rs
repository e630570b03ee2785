//! Gravity and refill tests

use tile_match::core::{parse_layout, refill, render_layout, Board, Catalog, SimpleRng, TilePool};
use tile_match::types::{Pos, Step};

struct Fixture {
    catalog: Catalog,
    pool: TilePool,
    rng: SimpleRng,
}

impl Fixture {
    fn new(seed: u32) -> Self {
        Self {
            catalog: Catalog::builtin(),
            pool: TilePool::new(64),
            rng: SimpleRng::new(seed),
        }
    }

    fn board(&mut self, rows: &[&str]) -> Board {
        parse_layout(rows, &self.catalog, &mut self.pool).unwrap()
    }
}

#[test]
fn test_column_compacts_then_spawns() {
    let mut fx = Fixture::new(7);
    let mut board = fx.board(&["B", "A", ".", "."]);
    let items = fx.catalog.active_items(4).unwrap();

    let moves = refill(&mut board, &items, &mut fx.pool, &mut fx.rng);

    let summary: Vec<(Pos, Pos, Vec<Step>, bool)> = moves
        .iter()
        .map(|m| (m.from, m.to, m.path.clone(), m.spawned))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Pos::new(0, 1), Pos::new(0, 3), vec![Step::Fall, Step::Fall], false),
            (Pos::new(0, 0), Pos::new(0, 2), vec![Step::Fall, Step::Fall], false),
            (Pos::new(0, -1), Pos::new(0, 1), vec![Step::Fall, Step::Fall], true),
            (Pos::new(0, -2), Pos::new(0, 0), vec![Step::Fall, Step::Fall], true),
        ]
    );

    let rows = render_layout(&board, &fx.catalog);
    assert_eq!(&rows[2..], &["B".to_string(), "A".to_string()]);
    assert_eq!(board.empty_count(), 0);
    assert_eq!(fx.pool.live(), 4);
}

#[test]
fn test_every_path_replays_to_its_destination() {
    let mut fx = Fixture::new(3);
    let mut board = fx.board(&["A.B.", ".#..", "C..D", "..#A"]);
    let items = fx.catalog.active_items(4).unwrap();

    let moves = refill(&mut board, &items, &mut fx.pool, &mut fx.rng);

    for m in &moves {
        let end = m.path.iter().fold(m.from, |pos, step| step.apply(pos));
        assert_eq!(end, m.to, "{m:?}");
        assert_eq!(board.tile(m.to).map(|t| t.id), Some(m.tile.id));
    }
}

#[test]
fn test_full_board_yields_no_moves() {
    let mut fx = Fixture::new(1);
    let mut board = fx.board(&["AB", "CD"]);
    let before = board.clone();
    let items = fx.catalog.active_items(4).unwrap();

    assert!(refill(&mut board, &items, &mut fx.pool, &mut fx.rng).is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_cell_sheltered_by_a_block_stays_empty() {
    let mut fx = Fixture::new(1);
    let mut board = fx.board(&["#", "."]);
    let items = fx.catalog.active_items(4).unwrap();

    let moves = refill(&mut board, &items, &mut fx.pool, &mut fx.rng);

    assert!(moves.is_empty());
    assert!(board.is_block_at(0, 0));
    assert!(board.is_empty_at(0, 1));
}
