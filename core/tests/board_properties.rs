use chabon_core::{Color, Command, Features, Grid, Row, RowId, Session, Shuffler, Tile, TileId};

const WORDS: [&str; 16] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
];

fn build_grid() -> Grid {
    Grid::from_words(WORDS).unwrap()
}

fn row_texts(grid: &Grid, row: RowId) -> Vec<String> {
    grid.row(row)
        .unwrap()
        .tiles()
        .iter()
        .map(|tile| tile.text().to_owned())
        .collect()
}

fn layout(grid: &Grid) -> Vec<Vec<TileId>> {
    grid.rows()
        .iter()
        .map(|row| row.tiles().iter().map(Tile::id).collect())
        .collect()
}

#[test]
fn tile_multiset_survives_moves_and_shuffles() {
    let mut grid = build_grid();
    let original = grid.tile_ids();
    let mut shuffler = Shuffler::from_seed(2024);
    let mut picks: Vec<TileId> = (1..=16).collect();

    for step in 0..200 {
        if step % 3 == 0 {
            grid.shuffle(&mut shuffler);
        } else {
            shuffler.shuffle(&mut picks);
            grid.move_tile(picks[0], picks[1]);
        }
        assert_eq!(grid.tile_ids(), original);
        assert_eq!(grid.tile_count(), 16);
    }
}

#[test]
fn moving_the_same_pair_twice_restores_the_layout() {
    let mut grid = build_grid();
    let before = layout(&grid);

    grid.move_tile(2, 11);
    assert_ne!(layout(&grid), before);
    grid.move_tile(2, 11);

    assert_eq!(layout(&grid), before);
}

#[test]
fn move_a_to_e_swaps_only_those_tiles() {
    let mut grid = build_grid();

    grid.move_tile(1, 5);

    assert_eq!(row_texts(&grid, 1), ["E", "B", "C", "D"]);
    assert_eq!(row_texts(&grid, 2), ["A", "F", "G", "H"]);
    assert_eq!(row_texts(&grid, 3), ["I", "J", "K", "L"]);
    assert_eq!(row_texts(&grid, 4), ["M", "N", "O", "P"]);
}

#[test]
fn shuffle_of_full_board_is_a_four_by_four_permutation() {
    let mut grid = build_grid();

    grid.shuffle(&mut Shuffler::from_seed(99));

    assert!(grid.rows().iter().all(|row| row.len() == 4));
    assert_eq!(grid.tile_ids(), (1..=16).collect::<Vec<_>>());
}

#[test]
fn shuffle_keeps_uneven_row_counts() {
    let mut tiles = (1..=10).map(|id| Tile::new(id, format!("w{id}")));
    let rows = vec![
        Row::new(1, tiles.by_ref().take(1)),
        Row::new(2, tiles.by_ref().take(4)),
        Row::new(3, tiles.by_ref().take(2)),
        Row::new(4, tiles.by_ref().take(3)),
    ];
    let mut grid = Grid::from_rows(rows).unwrap();
    let mut shuffler = Shuffler::from_seed(8);

    for _ in 0..10 {
        grid.shuffle(&mut shuffler);
        let counts: Vec<_> = grid.rows().iter().map(Row::len).collect();
        assert_eq!(counts, [1, 4, 2, 3]);
    }
    assert_eq!(grid.tile_ids(), (1..=10).collect::<Vec<_>>());
}

#[test]
fn excluded_rows_are_identical_after_shuffle() {
    let mut grid = build_grid();
    grid.set_excluded(1, true).unwrap();
    grid.set_excluded(3, true).unwrap();
    let mut shuffler = Shuffler::from_seed(5);

    for _ in 0..25 {
        grid.shuffle(&mut shuffler);
        assert_eq!(row_texts(&grid, 1), ["A", "B", "C", "D"]);
        assert_eq!(row_texts(&grid, 3), ["I", "J", "K", "L"]);
    }
}

#[test]
fn shuffle_eventually_moves_tiles_between_included_rows() {
    let mut grid = build_grid();
    let before = layout(&grid);
    let mut shuffler = Shuffler::from_seed(17);

    let moved = (0..10).any(|_| {
        grid.shuffle(&mut shuffler);
        layout(&grid) != before
    });

    assert!(moved);
}

#[test]
fn lock_shuffle_clear_scenario() {
    let mut session = Session::new(build_grid(), Features::LOCKING | Features::COLOR_TAGGING, 3);
    let red: Color = "#ff0000".parse().unwrap();

    session.apply(Command::OpenLock(1)).unwrap();
    session
        .apply(Command::SubmitLock {
            color: Some(red),
            theme: "Animals".into(),
        })
        .unwrap();

    let lock = session.grid().row(1).unwrap().lock().unwrap().clone();
    assert_eq!(lock.theme, "Animals");
    assert_eq!(lock.color.to_string(), "#ff0000");
    assert!(session.grid().is_excluded(1));

    for _ in 0..10 {
        session.apply(Command::Shuffle).unwrap();
        assert_eq!(row_texts(session.grid(), 1), ["A", "B", "C", "D"]);
    }

    session.apply(Command::OpenLock(1)).unwrap();
    session.apply(Command::ClearLock).unwrap();
    assert!(session.grid().row(1).unwrap().lock().is_none());
    assert!(!session.grid().is_excluded(1));

    let row_one_moved = (0..20).any(|_| {
        session.apply(Command::Shuffle).unwrap();
        row_texts(session.grid(), 1) != ["A", "B", "C", "D"]
    });
    assert!(row_one_moved);
}
