use pagelife::patterns::{BLINKER, BLOCK, GLIDER};
use pagelife::{Board, LifeError, Rule};

fn board_with(width: usize, height: usize, cells: &[(usize, usize)]) -> Board<'static> {
    let mut board = Board::new(width, height).unwrap();
    for &(x, y) in cells {
        board.set(x, y, true).unwrap();
    }
    board
}

#[test]
fn test_state_len_matches_pages() {
    for (w, h, len) in [(1, 1, 1), (8, 8, 8), (8, 9, 16), (128, 64, 1024), (3, 17, 9)] {
        let board = Board::new(w, h).unwrap();
        assert_eq!(board.state().len(), len, "{}x{}", w, h);
        assert_eq!(board.page_count(), len / w);
    }
}

#[test]
fn test_zero_dimensions_rejected() {
    assert_eq!(
        Board::new(0, 8).unwrap_err(),
        LifeError::InvalidDimension { width: 0, height: 8 }
    );
    assert_eq!(
        Board::new(8, 0).unwrap_err(),
        LifeError::InvalidDimension { width: 8, height: 0 }
    );
    let mut storage = [0u8; 16];
    assert!(matches!(
        Board::with_storage(0, 0, &mut storage),
        Err(LifeError::InvalidDimension { .. })
    ));
}

#[test]
fn test_oversized_boards_rejected() {
    assert!(matches!(
        Board::new(usize::MAX, 16),
        Err(LifeError::SizeOverflow { .. })
    ));
    assert!(matches!(
        Board::storage_len(usize::MAX / 2 + 1, 8),
        Err(LifeError::SizeOverflow { .. })
    ));
    assert!(matches!(
        Board::new(usize::MAX / 4, 8),
        Err(LifeError::OutOfMemory { .. })
    ));
}

#[test]
fn test_external_storage_is_checked_and_used() {
    assert_eq!(Board::storage_len(8, 8).unwrap(), 16);

    let mut short = [0u8; 15];
    assert_eq!(
        Board::with_storage(8, 8, &mut short).unwrap_err(),
        LifeError::StorageTooSmall { needed: 16, provided: 15 }
    );

    // existing bytes are the first generation; trailing bytes are ignored
    let mut storage = [0u8; 20];
    storage[3] = 0b0000_0111;
    storage[16..].fill(0xAA);
    let mut board = Board::with_storage(8, 8, &mut storage).unwrap();
    assert_eq!(board.population(), 3);
    board.step();
    assert_eq!(board.state(), &[0, 0, 2, 2, 2, 0, 0, 0]);
    board.destroy();

    assert_eq!(&storage[..8], &[0, 0, 2, 2, 2, 0, 0, 0]);
    assert_eq!(&storage[16..], &[0xAA; 4]);
}

#[test]
fn test_single_cell_dies() {
    let mut board = board_with(5, 5, &[(2, 2)]);
    board.step();
    assert_eq!(board.population(), 0);
}

#[test]
fn test_block_is_still_life() {
    let mut board = Board::new(6, 6).unwrap();
    board.stamp(&BLOCK, 2, 2).unwrap();
    let before = board.state().to_vec();
    for _ in 0..10 {
        board.step();
        assert_eq!(board.state(), before.as_slice());
    }
}

#[test]
fn test_block_in_corner_is_still_life() {
    // no wraparound: corner cells see only on-board neighbours
    let mut board = board_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    let before = board.state().to_vec();
    board.step();
    assert_eq!(board.state(), before.as_slice());
}

#[test]
fn test_blinker_has_period_two() {
    let mut board = Board::new(5, 5).unwrap();
    board.stamp(&BLINKER, 1, 2).unwrap();
    let original = board.state().to_vec();

    board.step();
    assert_ne!(board.state(), original.as_slice());
    let cells: Vec<_> = board.live_cells().collect();
    assert_eq!(cells, vec![(2, 1), (2, 2), (2, 3)]);

    board.step();
    assert_eq!(board.state(), original.as_slice());
}

#[test]
fn test_vertical_triple_at_top_edge() {
    let mut board = Board::new(8, 8).unwrap();
    board.state_mut()[3] = 0b0000_0111;
    board.step();
    assert_eq!(board.state(), &[0, 0, 0b10, 0b10, 0b10, 0, 0, 0]);
}

#[test]
fn test_cross_page_pair_dies() {
    let mut board = Board::new(5, 16).unwrap();
    board.state_mut()[2] = 0x80;
    board.state_mut()[5 + 2] = 0x01;
    assert!(board.get(2, 7).unwrap());
    assert!(board.get(2, 8).unwrap());
    board.step();
    assert!(board.state().iter().all(|&b| b == 0));
}

#[test]
fn test_blinker_across_page_boundary() {
    let mut board = board_with(5, 16, &[(2, 6), (2, 7), (2, 8)]);
    let original = board.state().to_vec();

    board.step();
    let mut expected = vec![0u8; 10];
    expected[1..4].fill(0x80);
    assert_eq!(board.state(), expected.as_slice());

    board.step();
    assert_eq!(board.state(), original.as_slice());
}

#[test]
fn test_thin_boards_never_wrap() {
    let mut column = board_with(1, 3, &[(0, 0), (0, 1), (0, 2)]);
    column.step();
    assert_eq!(column.state(), &[0b010]);

    let mut row = board_with(3, 1, &[(0, 0), (1, 0), (2, 0)]);
    row.step();
    assert_eq!(row.state(), &[0, 1, 0]);
}

#[test]
fn test_rows_past_height_are_ignored() {
    // height 4: bits 4..8 of the only page are off the board
    let mut storage = [0xF0u8; 6];
    let mut board = Board::with_storage(3, 4, &mut storage).unwrap();
    assert_eq!(board.population(), 0);
    board.step();
    assert_eq!(board.population(), 0);
    assert!(board.state().iter().all(|&b| b & 0x0F == 0));
    // off-board bits are left as the caller wrote them
    assert!(board.state().iter().all(|&b| b & 0xF0 == 0xF0));
}

#[test]
fn test_get_set_bounds() {
    let mut board = Board::new(4, 10).unwrap();
    board.set(3, 9, true).unwrap();
    assert!(board.get(3, 9).unwrap());
    assert_eq!(board.state()[4 + 3], 0b10);
    board.set(3, 9, false).unwrap();
    assert!(!board.get(3, 9).unwrap());

    assert_eq!(board.get(4, 0).unwrap_err(), LifeError::OutOfBounds { x: 4, y: 0 });
    assert_eq!(
        board.set(0, 10, true).unwrap_err(),
        LifeError::OutOfBounds { x: 0, y: 10 }
    );
}

#[test]
fn test_stamp_is_all_or_nothing() {
    let mut board = Board::new(4, 4).unwrap();
    assert!(matches!(
        board.stamp(&GLIDER, 2, 2),
        Err(LifeError::OutOfBounds { .. })
    ));
    assert_eq!(board.population(), 0);
    board.stamp(&GLIDER, 0, 0).unwrap();
    assert_eq!(board.population(), 5);
}

#[test]
fn test_glider_translates_after_four_steps() {
    let mut board = Board::new(10, 10).unwrap();
    board.stamp(&GLIDER, 1, 1).unwrap();
    let start: Vec<_> = board.live_cells().collect();
    board.advance(4, &Rule::CONWAY);
    let moved: Vec<_> = board.live_cells().map(|(x, y)| (x - 1, y - 1)).collect();
    assert_eq!(start, moved);
}

#[test]
fn test_display_renders_rows() {
    let board = board_with(3, 2, &[(0, 0), (2, 1)]);
    assert_eq!(board.to_string(), "■□□\n□□■");
}
