use pagelife::{BoardTable, LifeError, DEFAULT_MAX_BOARDS};

#[test]
fn test_default_table_holds_one_board() {
    let mut table = BoardTable::new();
    assert_eq!(table.capacity(), DEFAULT_MAX_BOARDS);
    let id = table.create(128, 64).unwrap();
    assert_eq!(table.get_state(id).unwrap().len(), 1024);
    assert_eq!(
        table.create(8, 8).unwrap_err(),
        LifeError::CapacityExceeded { max: 1 }
    );
}

#[test]
fn test_dimensions_checked_before_capacity() {
    let mut table = BoardTable::with_capacity(0);
    assert!(matches!(
        table.create(0, 8),
        Err(LifeError::InvalidDimension { .. })
    ));
    assert!(matches!(
        table.create(8, 8),
        Err(LifeError::CapacityExceeded { max: 0 })
    ));
    assert!(table.is_empty());
}

#[test]
fn test_destroy_frees_slot_and_invalidates_handle() {
    let mut table = BoardTable::with_capacity(1);
    let first = table.create(4, 4).unwrap();
    assert!(table.destroy(first));
    assert!(!table.destroy(first));
    assert!(table.is_empty());

    let second = table.create(4, 4).unwrap();
    assert_ne!(first, second);
    assert_eq!(table.step(first).unwrap_err(), LifeError::InvalidHandle);
    assert_eq!(table.get_state(first).unwrap_err(), LifeError::InvalidHandle);
    assert!(table.step(second).is_ok());
    assert_eq!(table.len(), 1);
}

#[test]
fn test_boards_are_independent() {
    let mut table = BoardTable::with_capacity(2);
    let a = table.create(3, 3).unwrap();
    let b = table.create(3, 3).unwrap();

    // horizontal blinker through the middle of `a`
    table.get_state(a).unwrap().copy_from_slice(&[0b010, 0b010, 0b010]);
    table.step(a).unwrap();
    assert_eq!(table.get_state(a).unwrap(), &[0, 0b111, 0]);
    assert_eq!(table.get_state(b).unwrap(), &[0, 0, 0]);
    assert_eq!(table.board(a).unwrap().population(), 3);
}

#[test]
fn test_borrowed_storage_through_table() {
    let mut storage = vec![0u8; 32];
    {
        let mut table = BoardTable::with_capacity(1);
        let id = table.create_with_storage(16, 8, &mut storage).unwrap();
        table.board_mut(id).unwrap().set(0, 0, true).unwrap();
        assert!(table.destroy(id));
    }
    assert_eq!(storage[0], 1);
}

#[test]
fn test_short_storage_leaves_table_untouched() {
    let mut storage = [0u8; 8];
    let mut table = BoardTable::with_capacity(1);
    assert_eq!(
        table.create_with_storage(8, 8, &mut storage).unwrap_err(),
        LifeError::StorageTooSmall { needed: 16, provided: 8 }
    );
    assert_eq!(table.len(), 0);
}
