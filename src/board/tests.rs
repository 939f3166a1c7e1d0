use super::*;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_codes() {
    assert_eq!(u8::from(Stone::Empty), 0);
    assert_eq!(u8::from(Stone::Black), 1);
    assert_eq!(u8::from(Stone::White), 2);
    assert_eq!(Stone::try_from(2), Ok(Stone::White));
    assert!(Stone::try_from(3).is_err());
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center of 15x15
    assert_eq!(pos.to_index(15), 7 * 15 + 7);
    assert_eq!(pos.to_index(15), 112);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, pos);

    let pos3 = Pos::from_index(16, 15);
    assert_eq!(pos3.x, 1);
    assert_eq!(pos3.y, 1);
}

#[test]
fn test_in_bounds() {
    let board = Board::new(15);
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(14, 14));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(!board.in_bounds(15, 0));
    assert!(!board.in_bounds(0, 15));
    assert_eq!(board.get_at(15, 3), None);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_set_get_clear() {
    let mut board = Board::new(15);
    let pos = Pos::new(3, 9);
    assert!(board.is_empty(pos));

    board.set(pos, Stone::White);
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.get_at(3, 9), Some(Stone::White));
    assert_eq!(board.rows()[9][3], Stone::White);
    assert_eq!(board.stone_count(), 1);

    board.clear(pos);
    assert!(board.is_board_empty());
}

#[test]
fn test_center() {
    assert_eq!(Board::new(15).center(), Pos::new(7, 7));
    assert_eq!(Board::new(8).center(), Pos::new(4, 4));
    assert_eq!(Board::default().size(), DEFAULT_BOARD_SIZE);
}

#[test]
fn test_supported_sizes() {
    assert!(Board::is_supported_size(MIN_BOARD_SIZE));
    assert!(Board::is_supported_size(MAX_BOARD_SIZE));
    assert!(!Board::is_supported_size(MAX_BOARD_SIZE + 1));
    assert!(!Board::is_supported_size(0));
}

#[test]
#[should_panic(expected = "outside 5..=25")]
fn test_oversized_board_panics() {
    let _ = Board::new(300);
}

#[test]
fn test_scoped_placement_reverts() {
    let mut board = Board::new(15);
    board.set(Pos::new(6, 7), Stone::Black);
    let before = board.clone();

    {
        let placed = board.place_scoped(Pos::new(7, 7), Stone::Black);
        assert_eq!(placed.get(Pos::new(7, 7)), Stone::Black);
        assert_eq!(placed.stone_count(), 2);
    }

    assert_eq!(board, before);
}

#[test]
fn test_scoped_placement_reverts_on_early_return() {
    fn probe(board: &mut Board) -> bool {
        let placed = board.place_scoped(Pos::new(0, 0), Stone::White);
        if placed.get(Pos::new(0, 0)) == Stone::White {
            return true;
        }
        false
    }

    let mut board = Board::new(9);
    assert!(probe(&mut board));
    assert!(board.is_board_empty());
}
