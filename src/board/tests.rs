use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7); // Center
    assert_eq!(pos.to_index(), 7 * 15 + 7);
    assert_eq!(pos.to_index(), 112);

    let pos2 = Pos::from_index(112);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(14, 14));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(15, 0));
    assert!(!Pos::is_valid(0, 15));
}

#[test]
fn test_pos_offset() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.offset(1, -1, 3), Some(Pos::new(10, 4)));
    assert_eq!(pos.offset(1, 0, 8), None);
    assert_eq!(Pos::new(0, 0).offset(-1, 0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 15);
    assert_eq!(TOTAL_CELLS, 225);
}

#[test]
fn test_pos_ordering_is_row_major() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_board_place_and_query() {
    let mut board = Board::new();
    assert_eq!(board.is_empty_at(3, 4), Ok(true));

    board.place(3, 4, Stone::White).unwrap();
    assert_eq!(board.is_empty_at(3, 4), Ok(false));
    assert_eq!(board.get(Pos::new(3, 4)), Stone::White);
    assert_eq!(board.count(Stone::White), 1);
    assert_eq!(board.count(Stone::Black), 0);
}

#[test]
fn test_board_rejects_out_of_range() {
    let mut board = Board::new();
    assert_eq!(
        board.is_empty_at(15, 0),
        Err(GameError::InvalidCoordinate { x: 15, y: 0 })
    );
    assert_eq!(
        board.place(-1, 3, Stone::Black),
        Err(GameError::InvalidCoordinate { x: -1, y: 3 })
    );
}

#[test]
fn test_board_rejects_occupied_cell() {
    let mut board = Board::new();
    board.place(7, 7, Stone::Black).unwrap();
    assert_eq!(
        board.place(7, 7, Stone::White),
        Err(GameError::IllegalMove { x: 7, y: 7 })
    );
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
}

#[test]
fn test_board_rejects_empty_color() {
    let mut board = Board::new();
    assert_eq!(
        board.place(2, 2, Stone::Empty),
        Err(GameError::IllegalMove { x: 2, y: 2 })
    );
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new();
    board.place_stone(Pos::new(0, 0), Stone::Black);
    let first: Vec<Pos> = board.empty_cells().take(2).collect();
    assert_eq!(first, vec![Pos::new(0, 1), Pos::new(0, 2)]);
    assert_eq!(board.empty_cells().count(), TOTAL_CELLS - 1);
}

#[test]
fn test_bitboard_iter_order() {
    let mut bb = Bitboard::new();
    bb.set(Pos::new(14, 14));
    bb.set(Pos::new(0, 3));
    bb.set(Pos::new(5, 5));
    let cells: Vec<Pos> = bb.iter_ones().collect();
    assert_eq!(cells, vec![Pos::new(0, 3), Pos::new(5, 5), Pos::new(14, 14)]);
    assert_eq!(bb.count(), 3);
}

#[test]
fn test_bitboard_clear_reports_membership() {
    let mut bb = Bitboard::new();
    // Cells on both sides of the first word boundary
    bb.set(Pos::from_index(63));
    bb.set(Pos::from_index(64));
    assert!(bb.clear(Pos::from_index(64)));
    assert!(!bb.clear(Pos::from_index(64)));
    assert!(bb.get(Pos::from_index(63)));
    assert_eq!(bb.iter_ones().collect::<Vec<_>>(), vec![Pos::from_index(63)]);
    assert!(bb.clear(Pos::from_index(63)));
    assert!(bb.is_empty());
}

#[test]
fn test_frontier_starts_with_center_block() {
    let frontier = Frontier::new();
    assert_eq!(frontier.len(), 25);
    assert!(frontier.contains(Pos::new(5, 5)));
    assert!(frontier.contains(Pos::new(9, 9)));
    assert!(!frontier.contains(Pos::new(10, 10)));
    assert!(!frontier.contains(Pos::new(4, 7)));
}

#[test]
fn test_frontier_window_is_half_open() {
    let mut board = Board::new();
    let mut frontier = Frontier::empty();
    let pos = Pos::new(2, 2);
    board.place_stone(pos, Stone::Black);
    frontier.expand_around(&board, pos);
    frontier.occupy(pos);

    for i in 0..BOARD_SIZE as i32 {
        for j in 0..BOARD_SIZE as i32 {
            let cell = Pos::new(i as u8, j as u8);
            let in_window = (0..4).contains(&i) && (0..4).contains(&j) && cell != pos;
            assert_eq!(frontier.contains(cell), in_window, "cell {:?}", cell);
        }
    }
    assert_eq!(frontier.len(), 15);
}

#[test]
fn test_frontier_clipped_at_edge() {
    let mut board = Board::new();
    let mut frontier = Frontier::empty();
    let pos = Pos::new(0, 0);
    board.place_stone(pos, Stone::White);
    frontier.expand_around(&board, pos);
    frontier.occupy(pos);

    let cells = frontier.to_vec();
    assert_eq!(cells, vec![Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)]);
}

#[test]
fn test_frontier_skips_occupied_cells() {
    let mut board = Board::new();
    let mut frontier = Frontier::empty();
    board.place_stone(Pos::new(6, 6), Stone::White);
    board.place_stone(Pos::new(7, 7), Stone::Black);
    frontier.expand_around(&board, Pos::new(7, 7));

    assert!(!frontier.contains(Pos::new(6, 6)));
    assert!(!frontier.contains(Pos::new(7, 7)));
    assert!(frontier.contains(Pos::new(5, 5)));
    assert!(frontier.contains(Pos::new(8, 8)));
    assert!(!frontier.contains(Pos::new(9, 9)));
}

#[test]
fn test_frontier_occupy_and_restore() {
    let mut frontier = Frontier::new();
    let pos = Pos::new(7, 7);
    assert!(frontier.occupy(pos));
    assert!(!frontier.contains(pos));
    assert!(!frontier.occupy(pos));
    frontier.restore(pos);
    assert_eq!(frontier, Frontier::new());
}

#[test]
fn test_frontier_exhausted() {
    let mut frontier = Frontier::empty();
    assert!(frontier.is_exhausted());
    frontier.restore(Pos::new(1, 1));
    assert!(!frontier.is_exhausted());
}
