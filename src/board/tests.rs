use super::*;

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.cells().iter().all(|&c| c == Cell::Empty));
    assert_eq!(board.mark_count(), 0);
    assert!(!board.is_full());
}

#[test]
fn test_set_and_get() {
    let mut board = Board::new();
    assert_eq!(board.set(4, Player::X), Ok(()));
    assert_eq!(board.get(4), Some(Cell::Occupied(Player::X)));
    assert!(!board.is_cell_empty(4));
    assert!(board.is_cell_empty(0));
    assert_eq!(board.get(9), None);
}

#[test]
fn test_set_occupied_is_rejected() {
    let mut board = Board::new();
    board.set(0, Player::X).unwrap();
    let before = board.clone();

    assert_eq!(board.set(0, Player::O), Err(MoveError::Occupied(0)));
    assert_eq!(board.set(0, Player::X), Err(MoveError::Occupied(0)));
    assert_eq!(board, before);
}

#[test]
fn test_set_out_of_bounds_is_rejected() {
    let mut board = Board::new();
    assert_eq!(board.set(9, Player::X), Err(MoveError::OutOfBounds(9)));
    assert_eq!(board, Board::new());
}

#[test]
fn test_is_full() {
    let mut board = Board::new();
    for i in 0..TOTAL_CELLS {
        assert!(!board.is_full());
        let player = if i % 2 == 0 { Player::X } else { Player::O };
        board.set(i, player).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(board.mark_count(), 9);
}

#[test]
fn test_clear() {
    let mut board = Board::new();
    board.set(2, Player::O).unwrap();
    board.set(6, Player::X).unwrap();
    board.clear();
    assert_eq!(board, Board::new());
}

#[test]
fn test_row_col() {
    assert_eq!(row_col(0), (0, 0));
    assert_eq!(row_col(5), (1, 2));
    assert_eq!(row_col(7), (2, 1));
}

#[test]
fn test_player_opponent_and_display() {
    assert_eq!(Player::X.opponent(), Player::O);
    assert_eq!(Player::O.opponent(), Player::X);
    assert_eq!(Player::X.to_string(), "X");
    assert_eq!(Player::O.to_string(), "O");
    assert_eq!(Cell::Occupied(Player::O).player(), Some(Player::O));
    assert_eq!(Cell::Empty.player(), None);
}
