//! Board tests - the reference collision predicate

use tetro_kick::board::{Board, BoardError};
use tetro_kick::core::{CollisionPredicate, PieceSet};
use tetro_kick::types::{Direction, Orientation, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
        }
    }
    assert_eq!(board.cells().len(), 200);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_clear() {
    let mut board = Board::new();
    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.set(-1, 0, Some(PieceKind::T)));

    board.clear();
    assert!(!board.is_occupied(5, 10));
}

fn t_on_left_wall(board: &Board) -> tetro_kick::core::Piece {
    let set = PieceSet::standard();
    // East T at x = -1 has its stem in column 0
    let mut piece = set.spawn(PieceKind::T, (-1, 5)).unwrap();
    piece.rotate(Direction::Clockwise, board).unwrap();
    assert_eq!(piece.cells(), [(0, 5), (0, 6), (1, 6), (0, 7)]);
    piece
}

#[test]
fn test_wall_kick_off_left_wall() {
    let board = Board::new();
    let mut piece = t_on_left_wall(&board);

    let placement = piece.rotate(Direction::Clockwise, &board).unwrap();

    assert_eq!(placement.kick, (1, 0));
    assert_eq!(piece.orientation(), Orientation::South);
    assert_eq!(piece.anchor(), (0, 5));
    assert!(board.is_legal_placement(&piece.cells()));
}

#[test]
fn test_obstacle_pushes_to_later_kick() {
    let board = Board::from_ascii(
        "
        ..........
        ..........
        ..........
        ..........
        ..........
        ..........
        ..Z.......
        ",
    )
    .unwrap();
    let mut piece = t_on_left_wall(&board);

    let placement = piece.rotate(Direction::Clockwise, &board).unwrap();

    assert_eq!(placement.kick_index, 2);
    assert_eq!(placement.kick, (1, 1));
    assert_eq!(piece.anchor(), (0, 6));
    assert_eq!(piece.cells(), [(0, 7), (1, 7), (2, 7), (1, 8)]);
}

#[test]
fn test_lock_piece_writes_cells() {
    let mut board = Board::new();
    let piece = PieceSet::standard().spawn(PieceKind::O, (3, 18)).unwrap();

    let cells = board.lock_piece(piece).unwrap();

    assert_eq!(cells, [(4, 18), (5, 18), (4, 19), (5, 19)]);
    let ascii = board.to_ascii();
    let rows: Vec<&str> = ascii.lines().collect();
    assert_eq!(rows[18], "....OO....");
    assert_eq!(rows[19], "....OO....");

    let again = PieceSet::standard().spawn(PieceKind::O, (3, 18)).unwrap();
    assert_eq!(
        board.lock_piece(again),
        Err(BoardError::LockBlocked {
            kind: PieceKind::O,
            at: (4, 18)
        })
    );
}
