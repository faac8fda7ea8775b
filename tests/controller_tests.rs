//! Controller tests - spawn, rotate, hold and lock against a real board

use tetro_kick::board::Board;
use tetro_kick::core::PieceSet;
use tetro_kick::engine::{rotate_to, ControlError, Controller, PlacementEvent};
use tetro_kick::types::{Direction, Orientation, PieceKind, SPAWN_POSITION};

#[test]
fn test_spawn_rotate_lock_cycle() {
    let mut board = Board::new();
    let mut ctl = Controller::new(PieceSet::standard());

    ctl.spawn(PieceKind::J, &board).unwrap();
    ctl.rotate(Direction::Clockwise, &board).unwrap().unwrap();
    while ctl.shift(0, 1, &board).unwrap() {}

    let piece = ctl.release().unwrap();
    assert_eq!(piece.orientation(), Orientation::East);
    let cells = board.lock_piece(piece).unwrap();
    assert!(cells.iter().all(|&(_, y)| y >= 17));

    let events = ctl.take_events();
    assert!(matches!(events.first(), Some(PlacementEvent::Spawned { kind: PieceKind::J, .. })));
    assert!(matches!(events.last(), Some(PlacementEvent::Released { .. })));
    assert!(ctl.active().is_none());
}

#[test]
fn test_spawn_blocked_by_stack() {
    let board = Board::from_ascii(
        "
        ....TT....
        ",
    )
    .unwrap();
    let mut ctl = Controller::new(PieceSet::standard());

    let err = ctl.spawn(PieceKind::T, &board).unwrap_err();
    assert!(matches!(err, ControlError::SpawnBlocked { kind: PieceKind::T }));
    assert!(ctl.take_events().is_empty());
}

#[test]
fn test_rotate_to_half_turn_with_board() {
    let board = Board::new();
    let mut ctl = Controller::with_spawn_anchor(PieceSet::standard(), (4, 8));
    ctl.spawn(PieceKind::L, &board).unwrap();
    ctl.take_events();

    let placements = rotate_to(&mut ctl, Orientation::South, &board).unwrap();

    assert_eq!(placements.len(), 2);
    assert_eq!(ctl.active().unwrap().orientation(), Orientation::South);
    let events = ctl.take_events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| matches!(e, PlacementEvent::Rotated(_))));
}

#[test]
fn test_hold_returns_piece_at_spawn() {
    let mut board = Board::new();
    let mut ctl = Controller::new(PieceSet::standard());

    ctl.spawn(PieceKind::I, &board).unwrap();
    ctl.rotate(Direction::Clockwise, &board).unwrap().unwrap();
    ctl.shift(0, 3, &board).unwrap();
    assert_eq!(ctl.hold(&board).unwrap(), None);

    // Hold stays spent until the replacement piece is locked
    ctl.spawn(PieceKind::Z, &board).unwrap();
    assert!(matches!(ctl.hold(&board), Err(ControlError::HoldUnavailable)));
    while ctl.shift(0, 1, &board).unwrap() {}
    board.lock_piece(ctl.release().unwrap()).unwrap();

    ctl.spawn(PieceKind::Z, &board).unwrap();
    assert_eq!(ctl.hold(&board).unwrap(), Some(PieceKind::I));

    let piece = ctl.active().unwrap();
    assert_eq!(piece.kind(), PieceKind::I);
    assert_eq!(piece.orientation(), Orientation::North);
    assert_eq!(piece.anchor(), SPAWN_POSITION);
    assert_eq!(ctl.held(), Some(PieceKind::Z));
}

#[test]
fn test_events_serialize_as_json_lines() {
    let board = Board::new();
    let mut ctl = Controller::new(PieceSet::standard());
    ctl.spawn(PieceKind::T, &board).unwrap();
    ctl.rotate(Direction::Clockwise, &board).unwrap().unwrap();

    let lines: Vec<String> = ctl
        .take_events()
        .iter()
        .map(|e| serde_json::to_string(e).unwrap())
        .collect();

    assert_eq!(lines[0], r#"{"event":"spawned","kind":"t","anchor":[3,0]}"#);
    assert_eq!(
        lines[1],
        r#"{"event":"rotated","orientation":1,"transition":"0->1","anchor":[3,0],"kick":[0,0],"kick_index":0}"#
    );
}
