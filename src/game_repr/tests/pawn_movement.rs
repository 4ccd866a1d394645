use super::*;

// ==================== PAWN PUSH TESTS ====================

#[test]
fn test_white_pawn_single_and_double_push() {
    let pos = Position::default();
    let moves = pos.legal_moves(sq("e2"), Color::White);

    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "e2", "e3"));
    assert!(has_move(&moves, "e2", "e4"));
    assert_eq!(count_move_type(&moves, MoveType::Normal), 2);
}

#[test]
fn test_black_pawn_moves_toward_rank_one() {
    let pos = Position::default();
    let moves = pos.legal_moves(sq("e7"), Color::Black);

    assert!(has_move(&moves, "e7", "e6"));
    assert!(has_move(&moves, "e7", "e5"));
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_pawn_blocked_directly() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", 'P');
    place_piece(&mut pos, "e3", 'n');

    let moves = pos.legal_moves(sq("e2"), Color::White);
    assert!(moves.is_empty(), "A blocked pawn has no pushes, got {:?}", moves);
}

#[test]
fn test_double_push_blocked_on_second_square() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e2", 'P');
    place_piece(&mut pos, "e4", 'N');

    let moves = pos.legal_moves(sq("e2"), Color::White);
    assert_eq!(moves.len(), 1);
    assert!(has_move(&moves, "e2", "e3"));
}

#[test]
fn test_no_double_push_off_home_row() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e3", 'P');
    place_piece(&mut pos, "d6", 'p');

    let white = pos.legal_moves(sq("e3"), Color::White);
    assert_eq!(white.len(), 1);
    assert!(has_move(&white, "e3", "e4"));

    let black = pos.legal_moves(sq("d6"), Color::Black);
    assert_eq!(black.len(), 1);
    assert!(has_move(&black, "d6", "d5"));
}

// ==================== PAWN CAPTURE TESTS ====================

#[test]
fn test_pawn_captures_diagonally() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'P');
    place_piece(&mut pos, "d5", 'p');
    place_piece(&mut pos, "f5", 'b');

    let moves = pos.legal_moves(sq("e4"), Color::White);
    assert_eq!(moves.len(), 3);
    assert_eq!(count_move_type(&moves, MoveType::Capture), 2);
    assert!(has_move(&moves, "e4", "d5"));
    assert!(has_move(&moves, "e4", "f5"));
}

#[test]
fn test_pawn_cannot_capture_own_piece() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'P');
    place_piece(&mut pos, "d5", 'N');

    let moves = pos.legal_moves(sq("e4"), Color::White);
    assert!(!has_move(&moves, "e4", "d5"));
    assert_eq!(moves.len(), 1);
}

#[test]
fn test_pawn_does_not_capture_straight_ahead() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'P');
    place_piece(&mut pos, "e5", 'p');

    assert!(pos.legal_moves(sq("e4"), Color::White).is_empty());
}

#[test]
fn test_black_pawn_captures_downward() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d5", 'p');
    place_piece(&mut pos, "c4", 'N');
    place_piece(&mut pos, "e6", 'N');

    let moves = pos.legal_moves(sq("d5"), Color::Black);
    assert!(has_move(&moves, "d5", "c4"));
    assert!(!has_move(&moves, "d5", "e6"), "Black pawns never capture backwards");
    assert!(has_move(&moves, "d5", "d4"));
}

#[test]
fn test_edge_pawn_captures_do_not_wrap() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a4", 'P');
    place_piece(&mut pos, "h5", 'q');

    let moves = pos.legal_moves(sq("a4"), Color::White);
    assert_eq!(moves.len(), 1, "Only the push remains, got {:?}", moves);
    assert!(has_move(&moves, "a4", "a5"));
}
