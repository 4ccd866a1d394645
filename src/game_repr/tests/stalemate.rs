use super::*;

// ==================== STALEMATE TESTS ====================

#[test]
fn test_queen_stalemate_in_corner() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a8", 'k');
    place_piece(&mut pos, "b6", 'Q');
    place_piece(&mut pos, "c6", 'K');

    assert!(!pos.is_in_check(Color::Black));
    assert!(pos.is_stalemate(Color::Black));
    assert!(!pos.is_checkmate(Color::Black));
}

#[test]
fn test_king_and_pawn_stalemate() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e8", 'k');
    place_piece(&mut pos, "e7", 'P');
    place_piece(&mut pos, "e6", 'K');

    assert!(pos.is_stalemate(Color::Black));
}

#[test]
fn test_blocked_pawns_do_not_break_stalemate() {
    let mut pos = empty_board();
    place_piece(&mut pos, "h8", 'k');
    place_piece(&mut pos, "a5", 'p');
    place_piece(&mut pos, "a4", 'P');
    place_piece(&mut pos, "g6", 'Q');
    place_piece(&mut pos, "a1", 'K');

    assert!(pos.is_stalemate(Color::Black), "The a5 pawn is stuck and the king has no square");
}

#[test]
fn test_starting_position_is_not_stalemate() {
    let pos = Position::default();
    assert!(!pos.is_stalemate(Color::White));
    assert!(!pos.is_stalemate(Color::Black));
}

#[test]
fn test_stalemate_is_side_specific() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a8", 'k');
    place_piece(&mut pos, "b6", 'Q');
    place_piece(&mut pos, "c6", 'K');

    assert!(!pos.is_stalemate(Color::White), "White still has plenty of moves");
}
