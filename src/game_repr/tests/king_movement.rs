use super::*;

// ==================== KING MOVEMENT TESTS ====================

#[test]
fn test_king_center_has_eight_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'K');

    let moves = pos.legal_moves(sq("e4"), Color::White);
    assert_eq!(moves.len(), 8, "King in the center should have 8 moves");
}

#[test]
fn test_king_corner_has_three_moves() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", 'K');

    let moves = pos.legal_moves(sq("a1"), Color::White);
    assert_eq!(moves.len(), 3, "King in the corner should have 3 moves");
    assert!(has_move(&moves, "a1", "a2"));
    assert!(has_move(&moves, "a1", "b1"));
    assert!(has_move(&moves, "a1", "b2"));
}

#[test]
fn test_king_on_edge_does_not_wrap() {
    let mut pos = empty_board();
    place_piece(&mut pos, "h4", 'K');

    let moves = pos.legal_moves(sq("h4"), Color::White);
    assert_eq!(moves.len(), 5, "King on the h-file should have 5 moves");
    assert!(!has_move(&moves, "h4", "a5"), "King must not wrap to the a-file");
    assert!(!has_move(&moves, "h4", "a3"), "King must not wrap to the a-file");
}

#[test]
fn test_king_cannot_move_into_attacked_square() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", 'K');
    place_piece(&mut pos, "d8", 'r');

    let moves = pos.legal_moves(sq("e1"), Color::White);
    assert!(!has_move(&moves, "e1", "d1"), "d1 is covered by the rook");
    assert!(!has_move(&moves, "e1", "d2"), "d2 is covered by the rook");
    assert_eq!(moves.len(), 3, "Only e2, f2 and f1 remain");
}

#[test]
fn test_king_cannot_capture_protected_piece() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'K');
    place_piece(&mut pos, "e5", 'p');
    place_piece(&mut pos, "d6", 'p');

    let moves = pos.legal_moves(sq("e4"), Color::White);
    assert!(!has_move(&moves, "e4", "e5"), "e5 is defended by the d6 pawn");
    assert!(!has_move(&moves, "e4", "d4"), "d4 is attacked by the e5 pawn");
    assert!(!has_move(&moves, "e4", "f4"), "f4 is attacked by the e5 pawn");
    assert!(has_move(&moves, "e4", "d5"), "d5 is not attacked");
}

#[test]
fn test_king_can_capture_unprotected_piece() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'K');
    place_piece(&mut pos, "e5", 'n');

    let moves = pos.legal_moves(sq("e4"), Color::White);
    let capture = moves.iter().find(|m| m.connects(sq("e4"), sq("e5")));
    assert_eq!(capture.map(|m| m.kind), Some(MoveType::Capture));
}

#[test]
fn test_kings_cannot_stand_adjacent() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'K');
    place_piece(&mut pos, "e6", 'k');

    let moves = pos.legal_moves(sq("e4"), Color::White);
    for target in ["d5", "e5", "f5"] {
        assert!(!has_move(&moves, "e4", target), "King must not step next to the enemy king on {}", target);
    }
    assert_eq!(moves.len(), 5);
}

#[test]
fn test_king_moves_from_starting_position() {
    let pos = Position::default();
    assert!(pos.legal_moves(sq("e1"), Color::White).is_empty());
    assert!(pos.legal_moves(sq("e8"), Color::Black).is_empty());
}
