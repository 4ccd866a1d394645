use super::*;

fn play(pos: &mut Position, color: Color, from: &str, to: &str) -> Applied {
    let mv = pos
        .find_legal_move(sq(from), sq(to), color)
        .unwrap_or_else(|| panic!("{}{} should be legal", from, to));
    pos.apply(mv, Some(Type::Queen)).expect("origin is occupied")
}

// ==================== EN PASSANT TESTS ====================

#[test]
fn test_double_step_sets_target() {
    let mut pos = Position::default();
    play(&mut pos, Color::White, "e2", "e4");
    assert_eq!(pos.en_passant, Some(sq("e3")));

    play(&mut pos, Color::Black, "g8", "f6");
    assert_eq!(pos.en_passant, None, "Target lasts one move only");
}

#[test]
fn test_white_captures_en_passant() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e5", 'P');
    place_piece(&mut pos, "d7", 'p');

    play(&mut pos, Color::Black, "d7", "d5");
    assert_eq!(pos.en_passant, Some(sq("d6")));

    let moves = pos.legal_moves(sq("e5"), Color::White);
    assert!(has_move(&moves, "e5", "d6"));
    assert_eq!(count_move_type(&moves, MoveType::EnPassant), 1);

    let applied = play(&mut pos, Color::White, "e5", "d6");
    assert_eq!(applied.captured, Piece::from_char('p'));
    assert_eq!(applied.captured_on, Some(sq("d5")));
    assert_eq!(pos.piece_at(sq("d5")), None, "Captured pawn is removed from beside the capturer");
    assert_eq!(pos.piece_at(sq("d6")), Piece::from_char('P'));
    assert_eq!(pos.piece_at(sq("e5")), None);
}

#[test]
fn test_black_captures_en_passant() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", 'p');
    place_piece(&mut pos, "e2", 'P');

    play(&mut pos, Color::White, "e2", "e4");
    let moves = pos.legal_moves(sq("d4"), Color::Black);
    assert!(has_move(&moves, "d4", "e3"));

    play(&mut pos, Color::Black, "d4", "e3");
    assert_eq!(pos.piece_at(sq("e4")), None);
    assert_eq!(pos.piece_at(sq("e3")), Piece::from_char('p'));
}

#[test]
fn test_en_passant_expires() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e5", 'P');
    place_piece(&mut pos, "d7", 'p');
    place_piece(&mut pos, "a2", 'P');
    place_piece(&mut pos, "h7", 'p');

    play(&mut pos, Color::Black, "d7", "d5");
    play(&mut pos, Color::White, "a2", "a3");
    play(&mut pos, Color::Black, "h7", "h6");

    let moves = pos.legal_moves(sq("e5"), Color::White);
    assert!(!has_move(&moves, "e5", "d6"), "En passant is only available immediately");
}

#[test]
fn test_no_en_passant_from_wrong_rank() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e4", 'P');
    place_piece(&mut pos, "d5", 'p');
    pos.en_passant = Some(sq("d6"));

    let moves = pos.legal_moves(sq("e4"), Color::White);
    assert_eq!(count_move_type(&moves, MoveType::EnPassant), 0);
}

#[test]
fn test_no_en_passant_without_adjacent_pawn() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e5", 'P');
    place_piece(&mut pos, "d5", 'n');
    pos.en_passant = Some(sq("d6"));

    let moves = pos.legal_moves(sq("e5"), Color::White);
    assert_eq!(count_move_type(&moves, MoveType::EnPassant), 0);
}

#[test]
fn test_en_passant_exposing_king_is_illegal() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a5", 'K');
    place_piece(&mut pos, "b5", 'P');
    place_piece(&mut pos, "c7", 'p');
    place_piece(&mut pos, "h5", 'r');

    play(&mut pos, Color::Black, "c7", "c5");

    let moves = pos.legal_moves(sq("b5"), Color::White);
    assert!(!has_move(&moves, "b5", "c6"), "Both pawns leave the rank and expose the king");
    assert!(has_move(&moves, "b5", "b6"));
}
