// Position evaluation function
// Returns score in centipawns, positive = good for White

use crate::game_repr::{Board, Color, Type};
use super::piece_square_tables::get_pst_value;

// Material values in centipawns
const PAWN_VALUE: i32 = 100;
const KNIGHT_VALUE: i32 = 320;
const BISHOP_VALUE: i32 = 330;
const ROOK_VALUE: i32 = 500;
const QUEEN_VALUE: i32 = 900;

/// Get material value for a piece type
pub fn piece_value(piece_type: Type) -> i32 {
    match piece_type {
        Type::Pawn => PAWN_VALUE,
        Type::Knight => KNIGHT_VALUE,
        Type::Bishop => BISHOP_VALUE,
        Type::Rook => ROOK_VALUE,
        Type::Queen => QUEEN_VALUE,
        Type::King => 0, // King has no material value
    }
}

/// Static evaluation: material plus piece-square bonus for every piece,
/// added for White and subtracted for Black.
pub fn evaluate(board: &Board) -> i32 {
    let mut score = 0;

    for (square, piece) in board.pieces() {
        let value = piece_value(piece.piece_type)
            + get_pst_value(piece.piece_type, square, piece.color);

        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }

    score
}

/// Evaluation from the point of view of `side_to_move`.
pub fn evaluate_for(board: &Board, side_to_move: Color) -> i32 {
    match side_to_move {
        Color::White => evaluate(board),
        Color::Black => -evaluate(board),
    }
}
