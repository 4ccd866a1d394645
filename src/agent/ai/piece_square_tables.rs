// Piece-square tables for positional evaluation
// All values in centipawns (100 = 1 pawn)
// Tables are laid out like the board: first row is rank 8, last row is rank 1,
// seen from White's side. Black pieces read the mirrored row.

use crate::game_repr::square::{col_of, row_of};
use crate::game_repr::{Color, Square, Type};

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8 (pawns shouldn't be here)
    50, 50, 50, 50, 50, 50, 50, 50,  // Rank 7 (near promotion)
    10, 10, 20, 30, 30, 20, 10, 10,  // Rank 6
     5,  5, 10, 25, 25, 10,  5,  5,  // Rank 5
     0,  0,  0, 20, 20,  0,  0,  0,  // Rank 4
     5, -5,-10,  0,  0,-10, -5,  5,  // Rank 3
     5, 10, 10,-20,-20, 10, 10,  5,  // Rank 2
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 1
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 8
    -40,-20,  0,  0,  0,  0,-20,-40,  // Rank 7
    -30,  0, 10, 15, 15, 10,  0,-30,  // Rank 6
    -30,  5, 15, 20, 20, 15,  5,-30,  // Rank 5
    -30,  0, 15, 20, 20, 15,  0,-30,  // Rank 4
    -30,  5, 10, 15, 15, 10,  5,-30,  // Rank 3
    -40,-20,  0,  5,  5,  0,-20,-40,  // Rank 2
    -50,-40,-30,-30,-30,-30,-40,-50,  // Rank 1
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 8
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -10,  0,  5, 10, 10,  5,  0,-10,  // Rank 6
    -10,  5,  5, 10, 10,  5,  5,-10,  // Rank 5
    -10,  0, 10, 10, 10, 10,  0,-10,  // Rank 4
    -10, 10, 10, 10, 10, 10, 10,-10,  // Rank 3
    -10,  5,  0,  0,  0,  0,  5,-10,  // Rank 2
    -20,-10,-10,-10,-10,-10,-10,-20,  // Rank 1
];

// Rook position values - prefer 7th rank and center files
pub const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,  // Rank 8
     5, 10, 10, 10, 10, 10, 10,  5,  // Rank 7 (7th rank bonus)
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 6
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 5
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 4
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 3
    -5,  0,  0,  0,  0,  0,  0, -5,  // Rank 2
     0,  0,  0,  5,  5,  0,  0,  0,  // Rank 1
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 8
    -10,  0,  0,  0,  0,  0,  0,-10,  // Rank 7
    -10,  0,  5,  5,  5,  5,  0,-10,  // Rank 6
     -5,  0,  5,  5,  5,  5,  0, -5,  // Rank 5
      0,  0,  5,  5,  5,  5,  0, -5,  // Rank 4
    -10,  5,  5,  5,  5,  5,  0,-10,  // Rank 3
    -10,  0,  5,  0,  0,  0,  0,-10,  // Rank 2
    -20,-10,-10, -5, -5,-10,-10,-20,  // Rank 1
];

// King position values - stay behind the pawns. There is no separate endgame
// table; the same one is used for the whole game.
pub const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 8
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 7
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 6
    -30,-40,-40,-50,-50,-40,-40,-30,  // Rank 5
    -20,-30,-30,-40,-40,-30,-30,-20,  // Rank 4
    -10,-20,-20,-20,-20,-20,-20,-10,  // Rank 3
     20, 20,  0,  0,  0,  0, 20, 20,  // Rank 2
     20, 30, 10,  0,  0, 10, 30, 20,  // Rank 1 (castled position)
];

/// Get piece-square table value for a piece of `color` standing on `square`.
/// Black reads the table with the row mirrored; the file is kept.
pub fn get_pst_value(piece_type: Type, square: Square, color: Color) -> i32 {
    let row = match color {
        Color::White => row_of(square),
        Color::Black => 7 - row_of(square),
    };
    let idx = row * 8 + col_of(square);

    match piece_type {
        Type::Pawn => PAWN_TABLE[idx],
        Type::Knight => KNIGHT_TABLE[idx],
        Type::Bishop => BISHOP_TABLE[idx],
        Type::Rook => ROOK_TABLE[idx],
        Type::Queen => QUEEN_TABLE[idx],
        Type::King => KING_TABLE[idx],
    }
}
