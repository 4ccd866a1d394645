use super::*;
use super::square::from_algebraic;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create a position with no pieces
pub fn empty_board() -> Position {
    Position::from_board(Board::empty())
}

/// Helper function to place a piece, e.g. `place_piece(&mut pos, "e4", 'P')`
pub fn place_piece(pos: &mut Position, cell: &str, piece: char) {
    pos.board.set(sq(cell), Piece::from_char(piece));
}

/// Build a position from eight rows, rank 8 first; '.' is an empty cell.
/// Castling flags say nothing has moved.
pub fn diagram(rows: [&str; 8]) -> Position {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        for (col, c) in line.chars().enumerate() {
            board.set(row * 8 + col, Piece::from_char(c));
        }
    }
    Position::from_board(board)
}

/// Cell index from its algebraic name
pub fn sq(name: &str) -> Square {
    from_algebraic(name).unwrap_or_else(|| panic!("bad square name {}", name))
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.connects(sq(from), sq(to)))
}

/// Helper function to count moves of a specific type
pub fn count_move_type(moves: &[Move], move_type: MoveType) -> usize {
    moves.iter().filter(|m| m.kind == move_type).count()
}

// ==================== TEST MODULES ====================

mod king_movement;
mod pawn_movement;
mod en_passant;
mod stalemate;
mod perft;
