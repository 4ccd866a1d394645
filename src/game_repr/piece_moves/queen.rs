use super::super::position::Position;
use super::super::square::Square;
use super::MoveList;

impl Position {
    /// Generate queen moves into a provided buffer: rook rays, then bishop rays.
    pub fn queen_moves_into(&self, idx: Square, moves: &mut MoveList) {
        self.rook_moves_into(idx, moves);
        self.bishop_moves_into(idx, moves);
    }
}
