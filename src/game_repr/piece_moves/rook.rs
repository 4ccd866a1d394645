use super::super::position::Position;
use super::super::square::Square;
use super::{MoveList, ORTHOGONAL_RAYS};

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, idx: Square, moves: &mut MoveList) {
        self.slide_into(idx, &ORTHOGONAL_RAYS, moves);
    }
}
