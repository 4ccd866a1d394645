use super::super::position::Position;
use super::super::square::Square;
use super::{MoveList, DIAGONAL_RAYS};

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, idx: Square, moves: &mut MoveList) {
        self.slide_into(idx, &DIAGONAL_RAYS, moves);
    }
}
