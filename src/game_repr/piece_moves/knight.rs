use super::super::position::Position;
use super::super::square::Square;
use super::MoveList;

const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, idx: Square, moves: &mut MoveList) {
        self.jump_into(idx, &KNIGHT_JUMPS, moves);
    }
}
