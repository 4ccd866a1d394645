use crate::game_repr::Move;

use super::super::{
    attacks::is_in_check,
    castling::{king_home, CastleSide},
    piece::{Piece, Type},
    position::Position,
    square::Square,
};
use super::MoveList;

const KING_STEPS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

impl Position {
    /// Generate king moves into a provided buffer: the eight steps, then
    /// kingside and queenside castling when allowed.
    pub fn king_moves_into(&self, idx: Square, moves: &mut MoveList) {
        self.jump_into(idx, &KING_STEPS, moves);

        let Some(king) = self.board[idx] else {
            return;
        };
        let color = king.color;

        if idx != king_home(color) {
            return;
        }

        // Can't castle out of check
        if is_in_check(&self.board, color) {
            return;
        }

        for side in CastleSide::BOTH {
            if !self.castling.may_castle(color, side) {
                continue;
            }

            let rook_present = self.board[side.rook_from(color)]
                == Some(Piece::new(color, Type::Rook));
            let path_clear = side.between(color).all(|sq| self.board.is_empty(sq));
            if !rook_present || !path_clear {
                continue;
            }

            // The king may neither pass through nor land on an attacked cell.
            let king_safe = side
                .king_path(color)
                .iter()
                .all(|&sq| self.king_safe_on(idx, sq, king));

            if king_safe {
                moves.push(Move::new(idx, side.king_to(color), side.move_type()));
            }
        }
    }

    /// Simulate the king standing on `to` and ask whether it is attacked there.
    fn king_safe_on(&self, from: Square, to: Square, king: Piece) -> bool {
        let mut scratch = self.board;
        scratch.set(from, None);
        scratch.set(to, Some(king));
        !is_in_check(&scratch, king.color)
    }
}
