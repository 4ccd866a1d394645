use crate::game_repr::{Move, MoveType};

use super::super::{
    piece::Type,
    position::Position,
    square::{col_of, offset, row_of, square_at, Square},
};
use super::MoveList;

impl Position {
    /// Generate pawn moves into a provided buffer.
    ///
    /// Order: single push, double push, captures toward the a-file then the
    /// h-file, en passant. Any move landing on the last rank is tagged
    /// `Promotion`.
    pub fn pawn_moves_into(&self, idx: Square, moves: &mut MoveList) {
        let Some(pawn) = self.board[idx] else {
            return;
        };
        let color = pawn.color;
        let dr = color.forward();
        let tag = |to: Square, plain: MoveType| {
            if row_of(to) == color.promotion_row() {
                MoveType::Promotion
            } else {
                plain
            }
        };

        if let Some(one) = offset(idx, dr, 0) {
            if self.board.is_empty(one) {
                moves.push(Move::new(idx, one, tag(one, MoveType::Normal)));

                if row_of(idx) == color.pawn_home_row() {
                    if let Some(two) = offset(idx, 2 * dr, 0) {
                        if self.board.is_empty(two) {
                            moves.push(Move::new(idx, two, MoveType::Normal));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = offset(idx, dr, dc) else {
                continue;
            };
            if matches!(self.board[target], Some(p) if p.color != color) {
                moves.push(Move::new(idx, target, tag(target, MoveType::Capture)));
            }
        }

        // En passant: the pawn must be on its fifth rank, the target must be the
        // diagonal-forward cell, and an enemy pawn must sit beside us on it.
        if row_of(idx) != color.en_passant_row() {
            return;
        }
        let Some(ep) = self.en_passant else {
            return;
        };
        let row = row_of(idx) as i32;
        if row_of(ep) as i32 != row + dr || col_of(ep).abs_diff(col_of(idx)) != 1 {
            return;
        }
        let Some(victim_sq) = square_at(row, col_of(ep) as i32) else {
            return;
        };
        if matches!(self.board[victim_sq], Some(p) if p.is_a(color.opposite(), Type::Pawn)) {
            moves.push(Move::new(idx, ep, MoveType::EnPassant));
        }
    }
}
