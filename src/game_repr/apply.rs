// Move application.
//
// One entry point serves the live game, the legality filter and the search;
// the latter two call it on copies (`Position::after`). Steps run in a fixed
// order: relocate the mover, remove an en-passant victim, bring the castling
// rook across, promote.

use log::trace;

use super::castling::CastleSide;
use super::moves::{Move, MoveType};
use super::piece::{Piece, Type};
use super::position::Position;
use super::square::{offset, row_of, Square};

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Applied {
    pub mv: Move,
    /// The piece as it stood on the origin cell (a pawn, for promotions).
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Where the captured piece stood; differs from `mv.to` for en passant.
    pub captured_on: Option<Square>,
    /// A pawn reached the last rank and no piece was chosen yet.
    pub promotion_pending: bool,
}

impl Position {
    /// Apply `mv` in place.
    ///
    /// `promote_to` picks the promotion piece; `None` leaves the pawn on the
    /// last rank for the caller to replace (see `Applied::promotion_pending`).
    /// Returns `None`, changing nothing, when the origin cell is empty.
    pub fn apply(&mut self, mv: Move, promote_to: Option<Type>) -> Option<Applied> {
        let moved = self.board.take(mv.from)?;
        let color = moved.color;

        let mut captured = self.board.take(mv.to);
        let mut captured_on = captured.map(|_| mv.to);
        self.board.set(mv.to, Some(moved));

        match mv.kind {
            MoveType::EnPassant => {
                // The victim sits directly behind the destination.
                if let Some(victim_sq) = offset(mv.to, -color.forward(), 0) {
                    if matches!(self.board[victim_sq], Some(p) if p.is_a(color.opposite(), Type::Pawn)) {
                        captured = self.board.take(victim_sq);
                        captured_on = Some(victim_sq);
                    }
                }
            }
            MoveType::CastleKingside | MoveType::CastleQueenside => {
                let side = if mv.kind == MoveType::CastleKingside {
                    CastleSide::Kingside
                } else {
                    CastleSide::Queenside
                };
                let rook = self.board.take(side.rook_from(color));
                self.board.set(side.rook_to(color), rook);
            }
            _ => {}
        }

        let mut promotion_pending = false;
        if moved.piece_type == Type::Pawn && row_of(mv.to) == color.promotion_row() {
            match promote_to {
                Some(piece_type) => self.board.set(mv.to, Some(Piece::new(color, piece_type))),
                None => promotion_pending = true,
            }
        }

        // Castling flags: the king, anything leaving a rook corner, and
        // anything landing on one (a rook captured at home never castles).
        if moved.piece_type == Type::King {
            self.castling.mark_king(color);
        }
        self.castling.mark_corner(mv.from);
        self.castling.mark_corner(mv.to);

        self.en_passant = None;
        if moved.piece_type == Type::Pawn && row_of(mv.from).abs_diff(row_of(mv.to)) == 2 {
            self.en_passant = offset(mv.from, color.forward(), 0);
        }

        trace!("applied {} ({:?}) by {:?}", mv, mv.kind, color);

        Some(Applied {
            mv,
            moved,
            captured,
            captured_on,
            promotion_pending,
        })
    }

    /// The position after `mv` on an independent copy, auto-promoting to a
    /// queen. `self` is left untouched.
    pub fn after(&self, mv: Move) -> Position {
        let mut next = *self;
        next.apply(mv, Some(Type::Queen));
        next
    }
}
