// Pseudo-legal move generation, one file per piece type.
//
// Generators only look at geometry and occupancy. Whether a move leaves the
// mover's king in check is decided afterwards by the legality filter in
// `position.rs`.

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::moves::{Move, MoveType};
use super::position::Position;
use super::square::{offset, Square};

/// Move buffer sized for the common case; spills to the heap past 64.
pub type MoveList = SmallVec<[Move; 64]>;

pub const ORTHOGONAL_RAYS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_RAYS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

impl Position {
    /// Generate pseudo-legal moves for whatever stands on `idx` into `moves`.
    /// The buffer is NOT cleared.
    pub fn pseudo_moves_into(&self, idx: Square, moves: &mut MoveList) {
        use super::piece::Type;

        let Some(piece) = self.board[idx] else {
            return;
        };
        match piece.piece_type {
            Type::Pawn => self.pawn_moves_into(idx, moves),
            Type::Knight => self.knight_moves_into(idx, moves),
            Type::Bishop => self.bishop_moves_into(idx, moves),
            Type::Rook => self.rook_moves_into(idx, moves),
            Type::Queen => self.queen_moves_into(idx, moves),
            Type::King => self.king_moves_into(idx, moves),
        }
    }

    /// Walk each ray from `idx`: empty cells are moves, the first enemy piece is
    /// a capture and ends the ray, an own piece ends it without a move.
    pub(crate) fn slide_into(&self, idx: Square, rays: &[(i32, i32)], moves: &mut MoveList) {
        let Some(mover) = self.board[idx] else {
            return;
        };
        for &(dr, dc) in rays {
            let mut cur = idx;
            while let Some(next) = offset(cur, dr, dc) {
                match self.board[next] {
                    None => moves.push(Move::new(idx, next, MoveType::Normal)),
                    Some(p) if p.color != mover.color => {
                        moves.push(Move::new(idx, next, MoveType::Capture));
                        break;
                    }
                    Some(_) => break,
                }
                cur = next;
            }
        }
    }

    /// Fixed-offset jumps (knight, king steps), skipping own pieces.
    pub(crate) fn jump_into(&self, idx: Square, offsets: &[(i32, i32)], moves: &mut MoveList) {
        let Some(mover) = self.board[idx] else {
            return;
        };
        for &(dr, dc) in offsets {
            let Some(target) = offset(idx, dr, dc) else {
                continue;
            };
            match self.board[target] {
                None => moves.push(Move::new(idx, target, MoveType::Normal)),
                Some(p) if p.color != mover.color => {
                    moves.push(Move::new(idx, target, MoveType::Capture))
                }
                Some(_) => {}
            }
        }
    }
}
