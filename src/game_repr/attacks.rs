// Attack / check detection.
//
// Pure functions of the board: scan every enemy piece and ask whether its
// geometry reaches the target cell. Every legality check and every search leaf
// goes through `is_in_check`.

use super::board::Board;
use super::piece::{Color, Piece, Type};
use super::piece_moves::{DIAGONAL_RAYS, ORTHOGONAL_RAYS};
use super::square::{offset, Square};

const KNIGHT_ATTACKS: [(i32, i32); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];

// Same offsets as the king's step table, kept separate: this answers "what
// does a king attack", not "where may it go".
const KING_ATTACKS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1), (0, 1),
    (1, -1), (1, 0), (1, 1),
];

/// True when `color`'s king stands on an attacked cell. A board without that
/// king is never "in check".
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king_sq) => is_square_attacked(board, king_sq, color.opposite()),
        None => false,
    }
}

/// True when any piece of `by_color` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    board
        .pieces_of(by_color)
        .any(|(sq, piece)| attacks(board, sq, piece, target))
}

/// Does `piece`, standing on `from`, attack `target`?
pub fn attacks(board: &Board, from: Square, piece: Piece, target: Square) -> bool {
    match piece.piece_type {
        Type::Pawn => {
            let dr = piece.color.forward();
            offset(from, dr, -1) == Some(target) || offset(from, dr, 1) == Some(target)
        }
        Type::Knight => hits_any(from, &KNIGHT_ATTACKS, target),
        Type::King => hits_any(from, &KING_ATTACKS, target),
        Type::Rook => ray_reaches(board, from, &ORTHOGONAL_RAYS, target),
        Type::Bishop => ray_reaches(board, from, &DIAGONAL_RAYS, target),
        Type::Queen => {
            ray_reaches(board, from, &ORTHOGONAL_RAYS, target)
                || ray_reaches(board, from, &DIAGONAL_RAYS, target)
        }
    }
}

fn hits_any(from: Square, offsets: &[(i32, i32)], target: Square) -> bool {
    offsets
        .iter()
        .any(|&(dr, dc)| offset(from, dr, dc) == Some(target))
}

/// Walks each ray until it meets the target, a blocker or the edge.
fn ray_reaches(board: &Board, from: Square, rays: &[(i32, i32)], target: Square) -> bool {
    for &(dr, dc) in rays {
        let mut cur = from;
        while let Some(next) = offset(cur, dr, dc) {
            if next == target {
                return true;
            }
            if !board.is_empty(next) {
                break;
            }
            cur = next;
        }
    }
    false
}
