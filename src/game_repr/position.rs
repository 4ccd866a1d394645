use smallvec::SmallVec;

use super::attacks;
use super::board::Board;
use super::castling::CastlingFlags;
use super::moves::Move;
use super::piece::{Color, Piece, Type};
use super::piece_moves::MoveList;
use super::square::Square;

/*
 * RULES STATE: THE BOARD PLUS WHAT THE BOARD CANNOT SHOW
 */

/// Board plus the auxiliary state move generation depends on. A plain value:
/// the legality filter and the search copy it freely and never touch the
/// caller's instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub castling: CastlingFlags,
    /// Cell a pawn just skipped over with a double step, if any.
    pub en_passant: Option<Square>,
}

impl Default for Position {
    fn default() -> Self {
        Self::from_board(Board::starting())
    }
}

impl Position {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an arbitrary board. Castling flags say "nothing has moved" and
    /// there is no en-passant target.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            castling: CastlingFlags::default(),
            en_passant: None,
        }
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq]
    }

    pub fn is_in_check(&self, color: Color) -> bool {
        attacks::is_in_check(&self.board, color)
    }

    /// Simulate `mv` on a scratch copy and ask whether the mover's king is
    /// safe afterwards.
    pub fn is_move_legal(&self, mv: Move) -> bool {
        let Some(mover) = self.board[mv.from] else {
            return false;
        };
        let next = self.after(mv);
        !next.is_in_check(mover.color)
    }

    /// Generate legal moves for the piece on `idx` into `moves` when it belongs
    /// to `color`. The buffer is NOT cleared.
    pub fn legal_moves_into(&self, idx: Square, color: Color, moves: &mut MoveList) {
        if !matches!(self.board[idx], Some(p) if p.color == color) {
            return;
        }

        let initial_len = moves.len();
        self.pseudo_moves_into(idx, moves);

        // Simulate-and-reject, keeping generation order.
        let mut keep = initial_len;
        for i in initial_len..moves.len() {
            if self.is_move_legal(moves[i]) {
                moves[keep] = moves[i];
                keep += 1;
            }
        }
        moves.truncate(keep);
    }

    pub fn legal_moves(&self, idx: Square, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(idx, color, &mut moves);
        moves
    }

    /// Destination cells only, the shape the UI highlights.
    pub fn legal_destinations(&self, idx: Square, color: Color) -> SmallVec<[Square; 32]> {
        self.legal_moves(idx, color).iter().map(|m| m.to).collect()
    }

    /// Every legal move for `color`, in board-scan order then per-piece
    /// generation order. The buffer is cleared first.
    pub fn all_legal_moves_into(&self, color: Color, moves: &mut MoveList) {
        moves.clear();
        for idx in 0..64 {
            self.legal_moves_into(idx, color, moves);
        }
    }

    pub fn all_legal_moves(&self, color: Color) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(color, &mut moves);
        moves
    }

    /// Checks if the given color has ANY legal moves available
    pub fn has_legal_moves(&self, color: Color) -> bool {
        let mut moves = MoveList::new();
        for (idx, _) in self.board.pieces_of(color) {
            self.legal_moves_into(idx, color, &mut moves);
            if !moves.is_empty() {
                return true;
            }
        }
        false
    }

    /// Returns true if the given color is in checkmate
    /// (in check AND has no legal moves)
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Returns true if the given color is in stalemate
    /// (NOT in check AND has no legal moves)
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_legal_moves(color)
    }

    /// Finds the generated move connecting `from` and `to` for `color`, if legal.
    pub fn find_legal_move(&self, from: Square, to: Square, color: Color) -> Option<Move> {
        self.legal_moves(from, color)
            .into_iter()
            .find(|m| m.connects(from, to))
    }

    /// Counts leaf nodes of the legal move tree, promotions always to a queen.
    /// Used to validate move generation.
    pub fn perft(&self, depth: u32, color: Color) -> u64 {
        if depth == 0 {
            return 1;
        }

        let mut moves = MoveList::new();
        self.all_legal_moves_into(color, &mut moves);

        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .iter()
            .map(|&mv| self.after(mv).perft(depth - 1, color.opposite()))
            .sum()
    }

    /// Count of pieces of one kind, handy for material checks in tests and UI.
    pub fn count(&self, color: Color, piece_type: Type) -> usize {
        self.board
            .pieces_of(color)
            .filter(|(_, p)| p.piece_type == piece_type)
            .count()
    }
}
