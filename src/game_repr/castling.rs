use super::moves::MoveType;
use super::piece::Color;
use super::square::{square_at, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Kingside, CastleSide::Queenside];

    pub fn move_type(&self) -> MoveType {
        match self {
            CastleSide::Kingside => MoveType::CastleKingside,
            CastleSide::Queenside => MoveType::CastleQueenside,
        }
    }

    fn rook_col(&self) -> i32 {
        match self {
            CastleSide::Kingside => 7,
            CastleSide::Queenside => 0,
        }
    }

    /// Columns that must be empty between king and rook.
    fn between_cols(&self) -> &'static [i32] {
        match self {
            CastleSide::Kingside => &[5, 6],
            CastleSide::Queenside => &[1, 2, 3],
        }
    }

    /// Columns the king crosses and lands on, in that order.
    fn king_path_cols(&self) -> [i32; 2] {
        match self {
            CastleSide::Kingside => [5, 6],
            CastleSide::Queenside => [3, 2],
        }
    }

    pub fn rook_from(&self, color: Color) -> Square {
        corner(color, self.rook_col())
    }

    /// The rook ends next to the king, on the side it castled toward.
    pub fn rook_to(&self, color: Color) -> Square {
        corner(color, self.king_path_cols()[0])
    }

    pub fn king_to(&self, color: Color) -> Square {
        corner(color, self.king_path_cols()[1])
    }

    pub fn king_path(&self, color: Color) -> [Square; 2] {
        self.king_path_cols().map(|c| corner(color, c))
    }

    pub fn between(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        self.between_cols().iter().map(move |&c| corner(color, c))
    }
}

pub fn king_home(color: Color) -> Square {
    corner(color, 4)
}

fn corner(color: Color, col: i32) -> Square {
    // Back-row cells always exist.
    square_at(color.back_row() as i32, col).unwrap_or_default()
}

/// "Has moved" flags for the pieces castling depends on. Everything starts
/// false; a flag never goes back to false except through undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingFlags {
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub white_rook_h1_moved: bool,
    pub white_rook_a1_moved: bool,
    pub black_rook_h8_moved: bool,
    pub black_rook_a8_moved: bool,
}

impl CastlingFlags {
    /// Flags for a position where nothing may castle.
    pub fn all_moved() -> Self {
        Self {
            white_king_moved: true,
            black_king_moved: true,
            white_rook_h1_moved: true,
            white_rook_a1_moved: true,
            black_rook_h8_moved: true,
            black_rook_a8_moved: true,
        }
    }

    pub fn king_moved(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_moved,
            Color::Black => self.black_king_moved,
        }
    }

    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::Kingside) => self.white_rook_h1_moved,
            (Color::White, CastleSide::Queenside) => self.white_rook_a1_moved,
            (Color::Black, CastleSide::Kingside) => self.black_rook_h8_moved,
            (Color::Black, CastleSide::Queenside) => self.black_rook_a8_moved,
        }
    }

    /// Both the king and the rook on `side` are still unmoved.
    pub fn may_castle(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    pub(crate) fn mark_king(&mut self, color: Color) {
        match color {
            Color::White => self.white_king_moved = true,
            Color::Black => self.black_king_moved = true,
        }
    }

    /// Something left or was captured on `sq`; if that is a rook corner, the
    /// corner's rook no longer counts as unmoved.
    pub(crate) fn mark_corner(&mut self, sq: Square) {
        for color in [Color::White, Color::Black] {
            for side in CastleSide::BOTH {
                if side.rook_from(color) == sq {
                    match (color, side) {
                        (Color::White, CastleSide::Kingside) => self.white_rook_h1_moved = true,
                        (Color::White, CastleSide::Queenside) => self.white_rook_a1_moved = true,
                        (Color::Black, CastleSide::Kingside) => self.black_rook_h8_moved = true,
                        (Color::Black, CastleSide::Queenside) => self.black_rook_a8_moved = true,
                    }
                }
            }
        }
    }
}
