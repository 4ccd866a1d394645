use std::fmt;

use super::square::{to_algebraic, Square};

/// What a move does beyond relocating the moving piece. The generator tags each
/// candidate and the applier switches on the tag, so the two never disagree
/// about en passant or castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Normal,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// Pawn reaching the last rank, with or without a capture.
    Promotion,
}

impl MoveType {
    pub fn is_castle(&self) -> bool {
        matches!(self, MoveType::CastleKingside | MoveType::CastleQueenside)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveType,
}

impl Move {
    pub const fn new(from: Square, to: Square, kind: MoveType) -> Self {
        Self { from, to, kind }
    }

    /// Same origin and destination, whatever the tag.
    pub fn connects(&self, from: Square, to: Square) -> bool {
        self.from == from && self.to == to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", to_algebraic(self.from), to_algebraic(self.to))
    }
}
