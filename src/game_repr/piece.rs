use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Type {
    /// Pieces a pawn may promote to, in the order the promotion picker offers them.
    pub const PROMOTIONS: [Type; 4] = [Type::Queen, Type::Rook, Type::Bishop, Type::Knight];

    pub fn name(&self) -> &'static str {
        match self {
            Type::Pawn => "Pawn",
            Type::Knight => "Knight",
            Type::Bishop => "Bishop",
            Type::Rook => "Rook",
            Type::Queen => "Queen",
            Type::King => "King",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Row step a pawn of this color advances by (row 0 is rank 8).
    pub fn forward(&self) -> i32 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    /// Row holding this color's pieces at the start (rank 1 for White, rank 8 for Black).
    pub fn back_row(&self) -> usize {
        match self {
            Self::White => 7,
            Self::Black => 0,
        }
    }

    /// Row on which this color's pawns reach promotion.
    pub fn promotion_row(&self) -> usize {
        self.opposite().back_row()
    }

    pub fn pawn_home_row(&self) -> usize {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// Row a pawn must stand on to capture en passant (its fifth rank).
    pub fn en_passant_row(&self) -> usize {
        match self {
            Self::White => 3,
            Self::Black => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub piece_type: Type,
}

impl Piece {
    pub const fn new(color: Color, piece_type: Type) -> Self {
        Self { color, piece_type }
    }

    /// Uppercase letters are White, lowercase Black.
    pub fn from_char(c: char) -> Option<Self> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece_type = match c.to_ascii_lowercase() {
            'p' => Type::Pawn,
            'n' => Type::Knight,
            'b' => Type::Bishop,
            'r' => Type::Rook,
            'q' => Type::Queen,
            'k' => Type::King,
            _ => return None,
        };
        Some(Self { color, piece_type })
    }

    pub fn to_char(&self) -> char {
        let c = match self.piece_type {
            Type::Pawn => 'p',
            Type::Knight => 'n',
            Type::Bishop => 'b',
            Type::Rook => 'r',
            Type::Queen => 'q',
            Type::King => 'k',
        };
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn is(&self, color: Color) -> bool {
        self.color == color
    }

    pub fn is_a(&self, color: Color, piece_type: Type) -> bool {
        self.color == color && self.piece_type == piece_type
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
