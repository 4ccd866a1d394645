use std::fmt;
use std::ops::{Index, IndexMut};

use super::piece::{Color, Piece, Type};
use super::square::{col_of, row_of, Square};

const START_PLACEMENT: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Flat 64-cell board, row 0 = rank 8. Cheap to copy, which is what the
/// legality filter and the search rely on.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    pub fn empty() -> Self {
        Self { cells: [None; 64] }
    }

    /// The standard initial placement.
    pub fn starting() -> Self {
        let mut board = Self::empty();
        for (row, line) in START_PLACEMENT.iter().enumerate() {
            for (col, c) in line.chars().enumerate() {
                board.cells[row * 8 + col] = Piece::from_char(c);
            }
        }
        board
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq]
    }

    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.cells[sq] = piece;
    }

    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq].take()
    }

    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq].is_none()
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.cells[sq].map(|p| p.color)
    }

    /// First cell holding `color`'s king, scanning a8..h1.
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.cells
            .iter()
            .position(|cell| matches!(cell, Some(p) if p.is_a(color, Type::King)))
    }

    /// Occupied cells in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(sq, cell)| cell.map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.cells[sq]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.cells[sq]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for sq in 0..64 {
            if col_of(sq) == 0 {
                write!(f, "{} ", 8 - row_of(sq))?;
            }
            match self.cells[sq] {
                Some(p) => write!(f, " {}", p)?,
                None => f.write_str(" .")?,
            }
            if col_of(sq) == 7 {
                writeln!(f)?;
            }
        }
        write!(f, "   a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}
