//! Move log entries and their plain-English descriptions.

use std::fmt;

use crate::game_repr::square::to_algebraic;
use crate::game_repr::{Color, MoveType, Piece, Square, Type};

/// One completed ply as it appears in the move log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Full-move number the ply belongs to
    pub number: u32,
    pub color: Color,
    pub from: Square,
    pub to: Square,
    /// The piece that moved, before any promotion
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveType,
    pub promoted_to: Option<Type>,
    pub description: String,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

/// Check state of the opponent after the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMark {
    None,
    Check,
    Checkmate,
}

/// Describe a move in words, e.g. "Knight from g1 to f3",
/// "Pawn captures on d5 Check!" or "Kingside castling (O-O)".
pub fn describe(
    piece: Piece,
    from: Square,
    to: Square,
    kind: MoveType,
    captured: Option<Piece>,
    promoted_to: Option<Type>,
    mark: CheckMark,
) -> String {
    let mut text = match (kind, promoted_to) {
        (MoveType::CastleKingside, _) => "Kingside castling (O-O)".to_string(),
        (MoveType::CastleQueenside, _) => "Queenside castling (O-O-O)".to_string(),
        (_, Some(promoted)) => format!("Pawn promotes to {} on {}", promoted.name(), to_algebraic(to)),
        _ if captured.is_some() => {
            format!("{} captures on {}", piece.piece_type.name(), to_algebraic(to))
        }
        _ => format!(
            "{} from {} to {}",
            piece.piece_type.name(),
            to_algebraic(from),
            to_algebraic(to)
        ),
    };

    match mark {
        CheckMark::None => {}
        CheckMark::Check => text.push_str(" Check!"),
        CheckMark::Checkmate => text.push_str(" Checkmate!"),
    }
    text
}

/// A numbered row of the move log: White's ply and, once played, Black's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePair<'a> {
    pub number: u32,
    pub white: Option<&'a MoveRecord>,
    pub black: Option<&'a MoveRecord>,
}

/// Group a log into numbered rows. A row starts with White's move, so a log
/// that begins with Black (never the case from the standard start) gets a
/// row with an empty White slot.
pub fn pair_moves(log: &[MoveRecord]) -> Vec<MovePair<'_>> {
    let mut pairs: Vec<MovePair<'_>> = Vec::with_capacity(log.len() / 2 + 1);
    for record in log {
        match record.color {
            Color::White => pairs.push(MovePair {
                number: record.number,
                white: Some(record),
                black: None,
            }),
            Color::Black => match pairs.last_mut() {
                Some(row) if row.number == record.number && row.black.is_none() => {
                    row.black = Some(record);
                }
                _ => pairs.push(MovePair {
                    number: record.number,
                    white: None,
                    black: Some(record),
                }),
            },
        }
    }
    pairs
}
