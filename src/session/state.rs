use crate::game_repr::{Color, Piece, Position};

use super::notation::MoveRecord;

/// Outcome classification for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a way out
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// Classify `pos` for `to_move`: in check and/or without legal moves.
    pub fn classify(pos: &Position, to_move: Color) -> Self {
        let in_check = pos.is_in_check(to_move);
        let has_moves = pos.has_legal_moves(to_move);
        match (in_check, has_moves) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate {
                winner: to_move.opposite(),
            },
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Ongoing,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    /// Status line for the front-end.
    pub fn message(&self, to_move: Color) -> String {
        match self {
            GameStatus::Ongoing => format!("{} to move.", to_move),
            GameStatus::Check => format!("Check! {} to move.", to_move),
            GameStatus::Checkmate { winner } => format!("Checkmate! {} wins.", winner),
            GameStatus::Stalemate => "Stalemate! The game is a draw.".to_string(),
        }
    }
}

/// Pieces taken so far, kept per capturing side in capture order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    by_white: Vec<Piece>,
    by_black: Vec<Piece>,
}

impl CapturedPieces {
    pub fn push(&mut self, capturer: Color, piece: Piece) {
        match capturer {
            Color::White => self.by_white.push(piece),
            Color::Black => self.by_black.push(piece),
        }
    }

    /// Pieces captured by `capturer`.
    pub fn by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }
}

/// Everything undo has to restore. One of these is pushed to the history
/// after every completed ply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,
    pub current_player: Color,
    /// Full-move number; goes up after Black moves
    pub move_number: u32,
    pub captured: CapturedPieces,
    pub move_log: Vec<MoveRecord>,
    pub status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            position: Position::default(),
            current_player: Color::White,
            move_number: 1,
            captured: CapturedPieces::default(),
            move_log: Vec::new(),
            status: GameStatus::Ongoing,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }
}
