//! Error types for the live game session.
//!
//! Every variant describes a request the session refused. A refused request
//! leaves the game state exactly as it was.

use crate::game_repr::square::to_algebraic;
use crate::game_repr::{Square, Type};

/// Errors returned by [`crate::session::GameSession`] operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A cell name or index that is not on the board
    #[error("Invalid square: {name}")]
    InvalidSquare { name: String },

    /// The destination is not in the legal-move set of the origin
    #[error("Illegal move from {} to {}", cell(.from), cell(.to))]
    IllegalMove { from: Square, to: Square },

    /// A pawn is waiting on the last rank for its promotion piece
    #[error("A promotion choice is pending")]
    PromotionPending,

    #[error("No promotion is pending")]
    NoPromotionPending,

    /// Pawns may only become a queen, rook, bishop or knight
    #[error("Cannot promote to {0:?}")]
    InvalidPromotionPiece(Type),

    /// Checkmate or stalemate was reached; only undo or a new game continue
    #[error("The game is over")]
    GameOver,

    /// Only the initial snapshot remains
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The side to move has no legal move (checkmate or stalemate at the root)
    #[error("No move available")]
    NoMoveAvailable,

    /// A search result arrived for a position the game has since left
    #[error("Search result is stale")]
    StaleSearch,
}

fn cell(sq: &Square) -> String {
    to_algebraic(*sq)
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
