// Minimax Search with Alpha-Beta Pruning
//
// White maximizes and Black minimizes. Inside the tree every score is from
// White's point of view; only the outcome handed back to the caller is turned
// around to "good for the side that asked".
//
// Moves are tried in generation order (board scan, then per-piece order) and a
// move replaces the current best only when strictly better, so the first of
// several equal moves wins and the same position always gives the same answer.

use std::time::Instant;

use log::debug;

use super::evaluation::evaluate;
use crate::game_repr::{Color, Move, MoveList, Position};

/// Checkmate score - use large value but leave room for mate distance
pub const MATE_SCORE: i32 = 30000;

/// Larger than any score the search can return; the initial window bound.
pub const INFINITY: i32 = MATE_SCORE + 1000;

/// Result of a search operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// None when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Positive = good for the side that searched
    pub score: i32,
    pub depth: u8,
    pub nodes_searched: u64,
}

impl SearchOutcome {
    /// The score comes from a forced mate inside the horizon, for either side.
    pub fn is_mate(&self) -> bool {
        self.score.abs() >= MATE_SCORE
    }
}

/// Search `depth` plies for `color` with a full window.
///
/// `pos` is never modified; each ply works on its own copy.
pub fn search(pos: &Position, depth: u8, color: Color) -> SearchOutcome {
    let start = Instant::now();
    let mut nodes = 0u64;

    let (white_score, best_move) = minimax(pos, depth, color, -INFINITY, INFINITY, &mut nodes);
    let score = match color {
        Color::White => white_score,
        Color::Black => -white_score,
    };

    let elapsed_ms = start.elapsed().as_millis();
    debug!(
        "search {:?} depth {}: best {:?} score {} nodes {} in {}ms",
        color,
        depth,
        best_move.map(|m| m.to_string()),
        score,
        nodes,
        elapsed_ms
    );

    SearchOutcome {
        best_move,
        score,
        depth,
        nodes_searched: nodes,
    }
}

/// Minimax with alpha-beta pruning.
///
/// # Arguments
///
/// * `pos` - Position to search; copied for every child
/// * `depth` - Remaining plies (0 = static evaluation)
/// * `color` - Side to move; White maximizes, Black minimizes
/// * `alpha` - Score White is already guaranteed
/// * `beta` - Score Black is already guaranteed
/// * `nodes` - Incremented once per visited node
///
/// # Returns
///
/// (score, best_move) with the score from White's perspective. A side with no
/// legal moves is a leaf: mated sides score `MATE_SCORE` plus the remaining
/// depth against them (nearer mates weigh more), stalemate scores 0.
pub fn minimax(
    pos: &Position,
    depth: u8,
    color: Color,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> (i32, Option<Move>) {
    *nodes += 1;

    if depth == 0 {
        return (evaluate(&pos.board), None);
    }

    let mut moves = MoveList::new();
    pos.all_legal_moves_into(color, &mut moves);

    if moves.is_empty() {
        if pos.is_in_check(color) {
            let mate = MATE_SCORE + depth as i32;
            return match color {
                Color::White => (-mate, None),
                Color::Black => (mate, None),
            };
        }
        return (0, None);
    }

    let maximizing = color == Color::White;
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };
    let mut best_move = None;

    for &mv in moves.iter() {
        let child = pos.after(mv);
        let (score, _) = minimax(&child, depth - 1, color.opposite(), alpha, beta, nodes);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(best_score);
        } else {
            if score < best_score {
                best_score = score;
                best_move = Some(mv);
            }
            beta = beta.min(best_score);
        }

        if beta <= alpha {
            break;
        }
    }

    (best_score, best_move)
}
