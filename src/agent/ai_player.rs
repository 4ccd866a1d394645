//! Engine-controlled side of the board.
//!
//! [`AiPlayer`] is the engine seat a session holds: it fixes the search depth
//! and hands out [`PendingAiMove`]s. A [`PendingAiMove`] is a search request
//! cut loose from the live game: it owns its own copy of the
//! position, so the front-end can run it whenever it is ready (after
//! redrawing, on another thread) and hand the [`AiReply`] back to the session.
//! The session drops replies for positions it has already left.

use crate::game_repr::{Color, Position};

use super::ai::{search, Difficulty, SearchOutcome};

/// AI Player that uses minimax with alpha-beta pruning
#[derive(Debug, Clone)]
pub struct AiPlayer {
    /// AI difficulty level determining search depth
    difficulty: Difficulty,

    /// Display name for this AI player
    name: String,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty, name: String) -> Self {
        Self { difficulty, name }
    }

    /// Create an AI player named after its difficulty, e.g. "AI (Hard)"
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty, format!("AI ({})", difficulty.name()))
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn depth(&self) -> u8 {
        self.difficulty.max_depth()
    }

    /// Package a search of `position` for `color` at this player's depth.
    /// `generation` tags the reply so the session can spot stale results.
    pub(crate) fn prepare(&self, position: Position, color: Color, generation: u64) -> PendingAiMove {
        PendingAiMove::new(position, color, self.depth(), generation)
    }
}

impl From<Difficulty> for AiPlayer {
    fn from(difficulty: Difficulty) -> Self {
        Self::with_difficulty(difficulty)
    }
}

/// A search request detached from the live session.
///
/// Created by [`AiPlayer::prepare`] on behalf of
/// [`crate::session::GameSession::prepare_ai_move`].
#[derive(Debug, Clone)]
pub struct PendingAiMove {
    position: Position,
    color: Color,
    depth: u8,
    generation: u64,
}

impl PendingAiMove {
    fn new(position: Position, color: Color, depth: u8, generation: u64) -> Self {
        Self {
            position,
            color,
            depth,
            generation,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Run the search to completion. There is no cancellation.
    pub fn run(self) -> AiReply {
        let outcome = search(&self.position, self.depth, self.color);
        AiReply {
            outcome,
            color: self.color,
            generation: self.generation,
        }
    }
}

/// Finished search, ready for [`crate::session::GameSession::commit_ai_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiReply {
    pub outcome: SearchOutcome,
    pub color: Color,
    pub(crate) generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_difficulty_names_player() {
        let ai = AiPlayer::with_difficulty(Difficulty::Medium);
        assert_eq!(ai.name(), "AI (Medium)");
        assert_eq!(ai.difficulty().max_depth(), 2);
    }

    #[test]
    fn test_prepared_search_uses_player_depth() {
        let ai = AiPlayer::with_difficulty(Difficulty::Easy);
        let pending = ai.prepare(Position::default(), Color::White, 3);
        assert_eq!(pending.depth(), 1);
        assert_eq!(pending.color(), Color::White);

        let reply = pending.run();
        assert!(reply.outcome.best_move.is_some());
        assert_eq!(reply.outcome.depth, 1);
        assert_eq!(reply.generation, 3);
    }

    #[test]
    fn test_pending_move_runs_on_another_thread() {
        let pending = PendingAiMove::new(Position::default(), Color::Black, 2, 7);
        let reply = std::thread::spawn(move || pending.run())
            .join()
            .expect("search thread panicked");

        assert_eq!(reply.color, Color::Black);
        assert_eq!(reply.generation, 7);
        assert!(reply.outcome.best_move.is_some());
    }

    #[test]
    fn test_pending_move_matches_direct_search() {
        let pos = Position::default();
        let reply = PendingAiMove::new(pos, Color::White, 2, 0).run();
        assert_eq!(reply.outcome, search(&pos, 2, Color::White));
    }
}
