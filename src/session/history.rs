use log::debug;

use super::state::GameState;

/// Snapshots of the game after every completed ply. The first entry is the
/// starting state and is never removed, so there is always a current state.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<GameState>,
}

impl History {
    pub fn new(initial: GameState) -> Self {
        Self {
            snapshots: vec![initial],
        }
    }

    pub fn push(&mut self, state: GameState) {
        self.snapshots.push(state);
        debug!("history: saved snapshot {}", self.snapshots.len());
    }

    /// Drop the latest snapshot and return the one before it. `None` (and no
    /// change) when only the starting snapshot is left.
    pub fn pop(&mut self) -> Option<&GameState> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        self.snapshots.pop();
        debug!("history: back to snapshot {}", self.snapshots.len());
        self.snapshots.last()
    }

    /// The latest snapshot.
    pub fn current(&self) -> &GameState {
        // Never empty: `pop` keeps the first entry.
        &self.snapshots[self.snapshots.len() - 1]
    }

    pub fn can_undo(&self) -> bool {
        self.snapshots.len() > 1
    }

    /// Number of snapshots, the starting one included. Never zero.
    pub(crate) fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn reset(&mut self, initial: GameState) {
        self.snapshots.clear();
        self.snapshots.push(initial);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Color;

    #[test]
    fn test_initial_snapshot_is_never_popped() {
        let mut history = History::new(GameState::new());
        assert!(!history.can_undo());
        assert!(history.pop().is_none());
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &GameState::new());
    }

    #[test]
    fn test_pop_returns_previous_snapshot() {
        let mut history = History::new(GameState::new());
        let mut next = GameState::new();
        next.current_player = Color::Black;
        history.push(next.clone());
        assert_eq!(history.current(), &next);

        let back = history.pop().cloned();
        assert_eq!(back, Some(GameState::new()));
        assert!(!history.can_undo());
    }

    #[test]
    fn test_popping_past_the_start_keeps_one_snapshot() {
        let mut history = History::new(GameState::new());
        for _ in 0..3 {
            history.push(GameState::new());
        }
        let mut popped = 0;
        while history.pop().is_some() {
            popped += 1;
        }
        assert_eq!(popped, 3);
        assert_eq!(history.len(), 1);
        assert!(history.pop().is_none());
        assert_eq!(history.current(), &GameState::new());
    }

    #[test]
    fn test_reset_keeps_one_snapshot() {
        let mut history = History::new(GameState::new());
        history.push(GameState::new());
        history.push(GameState::new());
        history.reset(GameState::new());
        assert_eq!(history.len(), 1);
    }
}
