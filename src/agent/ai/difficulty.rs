//! AI difficulty levels.
//!
//! The engine has no time control: a difficulty is just a fixed search depth.
//!
//! - **Easy**: Depth 1, takes the best-looking immediate move
//! - **Medium**: Depth 2, sees the opponent's reply
//! - **Hard**: Depth 3, the default
//! - **Expert**: Depth 4, noticeably slower in busy middlegames

use std::fmt;

/// AI difficulty levels that map to a search depth in plies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Easy difficulty: Depth 1
    Easy,

    /// Medium difficulty: Depth 2
    Medium,

    /// Hard difficulty: Depth 3
    ///
    /// Looks at its own move, the reply and its follow-up.
    #[default]
    Hard,

    /// Expert difficulty: Depth 4
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Get the search depth for this difficulty level
    ///
    /// Returns the number of plies (half-moves) to search.
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
            Difficulty::Expert => 4,
        }
    }

    /// The level whose depth is `depth`, if any
    pub fn from_depth(depth: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.max_depth() == depth)
    }

    /// Parse a level name, case-insensitive
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.name(), self.max_depth())
    }
}
