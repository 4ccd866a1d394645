//! Game configuration.
//!
//! A [`GameConfig`] says who plays which side and how deep the engine searches.
//! The terminal front-end builds one from its command line; the session keeps
//! it so it can tell whether the side to move is engine-controlled.

use log::warn;

use crate::agent::ai::Difficulty;
use crate::game_repr::Color;

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player - two humans at the same board
    PvP,
    /// Player vs AI - one human, one AI
    PvAI,
}

/// Complete game configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// The selected game mode
    pub mode: GameMode,
    /// Side the engine plays in a PvAI game; ignored in PvP
    pub ai_color: Color,
    /// Search depth used for engine moves
    pub difficulty: Difficulty,
}

impl Default for GameConfig {
    /// Human plays White against a depth-3 engine.
    fn default() -> Self {
        Self::pvai(Color::White, Difficulty::default())
    }
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp() -> Self {
        Self {
            mode: GameMode::PvP,
            ai_color: Color::Black,
            difficulty: Difficulty::default(),
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `human_color` - The color the human player will play as
    /// * `difficulty` - The difficulty level for the AI opponent
    pub fn pvai(human_color: Color, difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::PvAI,
            ai_color: human_color.opposite(),
            difficulty,
        }
    }

    /// Get the human player's color in a PvAI game.
    /// Returns None for PvP games.
    pub fn human_color(&self) -> Option<Color> {
        match self.mode {
            GameMode::PvAI => Some(self.ai_color.opposite()),
            GameMode::PvP => None,
        }
    }

    /// Whether the engine makes the moves for `color`.
    pub fn ai_to_move(&self, color: Color) -> bool {
        self.mode == GameMode::PvAI && color == self.ai_color
    }

    /// Build a configuration from command-line arguments.
    ///
    /// Recognized: `--pvp`, `--play-as <white|black>`,
    /// `--difficulty <easy|medium|hard|expert>` and `--depth <1-4>`.
    /// Unknown values fall back to the defaults with a warning.
    pub fn from_args(args: &[String]) -> Self {
        let difficulty = match parse_arg_str(args, "--difficulty") {
            Some(name) => Difficulty::from_name(&name).unwrap_or_else(|| {
                warn!("unknown difficulty '{}', using {}", name, Difficulty::default());
                Difficulty::default()
            }),
            None => Difficulty::default(),
        };

        // An explicit depth wins over a named difficulty.
        let difficulty = match parse_arg_str(args, "--depth") {
            Some(raw) => match raw.parse::<u8>().ok().and_then(Difficulty::from_depth) {
                Some(d) => d,
                None => {
                    warn!("unsupported depth '{}', using {}", raw, difficulty);
                    difficulty
                }
            },
            None => difficulty,
        };

        if args.iter().any(|a| a == "--pvp") {
            return Self {
                difficulty,
                ..Self::pvp()
            };
        }

        let human_color = match parse_arg_str(args, "--play-as").map(|s| s.to_lowercase()) {
            Some(side) if side == "black" => Color::Black,
            Some(side) if side != "white" => {
                warn!("unknown side '{}', playing White", side);
                Color::White
            }
            _ => Color::White,
        };

        Self::pvai(human_color, difficulty)
    }
}

/// Value following `flag`, if present.
fn parse_arg_str(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
