pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod session;

pub use config::{GameConfig, GameMode};
pub use error::{GameError, GameResult};
pub use session::{GameSession, MoveOutcome};
