pub mod ai;
pub mod ai_player;

pub use ai::{Difficulty, SearchOutcome};
pub use ai_player::{AiPlayer, AiReply, PendingAiMove};
