// AI Agent - Minimax with Alpha-Beta Pruning
//
// Classical fixed-depth search over the rules engine:
// - Deterministic (same position always gives same move)
// - Material plus piece-square evaluation
// - Explicit maximizing (White) and minimizing (Black) sides
// - No move ordering beyond generation order

mod difficulty;
pub mod evaluation;
pub mod piece_square_tables;
pub mod search;


pub use difficulty::Difficulty;
pub use evaluation::{evaluate, evaluate_for, piece_value};
pub use search::{minimax, search, SearchOutcome, INFINITY, MATE_SCORE};
