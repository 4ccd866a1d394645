mod apply;
mod attacks;
mod board;
mod castling;
mod moves;
mod piece;
mod position;
pub mod piece_moves;
pub mod square;

#[cfg(test)]
mod tests;

pub use apply::*;
pub use attacks::{is_in_check, is_square_attacked};
pub use board::*;
pub use castling::*;
pub use moves::*;
pub use piece::*;
pub use piece_moves::MoveList;
pub use position::*;
pub use square::Square;
