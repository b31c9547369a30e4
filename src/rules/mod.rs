//! Game rules for 15x15 Gomoku
//!
//! A move wins when it completes exactly five stones in a row along one of
//! the four axes. A position with no win and no candidate moves left is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_move, completes_five, Outcome, AXES};
