//! Search module for Gomoku AI
//!
//! Contains:
//! - Tactical shortcuts (immediate wins, blocks, dangerous threes)
//! - Minimax with alpha-beta pruning over the frontier

pub mod alphabeta;
pub mod threat;

pub use alphabeta::{SearchResult, Searcher, DEFAULT_DEPTH};
pub use threat::{find_dangerous_shape, find_decisive_move, find_tactical_move, Tactic, TacticKind};
