//! Evaluation module for Gomoku AI
//!
//! Provides heuristic evaluation functions and the line shapes shared with
//! tactical detection.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{count_connected, evaluate, proximity_bonus, trio_bonus};
pub use patterns::{DangerShape, ShapeCell, DANGER_SHAPES, FORWARD_OFFSETS};
