//! Error types for the game core
//!
//! Every variant is a programmer error: inputs come from the board view or
//! the fixed opening table, never from untrusted sources.

use thiserror::Error;

/// Errors raised by board, game and search operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Coordinates outside the 15x15 grid
    #[error("Invalid coordinate: ({x}, {y})")]
    InvalidCoordinate { x: i32, y: i32 },

    /// Placement on an occupied cell (or with an empty color)
    #[error("Illegal move at ({x}, {y})")]
    IllegalMove { x: i32, y: i32 },

    /// Broken engine invariant, e.g. a search with no candidates
    #[error("Internal invariant violated: {0}")]
    InternalInvariant(&'static str),
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, GameError>;
