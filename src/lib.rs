//! Gomoku AI with a swap opening
//!
//! Freestyle Gomoku on a 15x15 board against a small AI:
//! - Exactly five in a row wins; six or more does not count
//! - A full board with no five is a draw
//! - Games can start from a random three-stone opening, after which the
//!   human is given the color the position does not favor
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Bitboard board, coordinates and the candidate frontier
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Shape heuristic and the danger patterns
//! - [`search`]: Tactical shortcuts and alpha-beta minimax
//! - [`engine`]: AI engine integrating both search stages
//! - [`opening`]: Fixed openings and the swap evaluation
//! - [`game`]: Move application, game end and observer events
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Game, GameConfig, OpeningRule, Stone};
//!
//! let config = GameConfig {
//!     opening_rule: OpeningRule::Standard,
//!     ..GameConfig::default()
//! };
//! let mut game = Game::new(&config);
//!
//! // Human plays Black in the center
//! game.make_move(7, 7, Stone::Black, false).unwrap();
//!
//! // AI responds as White
//! if let Some(result) = game.ai_make_move().unwrap() {
//!     println!("AI plays at ({}, {})", result.best_move.x, result.best_move.y);
//! }
//! ```
//!
//! # Move Selection
//!
//! The AI engine follows this priority:
//! 1. Immediate winning move
//! 2. Block of the opponent's immediate win
//! 3. Answer to an open or split three (the opponent's first, then its own)
//! 4. Depth-2 alpha-beta search over the frontier

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod opening;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Frontier, Pos, Stone, BOARD_SIZE};
pub use config::{GameConfig, OpeningRule};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{GameError, Result};
pub use game::{Game, GameObserver, NullObserver};
