//! Main AI Engine integrating the search components
//!
//! The engine picks a move in two stages:
//!
//! 1. **Tactics**: immediate win, immediate block, or a dangerous three
//!    (see [`crate::search::threat`])
//! 2. **Alpha-Beta**: minimax over the frontier with the shape heuristic
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Frontier, Stone, Pos};
//!
//! let mut engine = AIEngine::new();
//! let mut board = Board::new();
//! let mut frontier = Frontier::new();
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//! frontier.expand_around(&board, Pos::new(7, 7));
//! frontier.occupy(Pos::new(7, 7));
//!
//! let result = engine.choose_move(&mut board, &mut frontier, Stone::White).unwrap();
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use log::debug;

use crate::board::{Board, Frontier, Pos, Stone};
use crate::error::Result;
use crate::search::{find_tactical_move, SearchResult, Searcher, Tactic, TacticKind, DEFAULT_DEPTH};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Move completes five
    ImmediateWin,
    /// Move stops the opponent's five
    Block,
    /// Move answers (or makes) an open or split three
    DangerousShape,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move
    pub best_move: Pos,
    /// Search score; tactical moves carry no score
    pub score: Option<f64>,
    /// Stage that produced this move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    /// Create a result from a tactical shortcut
    #[inline]
    fn from_tactic(tactic: Tactic, time_ms: u64) -> Self {
        let search_type = match tactic.kind {
            TacticKind::Win => SearchType::ImmediateWin,
            TacticKind::Block => SearchType::Block,
            TacticKind::Shape(_) => SearchType::DangerousShape,
        };
        Self {
            best_move: tactic.pos,
            score: None,
            search_type,
            time_ms,
            nodes: 0,
        }
    }

    /// Create a result from alpha-beta search
    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: Some(result.score),
            search_type: SearchType::AlphaBeta,
            time_ms,
            nodes: result.nodes,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Holds the alpha-beta searcher; the tactical stage is stateless.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine searching at the default depth (2 plies)
    #[must_use]
    pub fn new() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }

    /// Create an engine with a custom search depth
    #[must_use]
    pub fn with_depth(depth: u8) -> Self {
        Self {
            searcher: Searcher::new(depth),
        }
    }

    /// Current search depth
    #[must_use]
    pub fn depth(&self) -> u8 {
        self.searcher.depth()
    }

    /// Choose a move for `color`.
    ///
    /// The board and frontier are used as scratch space and are restored
    /// before returning. Fails with `InternalInvariant` when no tactic
    /// applies and the frontier is empty.
    pub fn choose_move(&mut self, board: &mut Board, frontier: &mut Frontier, color: Stone) -> Result<MoveResult> {
        let start = Instant::now();

        if let Some(tactic) = find_tactical_move(board, color) {
            debug!("tactical move {:?} at {:?}", tactic.kind, tactic.pos);
            return Ok(MoveResult::from_tactic(tactic, elapsed_ms(start)));
        }

        debug!(
            "no tactic for {}, searching {} candidates at depth {}",
            color.name(),
            frontier.len(),
            self.searcher.depth()
        );
        let result = self.searcher.search(board, frontier, color)?;
        Ok(MoveResult::from_alphabeta(result, elapsed_ms(start)))
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}
