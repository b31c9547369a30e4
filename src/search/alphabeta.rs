//! Minimax search with alpha-beta pruning
//!
//! Candidates come from the frontier. Each node places a stone on the shared
//! board, drops the cell from the frontier, recurses, then undoes both, so the
//! board and frontier are identical before and after a search.
//!
//! Placements inside the tree do not grow the frontier: the candidate set is
//! fixed to the cells near stones that were on the board when the search
//! started.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Frontier, Stone, Pos};
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! let mut frontier = Frontier::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//! frontier.occupy(Pos::new(7, 7));
//!
//! let mut searcher = Searcher::new(2);
//! let result = searcher.search(&mut board, &mut frontier, Stone::White).unwrap();
//! println!("Best move: {:?} ({})", result.best_move, result.score);
//! ```

use crate::board::{Board, Frontier, Pos, Stone};
use crate::error::{GameError, Result};
use crate::eval::evaluate;

/// Default search depth: one AI move and one reply
pub const DEFAULT_DEPTH: u8 = 2;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Best move found
    pub best_move: Pos,
    /// Minimax value of the best move
    pub score: f64,
    /// Total nodes visited, root children included
    pub nodes: u64,
}

/// Depth-limited alpha-beta searcher
#[derive(Debug, Clone)]
pub struct Searcher {
    depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher. `depth` counts plies including the root move and
    /// is clamped to at least 1.
    pub fn new(depth: u8) -> Self {
        Self {
            depth: depth.max(1),
            nodes: 0,
        }
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Nodes visited by the last search
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Pick the best move for `color`, the maximizing side.
    ///
    /// Each root candidate is searched with the best root score so far as
    /// its lower bound. A child cut off against that bound can only tie or
    /// lose, so the first candidate reaching the highest score is kept.
    pub fn search(&mut self, board: &mut Board, frontier: &mut Frontier, color: Stone) -> Result<SearchResult> {
        self.nodes = 0;
        let child_depth = self.depth - 1;
        let mut best: Option<(Pos, f64)> = None;

        for pos in frontier.to_vec() {
            let alpha = best.map_or(f64::NEG_INFINITY, |(_, best_score)| best_score);
            let score = self.with_stone(board, frontier, pos, color, |searcher, board, frontier| {
                searcher.alphabeta(board, frontier, color, child_depth, alpha, f64::INFINITY, false)
            });

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        let (best_move, score) = best.ok_or(GameError::InternalInvariant(
            "search started with an empty frontier",
        ))?;
        Ok(SearchResult {
            best_move,
            score,
            nodes: self.nodes,
        })
    }

    /// Minimax value of the current position for `ai_color`.
    ///
    /// `maximizing` is true when `ai_color` is to move.
    fn alphabeta(
        &mut self,
        board: &mut Board,
        frontier: &mut Frontier,
        ai_color: Stone,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> f64 {
        if depth == 0 || frontier.is_exhausted() {
            return evaluate(board, ai_color, true);
        }

        let mover = if maximizing { ai_color } else { ai_color.opponent() };

        if maximizing {
            let mut max_eval = f64::NEG_INFINITY;
            for pos in frontier.to_vec() {
                let eval = self.with_stone(board, frontier, pos, mover, |searcher, board, frontier| {
                    searcher.alphabeta(board, frontier, ai_color, depth - 1, alpha, beta, false)
                });
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = f64::INFINITY;
            for pos in frontier.to_vec() {
                let eval = self.with_stone(board, frontier, pos, mover, |searcher, board, frontier| {
                    searcher.alphabeta(board, frontier, ai_color, depth - 1, alpha, beta, true)
                });
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Place `color` at `pos`, run `f`, then restore board and frontier
    #[inline]
    fn with_stone<F>(&mut self, board: &mut Board, frontier: &mut Frontier, pos: Pos, color: Stone, f: F) -> f64
    where
        F: FnOnce(&mut Self, &mut Board, &mut Frontier) -> f64,
    {
        self.nodes += 1;
        board.place_stone(pos, color);
        let was_candidate = frontier.occupy(pos);

        let value = f(self, board, frontier);

        board.remove_stone(pos);
        if was_candidate {
            frontier.restore(pos);
        }
        value
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plain minimax over the same candidates, no pruning
    fn minimax(board: &mut Board, frontier: &mut Frontier, ai_color: Stone, depth: u8, maximizing: bool) -> f64 {
        if depth == 0 || frontier.is_exhausted() {
            return evaluate(board, ai_color, true);
        }
        let mover = if maximizing { ai_color } else { ai_color.opponent() };
        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        for pos in frontier.to_vec() {
            board.place_stone(pos, mover);
            frontier.occupy(pos);
            let eval = minimax(board, frontier, ai_color, depth - 1, !maximizing);
            board.remove_stone(pos);
            frontier.restore(pos);
            best = if maximizing { best.max(eval) } else { best.min(eval) };
        }
        best
    }

    fn minimax_root(board: &mut Board, frontier: &mut Frontier, ai_color: Stone, depth: u8) -> (Pos, f64) {
        let mut best: Option<(Pos, f64)> = None;
        for pos in frontier.to_vec() {
            board.place_stone(pos, ai_color);
            frontier.occupy(pos);
            let score = minimax(board, frontier, ai_color, depth - 1, false);
            board.remove_stone(pos);
            frontier.restore(pos);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }
        best.unwrap()
    }

    /// A few stones in a corner with a small hand-made frontier
    fn small_position() -> (Board, Frontier) {
        let mut board = Board::new();
        let mut frontier = Frontier::empty();
        for &(x, y, s) in &[
            (1, 1, Stone::Black),
            (1, 2, Stone::Black),
            (2, 2, Stone::White),
            (2, 1, Stone::White),
        ] {
            board.place_stone(Pos::new(x, y), s);
        }
        for &(x, y) in &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 3), (2, 0), (2, 3), (3, 3)] {
            frontier.restore(Pos::new(x, y));
        }
        (board, frontier)
    }

    #[test]
    fn test_search_restores_board_and_frontier() {
        let (mut board, mut frontier) = small_position();
        let (board_before, frontier_before) = (board.clone(), frontier.clone());

        let mut searcher = Searcher::new(3);
        searcher.search(&mut board, &mut frontier, Stone::White).unwrap();

        assert_eq!(board, board_before);
        assert_eq!(frontier, frontier_before);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        for depth in 1..=3 {
            let (mut board, mut frontier) = small_position();
            let expected = minimax_root(&mut board, &mut frontier, Stone::White, depth);

            let mut searcher = Searcher::new(depth);
            let result = searcher.search(&mut board, &mut frontier, Stone::White).unwrap();

            assert_eq!((result.best_move, result.score), expected, "depth {}", depth);
        }
    }

    #[test]
    fn test_default_depth_prunes() {
        let (mut board, mut frontier) = small_position();
        let mut searcher = Searcher::default();
        searcher.search(&mut board, &mut frontier, Stone::White).unwrap();

        // 8 root moves, 7 replies each.
        // White at (2,0) scores below White at (1,3) once Black takes (2,3),
        // so the reply at (3,3) is never visited.
        let full_tree = 8 + 8 * 7;
        assert!(searcher.nodes() > 8);
        assert!(searcher.nodes() < full_tree, "{} nodes", searcher.nodes());
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let (mut board, mut frontier) = small_position();
        let mut searcher = Searcher::new(3);
        searcher.search(&mut board, &mut frontier, Stone::White).unwrap();

        // 8 root moves, 7 replies each, 6 moves below each reply
        let full_tree = 8 + 8 * 7 + 8 * 7 * 6;
        assert!(searcher.nodes() > 0);
        assert!(searcher.nodes() < full_tree, "{} nodes", searcher.nodes());
    }

    #[test]
    fn test_empty_frontier_is_an_error() {
        let mut board = Board::new();
        let mut frontier = Frontier::empty();
        let mut searcher = Searcher::default();
        assert_eq!(
            searcher.search(&mut board, &mut frontier, Stone::Black),
            Err(GameError::InternalInvariant("search started with an empty frontier"))
        );
    }

    #[test]
    fn test_single_candidate_is_chosen() {
        let mut board = Board::new();
        let mut frontier = Frontier::empty();
        frontier.restore(Pos::new(3, 3));
        let result = Searcher::default().search(&mut board, &mut frontier, Stone::Black).unwrap();
        assert_eq!(result.best_move, Pos::new(3, 3));
    }

    #[test]
    fn test_prefers_center_on_empty_board() {
        let mut board = Board::new();
        let mut frontier = Frontier::new();
        let result = Searcher::default().search(&mut board, &mut frontier, Stone::Black).unwrap();
        // Opponent replies do not change the AI's score, so the center stone wins outright
        assert_eq!(result.best_move, Pos::new(7, 7));
        assert_eq!(result.score, 128.0);
    }

    #[test]
    fn test_depth_is_at_least_one() {
        assert_eq!(Searcher::new(0).depth(), 1);
        assert_eq!(Searcher::default().depth(), DEFAULT_DEPTH);
    }
}
