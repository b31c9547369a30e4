//! Heuristic evaluation function for Gomoku board positions
//!
//! The score of a color is a sum over its stones of:
//! - Adjacency: same-color forward neighbors
//! - Trios: three stones within a short forward window that still has room
//! - Center proximity: exponential bonus for central stones (optional)
//!
//! The proximity term dominates in the opening, which pulls play toward the
//! center. The opening evaluator turns it off so that only shape counts.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};

use super::patterns::{FORWARD_OFFSETS, TRIO_REACH, TRIO_STONES};

/// Integer center coordinate (7 on a 15x15 board)
const CENTER: i32 = (BOARD_SIZE / 2) as i32;

/// Evaluate the board for `color`.
///
/// Only `color`'s own stones contribute; the opponent's stones matter only
/// in that they block trios. Higher is better for `color`.
#[must_use]
pub fn evaluate(board: &Board, color: Stone, include_proximity: bool) -> f64 {
    let Some(stones) = board.stones(color) else {
        return 0.0;
    };

    let mut score = 0.0;
    for pos in stones.iter_ones() {
        score += f64::from(count_connected(board, color, pos));
        score += f64::from(trio_bonus(board, color, pos));
        if include_proximity {
            score += proximity_bonus(pos);
        }
    }
    score
}

/// Number of forward neighbors holding `color`
pub fn count_connected(board: &Board, color: Stone, pos: Pos) -> u32 {
    FORWARD_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| pos.offset(dx, dy, 1))
        .filter(|&next| board.get(next) == color)
        .count() as u32
}

/// Number of axes on which `pos` starts a trio.
///
/// Walks up to three cells forward. Own stones and empty cells are counted,
/// an opponent stone or the edge ends the walk. The axis scores when exactly
/// three own stones (including `pos`) were seen along with at least one
/// empty cell.
pub fn trio_bonus(board: &Board, color: Stone, pos: Pos) -> u32 {
    let mut trios = 0;

    for &(dx, dy) in &FORWARD_OFFSETS {
        let mut stones = 1;
        let mut empties = 0;

        for step in 1..=TRIO_REACH {
            let Some(next) = pos.offset(dx, dy, step) else {
                break;
            };
            match board.get(next) {
                s if s == color => stones += 1,
                Stone::Empty => empties += 1,
                _ => break,
            }
        }

        if stones == TRIO_STONES && empties > 0 {
            trios += 1;
        }
    }

    trios
}

/// `2^(7 - manhattan distance from the center)`
#[inline]
pub fn proximity_bonus(pos: Pos) -> f64 {
    let distance = (pos.x as i32 - CENTER).abs() + (pos.y as i32 - CENTER).abs();
    2f64.powi(CENTER - distance)
}
