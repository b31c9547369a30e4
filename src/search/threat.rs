//! Tactical shortcuts checked before the full search
//!
//! Two passes over every empty cell of the board, in row-major order:
//! 1. Decisive moves: a cell where the AI wins at once, or where the
//!    opponent would win at once and must be blocked.
//! 2. Dangerous shapes: open threes (solid or split) that turn into an
//!    unstoppable four if left alone, for either side.
//!
//! Both passes are cheap compared to the minimax search and catch the
//! positions where a depth-limited search with a shape heuristic tends to
//! play too slowly.

use crate::board::{Board, Pos, Stone};
use crate::eval::{DangerShape, ShapeCell, DANGER_SHAPES};
use crate::rules::{completes_five, AXES};

/// Why the tactical finder picked a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TacticKind {
    /// Placing our stone wins immediately
    Win,
    /// The opponent would win here next move
    Block,
    /// An open or split three runs through here
    Shape(&'static str),
}

/// A tactical move found without search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tactic {
    pub pos: Pos,
    pub kind: TacticKind,
}

/// Run both passes for `color`.
///
/// The board is borrowed mutably for the trial placements of the first pass
/// and is unchanged on return.
pub fn find_tactical_move(board: &mut Board, color: Stone) -> Option<Tactic> {
    find_decisive_move(board, color).or_else(|| find_dangerous_shape(board, color))
}

/// First empty cell where `color` wins, or where its opponent would win.
///
/// At each cell the own win is tried before the block.
pub fn find_decisive_move(board: &mut Board, color: Stone) -> Option<Tactic> {
    let opponent = color.opponent();
    let cells: Vec<Pos> = board.empty_cells().collect();

    for pos in cells {
        if wins_at(board, pos, color) {
            return Some(Tactic { pos, kind: TacticKind::Win });
        }
        if wins_at(board, pos, opponent) {
            return Some(Tactic { pos, kind: TacticKind::Block });
        }
    }
    None
}

/// First empty cell at the heart of a dangerous shape.
///
/// At each cell the opponent's shapes are checked before our own.
pub fn find_dangerous_shape(board: &Board, color: Stone) -> Option<Tactic> {
    let opponent = color.opponent();

    for pos in board.empty_cells() {
        for threat in [opponent, color] {
            if let Some(shape) = matching_shape(board, pos, threat) {
                return Some(Tactic {
                    pos,
                    kind: TacticKind::Shape(shape.name),
                });
            }
        }
    }
    None
}

/// Trial placement of `color` at `pos`, undone before returning
fn wins_at(board: &mut Board, pos: Pos, color: Stone) -> bool {
    board.place_stone(pos, color);
    let wins = completes_five(board, color, pos);
    board.remove_stone(pos);
    wins
}

/// First shape of `threat` stones around `pos` on any axis
fn matching_shape(board: &Board, pos: Pos, threat: Stone) -> Option<&'static DangerShape> {
    AXES.iter().find_map(|&(dx, dy)| {
        DANGER_SHAPES
            .iter()
            .find(|shape| shape_matches(board, pos, threat, shape, dx, dy))
    })
}

fn shape_matches(board: &Board, pos: Pos, threat: Stone, shape: &DangerShape, dx: i32, dy: i32) -> bool {
    shape.cells.iter().all(|&(step, need)| {
        let Some(cell) = pos.offset(dx, dy, step) else {
            return false;
        };
        match need {
            ShapeCell::Empty => board.is_empty(cell),
            ShapeCell::Threat => board.get(cell) == threat,
        }
    })
}
