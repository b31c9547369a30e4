//! Candidate-move tracking
//!
//! The frontier holds the empty cells near existing stones. Search and the
//! opening evaluator only ever consider frontier cells, which keeps the
//! branching factor small compared to the full 225-cell board.

use super::bitboard::{Bitboard, BitboardIter};
use super::{Board, Pos, BOARD_SIZE};

/// Distance of the expansion window around a new stone
const EXPANSION_RADIUS: i32 = 2;

/// First and one-past-last index of the initial central block
const CENTER_BLOCK: (u8, u8) = (5, 10);

/// Set of candidate cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    cells: Bitboard,
}

impl Frontier {
    /// Frontier seeded with the 5x5 block around the center
    pub fn new() -> Self {
        let mut cells = Bitboard::new();
        for x in CENTER_BLOCK.0..CENTER_BLOCK.1 {
            for y in CENTER_BLOCK.0..CENTER_BLOCK.1 {
                cells.set(Pos::new(x, y));
            }
        }
        Self { cells }
    }

    /// Frontier with no candidates
    pub fn empty() -> Self {
        Self { cells: Bitboard::new() }
    }

    /// Add every empty in-range cell with `x-2 <= i < x+2` and `y-2 <= j < y+2`.
    ///
    /// The window stops one short of the stone on the high side.
    pub fn expand_around(&mut self, board: &Board, pos: Pos) {
        let (x, y) = (pos.x as i32, pos.y as i32);
        for i in (x - EXPANSION_RADIUS)..(x + EXPANSION_RADIUS) {
            for j in (y - EXPANSION_RADIUS)..(y + EXPANSION_RADIUS) {
                if let Some(cell) = Pos::checked(i, j) {
                    if board.is_empty(cell) {
                        self.cells.set(cell);
                    }
                }
            }
        }
    }

    /// Remove a now-occupied cell. Returns whether it was a candidate.
    #[inline]
    pub fn occupy(&mut self, pos: Pos) -> bool {
        self.cells.clear(pos)
    }

    /// Put a cell back after a simulated placement
    #[inline]
    pub fn restore(&mut self, pos: Pos) {
        self.cells.set(pos);
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.cells.get(pos)
    }

    /// No candidates left
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.count() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_exhausted()
    }

    /// Candidates in row-major order
    pub fn iter(&self) -> BitboardIter {
        self.cells.iter_ones()
    }

    /// Snapshot of the candidates, for loops that mutate the frontier
    pub fn to_vec(&self) -> Vec<Pos> {
        let mut moves = Vec::with_capacity(BOARD_SIZE * 2);
        moves.extend(self.iter());
        moves
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
