//! Board structure with checked and unchecked accessors

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::{GameError, Result};

/// Game board: one bitboard per color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Resolve signed coordinates into a position or fail with `InvalidCoordinate`
    pub fn pos_at(x: i32, y: i32) -> Result<Pos> {
        Pos::checked(x, y).ok_or(GameError::InvalidCoordinate { x, y })
    }

    /// Check if the cell at (x, y) is empty
    pub fn is_empty_at(&self, x: i32, y: i32) -> Result<bool> {
        Ok(self.is_empty(Self::pos_at(x, y)?))
    }

    /// Place `color` at (x, y).
    ///
    /// Fails with `InvalidCoordinate` off the board and with `IllegalMove`
    /// when the cell is occupied or `color` is `Empty`.
    pub fn place(&mut self, x: i32, y: i32, color: Stone) -> Result<()> {
        let pos = Self::pos_at(x, y)?;
        if color == Stone::Empty || !self.is_empty(pos) {
            return Err(GameError::IllegalMove { x, y });
        }
        self.place_stone(pos, color);
        Ok(())
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone without validation.
    /// Search pairs every call with `remove_stone`.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Number of stones of one color
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        self.stones(stone).map_or(0, Bitboard::count)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// Iterate over all empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..BOARD_SIZE as u8)
            .flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Pos::new(x, y)))
            .filter(|&pos| self.is_empty(pos))
    }
}
