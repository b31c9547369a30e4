//! Board representation for Gomoku

pub mod bitboard;
pub mod board;
pub mod frontier;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;
pub use frontier::Frontier;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Upper-case name used in status text and logs
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "BLACK",
            Stone::White => "WHITE",
            Stone::Empty => "NONE",
        }
    }
}

/// Position on the board.
///
/// `x` is the first board index (column on screen), `y` the second (row on screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    /// Build a position from signed coordinates, `None` when off the board
    #[inline]
    pub fn checked(x: i32, y: i32) -> Option<Self> {
        if Self::is_valid(x, y) {
            Some(Self { x: x as u8, y: y as u8 })
        } else {
            None
        }
    }

    /// Position shifted by `step` units along `(dx, dy)`, if still on the board
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, step: i32) -> Option<Self> {
        Self::checked(self.x as i32 + dx * step, self.y as i32 + dy * step)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.x as usize * BOARD_SIZE + self.y as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx / BOARD_SIZE) as u8,
            y: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
