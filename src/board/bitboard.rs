//! Set of board cells packed into four words

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = (TOTAL_CELLS + 63) / 64;

/// One bit per cell, indexed by `Pos::to_index` (225 of 256 bits used)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard {
    words: [u64; WORDS],
}

/// Word index and mask for a cell
#[inline]
fn locate(pos: Pos) -> (usize, u64) {
    let idx = pos.to_index();
    (idx / 64, 1u64 << (idx % 64))
}

impl Bitboard {
    pub const fn new() -> Self {
        Self { words: [0; WORDS] }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        let (word, mask) = locate(pos);
        self.words[word] |= mask;
    }

    /// Unset a cell. Returns whether it was set.
    #[inline]
    pub fn clear(&mut self, pos: Pos) -> bool {
        let (word, mask) = locate(pos);
        let was_set = self.words[word] & mask != 0;
        self.words[word] &= !mask;
        was_set
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        let (word, mask) = locate(pos);
        self.words[word] & mask != 0
    }

    /// Number of cells in the set
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words == [0; WORDS]
    }

    /// Cells in ascending index order, which is row-major
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            words: self.words,
            word: 0,
        }
    }
}

/// Ascending walk over the set cells of a [`Bitboard`]
pub struct BitboardIter {
    /// Copy of the words; visited bits are cleared as we go
    words: [u64; WORDS],
    word: usize,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Pos> {
        while self.word < WORDS {
            let bits = self.words[self.word];
            if bits == 0 {
                self.word += 1;
                continue;
            }
            self.words[self.word] = bits & (bits - 1);
            let idx = self.word * 64 + bits.trailing_zeros() as usize;
            return (idx < TOTAL_CELLS).then(|| Pos::from_index(idx));
        }
        None
    }
}
