//! Line shapes used by evaluation and tactical detection

/// Forward neighbor offsets. Scanning only forward counts each pair of
/// neighbors once.
pub const FORWARD_OFFSETS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Stones (including the starting one) that make a trio
pub const TRIO_STONES: u32 = 3;

/// Cells scanned ahead of a stone when looking for a trio
pub const TRIO_REACH: i32 = 3;

/// What a shape requires at one offset along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeCell {
    /// Must be empty
    Empty,
    /// Must hold a stone of the threatening color
    Threat,
}

/// A shape relative to an empty candidate cell at offset 0
#[derive(Debug, Clone, Copy)]
pub struct DangerShape {
    pub name: &'static str,
    pub cells: &'static [(i32, ShapeCell)],
}

/// Shapes that demand an immediate answer at the candidate cell.
///
/// Offsets are along one axis; the candidate itself (offset 0) is empty and
/// not listed.
pub const DANGER_SHAPES: [DangerShape; 3] = [
    // _XXX_ with the candidate as the near end
    DangerShape {
        name: "open-three-ahead",
        cells: &[
            (1, ShapeCell::Threat),
            (2, ShapeCell::Threat),
            (3, ShapeCell::Threat),
            (4, ShapeCell::Empty),
        ],
    },
    // _X.XX_ with the candidate in the gap
    DangerShape {
        name: "split-three-forward",
        cells: &[
            (-2, ShapeCell::Empty),
            (-1, ShapeCell::Threat),
            (1, ShapeCell::Threat),
            (2, ShapeCell::Threat),
            (3, ShapeCell::Empty),
        ],
    },
    // _XX.X_ with the candidate in the gap
    DangerShape {
        name: "split-three-backward",
        cells: &[
            (-3, ShapeCell::Empty),
            (-2, ShapeCell::Threat),
            (-1, ShapeCell::Threat),
            (1, ShapeCell::Threat),
            (2, ShapeCell::Empty),
        ],
    },
];
