//! Win and draw detection around the last placed stone

use crate::board::{Board, Frontier, Pos, Stone};

/// Line axes scanned through a placed stone
pub const AXES: [(i32, i32); 4] = [
    (1, 0),  // First index
    (0, 1),  // Second index
    (1, 1),  // Diagonal
    (1, -1), // Anti-diagonal
];

/// How far the scan reaches on each side of the stone
const SCAN_REACH: i32 = 5;

/// Run length that wins
const WIN_LENGTH: usize = 5;

/// Result of checking a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Game continues
    None,
    /// The move completed five; the run is ordered along the axis
    Win(Vec<Pos>),
    /// No win and no candidate moves left
    Draw,
}

/// Check whether `color` at `pos` ended the game.
///
/// The board must already hold `color` at `pos`.
pub fn check_move(board: &Board, frontier: &Frontier, color: Stone, pos: Pos) -> Outcome {
    if let Some(run) = find_winning_run(board, color, pos) {
        return Outcome::Win(run);
    }
    if frontier.is_exhausted() {
        return Outcome::Draw;
    }
    Outcome::None
}

/// True when `color` at `pos` completes a winning run
#[inline]
pub fn completes_five(board: &Board, color: Stone, pos: Pos) -> bool {
    find_winning_run(board, color, pos).is_some()
}

fn find_winning_run(board: &Board, color: Stone, pos: Pos) -> Option<Vec<Pos>> {
    AXES.iter().find_map(|&(dx, dy)| scan_axis(board, color, pos, dx, dy))
}

/// Scan offsets -5..=5 along one axis.
///
/// The run counter is compared for equality with five whenever the run
/// breaks and once more at the end, so a longer run through `pos` is not
/// reported on this axis.
fn scan_axis(board: &Board, color: Stone, pos: Pos, dx: i32, dy: i32) -> Option<Vec<Pos>> {
    let mut run: Vec<Pos> = Vec::with_capacity(2 * SCAN_REACH as usize + 1);

    for step in -SCAN_REACH..=SCAN_REACH {
        match pos.offset(dx, dy, step) {
            Some(cell) if board.get(cell) == color => run.push(cell),
            _ => {
                if run.len() == WIN_LENGTH {
                    return Some(run);
                }
                run.clear();
            }
        }
    }

    (run.len() == WIN_LENGTH).then_some(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_line(board: &mut Board, start: (u8, u8), dir: (i32, i32), len: i32, color: Stone) -> Vec<Pos> {
        (0..len)
            .map(|i| {
                let pos = Pos::new(
                    (start.0 as i32 + dir.0 * i) as u8,
                    (start.1 as i32 + dir.1 * i) as u8,
                );
                board.place_stone(pos, color);
                pos
            })
            .collect()
    }

    #[test]
    fn test_five_on_every_axis() {
        let cases = [
            ((3, 4), (1, 0)),
            ((4, 3), (0, 1)),
            ((2, 2), (1, 1)),
            ((2, 12), (1, -1)),
        ];

        for (start, dir) in cases {
            let mut board = Board::new();
            let line = place_line(&mut board, start, dir, 5, Stone::Black);

            // Any stone of the run can be the one just placed
            for &last in &line {
                match check_move(&board, &Frontier::new(), Stone::Black, last) {
                    Outcome::Win(run) => {
                        assert!(run.len() >= 5);
                        for cell in &run {
                            assert!(line.contains(cell), "{:?} not on axis {:?}", cell, dir);
                        }
                    }
                    other => panic!("expected win for {:?}, got {:?}", dir, other),
                }
            }
        }
    }

    #[test]
    fn test_run_is_ordered_along_axis() {
        let mut board = Board::new();
        let line = place_line(&mut board, (7, 7), (0, 1), 5, Stone::Black);
        let outcome = check_move(&board, &Frontier::new(), Stone::Black, Pos::new(7, 11));
        assert_eq!(outcome, Outcome::Win(line));
    }

    #[test]
    fn test_five_at_board_edge() {
        let mut board = Board::new();
        place_line(&mut board, (0, 10), (0, 1), 5, Stone::White);
        assert!(completes_five(&board, Stone::White, Pos::new(0, 14)));
        assert!(completes_five(&board, Stone::White, Pos::new(0, 10)));
    }

    #[test]
    fn test_four_is_not_a_win() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 4, Stone::Black);
        let outcome = check_move(&board, &Frontier::new(), Stone::Black, Pos::new(7, 6));
        assert_eq!(outcome, Outcome::None);
    }

    #[test]
    fn test_opponent_stone_breaks_run() {
        let mut board = Board::new();
        place_line(&mut board, (7, 3), (0, 1), 3, Stone::Black);
        board.place_stone(Pos::new(7, 6), Stone::White);
        place_line(&mut board, (7, 7), (0, 1), 2, Stone::Black);
        assert!(!completes_five(&board, Stone::Black, Pos::new(7, 5)));
        assert!(!completes_five(&board, Stone::Black, Pos::new(7, 8)));
    }

    #[test]
    fn test_overline_is_not_reported() {
        let mut board = Board::new();
        place_line(&mut board, (7, 2), (0, 1), 6, Stone::Black);
        assert!(!completes_five(&board, Stone::Black, Pos::new(7, 4)));
    }

    #[test]
    fn test_win_on_other_axis_despite_overline() {
        let mut board = Board::new();
        place_line(&mut board, (7, 2), (0, 1), 6, Stone::Black);
        place_line(&mut board, (3, 4), (1, 0), 4, Stone::Black);
        // (7, 4) is now on a row of six and a column of five (3..=7)
        match check_move(&board, &Frontier::new(), Stone::Black, Pos::new(7, 4)) {
            Outcome::Win(run) => assert!(run.iter().all(|p| p.y == 4)),
            other => panic!("expected column win, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_when_frontier_exhausted() {
        let mut board = Board::new();
        board.place_stone(Pos::new(7, 7), Stone::White);
        let outcome = check_move(&board, &Frontier::empty(), Stone::White, Pos::new(7, 7));
        assert_eq!(outcome, Outcome::Draw);
    }

    #[test]
    fn test_win_takes_precedence_over_draw() {
        let mut board = Board::new();
        place_line(&mut board, (1, 1), (1, 1), 5, Stone::White);
        let outcome = check_move(&board, &Frontier::empty(), Stone::White, Pos::new(5, 5));
        assert!(matches!(outcome, Outcome::Win(_)));
    }
}
