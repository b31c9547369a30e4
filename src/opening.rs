//! Fixed openings and the swap-protocol evaluation
//!
//! A swap opening places a few fixed stones, then decides which color the
//! position favors. The human gets the other color.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Frontier, Stone};
use crate::eval::evaluate;

/// Three-stone openings: two Black, one White
pub type Opening = [(u8, u8, Stone); 3];

pub static OPENINGS: [Opening; 8] = [
    [(7, 7, Stone::Black), (7, 8, Stone::Black), (8, 7, Stone::White)],
    [(7, 7, Stone::Black), (8, 8, Stone::Black), (6, 6, Stone::White)],
    [(7, 7, Stone::Black), (7, 8, Stone::Black), (7, 6, Stone::White)],
    [(7, 7, Stone::Black), (8, 7, Stone::Black), (6, 7, Stone::White)],
    [(7, 7, Stone::Black), (8, 7, Stone::Black), (7, 8, Stone::White)],
    [(5, 6, Stone::Black), (8, 9, Stone::Black), (7, 7, Stone::White)],
    [(6, 6, Stone::Black), (8, 7, Stone::Black), (8, 6, Stone::White)],
    [(6, 7, Stone::Black), (9, 7, Stone::Black), (7, 7, Stone::White)],
];

/// Pick one of the fixed openings
pub fn random_opening<R: Rng + ?Sized>(rng: &mut R) -> &'static Opening {
    OPENINGS.choose(rng).unwrap_or(&OPENINGS[0])
}

/// Shape score of `color` after the opening, without the center bonus.
///
/// Black is scored as it stands. White is scored by its best single
/// reply among the frontier cells (0 if none helps); each trial stone is
/// removed again.
pub fn evaluate_opening_score(board: &mut Board, frontier: &Frontier, color: Stone) -> f64 {
    if color == Stone::Black {
        return evaluate(board, color, false);
    }

    let mut best = 0.0;
    for pos in frontier.iter() {
        board.place_stone(pos, color);
        let eval = evaluate(board, color, false);
        board.remove_stone(pos);
        if eval > best {
            best = eval;
        }
    }
    best
}

/// Color favored by the position: Black unless White scores strictly higher
pub fn favored_color(black_score: f64, white_score: f64) -> Stone {
    if black_score >= white_score {
        Stone::Black
    } else {
        Stone::White
    }
}
