//! Render state fed by game events

use crate::game::GameObserver;
use crate::{Board, Pos, Stone};

/// What the board view needs beyond the stones themselves
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scene {
    /// Last non-setup move, drawn as a dot
    pub marker: Option<Pos>,
    /// Cells of the winning line, empty unless someone won
    pub winning_run: Vec<Pos>,
    pub game_over: bool,
}

impl Scene {
    /// Winner color, read from the board at the first winning cell
    pub fn winner(&self, board: &Board) -> Option<Stone> {
        self.winning_run.first().map(|&pos| board.get(pos))
    }
}

impl GameObserver for Scene {
    fn on_move_marker(&mut self, pos: Pos) {
        self.marker = Some(pos);
    }

    fn on_game_over(&mut self) {
        self.game_over = true;
    }

    fn on_winning_run(&mut self, run: &[Pos]) {
        self.winning_run = run.to_vec();
    }
}
