//! Game state and move application
//!
//! [`Game`] owns the board, the frontier and the AI engine. Every accepted
//! move (human click, AI reply or opening setup stone) goes through
//! [`Game::make_move`], which updates the frontier, checks for a win or a
//! draw and notifies the presentation layer through a [`GameObserver`].

use log::{debug, info};
use rand::Rng;

use crate::board::{Board, Frontier, Pos, Stone};
use crate::config::{GameConfig, OpeningRule};
use crate::engine::{AIEngine, MoveResult};
use crate::error::Result;
use crate::opening::{self, Opening};
use crate::rules::{check_move, Outcome};

/// Events the game core reports to its presentation layer.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    /// A cell now holds `color`
    fn on_stone_placed(&mut self, _pos: Pos, _color: Stone) {}

    /// `pos` is the most recent move (setup stones excluded)
    fn on_move_marker(&mut self, _pos: Pos) {}

    /// The game ended; input should stop
    fn on_game_over(&mut self) {}

    /// Cells of the winning line
    fn on_winning_run(&mut self, _run: &[Pos]) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// A single game against the AI
pub struct Game<O: GameObserver = NullObserver> {
    board: Board,
    frontier: Frontier,
    /// Color assigned to the human; the AI plays the other one
    human_color: Stone,
    game_over: bool,
    last_move: Option<Pos>,
    opening_rule: OpeningRule,
    engine: AIEngine,
    observer: O,
}

impl Game<NullObserver> {
    /// Create a game without a presentation layer
    pub fn new(config: &GameConfig) -> Self {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: GameObserver> Game<O> {
    /// Create a game reporting to `observer`
    pub fn with_observer(config: &GameConfig, observer: O) -> Self {
        Self {
            board: Board::new(),
            frontier: Frontier::new(),
            human_color: Stone::Black,
            game_over: false,
            last_move: None,
            opening_rule: config.opening_rule,
            engine: AIEngine::with_depth(config.search_depth),
            observer,
        }
    }

    /// Clear the board and frontier; the human plays Black again
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.frontier = Frontier::new();
        self.human_color = Stone::Black;
        self.game_over = false;
        self.last_move = None;
    }

    /// Reset, then place a random fixed opening when the swap rule is on
    pub fn begin<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<()> {
        self.reset();
        if self.opening_rule == OpeningRule::Swap {
            self.place_opening(opening::random_opening(rng))?;
        }
        Ok(())
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    #[inline]
    pub fn opening_rule(&self) -> OpeningRule {
        self.opening_rule
    }

    #[inline]
    pub fn human_color(&self) -> Stone {
        self.human_color
    }

    pub fn set_human_color(&mut self, color: Stone) {
        debug_assert!(color != Stone::Empty);
        self.human_color = color;
    }

    #[inline]
    pub fn ai_color(&self) -> Stone {
        self.human_color.opponent()
    }

    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// White moves when Black has more stones on the board, Black otherwise
    pub fn side_to_move(&self) -> Stone {
        if self.board.count(Stone::Black) > self.board.count(Stone::White) {
            Stone::White
        } else {
            Stone::Black
        }
    }

    /// True when the game is live and the AI is the side to move
    pub fn is_ai_turn(&self) -> bool {
        !self.game_over && self.side_to_move() == self.ai_color()
    }

    /// In range and empty
    pub fn is_valid_move(&self, x: i32, y: i32) -> bool {
        self.board.is_empty_at(x, y).unwrap_or(false)
    }

    /// Place `color` at (x, y) and check for the end of the game.
    ///
    /// Returns `Ok(true)` when the game is over, including when it already
    /// was (the move is then ignored). Setup stones get no move marker.
    pub fn make_move(&mut self, x: i32, y: i32, color: Stone, is_setup: bool) -> Result<bool> {
        let pos = Board::pos_at(x, y)?;
        if self.game_over {
            return Ok(true);
        }

        self.board.place(x, y, color)?;
        self.frontier.expand_around(&self.board, pos);
        self.frontier.occupy(pos);
        self.last_move = Some(pos);

        self.observer.on_stone_placed(pos, color);
        if !is_setup {
            self.observer.on_move_marker(pos);
        }
        debug!("{} at ({}, {}), {} candidates", color.name(), x, y, self.frontier.len());

        match check_move(&self.board, &self.frontier, color, pos) {
            Outcome::None => Ok(false),
            Outcome::Win(run) => {
                info!("PLAYER {} WON!!!", color.name());
                self.observer.on_winning_run(&run);
                self.finish();
                Ok(true)
            }
            Outcome::Draw => {
                info!("It's a DRAW!");
                self.finish();
                Ok(true)
            }
        }
    }

    /// Let the AI pick and play its move.
    ///
    /// Returns `Ok(None)` when the game is already over.
    pub fn ai_make_move(&mut self) -> Result<Option<MoveResult>> {
        if self.game_over {
            return Ok(None);
        }

        let ai_color = self.ai_color();
        let result = self.engine.choose_move(&mut self.board, &mut self.frontier, ai_color)?;
        info!(
            "AI ({}) plays ({}, {}) via {:?} in {}ms, {} nodes",
            ai_color.name(),
            result.best_move.x,
            result.best_move.y,
            result.search_type,
            result.time_ms,
            result.nodes
        );

        let pos = result.best_move;
        self.make_move(pos.x as i32, pos.y as i32, ai_color, false)?;
        Ok(Some(result))
    }

    /// Place the stones of a fixed opening as setup moves
    pub fn place_opening(&mut self, opening: &Opening) -> Result<()> {
        for &(x, y, color) in opening {
            self.make_move(x as i32, y as i32, color, true)?;
        }
        Ok(())
    }

    /// Shape score of `color` for the swap decision (no center bonus)
    pub fn evaluate_opening_score(&mut self, color: Stone) -> f64 {
        opening::evaluate_opening_score(&mut self.board, &self.frontier, color)
    }

    /// Decide the colors after a swap opening.
    ///
    /// The human gets the color the position does not favor. Returns the
    /// favored color.
    pub fn resolve_swap(&mut self) -> Stone {
        let black = self.evaluate_opening_score(Stone::Black);
        let white = self.evaluate_opening_score(Stone::White);
        let favored = opening::favored_color(black, white);
        self.human_color = favored.opponent();
        info!(
            "opening scores black={} white={}, {} favored; human plays {}",
            black,
            white,
            favored.name(),
            self.human_color.name()
        );
        favored
    }

    fn finish(&mut self) {
        self.game_over = true;
        self.observer.on_game_over();
    }
}
