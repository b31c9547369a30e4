//! Board rendering for the Gomoku GUI

use crate::{Board, Pos, Stone, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::scene::Scene;
use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked empty cell, if any.
    ///
    /// `to_place` is the color a click would put down; `None` disables input.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        scene: &Scene,
        to_place: Option<Stone>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_coordinates(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = scene.marker {
            self.draw_last_move_marker(&painter, pos);
        }

        if !scene.winning_run.is_empty() {
            self.draw_winning_run(&painter, &scene.winning_run);
        }

        let stone = to_place.filter(|_| !scene.game_over)?;
        let pointer_pos = response.hover_pos()?;
        let board_pos = self.screen_to_board(pointer_pos)?;
        if !board.is_empty(board_pos) {
            return None;
        }

        self.draw_hover_preview(&painter, board_pos, stone);
        response.clicked().then_some(board_pos)
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(x, y));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (0-14 on both axes, x across, y down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;
            let label = i.to_string();

            // Top
            let pos = Pos2::new(self.board_rect.min.x + offset, self.board_rect.min.y + 12.0);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);

            // Left
            let pos = Pos2::new(self.board_rect.min.x + 12.0, self.board_rect.min.y + offset);
            painter.text(pos, egui::Align2::CENTER_CENTER, &label, font.clone(), GRID_LINE);
        }
    }

    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for (color, stones) in [(Stone::Black, &board.black), (Stone::White, &board.white)] {
            for pos in stones.iter_ones() {
                self.draw_stone(painter, pos, color);
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 60));
                painter.circle_filled(center, radius, BLACK_STONE);

                // Highlight
                let highlight_offset = Vec2::new(-radius * 0.3, -radius * 0.3);
                painter.circle_filled(center + highlight_offset, radius * 0.2, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center + shadow_offset, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 40));
                painter.circle_filled(center, radius, WHITE_STONE);

                // Inner shadow for depth
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Ring every stone of the winning run
    fn draw_winning_run(&self, painter: &Painter, run: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;

        for pos in run {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_stone(stone));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        let y = ((relative.y - BOARD_MARGIN + self.cell_size * 0.5) / self.cell_size).floor() as i32;
        Pos::checked(x, y)
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
