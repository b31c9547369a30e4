//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use log::error;

use super::board_view::BoardView;
use super::scene::Scene;
use super::theme::*;
use crate::{Game, GameConfig, GameError, MoveResult, OpeningRule, Pos, Stone};

/// Where the game is in its opening protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Swap opening placed; the human picks a color or asks to place stones
    ChooseColor,
    /// Human places one more stone of this color as setup
    PlaceExtra(Stone),
    /// Regular play
    Playing,
}

/// AI reply scheduling across frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AiTurn {
    Idle,
    /// Asked for during this frame; the next frame draws the board first
    Requested,
    /// The board with the human's stone has been drawn
    Ready,
}

impl AiTurn {
    fn request(should_move: bool) -> Self {
        if should_move {
            AiTurn::Requested
        } else {
            AiTurn::Idle
        }
    }

    fn is_pending(self) -> bool {
        self != AiTurn::Idle
    }

    /// Step once at the start of a frame. Returns true when the AI moves now.
    fn advance(&mut self) -> bool {
        match *self {
            AiTurn::Idle => false,
            AiTurn::Requested => {
                *self = AiTurn::Ready;
                false
            }
            AiTurn::Ready => {
                *self = AiTurn::Idle;
                true
            }
        }
    }
}

/// Main Gomoku application
pub struct GomokuApp {
    config: GameConfig,
    game: Game<Scene>,
    board_view: BoardView,
    phase: Phase,
    ai_turn: AiTurn,
    last_ai_result: Option<MoveResult>,
    message: Option<String>,
    /// Set after an internal error; the board stops taking input
    failed: bool,
    show_debug: bool,
}

impl GomokuApp {
    /// Create the app and start a game with `config`
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        let mut app = Self {
            config,
            game: Game::with_observer(&config, Scene::default()),
            board_view: BoardView::default(),
            phase: Phase::Playing,
            ai_turn: AiTurn::Idle,
            last_ai_result: None,
            message: None,
            failed: false,
            show_debug: true,
        };
        app.new_game(config.opening_rule);
        app
    }

    /// Start over with the given opening rule
    fn new_game(&mut self, rule: OpeningRule) {
        self.config.opening_rule = rule;
        self.game = Game::with_observer(&self.config, Scene::default());
        self.ai_turn = AiTurn::Idle;
        self.last_ai_result = None;
        self.message = None;
        self.failed = false;

        if let Err(err) = self.game.begin(&mut rand::thread_rng()) {
            self.fail(err);
            return;
        }
        self.phase = match rule {
            OpeningRule::Swap => Phase::ChooseColor,
            OpeningRule::Standard => Phase::Playing,
        };
    }

    /// Log the error and freeze the board
    fn fail(&mut self, err: GameError) {
        error!("game halted: {}", err);
        self.message = Some(err.to_string());
        self.failed = true;
        self.ai_turn = AiTurn::Idle;
    }

    fn choose_color(&mut self, color: Stone) {
        self.game.set_human_color(color);
        self.phase = Phase::Playing;
        self.message = Some(format!("You are playing as {}", color.name()));
        self.ai_turn = AiTurn::request(self.game.is_ai_turn());
    }

    fn accepts_input(&self) -> bool {
        !self.failed && !self.ai_turn.is_pending() && !self.game.is_game_over() && self.phase != Phase::ChooseColor
    }

    /// Color a click would place right now
    fn stone_to_place(&self) -> Option<Stone> {
        if !self.accepts_input() {
            return None;
        }
        match self.phase {
            Phase::PlaceExtra(color) => Some(color),
            _ => Some(self.game.human_color()),
        }
    }

    fn handle_click(&mut self, pos: Pos) {
        let (x, y) = (pos.x as i32, pos.y as i32);
        match self.phase {
            Phase::ChooseColor => {}
            Phase::PlaceExtra(color) => {
                if let Err(err) = self.game.make_move(x, y, color, true) {
                    self.fail(err);
                    return;
                }
                if color == Stone::Black {
                    self.phase = Phase::PlaceExtra(Stone::White);
                } else {
                    self.game.resolve_swap();
                    self.phase = Phase::Playing;
                    self.message = Some(format!("You are playing as {}", self.game.human_color().name()));
                    self.ai_turn = AiTurn::request(self.game.is_ai_turn());
                }
            }
            Phase::Playing => match self.game.make_move(x, y, self.game.human_color(), false) {
                Ok(ended) => self.ai_turn = AiTurn::request(!ended),
                Err(err) => self.fail(err),
            },
        }
    }

    fn run_ai(&mut self) {
        match self.game.ai_make_move() {
            Ok(result) => {
                if result.is_some() {
                    self.last_ai_result = result;
                }
            }
            Err(err) => self.fail(err),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (Swap)").clicked() {
                        self.new_game(OpeningRule::Swap);
                        ui.close_menu();
                    }
                    if ui.button("New Game (Standard)").clicked() {
                        self.new_game(OpeningRule::Standard);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let rule = match self.game.opening_rule() {
                        OpeningRule::Swap => "Swap opening",
                        OpeningRule::Standard => "Standard",
                    };
                    ui.label(format!("{} - depth {}", rule, self.config.search_depth));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_status_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.game.is_game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    self.render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new().fill(CARD_BG).corner_radius(CornerRadius::same(8)).inner_margin(12.0)
    }

    fn button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("15 x 15, exactly five").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Human color plus what the board is waiting for
    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let human = self.game.human_color();
            let accent = if human == Stone::Black {
                egui::Color32::from_rgb(70, 70, 75)
            } else {
                egui::Color32::from_rgb(220, 220, 225)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let title = match self.phase {
                        Phase::ChooseColor => "CHOOSE".to_string(),
                        _ => format!("YOU: {}", human.name()),
                    };
                    ui.label(RichText::new(title).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.failed {
                        ("Halted".to_string(), STATUS_ERROR)
                    } else if self.game.is_game_over() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.ai_turn.is_pending() {
                        ("AI thinking...".to_string(), STATUS_BUSY)
                    } else {
                        match self.phase {
                            Phase::ChooseColor => ("Pick a color or place stones".to_string(), STATUS_BUSY),
                            Phase::PlaceExtra(color) => (format!("Place {} stone", color.name()), STATUS_BUSY),
                            Phase::Playing => ("Your turn".to_string(), STATUS_OK),
                        }
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if self.phase == Phase::ChooseColor && !self.failed {
                if Self::button(ui, "Play as BLACK") {
                    self.choose_color(Stone::Black);
                }
                ui.add_space(4.0);
                if Self::button(ui, "Place BLACK and WHITE") {
                    self.phase = Phase::PlaceExtra(Stone::Black);
                }
                ui.add_space(4.0);
                if Self::button(ui, "Play as WHITE") {
                    self.choose_color(Stone::White);
                }
                ui.add_space(8.0);
            }

            if Self::button(ui, "Reset Game") {
                self.new_game(self.config.opening_rule);
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Stones on board: {}", self.game.board().stone_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(STATUS_OK));
                    let score = result.score.map_or_else(|| "-".to_string(), |s| format!("{:.2}", s));
                    ui.label(RichText::new(format!("Score: {}", score)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            ui.add_space(4.0);
            let pos = result.best_move;
            ui.label(RichText::new(format!("-> ({}, {})", pos.x, pos.y)).size(12.0).strong().color(WIN_HIGHLIGHT));
        });
    }

    fn render_game_over_card(&self, ui: &mut egui::Ui) {
        let scene = self.game.observer();
        let headline = match scene.winner(self.game.board()) {
            Some(winner) if winner == self.game.human_color() => format!("{} WINS - you won!", winner.name()),
            Some(winner) => format!("{} WINS - AI won", winner.name()),
            None => "DRAW".to_string(),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(16.0).strong().color(TEXT_PRIMARY));
                });
            });
    }

    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        let fill = if self.failed {
            egui::Color32::from_rgb(90, 35, 35)
        } else {
            egui::Color32::from_rgb(80, 60, 30)
        };
        Frame::new()
            .fill(fill)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let to_place = self.stone_to_place();
            let clicked = self.board_view.show(ui, self.game.board(), self.game.observer(), to_place);

            if let Some(pos) = clicked {
                self.handle_click(pos);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));
        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.new_game(self.config.opening_rule);
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        if self.ai_turn.advance() {
            self.run_ai();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.ai_turn.is_pending() {
            ctx.request_repaint();
        }
    }
}
