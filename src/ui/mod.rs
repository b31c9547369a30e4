//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod scene;
mod theme;

pub use app::GomokuApp;
pub use scene::Scene;
