//! Gomoku GUI
//!
//! Play 15x15 Gomoku against the AI, optionally starting from a swap opening.

use clap::{Parser, ValueEnum};
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, OpeningRule};
use log::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OpeningArg {
    /// Random three-stone opening, then choose a color
    Swap,
    /// Empty board, you play Black
    Standard,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies, counting the AI's own move
    #[arg(short, long, default_value_t = gomoku::search::DEFAULT_DEPTH)]
    depth: u8,

    /// How each game starts
    #[arg(short, long, value_enum, default_value_t = OpeningArg::Swap)]
    opening: OpeningArg,
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = GameConfig {
        search_depth: args.depth.max(1),
        opening_rule: match args.opening {
            OpeningArg::Swap => OpeningRule::Swap,
            OpeningArg::Standard => OpeningRule::Standard,
        },
    };
    info!("starting with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
}
