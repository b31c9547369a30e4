//! Game configuration

use crate::search::DEFAULT_DEPTH;

/// How a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpeningRule {
    /// Empty board, human plays Black and moves first
    Standard,
    /// Random fixed three-stone opening, then the color choice or the
    /// two-stone placement decides who plays what
    #[default]
    Swap,
}

/// Settings for a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Plies searched by the AI, counting its own move
    pub search_depth: u8,
    pub opening_rule: OpeningRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_DEPTH,
            opening_rule: OpeningRule::default(),
        }
    }
}
