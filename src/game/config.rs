use crate::expression::ReportMarkers;
use crate::operator::Operator;

/// Hard cap on the turns of an infinite session
pub const MAX_INFINITE_TURNS: u32 = 1000;

/// Configuration of one drill session
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Number of turns; 0 plays until the first wrong answer
    pub games: u32,
    /// Operators to draw from; the first entry is never drawn
    pub operators: Vec<Operator>,
    pub markers: ReportMarkers,
    pub seed: Option<u64>,
    pub max_infinite_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            games: 0,
            operators: Operator::real_operators(),
            markers: ReportMarkers::default(),
            seed: None,
            max_infinite_turns: MAX_INFINITE_TURNS,
        }
    }
}
