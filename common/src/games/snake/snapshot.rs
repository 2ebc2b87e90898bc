use super::grid::Grid;
use super::types::{Cell, Direction, GamePhase};

/// Owned copy of everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub grid: Grid,
    pub snake: Vec<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub score: u32,
    pub high_score: u32,
    /// Grows by one on every feed event across the whole process lifetime.
    pub feed_count: u64,
    pub rounds_played: u32,
}
