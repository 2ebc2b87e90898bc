use std::time::Duration;

use crate::defaults::{FEED_POINTS, GRID_HEIGHT, GRID_WIDTH, TICK_INTERVAL};
use super::grid::Grid;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnakeGameSettings {
    pub grid: Grid,
    pub tick_interval: Duration,
    pub feed_points: u32,
}

impl Default for SnakeGameSettings {
    fn default() -> Self {
        Self {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            tick_interval: TICK_INTERVAL,
            feed_points: FEED_POINTS,
        }
    }
}
