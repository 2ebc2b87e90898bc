use std::time::Duration;

pub const GRID_WIDTH: i32 = 30;
pub const GRID_HEIGHT: i32 = 20;
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);
pub const FEED_POINTS: u32 = 50;

/// Random samples tried before falling back to scanning the grid for a free cell.
pub const FOOD_PLACEMENT_ATTEMPTS: usize = 1000;
