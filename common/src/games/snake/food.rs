use crate::debug_log;
use crate::defaults::FOOD_PLACEMENT_ATTEMPTS;
use crate::games::SessionRng;

use super::grid::Grid;
use super::snake::Snake;
use super::types::Cell;

/// Picks a uniformly random cell the snake does not occupy.
///
/// After `FOOD_PLACEMENT_ATTEMPTS` unlucky samples it falls back to a scan of
/// the remaining free cells, so it always terminates. Returns `None` only when
/// the snake covers the whole grid.
pub fn place_food(grid: &Grid, snake: &Snake, rng: &mut SessionRng) -> Option<Cell> {
    if snake.len() >= grid.cell_count() {
        return None;
    }

    for _ in 0..FOOD_PLACEMENT_ATTEMPTS {
        let cell = Cell::new(
            rng.random_range(0..grid.width()),
            rng.random_range(0..grid.height()),
        );
        if !snake.occupies(cell) {
            return Some(cell);
        }
    }

    let free: Vec<Cell> = grid.cells().filter(|c| !snake.occupies(*c)).collect();
    debug_log!(
        "Food sampling exhausted {} attempts, {} free cells left",
        FOOD_PLACEMENT_ATTEMPTS,
        free.len()
    );
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}
