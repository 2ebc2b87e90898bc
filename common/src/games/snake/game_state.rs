use crate::games::SessionRng;
use crate::{debug_log, log};
use super::food::place_food;
use super::grid::Grid;
use super::settings::SnakeGameSettings;
use super::snake::Snake;
use super::snapshot::GameSnapshot;
use super::types::{Cell, Direction, GamePhase};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Accepted,
    /// Wrong phase, or a turn straight back into the body.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game is not running, nothing moved.
    Idle,
    Moved,
    Fed { score: u32 },
    Ended { score: u32, high_score: u32, new_high_score: bool },
}

/// Single-player snake on a toroidal grid.
///
/// `NotStarted --start--> Running --self collision--> Ended --reset--> Running`.
/// Every mutation goes through `submit_*` or `on_tick`; everything else is a read.
pub struct SnakeGame {
    settings: SnakeGameSettings,
    rng: SessionRng,
    phase: GamePhase,
    snake: Snake,
    food: Cell,
    direction: Direction,
    score: u32,
    high_score: u32,
    feed_count: u64,
    rounds_played: u32,
}

impl SnakeGame {
    pub fn new(settings: SnakeGameSettings, mut rng: SessionRng) -> Self {
        let snake = Snake::new(settings.grid.center());
        let food = place_food(&settings.grid, &snake, &mut rng).unwrap_or(Cell::new(0, 0));

        Self {
            settings,
            rng,
            phase: GamePhase::NotStarted,
            snake,
            food,
            direction: Direction::Right,
            score: 0,
            high_score: 0,
            feed_count: 0,
            rounds_played: 0,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn grid(&self) -> &Grid {
        &self.settings.grid
    }

    pub fn settings(&self) -> &SnakeGameSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The tick source should only run while this is true.
    pub fn wants_ticks(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn submit_start(&mut self) -> CommandOutcome {
        if self.phase != GamePhase::NotStarted {
            return CommandOutcome::Ignored;
        }
        self.begin_round();
        CommandOutcome::Accepted
    }

    pub fn submit_reset(&mut self) -> CommandOutcome {
        if self.phase != GamePhase::Ended {
            return CommandOutcome::Ignored;
        }
        self.begin_round();
        CommandOutcome::Accepted
    }

    /// Checked against the heading as it is right now, including turns
    /// accepted since the last tick.
    pub fn submit_direction(&mut self, direction: Direction) -> CommandOutcome {
        if self.phase != GamePhase::Running || direction.is_opposite(self.direction) {
            return CommandOutcome::Ignored;
        }
        self.direction = direction;
        CommandOutcome::Accepted
    }

    pub fn on_tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Idle;
        }

        let next_head = self.settings.grid.wrap(self.snake.head().offset(self.direction));
        let grow = next_head == self.food;
        self.snake.advance(next_head, grow);

        if self.snake.bites_itself() {
            return self.end_round();
        }

        if !grow {
            return TickOutcome::Moved;
        }

        self.score += self.settings.feed_points;
        self.feed_count += 1;
        log!("Ate food at {}. Score: {}", next_head, self.score);
        self.respawn_food();
        TickOutcome::Fed { score: self.score }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            grid: self.settings.grid,
            snake: self.snake.cells().collect(),
            food: self.food,
            direction: self.direction,
            score: self.score,
            high_score: self.high_score,
            feed_count: self.feed_count,
            rounds_played: self.rounds_played,
        }
    }

    fn begin_round(&mut self) {
        self.snake = Snake::new(self.settings.grid.center());
        self.direction = Direction::Right;
        self.score = 0;
        self.respawn_food();
        self.phase = GamePhase::Running;
        self.rounds_played += 1;
        log!("Round {} started", self.rounds_played);
    }

    fn end_round(&mut self) -> TickOutcome {
        self.phase = GamePhase::Ended;
        let new_high_score = self.score > self.high_score;
        self.high_score = self.high_score.max(self.score);
        log!(
            "Game over at {} with length {}. Score: {}, high score: {}",
            self.snake.head(),
            self.snake.len(),
            self.score,
            self.high_score
        );
        TickOutcome::Ended {
            score: self.score,
            high_score: self.high_score,
            new_high_score,
        }
    }

    fn respawn_food(&mut self) {
        match place_food(&self.settings.grid, &self.snake, &mut self.rng) {
            Some(cell) => {
                self.food = cell;
                debug_log!("Food placed at {}", cell);
            }
            None => log!("No free cell for food, keeping it at {}", self.food),
        }
    }

    #[cfg(test)]
    fn set_snake(&mut self, cells: &[Cell]) {
        self.snake =
            Snake::from_cells(cells.iter().copied()).expect("test snake must not be empty");
    }

    #[cfg(test)]
    fn set_food(&mut self, food: Cell) {
        self.food = food;
    }

    #[cfg(test)]
    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    #[cfg(test)]
    fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}
