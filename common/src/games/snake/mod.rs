mod food;
mod game_state;
mod grid;
mod settings;
mod snake;
mod snapshot;
mod types;

pub use food::place_food;
pub use game_state::{CommandOutcome, SnakeGame, TickOutcome};
pub use grid::Grid;
pub use settings::SnakeGameSettings;
pub use snake::Snake;
pub use snapshot::GameSnapshot;
pub use types::{Cell, Direction, GamePhase};
