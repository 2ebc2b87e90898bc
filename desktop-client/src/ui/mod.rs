mod app;
mod colors;
mod game_view;
mod input;
mod sprites;

pub use app::SnakeApp;
pub use game_view::GameView;
