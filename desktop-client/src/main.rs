mod config;
mod offline;
mod state;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::games::SessionRng;
use common::games::snake::{SnakeGame, SnakeGameSettings};
use common::{log, logger};
use eframe::egui;
use tokio::sync::mpsc;

use config::get_config_manager;
use offline::local_game_task;
use state::{CommandSender, SharedState};
use ui::{GameView, SnakeApp};

const WINDOW_TITLE: &str = "Snake Eater Game";
/// Room for the score bar and the collapsed session log around the field.
const PANELS_HEIGHT: f32 = 70.0;

#[derive(Parser)]
#[command(name = "snake_eater")]
struct Args {
    /// Path to the YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for food placement, random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;
    logger::init_logger(None, args.verbose || config.log.verbose);

    let rng = args.seed.map_or_else(SessionRng::from_random, SessionRng::new);
    log!("Starting {} with seed {}", WINDOW_TITLE, rng.seed());

    let settings = SnakeGameSettings::default();
    let field_size = GameView::field_size(config.display.tile_size as f32, &settings.grid);
    let game = SnakeGame::new(settings, rng);

    let shared_state = SharedState::new(config.log.event_log_capacity);
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let shared_state_clone = shared_state.clone();
    let game_thread = std::thread::spawn(move || {
        let runtime = match tokio::runtime::Runtime::new() {
            Ok(runtime) => runtime,
            Err(e) => {
                log!("Failed to start game runtime: {}", e);
                return;
            }
        };
        runtime.block_on(local_game_task(game, shared_state_clone, command_rx));
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([field_size.x, field_size.y + PANELS_HEIGHT])
            .with_resizable(false)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let command_sender = CommandSender::new(command_tx);
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(SnakeApp::new(shared_state, command_sender, &config)))),
    )?;

    if game_thread.join().is_err() {
        log!("Game thread panicked");
    }

    Ok(())
}
