use common::games::snake::{Direction, GamePhase};
use egui::{Context, Event, Key};

use crate::state::ClientCommand;

/// Maps a key press to a command for the current phase. `S` starts a game on
/// the title screen but steers down while running.
pub fn command_for_key(key: Key, phase: GamePhase) -> Option<ClientCommand> {
    match phase {
        GamePhase::NotStarted => (key == Key::S).then_some(ClientCommand::Start),
        GamePhase::Running => direction_for_key(key).map(ClientCommand::Turn),
        GamePhase::Ended => (key == Key::R).then_some(ClientCommand::Reset),
    }
}

fn direction_for_key(key: Key) -> Option<Direction> {
    match key {
        Key::ArrowUp | Key::W => Some(Direction::Up),
        Key::ArrowDown | Key::S => Some(Direction::Down),
        Key::ArrowLeft | Key::A => Some(Direction::Left),
        Key::ArrowRight | Key::D => Some(Direction::Right),
        _ => None,
    }
}

/// Commands for every key pressed this frame, in press order.
pub fn collect_commands(ctx: &Context, phase: GamePhase) -> Vec<ClientCommand> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::Key { key, pressed: true, repeat: false, .. } => {
                    command_for_key(*key, phase)
                }
                _ => None,
            })
            .collect()
    })
}
