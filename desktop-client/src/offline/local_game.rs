use std::ops::ControlFlow;

use common::games::snake::{CommandOutcome, SnakeGame, TickOutcome};
use common::{debug_log, log};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};

use crate::state::{ClientCommand, SharedState};

/// Owns the game and serialises ticks and player commands onto one task, so a
/// tick's move, collision check and feed check never interleave with input.
pub async fn local_game_task(
    mut game: SnakeGame,
    shared_state: SharedState,
    mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
) {
    let mut ticker = interval(game.settings().tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    shared_state.publish(game.snapshot());

    loop {
        tokio::select! {
            command = command_rx.recv() => {
                let Some(command) = command else {
                    break;
                };

                let was_ticking = game.wants_ticks();
                if handle_command(&mut game, command, &shared_state).is_break() {
                    break;
                }
                if !was_ticking && game.wants_ticks() {
                    ticker.reset();
                }
            }
            _ = ticker.tick(), if game.wants_ticks() => {
                let outcome = game.on_tick();
                record_tick_outcome(outcome, &shared_state);
            }
        }

        shared_state.publish(game.snapshot());
    }

    log!("Game task finished, high score {}", game.high_score());
}

/// Breaks on `Quit`, otherwise reports what the game made of the command.
fn handle_command(
    game: &mut SnakeGame,
    command: ClientCommand,
    shared_state: &SharedState,
) -> ControlFlow<(), CommandOutcome> {
    let outcome = match command {
        ClientCommand::Turn(direction) => game.submit_direction(direction),
        ClientCommand::Start => game.submit_start(),
        ClientCommand::Reset => game.submit_reset(),
        ClientCommand::Quit => return ControlFlow::Break(()),
    };

    match (command, outcome) {
        (ClientCommand::Start | ClientCommand::Reset, CommandOutcome::Accepted) => {
            shared_state.add_event(format!("Round {} started", game.snapshot().rounds_played));
        }
        (_, CommandOutcome::Ignored) => {
            debug_log!("Ignored {:?} in phase {:?}", command, game.phase());
        }
        _ => {}
    }

    ControlFlow::Continue(outcome)
}

fn record_tick_outcome(outcome: TickOutcome, shared_state: &SharedState) {
    if let TickOutcome::Ended { score, high_score, new_high_score } = outcome {
        shared_state.add_event(format!("Game over with {} points", score));
        if new_high_score {
            shared_state.add_event(format!("New high score: {}", high_score));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::SessionRng;
    use common::games::snake::{Cell, Direction, GamePhase, Grid, SnakeGameSettings};
    use std::time::Duration;
    use tokio::time::sleep;

    fn create_game() -> SnakeGame {
        SnakeGame::new(SnakeGameSettings::default(), SessionRng::new(21))
    }

    /// On a 2x1 field the snake eats the only food, fills the field and runs
    /// into itself on the third tick.
    fn create_doomed_game() -> SnakeGame {
        let settings = SnakeGameSettings {
            grid: Grid::new(2, 1),
            ..SnakeGameSettings::default()
        };
        SnakeGame::new(settings, SessionRng::new(21))
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn current_snake(shared_state: &SharedState) -> Vec<Cell> {
        shared_state.snapshot().unwrap().snake
    }

    #[test]
    fn test_start_command_starts_round_and_logs_it() {
        let mut game = create_game();
        let shared_state = SharedState::new(8);

        let outcome = handle_command(&mut game, ClientCommand::Start, &shared_state);

        assert_eq!(outcome, ControlFlow::Continue(CommandOutcome::Accepted));
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(shared_state.events(), vec!["Round 1 started".to_string()]);
    }

    #[test]
    fn test_commands_in_wrong_phase_are_not_logged() {
        let mut game = create_game();
        let shared_state = SharedState::new(8);

        assert_eq!(
            handle_command(&mut game, ClientCommand::Reset, &shared_state),
            ControlFlow::Continue(CommandOutcome::Ignored)
        );
        assert_eq!(
            handle_command(&mut game, ClientCommand::Turn(Direction::Up), &shared_state),
            ControlFlow::Continue(CommandOutcome::Ignored)
        );
        assert!(shared_state.events().is_empty());
    }

    #[test]
    fn test_quit_breaks_without_touching_game() {
        let mut game = create_game();
        let shared_state = SharedState::new(8);

        assert_eq!(
            handle_command(&mut game, ClientCommand::Quit, &shared_state),
            ControlFlow::Break(())
        );
        assert_eq!(game.phase(), GamePhase::NotStarted);
    }

    #[test]
    fn test_game_over_is_logged_with_high_score() {
        let shared_state = SharedState::new(8);
        let first = TickOutcome::Ended { score: 100, high_score: 100, new_high_score: true };
        let second = TickOutcome::Ended { score: 50, high_score: 100, new_high_score: false };
        record_tick_outcome(first, &shared_state);
        record_tick_outcome(second, &shared_state);
        record_tick_outcome(TickOutcome::Moved, &shared_state);
        assert_eq!(
            shared_state.events(),
            vec![
                "Game over with 100 points".to_string(),
                "New high score: 100".to_string(),
                "Game over with 50 points".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_task_publishes_state_and_stops_on_quit() {
        let shared_state = SharedState::new(8);
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(local_game_task(create_game(), shared_state.clone(), rx));

        tx.send(ClientCommand::Start).unwrap();
        tx.send(ClientCommand::Quit).unwrap();
        handle.await.unwrap();

        let snapshot = shared_state.snapshot().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Running);
        assert_eq!(snapshot.rounds_played, 1);
    }

    #[tokio::test]
    async fn test_task_stops_when_senders_are_dropped() {
        let shared_state = SharedState::new(8);
        let (tx, rx) = mpsc::unbounded_channel::<ClientCommand>();
        drop(tx);
        local_game_task(create_game(), shared_state.clone(), rx).await;
        assert_eq!(shared_state.snapshot().unwrap().phase, GamePhase::NotStarted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_only_run_after_start() {
        let shared_state = SharedState::new(8);
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(local_game_task(create_game(), shared_state.clone(), rx));

        sleep(ms(1000)).await;
        assert_eq!(current_snake(&shared_state), vec![Cell::new(15, 10)]);

        tx.send(ClientCommand::Start).unwrap();
        sleep(ms(20)).await;
        assert_eq!(current_snake(&shared_state), vec![Cell::new(15, 10)]);

        // Three ticks of 150 ms since the start.
        sleep(ms(450)).await;
        assert_eq!(current_snake(&shared_state)[0], Cell::new(18, 10));

        tx.send(ClientCommand::Quit).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_stop_after_game_over_until_reset() {
        let shared_state = SharedState::new(8);
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(local_game_task(create_doomed_game(), shared_state.clone(), rx));

        tx.send(ClientCommand::Start).unwrap();
        sleep(ms(1000)).await;
        let ended = shared_state.snapshot().unwrap();
        assert_eq!(ended.phase, GamePhase::Ended);
        assert_eq!(ended.score, 50);
        assert_eq!(ended.high_score, 50);

        sleep(ms(1000)).await;
        assert_eq!(shared_state.snapshot().unwrap(), ended);

        tx.send(ClientCommand::Reset).unwrap();
        sleep(ms(20)).await;
        let restarted = shared_state.snapshot().unwrap();
        assert_eq!(restarted.phase, GamePhase::Running);
        assert_eq!(restarted.snake, vec![Cell::new(1, 0)]);
        assert_eq!(restarted.rounds_played, 2);

        sleep(ms(150)).await;
        assert_eq!(current_snake(&shared_state)[0], Cell::new(0, 0));

        tx.send(ClientCommand::Quit).unwrap();
        handle.await.unwrap();
        assert_eq!(
            shared_state.events(),
            vec![
                "Round 1 started".to_string(),
                "Game over with 50 points".to_string(),
                "New high score: 50".to_string(),
                "Round 2 started".to_string(),
            ]
        );
    }
}
