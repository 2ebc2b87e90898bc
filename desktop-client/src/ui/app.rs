use common::games::snake::GamePhase;
use eframe::egui;

use crate::config::Config;
use crate::state::{ClientCommand, CommandSender, SharedState};
use super::game_view::{GameView, render_event_log, render_hud};
use super::input::collect_commands;

pub struct SnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    view: GameView,
    quit_sent: bool,
}

impl SnakeApp {
    pub fn new(shared_state: SharedState, command_sender: CommandSender, config: &Config) -> Self {
        Self {
            shared_state,
            command_sender,
            view: GameView::new(config),
            quit_sent: false,
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        if ctx.input(|i| i.viewport().close_requested()) && !self.quit_sent {
            self.command_sender.send(ClientCommand::Quit);
            self.quit_sent = true;
        }

        let Some(snapshot) = self.shared_state.snapshot() else {
            egui::CentralPanel::default().show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            });
            return;
        };

        for command in collect_commands(ctx, snapshot.phase) {
            self.command_sender.send(command);
        }

        egui::TopBottomPanel::top("hud").show(ctx, |ui| {
            render_hud(ui, &snapshot);
        });

        let events = self.shared_state.events();
        egui::TopBottomPanel::bottom("session_log").show(ctx, |ui| {
            render_event_log(ui, &events);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| match snapshot.phase {
                GamePhase::NotStarted => {
                    if self.view.render_start_screen(ui, &snapshot) {
                        self.command_sender.send(ClientCommand::Start);
                    }
                }
                GamePhase::Running => self.view.render_running(ui, ctx, &snapshot),
                GamePhase::Ended => self.view.render_game_over(ui, &snapshot),
            });
    }
}
