use common::games::snake::{Cell, GameSnapshot, Grid};
use eframe::egui;
use rand::rngs::ThreadRng;

use crate::config::Config;
use super::colors::{self, BodyPalette};
use super::sprites::Sprites;

const PLAY_BUTTON_SIZE: egui::Vec2 = egui::vec2(200.0, 60.0);
const UV_FULL: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

/// Draws the playing field for each phase.
pub struct GameView {
    tile_size: f32,
    sprites: Sprites,
    palette: BodyPalette,
    rng: ThreadRng,
}

impl GameView {
    pub fn new(config: &Config) -> Self {
        Self {
            tile_size: config.display.tile_size as f32,
            sprites: Sprites::load(&config.assets),
            palette: BodyPalette::new(config.display.recolor_on_feed),
            rng: rand::rng(),
        }
    }

    pub fn field_size(tile_size: f32, grid: &Grid) -> egui::Vec2 {
        egui::vec2(grid.width() as f32 * tile_size, grid.height() as f32 * tile_size)
    }

    fn allocate_field(
        &self,
        ui: &mut egui::Ui,
        snapshot: &GameSnapshot,
    ) -> (egui::Rect, egui::Painter) {
        let size = Self::field_size(self.tile_size, &snapshot.grid);
        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        let painter = painter.with_clip_rect(rect);
        painter.rect_filled(rect, 0.0, colors::FIELD_BACKGROUND);
        (rect, painter)
    }

    fn cell_rect(&self, origin: egui::Pos2, cell: Cell) -> egui::Rect {
        egui::Rect::from_min_size(
            origin + egui::vec2(cell.x as f32 * self.tile_size, cell.y as f32 * self.tile_size),
            egui::vec2(self.tile_size, self.tile_size),
        )
    }

    /// Returns true when "Play Now" was clicked.
    pub fn render_start_screen(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) -> bool {
        let (rect, painter) = self.allocate_field(ui, snapshot);

        let button_rect = egui::Rect::from_center_size(rect.center(), PLAY_BUTTON_SIZE);
        let button = egui::Button::new(
            egui::RichText::new("Play Now").size(24.0).strong().color(egui::Color32::BLACK),
        )
        .fill(colors::PLAY_BUTTON);
        let clicked = ui.put(button_rect, button).clicked();

        painter.text(
            rect.center() + egui::vec2(0.0, 80.0),
            egui::Align2::CENTER_CENTER,
            "HELLO PLAYER :)",
            egui::FontId::proportional(20.0),
            colors::TEXT,
        );

        clicked
    }

    pub fn render_running(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        snapshot: &GameSnapshot,
    ) {
        self.sprites.ensure_textures(ctx);
        let body_color = self.palette.observe_feed_count(snapshot.feed_count, &mut self.rng);
        let (rect, painter) = self.allocate_field(ui, snapshot);

        self.draw_food(&painter, rect.min, snapshot.food);

        for (i, cell) in snapshot.snake.iter().enumerate().rev() {
            let cell_rect = self.cell_rect(rect.min, *cell);
            if i > 0 {
                painter.rect_filled(cell_rect, 0.0, body_color);
                continue;
            }
            match self.sprites.head_texture() {
                Some(texture) => {
                    painter.image(texture.id(), cell_rect, UV_FULL, egui::Color32::WHITE);
                }
                None => {
                    painter.rect_filled(cell_rect, 3.0, colors::FALLBACK_HEAD);
                }
            }
        }
    }

    /// The food image is twice a tile and centred on the top-left corner of its cell.
    fn draw_food(&self, painter: &egui::Painter, origin: egui::Pos2, food: Cell) {
        let cell_rect = self.cell_rect(origin, food);
        match self.sprites.food_texture() {
            Some(texture) => {
                let food_rect = egui::Rect::from_min_size(
                    cell_rect.min - egui::vec2(self.tile_size / 2.0, self.tile_size / 2.0),
                    egui::vec2(self.tile_size * 2.0, self.tile_size * 2.0),
                );
                painter.image(texture.id(), food_rect, UV_FULL, egui::Color32::WHITE);
            }
            None => {
                let radius = self.tile_size * 0.45;
                painter.circle_filled(cell_rect.center(), radius, colors::FALLBACK_FOOD);
            }
        }
    }

    pub fn render_game_over(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) {
        let (rect, painter) = self.allocate_field(ui, snapshot);
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!("Game Over! Score: {}. Press R to Restart.", snapshot.score),
            egui::FontId::proportional(20.0),
            colors::TEXT,
        );
    }
}

pub fn render_hud(ui: &mut egui::Ui, snapshot: &GameSnapshot) {
    ui.horizontal(|ui| {
        ui.label(hud_text(format!("Score: {}", snapshot.score)));
        ui.add_space(40.0);
        ui.label(hud_text(format!("High Score: {}", snapshot.high_score)));
    });
}

fn hud_text(text: String) -> egui::RichText {
    egui::RichText::new(text).strong().size(16.0)
}

pub fn render_event_log(ui: &mut egui::Ui, events: &[String]) {
    egui::CollapsingHeader::new("Session log")
        .default_open(false)
        .show(ui, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("session_log_scroll")
                .max_height(80.0)
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    if events.is_empty() {
                        let placeholder = egui::RichText::new("Nothing yet...")
                            .italics()
                            .color(egui::Color32::GRAY);
                        ui.label(placeholder);
                    }
                    for event in events {
                        ui.label(event);
                    }
                });
        });
}
