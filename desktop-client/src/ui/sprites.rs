use std::path::Path;

use common::log;
use eframe::egui;

use crate::config::AssetsConfig;

#[derive(Clone)]
pub struct Sprite {
    pixels: Vec<u8>,
    width: usize,
    height: usize,
    name: String,
}

impl Sprite {
    pub fn from_file(path: &Path, name: &str) -> Result<Self, image::ImageError> {
        let image = image::open(path)?.to_rgba8();
        Ok(Self::from_rgba(
            image.width() as usize,
            image.height() as usize,
            image.into_raw(),
            name,
        ))
    }

    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>, name: &str) -> Self {
        Self {
            pixels,
            width,
            height,
            name: name.to_string(),
        }
    }

    pub fn to_egui_texture(&self, ctx: &egui::Context) -> egui::TextureHandle {
        let color_image =
            egui::ColorImage::from_rgba_unmultiplied([self.width, self.height], &self.pixels);
        ctx.load_texture(self.name.as_str(), color_image, egui::TextureOptions::LINEAR)
    }
}

fn load_or_log(path: &str, name: &str) -> Option<Sprite> {
    match Sprite::from_file(Path::new(path), name) {
        Ok(sprite) => Some(sprite),
        Err(e) => {
            log!(
                "Could not load {} image from {}: {}. Drawing a plain shape instead.",
                name,
                path,
                e
            );
            None
        }
    }
}

/// Images for the food and the head. Either may be missing, in which case the
/// renderer draws a shape.
pub struct Sprites {
    food: Option<Sprite>,
    head: Option<Sprite>,
    food_texture: Option<egui::TextureHandle>,
    head_texture: Option<egui::TextureHandle>,
    textures_loaded: bool,
}

impl Sprites {
    pub fn load(assets: &AssetsConfig) -> Self {
        Self::new(
            load_or_log(&assets.food_image, "food"),
            load_or_log(&assets.head_image, "head"),
        )
    }

    pub fn new(food: Option<Sprite>, head: Option<Sprite>) -> Self {
        Self {
            food,
            head,
            food_texture: None,
            head_texture: None,
            textures_loaded: false,
        }
    }

    /// Uploads textures on first use; needs a live egui context.
    pub fn ensure_textures(&mut self, ctx: &egui::Context) {
        if self.textures_loaded {
            return;
        }
        self.food_texture = self.food.as_ref().map(|s| s.to_egui_texture(ctx));
        self.head_texture = self.head.as_ref().map(|s| s.to_egui_texture(ctx));
        self.textures_loaded = true;
    }

    pub fn food_texture(&self) -> Option<&egui::TextureHandle> {
        self.food_texture.as_ref()
    }

    pub fn head_texture(&self) -> Option<&egui::TextureHandle> {
        self.head_texture.as_ref()
    }
}
