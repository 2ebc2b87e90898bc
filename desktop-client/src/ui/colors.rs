use egui::Color32;
use rand::Rng;

pub const FIELD_BACKGROUND: Color32 = Color32::BLACK;
pub const TEXT: Color32 = Color32::WHITE;
pub const DEFAULT_BODY: Color32 = Color32::GREEN;
pub const PLAY_BUTTON: Color32 = Color32::BLUE;
pub const FALLBACK_FOOD: Color32 = Color32::YELLOW;
pub const FALLBACK_HEAD: Color32 = Color32::from_rgb(0xE0, 0x30, 0x40);

/// Body colour that changes every time the snake eats.
pub struct BodyPalette {
    color: Color32,
    seen_feed_count: u64,
    recolor_on_feed: bool,
}

impl BodyPalette {
    pub fn new(recolor_on_feed: bool) -> Self {
        Self {
            color: DEFAULT_BODY,
            seen_feed_count: 0,
            recolor_on_feed,
        }
    }

    /// Re-rolls the colour when `feed_count` moved since the last call.
    pub fn observe_feed_count(&mut self, feed_count: u64, rng: &mut impl Rng) -> Color32 {
        if feed_count != self.seen_feed_count {
            self.seen_feed_count = feed_count;
            if self.recolor_on_feed {
                self.color = Color32::from_rgb(rng.random(), rng.random(), rng.random());
            }
        }
        self.color
    }
}
