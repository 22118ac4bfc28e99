//! SDL2 canvas implementation of the game's RenderSink

use bhaata_phod::assets::SpriteId;
use bhaata_phod::geometry::Size;
use bhaata_phod::render::{DrawCommand, RenderSink, TextAnchor};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::warn;

use super::text;
use super::textures::TextureStore;

const TEXT_COLOR: Color = Color::RGB(255, 255, 255);

/// Draws one frame onto a canvas using the loaded textures.
///
/// Draw failures are reported once per renderer and otherwise ignored;
/// a missing sprite for one frame is not worth stopping the game for.
pub struct SdlRenderer<'c, 't> {
    canvas: &'c mut Canvas<Window>,
    textures: &'c TextureStore<'t>,
    screen: Size,
    reported: bool,
}

impl<'c, 't> SdlRenderer<'c, 't> {
    pub fn new(canvas: &'c mut Canvas<Window>, textures: &'c TextureStore<'t>) -> Self {
        let (width, height) = canvas.window().size();
        SdlRenderer {
            canvas,
            textures,
            screen: Size::new(width as f32, height as f32),
            reported: false,
        }
    }

    fn report(&mut self, what: &str, result: Result<(), String>) {
        if let Err(e) = result {
            if !self.reported {
                warn!("Failed to draw {}: {}", what, e);
                self.reported = true;
            }
        }
    }
}

impl RenderSink for SdlRenderer<'_, '_> {
    fn draw_sprite(&mut self, command: &DrawCommand) {
        let Some(texture) = self.textures.get(command.sprite) else {
            return;
        };

        let source = command
            .source
            .map(|s| Rect::new(s.x, s.y, s.width, s.height));
        let (width, height) = match source {
            Some(rect) => (rect.width(), rect.height()),
            None => {
                let query = texture.query();
                (query.width, query.height)
            }
        };
        let dest = Rect::new(
            (command.center.x - width as f32 / 2.0).round() as i32,
            (command.center.y - height as f32 / 2.0).round() as i32,
            width,
            height,
        );

        let result = self.canvas.copy_ex(
            texture,
            source,
            Some(dest),
            command.rotation as f64,
            None::<Point>,
            false,
            false,
        );
        self.report("sprite", result);
    }

    fn draw_backdrop(&mut self, sprite: SpriteId) {
        let Some(texture) = self.textures.get(sprite) else {
            return;
        };
        let result = self.canvas.copy(texture, None, None);
        self.report("backdrop", result);
    }

    fn draw_text(&mut self, line: &str, anchor: TextAnchor, scale: u32) {
        let (width, height) = text::measure(line, scale);
        let (x, y) = match anchor {
            TextAnchor::TopRight { margin, y } => (self.screen.width - margin - width as f32, y),
            TextAnchor::Center { offset_y } => (
                (self.screen.width - width as f32) / 2.0,
                self.screen.height / 2.0 + offset_y - height as f32 / 2.0,
            ),
            TextAnchor::At(at) => (at.x, at.y),
        };

        let result = text::draw_text(self.canvas, line, x as i32, y as i32, TEXT_COLOR, scale);
        self.report("text", result);
    }
}
