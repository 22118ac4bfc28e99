/// Render sink abstraction between the game and whatever draws it
///
/// The game describes a frame as a sequence of draw calls against the `RenderSink` trait;
/// the SDL2 front-end implements the trait with a canvas, and tests implement it with a
/// recorder. Calls arrive in painter's order: later calls draw on top of earlier ones.
///
/// # Architecture
///
/// - `RenderSink` trait: the three primitive draw calls the game needs
/// - `DrawCommand`: one sprite placed at a center point with rotation
/// - `TextAnchor`: where a line of HUD text is pinned on screen
///
/// # Rust Learning Notes
///
/// `Game::render(&self, sink: &mut impl RenderSink)` takes the game by shared reference,
/// so the borrow checker guarantees drawing can never change the simulation.
use crate::animation::SourceRect;
use crate::assets::SpriteId;
use crate::geometry::Vec2;

/// One sprite to draw, centered on `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: SpriteId,
    pub center: Vec2,
    /// Degrees clockwise about the center
    pub rotation: f32,
    /// Sub-rectangle of the texture (sprite-sheet frame); `None` draws the whole texture
    pub source: Option<SourceRect>,
}

impl DrawCommand {
    pub fn new(sprite: SpriteId, center: Vec2) -> Self {
        DrawCommand {
            sprite,
            center,
            rotation: 0.0,
            source: None,
        }
    }

    pub fn rotated(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_source(mut self, source: SourceRect) -> Self {
        self.source = Some(source);
        self
    }
}

/// Where a line of text is pinned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextAnchor {
    /// Right edge of the text sits `margin` pixels from the right of the screen, at `y`
    TopRight { margin: f32, y: f32 },
    /// Text centered horizontally, its middle `offset_y` pixels below the screen center
    Center { offset_y: f32 },
    /// Top-left corner of the text at a fixed point
    At(Vec2),
}

/// Anything that can draw a frame of the game.
pub trait RenderSink {
    /// Draw a sprite centered on a point.
    fn draw_sprite(&mut self, command: &DrawCommand);

    /// Draw a sprite stretched over the whole screen.
    fn draw_backdrop(&mut self, sprite: SpriteId);

    /// Draw a line of HUD text. `scale` multiplies the base glyph size.
    fn draw_text(&mut self, text: &str, anchor: TextAnchor, scale: u32);
}

/// Stores every call for inspection in tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub sprites: Vec<DrawCommand>,
    pub backdrops: Vec<SpriteId>,
    pub texts: Vec<String>,
}

#[cfg(test)]
impl RecordingSink {
    pub fn count(&self, sprite: SpriteId) -> usize {
        self.sprites.iter().filter(|c| c.sprite == sprite).count()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t.contains(needle))
    }
}

#[cfg(test)]
impl RenderSink for RecordingSink {
    fn draw_sprite(&mut self, command: &DrawCommand) {
        self.sprites.push(*command);
    }

    fn draw_backdrop(&mut self, sprite: SpriteId) {
        self.backdrops.push(sprite);
    }

    fn draw_text(&mut self, text: &str, _anchor: TextAnchor, _scale: u32) {
        self.texts.push(text.to_string());
    }
}
