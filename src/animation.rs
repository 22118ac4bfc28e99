//! One-shot sprite-sheet effects: explosions and shockwaves
//!
//! An `Animation` walks forward through the frames of a sprite sheet laid
//! out left-to-right, top-to-bottom, and stops on the last one. The game
//! removes it the moment it reports `is_finished()`.
//!
//! Shockwaves are more than decoration: while alive they are collidable
//! and destroy enemies and bosses they overlap.

use crate::assets::SpriteId;
use crate::collision::Collidable;
use crate::config::FrameSpec;
use crate::geometry::{Rect, Size, Vec2};

/// Which effect an animation plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectKind {
    Explosion,
    Shockwave,
}

impl EffectKind {
    pub fn sprite(self) -> SpriteId {
        match self {
            EffectKind::Explosion => SpriteId::Explosion,
            EffectKind::Shockwave => SpriteId::Shockwave,
        }
    }
}

/// Integer pixel rectangle inside a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    kind: EffectKind,
    position: Vec2,
    spec: FrameSpec,
    columns: u32,
    current_frame: u32,
    elapsed: f32,
}

impl Animation {
    /// Creates an animation at `position`.
    ///
    /// `sheet` is the full texture size; it determines how many frames fit
    /// in one row of the sheet.
    pub fn new(kind: EffectKind, position: Vec2, spec: FrameSpec, sheet: Size) -> Self {
        let columns = if spec.frame_width == 0 {
            1
        } else {
            ((sheet.width as u32) / spec.frame_width).max(1)
        };

        Animation {
            kind,
            position,
            spec,
            columns,
            current_frame: 0,
            elapsed: 0.0,
        }
    }

    /// Accumulates `dt` and steps forward one frame per `frame_time`.
    ///
    /// A long `dt` may skip several frames. The last frame is never passed.
    pub fn update(&mut self, dt: f32) {
        let last = self.spec.num_frames.saturating_sub(1);
        self.elapsed += dt;

        while self.elapsed >= self.spec.frame_time && self.current_frame < last {
            self.elapsed -= self.spec.frame_time;
            self.current_frame += 1;
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_frame + 1 >= self.spec.num_frames
    }

    pub fn kind(&self) -> EffectKind {
        self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    /// Sprite-sheet cell for the current frame.
    pub fn source_rect(&self) -> SourceRect {
        let column = self.current_frame % self.columns;
        let row = self.current_frame / self.columns;
        SourceRect {
            x: (column * self.spec.frame_width) as i32,
            y: (row * self.spec.frame_height) as i32,
            width: self.spec.frame_width,
            height: self.spec.frame_height,
        }
    }

    pub fn frame_size(&self) -> Size {
        Size::new(self.spec.frame_width as f32, self.spec.frame_height as f32)
    }
}

impl Collidable for Animation {
    fn get_bounds(&self) -> Rect {
        Rect::centered(self.position, self.frame_size())
    }
}
