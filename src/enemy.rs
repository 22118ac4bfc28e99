//! Asteroids and bombs
//!
//! There are three enemy kinds. The kind is fixed at spawn and decides the
//! sprite, the speed, the score for destroying it, and the motion rule:
//!
//! | Kind   | Sprite   | Motion                         |
//! |--------|----------|--------------------------------|
//! | Normal | asteroid | drifts along its spawn direction |
//! | Fast   | asteroid | drifts, six times faster       |
//! | Direct | bomb     | homes on the player            |

use crate::assets::{AssetTable, SpriteId};
use crate::collision::Collidable;
use crate::config::EnemyConfig;
use crate::geometry::{Rect, Size, Vec2};
use crate::motion::{Drift, Homing, MotionRule, Steer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Normal,
    Fast,
    Direct,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Fast, EnemyKind::Direct];

    pub fn speed(self, config: &EnemyConfig) -> f32 {
        match self {
            EnemyKind::Normal => config.normal_speed,
            EnemyKind::Fast => config.fast_speed,
            EnemyKind::Direct => config.direct_speed,
        }
    }

    /// Points awarded for destroying one
    pub fn score(self, config: &EnemyConfig) -> u32 {
        match self {
            EnemyKind::Normal => config.normal_score,
            EnemyKind::Fast => config.fast_score,
            EnemyKind::Direct => config.direct_score,
        }
    }

    pub fn sprite(self) -> SpriteId {
        match self {
            EnemyKind::Normal | EnemyKind::Fast => SpriteId::Asteroid,
            EnemyKind::Direct => SpriteId::Bomb,
        }
    }

    /// Motion rule for this kind; drifters keep `direction` forever.
    pub fn motion(self, direction: Vec2, speed: f32) -> MotionRule {
        match self {
            EnemyKind::Normal | EnemyKind::Fast => MotionRule::Drift(Drift { direction, speed }),
            EnemyKind::Direct => MotionRule::Homing(Homing { speed }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub position: Vec2,
    motion: MotionRule,
    size: Size,
}

impl Enemy {
    pub fn new(kind: EnemyKind, position: Vec2, direction: Vec2, speed: f32, size: Size) -> Self {
        Enemy {
            kind,
            position,
            motion: kind.motion(direction, speed),
            size,
        }
    }

    /// Builds an enemy using the configured speed and the sprite's size.
    pub fn spawn(
        kind: EnemyKind,
        position: Vec2,
        direction: Vec2,
        config: &EnemyConfig,
        assets: &AssetTable,
    ) -> Self {
        Enemy::new(
            kind,
            position,
            direction,
            kind.speed(config),
            assets.size(kind.sprite()),
        )
    }

    pub fn update(&mut self, player_position: Vec2, dt: f32) {
        self.position = self.motion.steer(self.position, player_position, dt);
    }

    pub fn motion(&self) -> &MotionRule {
        &self.motion
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }
}
