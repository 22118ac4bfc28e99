//! UFO bosses and the bullets they fire
//!
//! Bosses arrive in pairs as reinforcements. Each one chases the player,
//! wraps around the field edges, and fires on its own cooldown timer.

use crate::assets::SpriteId;
use crate::collision::Collidable;
use crate::geometry::{Rect, Size, Vec2, heading_towards};
use crate::motion::{Homing, Steer, advance_forward, out_of_field, wrap};

#[derive(Debug, Clone, PartialEq)]
pub struct UfoBoss {
    pub position: Vec2,
    motion: Homing,
    fire_timer: f32,
    size: Size,
}

impl UfoBoss {
    pub fn new(position: Vec2, speed: f32, size: Size) -> Self {
        UfoBoss {
            position,
            motion: Homing { speed },
            fire_timer: 0.0,
            size,
        }
    }

    pub fn update(&mut self, player_position: Vec2, dt: f32, field: Size) {
        let next = self.motion.steer(self.position, player_position, dt);
        self.position = wrap(next, field);
    }

    /// Advances the fire timer; returns true when a shot is due.
    ///
    /// The timer starts at zero, so a new boss waits one full cooldown
    /// before its first shot.
    pub fn tick_fire(&mut self, dt: f32, cooldown: f32) -> bool {
        self.fire_timer += dt;
        if self.fire_timer >= cooldown {
            self.fire_timer = 0.0;
            true
        } else {
            false
        }
    }

    /// Heading for a bullet aimed at `target` from this boss.
    pub fn aim(&self, target: Vec2) -> f32 {
        heading_towards(self.position, target)
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Ufo
    }
}

impl Collidable for UfoBoss {
    fn get_bounds(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }
}

/// A bullet fired by a boss. Aimed at the player's position at fire time;
/// does not track afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct UfoBullet {
    pub position: Vec2,
    /// Degrees, 0 = up, clockwise
    pub heading: f32,
    speed: f32,
    size: Size,
}

impl UfoBullet {
    pub fn new(position: Vec2, heading: f32, speed: f32, size: Size) -> Self {
        UfoBullet {
            position,
            heading,
            speed,
            size,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.position = advance_forward(self.position, self.heading, self.speed, dt);
    }

    pub fn is_out_of_field(&self, field: Size) -> bool {
        out_of_field(self.position, field)
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::UfoBullet
    }
}

impl Collidable for UfoBullet {
    fn get_bounds(&self) -> Rect {
        Rect::rotated_bounds(self.position, self.size, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELD: Size = Size::new(800.0, 600.0);

    #[test]
    fn test_boss_chases_player() {
        let mut boss = UfoBoss::new(Vec2::new(100.0, 100.0), 600.0, Size::new(50.0, 30.0));
        boss.update(Vec2::new(100.0, 500.0), 0.1, FIELD);
        assert!((boss.position.y - 160.0).abs() < 1e-3);
    }

    #[test]
    fn test_boss_on_player_holds_position() {
        let spot = Vec2::new(300.0, 300.0);
        let mut boss = UfoBoss::new(spot, 600.0, Size::new(50.0, 30.0));
        boss.update(spot, 0.1, FIELD);
        assert_eq!(boss.position, spot);
    }

    #[test]
    fn test_boss_wraps() {
        let mut boss = UfoBoss::new(Vec2::new(1.0, 300.0), 600.0, Size::new(50.0, 30.0));
        // Target far to the left pulls the boss past x = 0
        boss.update(Vec2::new(-1000.0, 300.0), 0.1, FIELD);
        assert_eq!(boss.position.x, 800.0);
    }

    #[test]
    fn test_fire_timer_waits_full_cooldown() {
        let mut boss = UfoBoss::new(Vec2::ZERO, 600.0, Size::new(50.0, 30.0));
        assert!(!boss.tick_fire(0.5, 0.8));
        assert!(boss.tick_fire(0.5, 0.8));
        assert!(!boss.tick_fire(0.5, 0.8));
    }

    #[test]
    fn test_bullet_flies_along_aim() {
        let boss = UfoBoss::new(Vec2::new(100.0, 100.0), 600.0, Size::new(50.0, 30.0));
        let heading = boss.aim(Vec2::new(100.0, 400.0));
        let mut bullet = UfoBullet::new(boss.position, heading, 700.0, Size::new(6.0, 6.0));
        bullet.update(0.1);
        assert!((bullet.position.x - 100.0).abs() < 1e-3);
        assert!((bullet.position.y - 170.0).abs() < 1e-3);
        assert!(!bullet.is_out_of_field(FIELD));
    }
}
