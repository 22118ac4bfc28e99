use crate::assets::SpriteId;
use crate::collision::Collidable;
use crate::geometry::{Rect, Size, Vec2};
use crate::motion::{advance_forward, out_of_field};

/// A laser bolt fired by the player.
///
/// Flies straight along the heading it was fired with and is removed once
/// it leaves the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub position: Vec2,
    /// Degrees, 0 = up, clockwise
    pub heading: f32,
    speed: f32,
    size: Size,
}

impl Projectile {
    pub fn new(position: Vec2, heading: f32, speed: f32, size: Size) -> Self {
        Projectile {
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
        SpriteId::Projectile
    }
}

impl Collidable for Projectile {
    fn get_bounds(&self) -> Rect {
        Rect::rotated_bounds(self.position, self.size, self.heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_speed_times_dt_along_heading() {
        let mut shot = Projectile::new(Vec2::new(100.0, 100.0), 90.0, 600.0, Size::new(4.0, 12.0));
        shot.update(0.1);
        assert!((shot.position.x - 160.0).abs() < 1e-3);
        assert!((shot.position.y - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_leaves_field() {
        let field = Size::new(200.0, 200.0);
        let mut shot = Projectile::new(Vec2::new(100.0, 5.0), 0.0, 600.0, Size::new(4.0, 12.0));
        assert!(!shot.is_out_of_field(field));
        shot.update(0.1);
        assert!(shot.is_out_of_field(field));
    }

    #[test]
    fn test_bounds_follow_rotation() {
        let shot = Projectile::new(Vec2::ZERO, 90.0, 600.0, Size::new(4.0, 12.0));
        let bounds = shot.get_bounds();
        assert!((bounds.width - 12.0).abs() < 1e-3);
        assert!((bounds.height - 4.0).abs() < 1e-3);
    }
}
