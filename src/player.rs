use crate::assets::SpriteId;
use crate::collision::Collidable;
use crate::config::PlayerConfig;
use crate::geometry::{Rect, Size, Vec2, heading_to_vector, heading_towards};
use crate::motion::wrap;

/// The player's ship.
///
/// Movement is inertial: thrust pushes along the current heading, and
/// without thrust the ship coasts while drag bleeds off speed. Velocity is
/// measured in pixels per frame and added to the position once per update.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub position: Vec2,
    /// Degrees, 0 = up, clockwise
    pub heading: f32,
    pub velocity: Vec2,
    pub thrusting: bool,
    size: Size,
}

impl Player {
    pub fn new(position: Vec2, size: Size) -> Self {
        Player {
            position,
            heading: 0.0,
            velocity: Vec2::ZERO,
            thrusting: false,
            size,
        }
    }

    /// Turns the nose toward the pointer.
    pub fn aim_at(&mut self, pointer: Vec2) {
        self.heading = heading_towards(self.position, pointer);
    }

    pub fn update(&mut self, thrust_held: bool, dt: f32, config: &PlayerConfig, field: Size) {
        self.thrusting = thrust_held;

        if self.thrusting {
            self.velocity += heading_to_vector(self.heading) * (config.thrust * dt);
        } else {
            self.velocity *= config.drag;
        }

        self.velocity = self.velocity.clamp_length(config.max_speed);
        self.position = wrap(self.position + self.velocity, field);
    }

    /// Puts the ship back at `position`, stopped and facing up.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.heading = 0.0;
        self.velocity = Vec2::ZERO;
        self.thrusting = false;
    }

    pub fn sprite(&self) -> SpriteId {
        if self.thrusting {
            SpriteId::ShipThrust
        } else {
            SpriteId::Ship
        }
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        Rect::rotated_bounds(self.position, self.size, self.heading)
    }
}
