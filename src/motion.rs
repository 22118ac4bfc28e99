//! Motion rules for moving entities
//!
//! Every moving thing in the field follows one of a few rules:
//!
//! - **Drift**: a fixed unit direction chosen at spawn, scaled by speed
//! - **Homing**: re-aims at a target every frame
//! - **Forward**: travels along its heading angle (projectiles, bullets)
//!
//! On top of that, the field edge is handled either by wrapping (player,
//! UFOs) or by culling (shots that leave the screen).
//!
//! # Rust Learning Notes
//!
//! `Steer` is a small trait with two implementors. `MotionRule` is an enum
//! that wraps them so an `Enemy` can own "some motion rule" without a `Box<dyn>`:
//! the kind tag picks the variant once, and dispatch is a `match`.

use crate::geometry::{Size, Vec2, heading_to_vector};

/// Something that can compute the next position of an entity.
pub trait Steer {
    /// Returns the position after `dt` seconds, given where the entity is
    /// and where the thing it cares about (usually the player) is.
    fn steer(&self, position: Vec2, target: Vec2, dt: f32) -> Vec2;
}

/// Straight-line movement along a direction frozen at spawn time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub direction: Vec2,
    pub speed: f32,
}

impl Steer for Drift {
    fn steer(&self, position: Vec2, _target: Vec2, dt: f32) -> Vec2 {
        position + self.direction * (self.speed * dt)
    }
}

/// Chases the target at constant speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Homing {
    pub speed: f32,
}

impl Steer for Homing {
    fn steer(&self, position: Vec2, target: Vec2, dt: f32) -> Vec2 {
        // Sitting exactly on the target: no direction, stay put this frame
        match (target - position).normalized() {
            Some(direction) => position + direction * (self.speed * dt),
            None => position,
        }
    }
}

/// Motion rule owned by an entity, chosen once from its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionRule {
    Drift(Drift),
    Homing(Homing),
}

impl Steer for MotionRule {
    fn steer(&self, position: Vec2, target: Vec2, dt: f32) -> Vec2 {
        match self {
            MotionRule::Drift(drift) => drift.steer(position, target, dt),
            MotionRule::Homing(homing) => homing.steer(position, target, dt),
        }
    }
}

/// Moves `position` along `heading` (degrees, 0 = up) for `dt` seconds.
pub fn advance_forward(position: Vec2, heading: f32, speed: f32, dt: f32) -> Vec2 {
    position + heading_to_vector(heading) * (speed * dt)
}

/// Wraps a position that left the field back onto the opposite edge.
///
/// Each axis is checked on its own: `x < 0` becomes `x = width` and
/// `x > width` becomes `x = 0`; the same for y.
pub fn wrap(mut position: Vec2, field: Size) -> Vec2 {
    if position.x < 0.0 {
        position.x = field.width;
    }
    if position.x > field.width {
        position.x = 0.0;
    }
    if position.y < 0.0 {
        position.y = field.height;
    }
    if position.y > field.height {
        position.y = 0.0;
    }
    position
}

/// Whether a position lies outside `[0, width] x [0, height]`.
pub fn out_of_field(position: Vec2, field: Size) -> bool {
    position.x < 0.0 || position.x > field.width || position.y < 0.0 || position.y > field.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_drift_moves_speed_times_dt() {
        let drift = Drift {
            direction: Vec2::new(1.0, 0.0),
            speed: 100.0,
        };
        let next = drift.steer(Vec2::new(10.0, 10.0), Vec2::ZERO, 0.5);
        assert_eq!(next, Vec2::new(60.0, 10.0));
    }

    #[test]
    fn test_homing_moves_toward_target() {
        let homing = Homing { speed: 600.0 };
        let next = homing.steer(Vec2::new(0.0, 0.0), Vec2::new(0.0, 1000.0), 0.1);
        assert!(approx(next.x, 0.0));
        assert!(approx(next.y, 60.0));
    }

    #[test]
    fn test_homing_on_target_does_not_move() {
        let homing = Homing { speed: 600.0 };
        let spot = Vec2::new(42.0, 17.0);
        let next = homing.steer(spot, spot, 1.0);
        assert_eq!(next, spot);
        assert!(next.x.is_finite() && next.y.is_finite());
    }

    #[test]
    fn test_motion_rule_dispatch() {
        let rule = MotionRule::Homing(Homing { speed: 10.0 });
        let next = rule.steer(Vec2::ZERO, Vec2::new(10.0, 0.0), 1.0);
        assert!(approx(next.x, 10.0));
    }

    #[test]
    fn test_advance_forward_distance() {
        let start = Vec2::new(100.0, 100.0);
        let next = advance_forward(start, 0.0, 600.0, 0.25);
        assert!(approx(next.x, 100.0));
        assert!(approx(next.y, -50.0));
        assert!(approx(start.distance(next), 150.0));
    }

    #[test]
    fn test_wrap_each_axis() {
        let field = Size::new(800.0, 600.0);
        assert_eq!(wrap(Vec2::new(-1.0, 300.0), field), Vec2::new(800.0, 300.0));
        assert_eq!(wrap(Vec2::new(801.0, 300.0), field), Vec2::new(0.0, 300.0));
        assert_eq!(wrap(Vec2::new(10.0, -3.0), field), Vec2::new(10.0, 600.0));
        assert_eq!(wrap(Vec2::new(10.0, 700.0), field), Vec2::new(10.0, 0.0));
        assert_eq!(wrap(Vec2::new(10.0, 10.0), field), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_out_of_field_edges_are_inside() {
        let field = Size::new(800.0, 600.0);
        assert!(!out_of_field(Vec2::new(0.0, 600.0), field));
        assert!(out_of_field(Vec2::new(-0.1, 10.0), field));
        assert!(out_of_field(Vec2::new(10.0, 600.5), field));
    }
}
