//! 2D math shared by every entity in the field
//!
//! Positions, velocities and bounding boxes all live in window pixel space
//! with `f32` coordinates: x grows to the right, y grows downward.
//!
//! # Heading Convention
//!
//! Sprites are authored pointing up, so a heading of `0.0` degrees means
//! "up" and headings grow clockwise. Converting a heading to a unit vector
//! therefore subtracts 90 degrees before taking cos/sin, and converting a
//! vector back adds 90 degrees to `atan2`.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **Operator overloading**: `impl Add for Vec2` lets vectors use `+`
//! - **`Copy` types**: small math values are passed by value, no borrowing
//! - **`Option` for partial functions**: `normalized()` has no answer for
//!   the zero vector, so it returns `None` instead of dividing by zero

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

/// A 2D vector or point in field coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Vec2 { x, y }
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Returns `None` for the zero vector, which has no direction.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bhaata_phod::geometry::Vec2;
    ///
    /// let dir = Vec2::new(3.0, 4.0).normalized().unwrap();
    /// assert!((dir.length() - 1.0).abs() < 1e-6);
    /// assert!(Vec2::ZERO.normalized().is_none());
    /// ```
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len > 0.0 { Some(self * (1.0 / len)) } else { None }
    }

    /// Rescales the vector down to `max` length if it is longer.
    pub fn clamp_length(self, max: f32) -> Vec2 {
        let len = self.length();
        if len > max && len > 0.0 {
            self * (max / len)
        } else {
            self
        }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

/// Width and height of a sprite or animation frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

/// Axis-aligned rectangle stored as top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of `size` whose center sits at `center`.
    ///
    /// Every sprite in the game is drawn with its origin at the texture
    /// center, so this is how unrotated bounds are derived.
    pub fn centered(center: Vec2, size: Size) -> Self {
        Rect::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Axis-aligned bounds of a `size` rectangle rotated by `heading`
    /// degrees about `center`.
    ///
    /// This matches how a rotated sprite reports its global bounds: the
    /// box grows to enclose all four rotated corners.
    pub fn rotated_bounds(center: Vec2, size: Size, heading: f32) -> Self {
        let rad = heading.to_radians();
        let (sin, cos) = (rad.sin().abs(), rad.cos().abs());
        let width = size.width * cos + size.height * sin;
        let height = size.width * sin + size.height * cos;
        Rect::centered(center, Size::new(width, height))
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Whether a point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }
}

/// Unit vector for a heading in degrees (0 = up, clockwise).
pub fn heading_to_vector(heading: f32) -> Vec2 {
    let rad = (heading - 90.0).to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

/// Heading in degrees that points from `from` toward `to`.
pub fn heading_towards(from: Vec2, to: Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees() + 90.0
}

/// Unit vector for a plain angle in degrees, measured from the +x axis.
pub fn angle_to_vector(degrees: f32) -> Vec2 {
    let rad = degrees.to_radians();
    Vec2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_heading_zero_points_up() {
        let v = heading_to_vector(0.0);
        assert!(approx(v.x, 0.0));
        assert!(approx(v.y, -1.0));

        let v = heading_to_vector(90.0);
        assert!(approx(v.x, 1.0));
        assert!(approx(v.y, 0.0));
    }

    #[test]
    fn test_heading_towards_round_trips_direction() {
        let from = Vec2::new(100.0, 100.0);
        let to = Vec2::new(100.0, 300.0);
        let heading = heading_towards(from, to);
        let dir = heading_to_vector(heading);
        assert!(approx(dir.x, 0.0));
        assert!(approx(dir.y, 1.0));
    }

    #[test]
    fn test_normalized_zero_is_none() {
        assert_eq!(Vec2::ZERO.normalized(), None);
        let n = Vec2::new(0.0, -5.0).normalized();
        assert_eq!(n, Some(Vec2::new(0.0, -1.0)));
    }

    #[test]
    fn test_clamp_length() {
        let v = Vec2::new(600.0, 800.0).clamp_length(500.0);
        assert!(approx(v.length(), 500.0));
        assert!(approx(v.x, 300.0));

        let short = Vec2::new(1.0, 1.0);
        assert_eq!(short.clamp_length(500.0), short);
    }

    #[test]
    fn test_centered_rect() {
        let r = Rect::centered(Vec2::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(r, Rect::new(40.0, 45.0, 20.0, 10.0));
        assert_eq!(r.center(), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_rotated_bounds_quarter_turn_swaps_axes() {
        let r = Rect::rotated_bounds(Vec2::ZERO, Size::new(40.0, 10.0), 90.0);
        assert!(approx(r.width, 10.0));
        assert!(approx(r.height, 40.0));
    }

    #[test]
    fn test_rotated_bounds_grow_on_diagonal() {
        let r = Rect::rotated_bounds(Vec2::ZERO, Size::new(10.0, 10.0), 45.0);
        assert!(r.width > 14.0 && r.width < 14.2);
    }
}
