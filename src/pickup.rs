//! Stationary pickups the ship collects by flying over them

use crate::assets::SpriteId;
use crate::collision::Collidable;
use crate::geometry::{Rect, Size, Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    /// Grants one shockwave charge
    Powerup,
    /// Restores health
    Medkit,
}

impl PickupKind {
    pub fn sprite(self) -> SpriteId {
        match self {
            PickupKind::Powerup => SpriteId::Powerup,
            PickupKind::Medkit => SpriteId::Medkit,
        }
    }
}

/// A pickup lying in the field.
///
/// Pickups never move and never expire; they stay until collected or the
/// session resets.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    pub kind: PickupKind,
    pub position: Vec2,
    size: Size,
}

impl Pickup {
    pub fn new(kind: PickupKind, position: Vec2, size: Size) -> Self {
        Pickup {
            kind,
            position,
            size,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        self.kind.sprite()
    }
}

impl Collidable for Pickup {
    fn get_bounds(&self) -> Rect {
        Rect::centered(self.position, self.size)
    }
}
