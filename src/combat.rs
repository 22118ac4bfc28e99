//! Combat vocabulary: who hurt the player, and by how much
//!
//! The collision resolver decides *that* damage happens; this module names
//! it. A `DamageEvent` is applied to `Health` and also reported outward as
//! a frame event, so the HUD and logs can tell a rock hit from a UFO ram.

use crate::health::{DamageResult, Health};

/// Source of damage for tracking and game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    /// Flew into an asteroid or bomb
    Enemy,
    /// Rammed a UFO boss
    UfoRam,
    /// Hit by a UFO bullet
    UfoBullet,
}

/// A single hit on the player, in half-hearts.
///
/// # Example
///
/// ```rust
/// use bhaata_phod::combat::{DamageEvent, DamageSource};
/// use bhaata_phod::health::Health;
///
/// let mut health = Health::new(5);
/// let event = DamageEvent::new(4, DamageSource::UfoRam);
/// let result = event.apply(&mut health);
/// assert_eq!(result.damage_dealt, 4);
/// assert_eq!(health.current(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    pub amount: i32,
    pub source: DamageSource,
}

impl DamageEvent {
    pub fn new(amount: i32, source: DamageSource) -> Self {
        DamageEvent { amount, source }
    }

    /// Applies this damage to `health`.
    pub fn apply(&self, health: &mut Health) -> DamageResult {
        health.take_damage(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_event_apply() {
        let mut health = Health::new(1);
        let result = DamageEvent::new(1, DamageSource::UfoBullet).apply(&mut health);
        assert!(!result.is_fatal);
        let result = DamageEvent::new(1, DamageSource::Enemy).apply(&mut health);
        assert!(result.is_fatal);
    }
}
