//! Player health tracked in half-heart units
//!
//! The HUD shows a row of hearts, each of which can be full or half, so the
//! natural unit of health is the half-heart. A player with 5 hearts starts
//! with 10 half-hearts.
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **Encapsulation**: `current` is private, so it can only change through
//!   `take_damage`/`heal`, which keep it inside `0..=max`
//! - **Result structs**: damage returns a `DamageResult` instead of a bare
//!   number, so callers can ask "was that fatal?" without recomputing

/// Outcome of applying damage to a `Health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageResult {
    /// Half-hearts actually removed (may be less than requested)
    pub damage_dealt: i32,
    /// Whether health is now at zero
    pub is_fatal: bool,
    /// Damage beyond what was needed to reach zero
    pub overkill: i32,
}

/// One icon in the heart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeartIcon {
    Full,
    Half,
}

/// Health in half-hearts, bounded by `0..=max_hearts * 2`.
///
/// # Example
///
/// ```rust
/// use bhaata_phod::health::Health;
///
/// let mut health = Health::new(5);
/// assert_eq!(health.current(), 10);
///
/// health.take_damage(4);
/// assert_eq!(health.current(), 6);
///
/// health.heal(100);
/// assert_eq!(health.current(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max_hearts: u32,
}

impl Health {
    /// Creates a new Health instance at full health
    pub fn new(max_hearts: u32) -> Self {
        Health {
            current: Self::capacity(max_hearts),
            max_hearts,
        }
    }

    fn capacity(max_hearts: u32) -> i32 {
        i32::try_from(max_hearts.saturating_mul(2)).unwrap_or(i32::MAX)
    }

    /// Current health in half-hearts
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Maximum health in half-hearts
    pub fn max(&self) -> i32 {
        Self::capacity(self.max_hearts)
    }

    pub fn max_hearts(&self) -> u32 {
        self.max_hearts
    }

    pub fn is_depleted(&self) -> bool {
        self.current <= 0
    }

    /// Removes `amount` half-hearts, never going below zero.
    ///
    /// A negative amount is treated as healing.
    pub fn take_damage(&mut self, amount: i32) -> DamageResult {
        if amount < 0 {
            self.heal(amount.saturating_neg());
            return DamageResult {
                damage_dealt: 0,
                is_fatal: self.is_depleted(),
                overkill: 0,
            };
        }

        let old = self.current;
        self.current = old.saturating_sub(amount).max(0);

        DamageResult {
            damage_dealt: old - self.current,
            is_fatal: self.current <= 0,
            overkill: if self.current <= 0 { amount - old } else { 0 },
        }
    }

    /// Restores up to `amount` half-hearts, capped at max health.
    ///
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let old = self.current;
        self.current = old.saturating_add(amount.max(0)).min(self.max());
        self.current - old
    }

    /// Back to full health
    pub fn reset(&mut self) {
        self.current = self.max();
    }

    /// Icons for the heart row, left to right.
    ///
    /// Heart `i` covers half-hearts `2i + 1` and `2i + 2`: it is full when
    /// both are present and half when only the first is. The row stops at
    /// the first empty heart.
    pub fn heart_icons(&self) -> Vec<HeartIcon> {
        let mut icons = Vec::new();
        for i in 0..self.max_hearts as i32 {
            let first_half = i * 2 + 1;
            if first_half < self.current {
                icons.push(HeartIcon::Full);
            } else if first_half == self.current {
                icons.push(HeartIcon::Half);
            } else {
                break;
            }
        }
        icons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_health_is_full() {
        let health = Health::new(5);
        assert_eq!(health.current(), 10);
        assert_eq!(health.max(), 10);
        assert!(!health.is_depleted());
    }

    #[test]
    fn test_damage_clamps_at_zero() {
        let mut health = Health::new(2);
        let result = health.take_damage(7);
        assert_eq!(health.current(), 0);
        assert_eq!(result.damage_dealt, 4);
        assert!(result.is_fatal);
        assert_eq!(result.overkill, 3);
        assert!(health.is_depleted());

        health.take_damage(1);
        assert_eq!(health.current(), 0);
    }

    #[test]
    fn test_negative_damage_heals_capped() {
        let mut health = Health::new(5);
        health.take_damage(3);
        let result = health.take_damage(-10);
        assert_eq!(result.damage_dealt, 0);
        assert!(!result.is_fatal);
        assert_eq!(health.current(), 10);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let mut health = Health::new(5);
        health.take_damage(1);
        assert_eq!(health.heal(2), 1);
        assert_eq!(health.current(), 10);
    }

    #[test]
    fn test_reset() {
        let mut health = Health::new(3);
        health.take_damage(5);
        health.reset();
        assert_eq!(health.current(), 6);
    }

    #[test]
    fn test_heart_icons() {
        let mut health = Health::new(5);
        assert_eq!(health.heart_icons(), vec![HeartIcon::Full; 5]);

        health.take_damage(5);
        assert_eq!(
            health.heart_icons(),
            vec![HeartIcon::Full, HeartIcon::Full, HeartIcon::Half]
        );

        health.take_damage(4);
        assert_eq!(health.heart_icons(), vec![HeartIcon::Half]);

        health.take_damage(1);
        assert!(health.heart_icons().is_empty());
    }
}
