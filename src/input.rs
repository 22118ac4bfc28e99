//! Input as the simulation sees it
//!
//! The front-end samples devices once per frame and hands the game an
//! `InputSnapshot`. Held controls (thrust, fire) are booleans; one-off
//! presses arrive as a list of `GameAction`s in the order they happened.

use crate::geometry::Vec2;

/// Discrete actions the player can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameAction {
    /// Escape: pause or unpause
    TogglePause,
    /// Detonate a shockwave
    Shockwave,
    /// Space: advance from rules/credits, leave pause or game over
    Confirm,
    /// Left click at a screen position (menu buttons)
    Click(Vec2),
    /// Window closed
    Quit,
}

/// Everything the simulation needs to know about input for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    pub pointer: Vec2,
    pub thrust_held: bool,
    pub fire_held: bool,
    pub actions: Vec<GameAction>,
}

impl InputSnapshot {
    pub fn has(&self, action: GameAction) -> bool {
        self.actions.contains(&action)
    }

    pub fn clicks(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.actions.iter().filter_map(|action| match action {
            GameAction::Click(at) => Some(*at),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_queries() {
        let snapshot = InputSnapshot {
            actions: vec![
                GameAction::Click(Vec2::new(1.0, 2.0)),
                GameAction::Confirm,
                GameAction::Click(Vec2::new(3.0, 4.0)),
            ],
            ..InputSnapshot::default()
        };

        assert!(snapshot.has(GameAction::Confirm));
        assert!(!snapshot.has(GameAction::Quit));
        let clicks: Vec<_> = snapshot.clicks().collect();
        assert_eq!(clicks, vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }
}
