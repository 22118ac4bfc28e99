// Per-session scoreboard, counters and timers
//
// Everything here is wiped by a reset. The orchestrator owns one
// SessionState and lends it `&mut` to the update, collision and spawn
// stages, so there is no hidden global state between frames.

use crate::config::GameConfig;
use crate::health::Health;

/// Rising-edge trigger with a cooldown.
///
/// The trigger starts ready. A shot fires when the button goes down while
/// the cooldown has elapsed. During the cooldown the button counts as
/// already held, so holding through the cooldown never auto-fires and a
/// click during the cooldown is not queued; releasing re-arms it.
#[derive(Debug, Clone, PartialEq)]
pub struct FireControl {
    timer: f32,
    was_held: bool,
}

impl FireControl {
    pub fn new(cooldown: f32) -> Self {
        FireControl {
            timer: cooldown,
            was_held: false,
        }
    }

    /// Advances the timer by `dt`; returns true if a shot fires this frame.
    pub fn update(&mut self, held: bool, dt: f32, cooldown: f32) -> bool {
        self.timer += dt;
        let mut fired = false;

        if self.timer < cooldown {
            self.was_held = true;
        } else if held && !self.was_held {
            self.timer = 0.0;
            fired = true;
        }

        if !held {
            self.was_held = false;
        }

        fired
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    score: u32,
    pub health: Health,
    pub shockwave_charges: u32,
    pub medkits_used: u32,
    /// Raised by a lucky Direct kill; the next frame sends reinforcements
    pub medspawn: bool,
    pub enemy_spawn_timer: f32,
    pub fire: FireControl,
    /// The UFO battle theme is playing instead of the game music
    pub ufo_music: bool,
}

impl SessionState {
    pub fn new(config: &GameConfig) -> Self {
        SessionState {
            score: 0,
            health: Health::new(config.player.max_hearts),
            shockwave_charges: config.player.initial_shockwaves,
            medkits_used: 0,
            medspawn: false,
            enemy_spawn_timer: 0.0,
            fire: FireControl::new(config.player.fire_cooldown),
            ufo_music: false,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds points. Score only ever goes up.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn reset(&mut self, config: &GameConfig) {
        *self = SessionState::new(config);
    }
}
