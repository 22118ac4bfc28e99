// Shared enums and helper structs used throughout the game module

use crate::events::{AudioCue, FrameEvent};

/// Which screen the game is on.
///
/// ```text
/// MainMenu --start--> Rules --space--> Playing <--esc--> Paused
///    |  ^                                 |                 |
///    |  +------ reset <-- GameOver <------+                 |
///    |  +------ reset <-------------------------------space-+
///    +--credits--> Credits --space--> MainMenu
///    +--exit--> Exited
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameState {
    MainMenu,
    Rules,
    Credits,
    Playing,
    Paused,
    /// Final score on screen; `remaining` seconds until the menu returns
    GameOver { remaining: f32 },
    Exited,
}

impl GameState {
    pub fn is_in_session(&self) -> bool {
        matches!(self, GameState::Playing | GameState::Paused)
    }
}

/// Everything one call to `Game::frame` produced for the outside world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutput {
    pub events: Vec<FrameEvent>,
    pub cues: Vec<AudioCue>,
    /// The window should close
    pub quit: bool,
}

impl FrameOutput {
    pub fn event(&mut self, event: FrameEvent) {
        self.events.push(event);
    }

    pub fn cue(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}
