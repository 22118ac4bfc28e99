//! What happened during a frame, and what the speakers should do about it
//!
//! The simulation never plays sounds itself. Each `Game::frame` returns the
//! gameplay `FrameEvent`s it produced plus a list of `AudioCue`s, and the
//! front-end performs the cues.

use crate::assets::SoundId;
use crate::combat::DamageEvent;
use crate::enemy::EnemyKind;
use crate::geometry::Vec2;
use crate::pickup::PickupKind;

/// Ways an enemy or boss can be destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KillCause {
    Projectile,
    Shockwave,
    Collision,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameEvent {
    EnemyDestroyed {
        kind: EnemyKind,
        at: Vec2,
        cause: KillCause,
        points: u32,
    },
    BossDestroyed {
        at: Vec2,
        cause: KillCause,
        points: u32,
    },
    PlayerDamaged(DamageEvent),
    PickupCollected(PickupKind),
    PowerupDropped(Vec2),
    ReinforcementsArrived { bosses: usize },
    ShotFired,
    ShockwaveTriggered(Vec2),
    GameOver { score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Fire-and-forget sound effect
    Play(SoundId),
    /// Start a looping track from the beginning
    Loop(SoundId),
    Stop(SoundId),
    Pause(SoundId),
    Resume(SoundId),
}
