//! Tunable game constants loaded from JSON
//!
//! Every field has a default matching the stock game, so an empty `{}` file
//! (or no file at all) plays with the stock tuning. A partial
//! file only overrides what it names:
//!
//! ```json
//! { "player": { "max_hearts": 3 }, "enemies": { "spawn_interval": 0.5 } }
//! ```
//!
//! # Lookup Order
//!
//! 1. `$BHAATA_PHOD_CONFIG`, if set
//! 2. `<config dir>/bhaata_phod/config.json` (via `dirs::config_dir`)
//! 3. Built-in defaults
//!
//! A file that exists but does not parse is an error. A missing file is not.

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "BHAATA_PHOD_CONFIG";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub player: PlayerConfig,
    pub enemies: EnemyConfig,
    pub ufo: UfoConfig,
    pub projectiles: ProjectileConfig,
    pub pickups: PickupConfig,
    pub effects: EffectConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Desktop-sized borderless fullscreen
    pub fullscreen: bool,
    /// Used when not fullscreen
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            fullscreen: true,
            width: 1280,
            height: 720,
            title: "BhaataPhod".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    pub directory: PathBuf,
}

impl Default for AssetConfig {
    fn default() -> Self {
        AssetConfig {
            directory: PathBuf::from("Materials"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_hearts: u32,
    /// Velocity gained per second of thrust
    pub thrust: f32,
    /// Velocity multiplier applied each frame without thrust
    pub drag: f32,
    pub max_speed: f32,
    pub fire_cooldown: f32,
    pub initial_shockwaves: u32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            max_hearts: 5,
            thrust: 20.0,
            drag: 0.95,
            max_speed: 500.0,
            fire_cooldown: 0.2,
            initial_shockwaves: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub normal_speed: f32,
    pub fast_speed: f32,
    pub direct_speed: f32,
    pub normal_score: u32,
    pub fast_score: u32,
    pub direct_score: u32,
    pub initial_count: usize,
    pub spawn_interval: f32,
    /// Horizontal offset of the second asteroid in a Normal pair
    pub pair_offset: f32,
    /// Chance a Direct roll stays Direct instead of becoming Normal
    pub direct_keep_chance: f64,
    pub contact_damage: i32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        EnemyConfig {
            normal_speed: 100.0,
            fast_speed: 600.0,
            direct_speed: 600.0,
            normal_score: 20,
            fast_score: 40,
            direct_score: 80,
            initial_count: 10,
            spawn_interval: 1.0,
            pair_offset: 50.0,
            direct_keep_chance: 0.1,
            contact_damage: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UfoConfig {
    pub speed: f32,
    pub bullet_speed: f32,
    pub fire_cooldown: f32,
    /// Bosses spawned by one reinforcement wave
    pub per_wave: usize,
    pub score: u32,
    pub ram_damage: i32,
    pub bullet_damage: i32,
}

impl Default for UfoConfig {
    fn default() -> Self {
        UfoConfig {
            speed: 600.0,
            bullet_speed: 700.0,
            fire_cooldown: 0.8,
            per_wave: 2,
            score: 100,
            ram_damage: 4,
            bullet_damage: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileConfig {
    pub speed: f32,
}

impl Default for ProjectileConfig {
    fn default() -> Self {
        ProjectileConfig { speed: 600.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    /// Chance a shot-down Direct enemy drops a powerup
    pub powerup_chance: f64,
    /// Half-hearts restored by a medkit
    pub medkit_heal: i32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        PickupConfig {
            powerup_chance: 0.1,
            medkit_heal: 2,
        }
    }
}

/// Sprite-sheet layout of a one-shot effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameSpec {
    pub frame_width: u32,
    pub frame_height: u32,
    pub num_frames: u32,
    /// Seconds each frame stays on screen
    pub frame_time: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    pub explosion: FrameSpec,
    pub shockwave: FrameSpec,
}

impl Default for EffectConfig {
    fn default() -> Self {
        EffectConfig {
            explosion: FrameSpec {
                frame_width: 126,
                frame_height: 138,
                num_frames: 8,
                frame_time: 0.05,
            },
            shockwave: FrameSpec {
                frame_width: 864,
                frame_height: 864,
                num_frames: 7,
                frame_time: 0.075,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// How long the final score stays up before returning to the menu
    pub game_over_seconds: f32,
    /// Upper bound on one simulation step, so a stalled frame cannot
    /// teleport everything across the field
    pub max_frame_dt: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            game_over_seconds: 5.0,
            max_frame_dt: 0.1,
        }
    }
}

impl GameConfig {
    /// Parses a config file; fields it omits keep their defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig =
            serde_json::from_str(&content).map_err(|source| GameError::Config {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Where the config file is looked up when no explicit path is given.
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("bhaata_phod").join("config.json"))
    }

    /// Loads from `default_path()`, falling back to defaults when no file exists.
    pub fn load_or_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                info!("Loading config from {}", path.display());
                Self::load_from_file(&path)
            }
            Some(path) => {
                debug!("No config at {}, using defaults", path.display());
                Ok(GameConfig::default())
            }
            None => Ok(GameConfig::default()),
        }
    }

    /// Rejects values the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let chances = [
            ("enemies.direct_keep_chance", self.enemies.direct_keep_chance),
            ("pickups.powerup_chance", self.pickups.powerup_chance),
        ];
        for (name, value) in chances {
            if !(0.0..=1.0).contains(&value) {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let positive = [
            ("player.fire_cooldown", self.player.fire_cooldown),
            ("enemies.spawn_interval", self.enemies.spawn_interval),
            ("ufo.fire_cooldown", self.ufo.fire_cooldown),
            ("effects.explosion.frame_time", self.effects.explosion.frame_time),
            ("effects.shockwave.frame_time", self.effects.shockwave.frame_time),
            ("session.max_frame_dt", self.session.max_frame_dt),
        ];
        for (name, value) in positive {
            if value <= 0.0 || !value.is_finite() {
                return Err(GameError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }

        for (name, spec) in [
            ("explosion", &self.effects.explosion),
            ("shockwave", &self.effects.shockwave),
        ] {
            if spec.num_frames == 0 || spec.frame_width == 0 || spec.frame_height == 0 {
                return Err(GameError::InvalidConfig(format!(
                    "effects.{name} needs at least one non-empty frame"
                )));
            }
        }

        if self.player.max_hearts == 0 {
            return Err(GameError::InvalidConfig(
                "player.max_hearts must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
