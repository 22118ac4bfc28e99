//! Sprite and sound identifiers plus the size table the simulation reads
//!
//! The simulation never touches textures. It only needs to know how big
//! each sprite is, so bounding boxes match what is drawn. The front-end
//! loads the real images, fills an `AssetTable` from their dimensions and
//! hands it to the game.

use crate::geometry::Size;
use std::collections::HashMap;

/// Every image the game draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Ship,
    ShipThrust,
    Projectile,
    UfoBullet,
    Asteroid,
    Bomb,
    Ufo,
    Powerup,
    Medkit,
    Explosion,
    Shockwave,
    FullHeart,
    HalfHeart,
    MainBackground,
    Rules,
    Credits,
    StartButton,
    ExitButton,
    CreditsButton,
}

impl SpriteId {
    pub const ALL: [SpriteId; 19] = [
        SpriteId::Ship,
        SpriteId::ShipThrust,
        SpriteId::Projectile,
        SpriteId::UfoBullet,
        SpriteId::Asteroid,
        SpriteId::Bomb,
        SpriteId::Ufo,
        SpriteId::Powerup,
        SpriteId::Medkit,
        SpriteId::Explosion,
        SpriteId::Shockwave,
        SpriteId::FullHeart,
        SpriteId::HalfHeart,
        SpriteId::MainBackground,
        SpriteId::Rules,
        SpriteId::Credits,
        SpriteId::StartButton,
        SpriteId::ExitButton,
        SpriteId::CreditsButton,
    ];

    /// File name inside the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            SpriteId::Ship => "spaceship-nofire.png",
            SpriteId::ShipThrust => "spaceship.png",
            SpriteId::Projectile => "bullet.png",
            SpriteId::UfoBullet => "UFOBullet.png",
            SpriteId::Asteroid => "asteroid.png",
            SpriteId::Bomb => "BOMB.png",
            SpriteId::Ufo => "UFO.png",
            SpriteId::Powerup => "powerup.png",
            SpriteId::Medkit => "MedKit.png",
            SpriteId::Explosion => "explosion.png",
            SpriteId::Shockwave => "shockwave.png",
            SpriteId::FullHeart => "full_heart.png",
            SpriteId::HalfHeart => "half_heart.png",
            SpriteId::MainBackground => "mainbackground.png",
            SpriteId::Rules => "rules.png",
            SpriteId::Credits => "credits.png",
            SpriteId::StartButton => "startbutton.png",
            SpriteId::ExitButton => "exitbutton.png",
            SpriteId::CreditsButton => "creditbutton.png",
        }
    }
}

/// Every sound the game plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundId {
    Laser,
    Explosion,
    Shockwave,
    Thrust,
    TitleMusic,
    GameMusic,
    CreditsMusic,
    UfoBattleMusic,
}

impl SoundId {
    pub const ALL: [SoundId; 8] = [
        SoundId::Laser,
        SoundId::Explosion,
        SoundId::Shockwave,
        SoundId::Thrust,
        SoundId::TitleMusic,
        SoundId::GameMusic,
        SoundId::CreditsMusic,
        SoundId::UfoBattleMusic,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            SoundId::Laser => "LASER.wav",
            SoundId::Explosion => "explosion.wav",
            SoundId::Shockwave => "shockwave.wav",
            SoundId::Thrust => "thrust.wav",
            SoundId::TitleMusic => "TitleMenu.wav",
            SoundId::GameMusic => "GameLoop.wav",
            SoundId::CreditsMusic => "Credits.wav",
            SoundId::UfoBattleMusic => "UFO Battle.wav",
        }
    }
}

/// Pixel size of every loaded sprite.
#[derive(Debug, Clone, Default)]
pub struct AssetTable {
    sizes: HashMap<SpriteId, Size>,
}

impl AssetTable {
    pub fn new() -> Self {
        AssetTable {
            sizes: HashMap::new(),
        }
    }

    /// Table where every sprite has the same size.
    pub fn uniform(size: Size) -> Self {
        let mut table = AssetTable::new();
        for id in SpriteId::ALL {
            table.insert(id, size);
        }
        table
    }

    pub fn insert(&mut self, id: SpriteId, size: Size) {
        self.sizes.insert(id, size);
    }

    /// Builder form of `insert`.
    pub fn with(mut self, id: SpriteId, size: Size) -> Self {
        self.insert(id, size);
        self
    }

    /// Size of a sprite; unknown sprites report zero size and never collide.
    pub fn size(&self, id: SpriteId) -> Size {
        self.sizes.get(&id).copied().unwrap_or_default()
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.sizes.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_table_covers_every_sprite() {
        let table = AssetTable::uniform(Size::new(8.0, 8.0));
        for id in SpriteId::ALL {
            assert!(table.contains(id));
            assert_eq!(table.size(id), Size::new(8.0, 8.0));
        }
    }

    #[test]
    fn test_with_overrides_and_missing_is_zero() {
        let table = AssetTable::new().with(SpriteId::Ship, Size::new(64.0, 48.0));
        assert_eq!(table.size(SpriteId::Ship), Size::new(64.0, 48.0));
        assert_eq!(table.size(SpriteId::Ufo), Size::default());
    }

    #[test]
    fn test_file_names_are_unique() {
        let mut names: Vec<_> = SpriteId::ALL.iter().map(|id| id.file_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), SpriteId::ALL.len());
    }
}
