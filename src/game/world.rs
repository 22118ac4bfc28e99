// World struct and entity management
//
// This module contains the World struct which owns every entity in the
// field. It provides helpers for spawning effects and clearing transient
// entities; the rules that move and destroy entities live in the sibling
// update, collisions and spawner modules.

use crate::animation::{Animation, EffectKind};
use crate::assets::{AssetTable, SpriteId};
use crate::config::FrameSpec;
use crate::enemy::Enemy;
use crate::geometry::{Size, Vec2};
use crate::pickup::Pickup;
use crate::player::Player;
use crate::projectile::Projectile;
use crate::ufo::{UfoBoss, UfoBullet};

/// World encapsulates all game entities.
pub struct World {
    pub field: Size,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub bosses: Vec<UfoBoss>,
    pub projectiles: Vec<Projectile>,
    pub ufo_bullets: Vec<UfoBullet>,
    pub powerups: Vec<Pickup>,
    pub medkits: Vec<Pickup>,
    pub explosions: Vec<Animation>,
    pub shockwaves: Vec<Animation>,
}

impl World {
    /// Empty field with the player parked at the center.
    pub fn new(field: Size, assets: &AssetTable) -> Self {
        let center = Vec2::new(field.width / 2.0, field.height / 2.0);
        World {
            field,
            player: Player::new(center, assets.size(SpriteId::Ship)),
            enemies: Vec::new(),
            bosses: Vec::new(),
            projectiles: Vec::new(),
            ufo_bullets: Vec::new(),
            powerups: Vec::new(),
            medkits: Vec::new(),
            explosions: Vec::new(),
            shockwaves: Vec::new(),
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.field.width / 2.0, self.field.height / 2.0)
    }

    /// Adds an explosion effect centered on `at`.
    pub fn spawn_explosion(&mut self, at: Vec2, spec: FrameSpec, assets: &AssetTable) {
        self.explosions.push(Animation::new(
            EffectKind::Explosion,
            at,
            spec,
            assets.size(SpriteId::Explosion),
        ));
    }

    /// Adds a shockwave centered on `at`.
    pub fn spawn_shockwave(&mut self, at: Vec2, spec: FrameSpec, assets: &AssetTable) {
        self.shockwaves.push(Animation::new(
            EffectKind::Shockwave,
            at,
            spec,
            assets.size(SpriteId::Shockwave),
        ));
    }

    /// What a game over wipes: shots, enemies and running effects.
    pub fn clear_combat(&mut self) {
        self.projectiles.clear();
        self.enemies.clear();
        self.explosions.clear();
        self.shockwaves.clear();
    }

    /// Removes every entity and parks the player back at the center.
    pub fn reset(&mut self) {
        self.clear_combat();
        self.bosses.clear();
        self.ufo_bullets.clear();
        self.powerups.clear();
        self.medkits.clear();
        let center = self.center();
        self.player.reset(center);
    }

    /// Advances every effect and drops the ones that finished.
    pub fn update_effects(&mut self, dt: f32) {
        for effect in self.explosions.iter_mut().chain(self.shockwaves.iter_mut()) {
            effect.update(dt);
        }
        self.explosions.retain(|effect| !effect.is_finished());
        self.shockwaves.retain(|effect| !effect.is_finished());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EffectConfig;
    use crate::enemy::EnemyKind;

    fn world() -> World {
        World::new(Size::new(800.0, 600.0), &AssetTable::uniform(Size::new(10.0, 10.0)))
    }

    #[test]
    fn test_new_world_centers_player() {
        let w = world();
        assert_eq!(w.player.position, Vec2::new(400.0, 300.0));
        assert!(w.enemies.is_empty());
    }

    #[test]
    fn test_effects_expire() {
        let mut w = world();
        let assets = AssetTable::uniform(Size::new(1008.0, 138.0));
        let effects = EffectConfig::default();
        w.spawn_explosion(Vec2::ZERO, effects.explosion, &assets);
        w.spawn_shockwave(Vec2::ZERO, effects.shockwave, &assets);

        w.update_effects(0.4);
        assert!(w.explosions.is_empty());
        assert_eq!(w.shockwaves.len(), 1);

        w.update_effects(0.2);
        assert!(w.shockwaves.is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut w = world();
        w.enemies.push(Enemy::new(
            EnemyKind::Normal,
            Vec2::ZERO,
            Vec2::new(1.0, 0.0),
            100.0,
            Size::new(10.0, 10.0),
        ));
        w.bosses.push(UfoBoss::new(Vec2::ZERO, 600.0, Size::new(10.0, 10.0)));
        w.player.position = Vec2::new(5.0, 5.0);
        w.reset();
        assert!(w.enemies.is_empty());
        assert!(w.bosses.is_empty());
        assert_eq!(w.player.position, Vec2::new(400.0, 300.0));
    }
}
