// Collision resolution: turns overlaps into score, damage and removals.
//
// Pairs are resolved in a fixed order, each pass working on what the
// previous passes left behind. Within a pass, overlaps are detected first
// and entities are removed afterwards, so nothing is skipped or hit twice.

use crate::assets::{AssetTable, SoundId, SpriteId};
use crate::collision::{check_collisions_with_collection, first_hit, match_pairs, remove_indices};
use crate::combat::{DamageEvent, DamageSource};
use crate::config::GameConfig;
use crate::enemy::EnemyKind;
use crate::events::{AudioCue, FrameEvent, KillCause};
use crate::pickup::{Pickup, PickupKind};
use rand::Rng;
use tracing::debug;

use super::session::SessionState;
use super::types::FrameOutput;
use super::world::World;

/// Borrowed context shared by every pass.
pub struct Resolver<'a, R: Rng> {
    pub config: &'a GameConfig,
    pub assets: &'a AssetTable,
    pub rng: &'a mut R,
}

impl<R: Rng> Resolver<'_, R> {
    /// Runs every collision pass in order.
    pub fn resolve(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        self.projectiles_vs_enemies(world, session, out);
        self.shockwaves_vs_bosses(world, session, out);
        self.projectiles_vs_bosses(world, session, out);
        self.player_vs_enemies(world, session, out);
        self.player_vs_bosses(world, session, out);
        self.player_vs_ufo_bullets(world, session, out);
        self.player_vs_powerups(world, session, out);
        self.shockwaves_vs_enemies(world, session, out);
        self.player_vs_medkits(world, session, out);
    }

    fn explode(&self, world: &mut World, at: crate::geometry::Vec2, out: &mut FrameOutput) {
        world.spawn_explosion(at, self.config.effects.explosion, self.assets);
        out.cue(AudioCue::Play(SoundId::Explosion));
    }

    fn projectiles_vs_enemies(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        let pairs = match_pairs(&world.projectiles, &world.enemies);

        for &(_, enemy_index) in &pairs {
            let (kind, at) = {
                let enemy = &world.enemies[enemy_index];
                (enemy.kind, enemy.position)
            };
            let points = kind.score(&self.config.enemies);
            session.award(points);

            if kind == EnemyKind::Direct && self.rng.gen_bool(self.config.pickups.powerup_chance) {
                world.powerups.push(Pickup::new(
                    PickupKind::Powerup,
                    at,
                    self.assets.size(SpriteId::Powerup),
                ));
                session.medspawn = true;
                out.event(FrameEvent::PowerupDropped(at));
                debug!("Powerup dropped at ({:.0}, {:.0})", at.x, at.y);
            }

            self.explode(world, at, out);
            out.event(FrameEvent::EnemyDestroyed {
                kind,
                at,
                cause: KillCause::Projectile,
                points,
            });
        }

        remove_indices(&mut world.projectiles, pairs.iter().map(|pair| pair.0));
        remove_indices(&mut world.enemies, pairs.iter().map(|pair| pair.1));
    }

    fn shockwaves_vs_bosses(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        let pairs = match_pairs(&world.shockwaves, &world.bosses);

        for &(_, boss_index) in &pairs {
            let at = world.bosses[boss_index].position;
            let points = self.config.ufo.score;
            session.award(points);
            self.explode(world, at, out);
            out.event(FrameEvent::BossDestroyed {
                at,
                cause: KillCause::Shockwave,
                points,
            });
        }

        remove_indices(&mut world.shockwaves, pairs.iter().map(|pair| pair.0));
        remove_indices(&mut world.bosses, pairs.iter().map(|pair| pair.1));
    }

    fn projectiles_vs_bosses(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        let pairs = match_pairs(&world.projectiles, &world.bosses);

        for &(_, boss_index) in &pairs {
            let at = world.bosses[boss_index].position;
            let points = self.config.ufo.score;
            session.award(points);
            self.explode(world, at, out);
            out.event(FrameEvent::BossDestroyed {
                at,
                cause: KillCause::Projectile,
                points,
            });
        }

        remove_indices(&mut world.projectiles, pairs.iter().map(|pair| pair.0));
        remove_indices(&mut world.bosses, pairs.iter().map(|pair| pair.1));
    }

    /// Explosion on the ship plus damage to the player.
    fn hurt_player(&self, world: &mut World, session: &mut SessionState, damage: DamageEvent, out: &mut FrameOutput) {
        let at = world.player.position;
        self.explode(world, at, out);
        let result = damage.apply(&mut session.health);
        debug!(
            "Player hit by {:?} for {} (health {})",
            damage.source,
            result.damage_dealt,
            session.health.current()
        );
        out.event(FrameEvent::PlayerDamaged(damage));
    }

    fn player_vs_enemies(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        if let Some(index) = first_hit(&world.player, &world.enemies, &[]) {
            let damage = DamageEvent::new(self.config.enemies.contact_damage, DamageSource::Enemy);
            self.hurt_player(world, session, damage, out);
            world.enemies.remove(index);
        }
    }

    fn player_vs_bosses(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        if let Some(index) = first_hit(&world.player, &world.bosses, &[]) {
            let damage = DamageEvent::new(self.config.ufo.ram_damage, DamageSource::UfoRam);
            self.hurt_player(world, session, damage, out);
            world.bosses.remove(index);
        }
    }

    fn player_vs_ufo_bullets(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        if let Some(index) = first_hit(&world.player, &world.ufo_bullets, &[]) {
            let damage = DamageEvent::new(self.config.ufo.bullet_damage, DamageSource::UfoBullet);
            self.hurt_player(world, session, damage, out);
            world.ufo_bullets.remove(index);
        }
    }

    fn player_vs_powerups(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        if let Some(index) = first_hit(&world.player, &world.powerups, &[]) {
            session.shockwave_charges += 1;
            world.powerups.remove(index);
            out.event(FrameEvent::PickupCollected(PickupKind::Powerup));
        }
    }

    /// A shockwave stays alive and clears every enemy it covers.
    /// No explosion effect is drawn for these kills.
    fn shockwaves_vs_enemies(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        let mut doomed = vec![false; world.enemies.len()];

        for shockwave in &world.shockwaves {
            for index in check_collisions_with_collection(shockwave, &world.enemies) {
                doomed[index] = true;
            }
        }

        for (enemy, _) in world.enemies.iter().zip(&doomed).filter(|(_, hit)| **hit) {
            let points = enemy.kind.score(&self.config.enemies);
            session.award(points);
            out.cue(AudioCue::Play(SoundId::Explosion));
            out.event(FrameEvent::EnemyDestroyed {
                kind: enemy.kind,
                at: enemy.position,
                cause: KillCause::Shockwave,
                points,
            });
        }

        let indices: Vec<usize> = doomed
            .iter()
            .enumerate()
            .filter_map(|(index, hit)| hit.then_some(index))
            .collect();
        remove_indices(&mut world.enemies, indices);
    }

    fn player_vs_medkits(&mut self, world: &mut World, session: &mut SessionState, out: &mut FrameOutput) {
        if let Some(index) = first_hit(&world.player, &world.medkits, &[]) {
            session.health.heal(self.config.pickups.medkit_heal);
            session.medkits_used += 1;
            world.medkits.remove(index);
            out.event(FrameEvent::PickupCollected(PickupKind::Medkit));
        }
    }
}
