// Spawning rules: initial wave, periodic enemies, reinforcements, and
// everything that fires a shot or a shockwave.
//
// All randomness comes through a `&mut impl Rng` so tests can pin it with
// a seeded StdRng or force probabilities to 0.0 / 1.0 via the config.

use crate::assets::{AssetTable, SpriteId};
use crate::config::GameConfig;
use crate::enemy::{Enemy, EnemyKind};
use crate::geometry::{Size, Vec2, angle_to_vector, heading_towards};
use crate::pickup::{Pickup, PickupKind};
use crate::projectile::Projectile;
use crate::ufo::{UfoBoss, UfoBullet};
use rand::Rng;
use tracing::debug;

use super::session::SessionState;
use super::world::World;

/// Uniform coordinate in `[0, max)`, or 0 for an empty axis.
fn coordinate(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 { rng.gen_range(0.0..max) } else { 0.0 }
}

/// Random point on one of the four field edges, edge chosen uniformly.
pub fn random_edge_position(field: Size, rng: &mut impl Rng) -> Vec2 {
    match rng.gen_range(0..4) {
        0 => Vec2::new(0.0, coordinate(rng, field.height)),
        1 => Vec2::new(field.width, coordinate(rng, field.height)),
        2 => Vec2::new(coordinate(rng, field.width), 0.0),
        _ => Vec2::new(coordinate(rng, field.width), field.height),
    }
}

/// Random point anywhere in the field.
pub fn random_field_position(field: Size, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(coordinate(rng, field.width), coordinate(rng, field.height))
}

/// Unit vector at a whole-degree angle in `[0, 360)`.
fn random_direction(rng: &mut impl Rng) -> Vec2 {
    angle_to_vector(rng.gen_range(0..360) as f32)
}

/// Spawns `count` Normal enemies on the edges, drifting in random directions.
pub fn spawn_initial_enemies(
    world: &mut World,
    count: usize,
    config: &GameConfig,
    assets: &AssetTable,
    rng: &mut impl Rng,
) {
    for _ in 0..count {
        let position = random_edge_position(world.field, rng);
        let direction = random_direction(rng);
        world.enemies.push(Enemy::spawn(
            EnemyKind::Normal,
            position,
            direction,
            &config.enemies,
            assets,
        ));
    }
    debug!("Spawned initial wave of {} enemies", count);
}

/// Rolls the kind of the next periodic enemy.
///
/// Kinds are uniform, but a Direct roll only sticks with
/// `direct_keep_chance`; otherwise it becomes Normal.
pub fn roll_enemy_kind(config: &GameConfig, rng: &mut impl Rng) -> EnemyKind {
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    if kind == EnemyKind::Direct && !rng.gen_bool(config.enemies.direct_keep_chance) {
        EnemyKind::Normal
    } else {
        kind
    }
}

/// Advances the periodic spawn timer and spawns when it elapses.
///
/// New enemies enter from an edge aimed at the player's current position.
/// Normal enemies come in pairs, the second offset along x.
pub fn tick_enemy_spawn(
    world: &mut World,
    session: &mut SessionState,
    dt: f32,
    config: &GameConfig,
    assets: &AssetTable,
    rng: &mut impl Rng,
) {
    session.enemy_spawn_timer += dt;
    if session.enemy_spawn_timer < config.enemies.spawn_interval {
        return;
    }
    session.enemy_spawn_timer = 0.0;

    let kind = roll_enemy_kind(config, rng);
    let position = random_edge_position(world.field, rng);
    let direction = match (world.player.position - position).normalized() {
        Some(direction) => direction,
        None => random_direction(rng),
    };

    world
        .enemies
        .push(Enemy::spawn(kind, position, direction, &config.enemies, assets));

    if kind == EnemyKind::Normal {
        let beside = position + Vec2::new(config.enemies.pair_offset, 0.0);
        world
            .enemies
            .push(Enemy::spawn(kind, beside, direction, &config.enemies, assets));
    }
}

/// Sends one medkit and a wave of bosses if the reinforcement flag is up
/// and the player has scored. Returns the number of bosses spawned.
pub fn spawn_reinforcements(
    world: &mut World,
    session: &mut SessionState,
    config: &GameConfig,
    assets: &AssetTable,
    rng: &mut impl Rng,
) -> usize {
    if !session.medspawn || session.score() == 0 {
        return 0;
    }

    let medkit_at = random_field_position(world.field, rng);
    world.medkits.push(Pickup::new(
        PickupKind::Medkit,
        medkit_at,
        assets.size(SpriteId::Medkit),
    ));

    for _ in 0..config.ufo.per_wave {
        let position = random_edge_position(world.field, rng);
        world.bosses.push(UfoBoss::new(
            position,
            config.ufo.speed,
            assets.size(SpriteId::Ufo),
        ));
    }

    session.medspawn = false;
    debug!("Reinforcements: {} bosses and a medkit", config.ufo.per_wave);
    config.ufo.per_wave
}

/// Runs the player's trigger; fires a projectile at the pointer when it trips.
pub fn fire_player(
    world: &mut World,
    session: &mut SessionState,
    fire_held: bool,
    pointer: Vec2,
    dt: f32,
    config: &GameConfig,
    assets: &AssetTable,
) -> bool {
    if !session.fire.update(fire_held, dt, config.player.fire_cooldown) {
        return false;
    }

    let origin = world.player.position;
    world.projectiles.push(Projectile::new(
        origin,
        heading_towards(origin, pointer),
        config.projectiles.speed,
        assets.size(SpriteId::Projectile),
    ));
    true
}

/// Lets each boss fire at the player when its own cooldown elapses.
/// Returns how many bullets were fired.
pub fn fire_bosses(world: &mut World, dt: f32, config: &GameConfig, assets: &AssetTable) -> usize {
    let target = world.player.position;
    let bullet_size = assets.size(SpriteId::UfoBullet);
    let mut fired = 0;

    for boss in world.bosses.iter_mut() {
        if boss.tick_fire(dt, config.ufo.fire_cooldown) {
            world.ufo_bullets.push(UfoBullet::new(
                boss.position,
                boss.aim(target),
                config.ufo.bullet_speed,
                bullet_size,
            ));
            fired += 1;
        }
    }

    fired
}

/// Detonates a shockwave on the player if a charge is available.
pub fn trigger_shockwave(
    world: &mut World,
    session: &mut SessionState,
    config: &GameConfig,
    assets: &AssetTable,
) -> bool {
    if session.shockwave_charges == 0 {
        return false;
    }
    session.shockwave_charges -= 1;
    let at = world.player.position;
    world.spawn_shockwave(at, config.effects.shockwave, assets);
    true
}
