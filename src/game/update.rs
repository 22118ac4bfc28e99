// Motion stage: moves every entity one step before collisions are checked.

use crate::config::GameConfig;
use crate::geometry::Vec2;

use super::world::World;

/// Player steering and movement, then everything that chases or flies.
///
/// Player shots that already left the field are culled before they move,
/// so a bolt spends one frame past the edge before it disappears.
pub fn advance(world: &mut World, pointer: Vec2, thrust_held: bool, dt: f32, config: &GameConfig) {
    world.player.aim_at(pointer);
    world.player.update(thrust_held, dt, &config.player, world.field);

    let field = world.field;
    world.projectiles.retain(|shot| !shot.is_out_of_field(field));

    let target = world.player.position;
    for boss in world.bosses.iter_mut() {
        boss.update(target, dt, field);
    }
    for shot in world.projectiles.iter_mut() {
        shot.update(dt);
    }
    for enemy in world.enemies.iter_mut() {
        enemy.update(target, dt);
    }
}

/// Moves UFO bullets and drops the ones that left the field.
pub fn advance_ufo_bullets(world: &mut World, dt: f32) {
    for bullet in world.ufo_bullets.iter_mut() {
        bullet.update(dt);
    }
    let field = world.field;
    world.ufo_bullets.retain(|bullet| !bullet.is_out_of_field(field));
}
