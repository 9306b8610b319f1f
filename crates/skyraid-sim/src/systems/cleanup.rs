//! Cleanup system: removes entities that left the screen in their
//! direction of travel, plus finished explosions.

use hecs::{Entity, World};

use skyraid_core::components::{Cloud, Enemy, EnemyShot, Explosion, Extent, PlayerShot};
use skyraid_core::constants::{EXPLOSION_FRAME_COUNT, SCREEN_WIDTH};
use skyraid_core::types::{Position, Velocity};

/// Off-screen test, generic over travel direction: gone once the
/// trailing edge clears the screen on the side the entity is moving
/// toward. Never applied to the player (the player is clamped).
fn off_screen(pos: &Position, vel: &Velocity, extent: &Extent) -> bool {
    let bounds = extent.bounds(pos);
    (vel.x < 0.0 && bounds.right < 0.0) || (vel.x > 0.0 && bounds.left > SCREEN_WIDTH)
}

/// Mark and despawn dead entities. Uses a pre-allocated buffer so
/// removal never happens during iteration.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, vel, extent, _enemy)) in
        world.query_mut::<(&Position, &Velocity, &Extent, &Enemy)>()
    {
        if off_screen(pos, vel, extent) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, vel, extent, _cloud)) in
        world.query_mut::<(&Position, &Velocity, &Extent, &Cloud)>()
    {
        if off_screen(pos, vel, extent) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, vel, extent, _shot)) in
        world.query_mut::<(&Position, &Velocity, &Extent, &PlayerShot)>()
    {
        if off_screen(pos, vel, extent) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, vel, extent, _shot)) in
        world.query_mut::<(&Position, &Velocity, &Extent, &EnemyShot)>()
    {
        if off_screen(pos, vel, extent) {
            despawn_buffer.push(entity);
        }
    }

    // Explosions leave once their animation has played out.
    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.frame >= EXPLOSION_FRAME_COUNT {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
