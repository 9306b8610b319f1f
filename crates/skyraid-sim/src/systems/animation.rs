//! Explosion animation system.

use hecs::World;

use skyraid_core::components::Explosion;

/// Advance every explosion by one frame. Finished explosions are
/// removed by the cleanup system.
pub fn run(world: &mut World) {
    for (_entity, explosion) in world.query_mut::<&mut Explosion>() {
        explosion.frame += 1;
    }
}
