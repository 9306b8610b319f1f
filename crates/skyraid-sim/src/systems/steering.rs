//! Enemy steering system — turns each enemy toward the player and
//! fires the synchronized volley.

use hecs::World;

use skyraid_core::components::{Enemy, Heading, PlayerShip};
use skyraid_core::constants::{ENEMY_VOLLEY_INTERVAL_TICKS, SPRITE_FACING_OFFSET_DEGREES};
use skyraid_core::types::Position;

use crate::world_setup;

/// Rotate every enemy to face the player; on volley ticks, each enemy
/// also fires one shot along its aim line.
///
/// The volley check is global to the tick counter, not per-enemy, so
/// all enemies fire at once.
pub fn run(world: &mut World, current_tick: u64) {
    let player_pos = {
        let mut query = world.query::<(&PlayerShip, &Position)>();
        match query.iter().next() {
            Some((_, (_, pos))) => *pos,
            None => return,
        }
    };

    let volley = current_tick % ENEMY_VOLLEY_INTERVAL_TICKS == 0;

    // Collect updates in a buffer to avoid borrow issues with hecs
    let mut headings: Vec<(hecs::Entity, f64)> = Vec::new();
    let mut shots: Vec<(Position, f64)> = Vec::new();

    {
        let mut query = world.query::<(&Enemy, &Position)>();
        for (entity, (_enemy, pos)) in query.iter() {
            let angle = (player_pos.y - pos.y).atan2(player_pos.x - pos.x);
            headings.push((entity, angle.to_degrees() - SPRITE_FACING_OFFSET_DEGREES));
            if volley {
                shots.push((*pos, angle));
            }
        }
    }

    for (entity, degrees) in headings {
        if let Ok(mut heading) = world.get::<&mut Heading>(entity) {
            heading.degrees = degrees;
        }
    }

    for (position, angle) in shots {
        world_setup::spawn_enemy_shot(world, position, angle);
    }
}
