//! Collision resolution system — pairwise AABB checks with fixed-order
//! consequence application.
//!
//! Pass order matters for score/termination correctness: explosion
//! visuals are queued first, the fatal player check runs second and
//! short-circuits the tick, and enemy destruction/scoring runs last.
//! Hit detection is coarse box overlap at arcade scale.

use hecs::{Entity, World};

use skyraid_core::components::{Enemy, EnemyShot, Extent, PlayerShip, PlayerShot};
use skyraid_core::constants::{ENEMY_SCORE, ZAP_SOUND_KEY, ZAP_SOUND_PAN, ZAP_SOUND_VOLUME};
use skyraid_core::events::AudioEvent;
use skyraid_core::types::Position;

use crate::world_setup;

/// What the resolver decided this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionOutcome {
    /// The player overlapped an enemy or enemy shot; the session ends.
    pub player_destroyed: bool,
}

/// Run all collision passes for one tick.
pub fn run(
    world: &mut World,
    score: &mut u32,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
    dedupe_explosions: bool,
) -> CollisionOutcome {
    // Pass 1: queue one explosion per player shot at its first enemy
    // overlap. The enemy itself is only removed in pass 3, so two shots
    // hitting one enemy in the same tick can double-trigger the visual
    // unless deduplication is enabled.
    let mut explosion_sites: Vec<Position> = Vec::new();
    let mut exploded: Vec<Entity> = Vec::new();
    {
        let mut shot_query = world.query::<(&PlayerShot, &Position, &Extent)>();
        for (_shot, (_marker, shot_pos, shot_extent)) in shot_query.iter() {
            let shot_bounds = shot_extent.bounds(shot_pos);
            let mut enemy_query = world.query::<(&Enemy, &Position, &Extent)>();
            let hit = enemy_query
                .iter()
                .find(|(_, (_, pos, extent))| extent.bounds(pos).overlaps(&shot_bounds));
            if let Some((enemy, (_, enemy_pos, _))) = hit {
                if dedupe_explosions && exploded.contains(&enemy) {
                    continue;
                }
                exploded.push(enemy);
                explosion_sites.push(*enemy_pos);
            }
        }
    }
    for site in explosion_sites {
        world_setup::spawn_explosion(world, site);
    }

    // Pass 2: fatal check. Any overlap with an enemy or enemy shot
    // destroys the player and ends the session; nothing else in this
    // tick runs afterwards.
    let player = {
        let mut query = world.query::<(&PlayerShip, &Position, &Extent)>();
        query
            .iter()
            .next()
            .map(|(entity, (_, pos, extent))| (entity, extent.bounds(pos)))
    };
    if let Some((player_entity, player_bounds)) = player {
        let fatal = world
            .query::<(&Enemy, &Position, &Extent)>()
            .iter()
            .any(|(_, (_, pos, extent))| extent.bounds(pos).overlaps(&player_bounds))
            || world
                .query::<(&EnemyShot, &Position, &Extent)>()
                .iter()
                .any(|(_, (_, pos, extent))| extent.bounds(pos).overlaps(&player_bounds));

        if fatal {
            let _ = world.despawn(player_entity);
            return CollisionOutcome {
                player_destroyed: true,
            };
        }
    }

    // Pass 3: destroy enemies overlapped by player shots, score them,
    // and consume the shots. Independent of pass 1.
    let mut destroyed: Vec<(Entity, Vec<Entity>)> = Vec::new();
    {
        let mut enemy_query = world.query::<(&Enemy, &Position, &Extent)>();
        for (enemy, (_marker, enemy_pos, enemy_extent)) in enemy_query.iter() {
            let enemy_bounds = enemy_extent.bounds(enemy_pos);
            let mut shot_query = world.query::<(&PlayerShot, &Position, &Extent)>();
            let hits: Vec<Entity> = shot_query
                .iter()
                .filter(|(_, (_, pos, extent))| extent.bounds(pos).overlaps(&enemy_bounds))
                .map(|(shot, _)| shot)
                .collect();
            if !hits.is_empty() {
                destroyed.push((enemy, hits));
            }
        }
    }

    despawn_buffer.clear();
    for (enemy, shots) in destroyed {
        despawn_buffer.push(enemy);
        despawn_buffer.extend(shots);
        *score += ENEMY_SCORE;
        audio_events.push(AudioEvent::EnemyDestroyed {
            key: ZAP_SOUND_KEY.to_string(),
            volume: ZAP_SOUND_VOLUME,
            pan: ZAP_SOUND_PAN,
        });
    }
    // A shot overlapping two enemies sits in the buffer twice; the
    // second despawn is a no-op.
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    CollisionOutcome::default()
}
