//! Entity spawn factories for populating the simulation world.
//!
//! Creates the player and the per-kind component bundles for enemies,
//! clouds, projectiles, and explosions.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::*;
use skyraid_core::constants::*;
use skyraid_core::events::AudioEvent;
use skyraid_core::types::{Position, Velocity};

/// One-time session setup: the player plus the background music
/// trigger. Enemies and clouds arrive through the spawn timers.
pub fn setup_session(world: &mut World, audio_events: &mut Vec<AudioEvent>) {
    spawn_player(world);
    audio_events.push(AudioEvent::MusicLoop {
        key: MUSIC_KEY.to_string(),
        volume: MUSIC_VOLUME,
        looped: true,
    });
}

/// Spawn the player's ship at the left edge, vertically centered.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerShip,
        Position::new(PLAYER_EXTENT.half_w, SCREEN_HEIGHT / 2.0),
        Velocity::default(),
        Heading::default(),
        PLAYER_EXTENT,
    ))
}

/// Spawn a single enemy just past the right screen edge, at a random
/// height inside the playable band, drifting left.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let left = SCREEN_WIDTH + rng.gen_range(0.0..=SPAWN_EDGE_JITTER);
    let bottom = rng.gen_range(ENEMY_BAND_LOW..=ENEMY_BAND_HIGH);
    let speed = rng.gen_range(ENEMY_SPEED_MIN..=ENEMY_SPEED_MAX) as f64;

    world.spawn((
        Enemy,
        Position::new(left + ENEMY_EXTENT.half_w, bottom + ENEMY_EXTENT.half_h),
        Velocity::new(speed, 0.0),
        Heading::default(),
        ENEMY_EXTENT,
    ))
}

/// Spawn a cloud just past the right screen edge, anywhere in the full
/// vertical range, drifting left slower than enemies.
pub fn spawn_cloud(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let left = SCREEN_WIDTH + rng.gen_range(0.0..=SPAWN_EDGE_JITTER);
    let top = rng.gen_range(CLOUD_BAND_LOW..=CLOUD_BAND_HIGH);
    let speed = rng.gen_range(CLOUD_SPEED_MIN..=CLOUD_SPEED_MAX) as f64;

    world.spawn((
        Cloud,
        Position::new(left + CLOUD_EXTENT.half_w, top - CLOUD_EXTENT.half_h),
        Velocity::new(speed, 0.0),
        Heading::default(),
        CLOUD_EXTENT,
    ))
}

/// Fire one player shot from just ahead of the player's nose.
/// No-op if the player is gone.
pub fn fire_player_shot(world: &mut World) {
    let nose = {
        let mut query = world.query::<(&PlayerShip, &Position, &Extent)>();
        query
            .iter()
            .next()
            .map(|(_, (_, pos, extent))| (extent.bounds(pos).right, pos.y))
    };

    if let Some((right, center_y)) = nose {
        world.spawn((
            PlayerShot,
            Position::new(right + PLAYER_SHOT_SPAWN_OFFSET, center_y),
            Velocity::new(PLAYER_SHOT_SPEED, 0.0),
            Heading {
                degrees: PLAYER_SHOT_HEADING_DEGREES,
            },
            PLAYER_SHOT_EXTENT,
        ));
    }
}

/// Spawn one enemy shot from `position`, aimed along `angle` (radians).
pub fn spawn_enemy_shot(world: &mut World, position: Position, angle: f64) -> hecs::Entity {
    world.spawn((
        EnemyShot,
        position,
        Velocity::new(
            angle.cos() * ENEMY_SHOT_SPEED,
            angle.sin() * ENEMY_SHOT_SPEED,
        ),
        Heading {
            degrees: angle.to_degrees(),
        },
        ENEMY_SHOT_EXTENT,
    ))
}

/// Spawn an explosion centered at `position`.
pub fn spawn_explosion(world: &mut World, position: Position) -> hecs::Entity {
    world.spawn((Explosion { frame: 0 }, position, EXPLOSION_EXTENT))
}
