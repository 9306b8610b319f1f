//! Snapshot system: queries the ECS world and builds a complete
//! WorldSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skyraid_core::components::*;
use skyraid_core::enums::GamePhase;
use skyraid_core::events::AudioEvent;
use skyraid_core::state::*;
use skyraid_core::types::{Position, SimTime, Velocity};

/// Build a complete WorldSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u32,
    background: Option<&'static str>,
    audio_events: Vec<AudioEvent>,
    game_over: Option<GameOverView>,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        phase,
        score,
        background: background.map(str::to_string),
        player: build_player(world),
        enemies: build_sprites::<Enemy>(world),
        clouds: build_sprites::<Cloud>(world),
        player_shots: build_sprites::<PlayerShot>(world),
        enemy_shots: build_sprites::<EnemyShot>(world),
        explosions: build_explosions(world),
        audio_events,
        game_over,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&PlayerShip, &Position, &Heading)>()
        .iter()
        .next()
        .map(|(_, (_, pos, heading))| PlayerView {
            position: *pos,
            heading_degrees: heading.degrees,
        })
}

/// Build the view list for one sprite kind, selected by its marker.
fn build_sprites<K: hecs::Component>(world: &World) -> Vec<SpriteView> {
    world
        .query::<(&K, &Position, &Velocity, &Heading)>()
        .iter()
        .map(|(_, (_, pos, vel, heading))| SpriteView {
            position: *pos,
            velocity: *vel,
            heading_degrees: heading.degrees,
        })
        .collect()
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            position: *pos,
            frame: explosion.frame,
        })
        .collect()
}
