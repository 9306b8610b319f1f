//! World snapshot — the complete visible state sent to the host each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state handed to the render collaborator after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    /// Asset key of the session background; set at session setup.
    pub background: Option<String>,
    /// Absent before setup and after the fatal collision.
    pub player: Option<PlayerView>,
    pub enemies: Vec<SpriteView>,
    pub clouds: Vec<SpriteView>,
    pub player_shots: Vec<SpriteView>,
    pub enemy_shots: Vec<SpriteView>,
    pub explosions: Vec<ExplosionView>,
    /// Audio triggers queued since the previous snapshot.
    pub audio_events: Vec<AudioEvent>,
    /// Present once the session has ended.
    pub game_over: Option<GameOverView>,
}

/// Player draw state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub heading_degrees: f64,
}

/// Draw state shared by enemies, clouds, and projectiles.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpriteView {
    pub position: Position,
    pub velocity: Velocity,
    pub heading_degrees: f64,
}

/// Explosion draw state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    pub frame: u32,
}

/// Final results carried into the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameOverView {
    /// Accumulated dt sum at the tick the player was destroyed.
    pub elapsed_secs: f64,
    pub score: u32,
}
