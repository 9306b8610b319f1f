//! Events emitted by the simulation for the host's audio system.

use serde::{Deserialize, Serialize};

/// Fire-and-forget audio triggers. The core only emits these; playback
/// and mixing belong to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Background track started at session setup.
    MusicLoop {
        key: String,
        volume: f64,
        looped: bool,
    },
    /// Player weapon fired via the fire command.
    WeaponFired { key: String, volume: f64 },
    /// Enemy destroyed by a player shot.
    EnemyDestroyed { key: String, volume: f64, pan: f64 },
}
