//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::SteerDirection;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Populate the world and enter Playing. Valid only in Setup.
    StartSession,
    /// Toggle Playing <-> Paused.
    TogglePause,
    /// Fire one player projectile. Valid only while Playing.
    Fire,
    /// Key-state change for one steering direction.
    Steer {
        direction: SteerDirection,
        pressed: bool,
    },
}
