//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session phase (top-level state).
///
/// `Setup -> Playing <-> Paused`; `Playing -> GameOver` (terminal).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine created, world not yet populated.
    #[default]
    Setup,
    /// Simulation advancing each tick.
    Playing,
    /// Simulation frozen; spawn timers stopped.
    Paused,
    /// Player destroyed. Terminal for the session.
    GameOver,
}

/// Steering directions reported by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerDirection {
    Up,
    Down,
    Left,
    Right,
}
