//! Held-key steering state applied to the player each tick.
//!
//! Input polling lives in the host; the engine only sees discrete
//! key-state commands and keeps the resulting axis state here,
//! decoupled from the simulation step.

use skyraid_core::constants::PLAYER_SPEED;
use skyraid_core::enums::SteerDirection;

/// Current steering axes in units/tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub move_x: f64,
    pub move_y: f64,
}

impl InputState {
    /// Apply one key-state change. A press sets its axis to the fixed
    /// steering magnitude; a release zeroes the whole axis (releasing
    /// either vertical key stops vertical motion, and likewise for
    /// horizontal).
    pub fn apply(&mut self, direction: SteerDirection, pressed: bool) {
        match direction {
            SteerDirection::Up => self.move_y = if pressed { PLAYER_SPEED } else { 0.0 },
            SteerDirection::Down => self.move_y = if pressed { -PLAYER_SPEED } else { 0.0 },
            SteerDirection::Left => self.move_x = if pressed { -PLAYER_SPEED } else { 0.0 },
            SteerDirection::Right => self.move_x = if pressed { PLAYER_SPEED } else { 0.0 },
        }
    }
}
