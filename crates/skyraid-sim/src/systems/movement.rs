//! Kinematic integration and player-specific movement rules.
//!
//! Velocities are expressed in units/tick, so integration is a plain
//! add with no dt factor.

use hecs::World;

use skyraid_core::components::{Extent, PlayerShip};
use skyraid_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use skyraid_core::types::{Position, Velocity};

use crate::input::InputState;

/// Copy the held-key axes onto the player's velocity.
pub fn apply_input(world: &mut World, input: &InputState) {
    for (_entity, (_player, vel)) in world.query_mut::<(&PlayerShip, &mut Velocity)>() {
        vel.x = input.move_x;
        vel.y = input.move_y;
    }
}

/// Advance every entity with Position + Velocity by one tick.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

/// Clamp the player inside the visible rectangle, one edge at a time.
/// No bounce or damping; the ship just stops at the wall.
pub fn clamp_player(world: &mut World) {
    for (_entity, (_player, pos, extent)) in
        world.query_mut::<(&PlayerShip, &mut Position, &Extent)>()
    {
        if pos.y + extent.half_h > SCREEN_HEIGHT {
            pos.y = SCREEN_HEIGHT - extent.half_h;
        }
        if pos.x + extent.half_w > SCREEN_WIDTH {
            pos.x = SCREEN_WIDTH - extent.half_w;
        }
        if pos.y - extent.half_h < 0.0 {
            pos.y = extent.half_h;
        }
        if pos.x - extent.half_w < 0.0 {
            pos.x = extent.half_w;
        }
    }
}
