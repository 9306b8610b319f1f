//! ECS components for hecs entities.
//!
//! Components are plain data structs with no game logic.
//! Each entity carries exactly one kind marker; the markers are the
//! kind partition the systems query by.

use serde::{Deserialize, Serialize};

use crate::types::{Bounds, Position};

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks a hostile raider scrolling in from the right.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks a drifting ambient obstacle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cloud;

/// Marks a projectile fired by the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShot;

/// Marks a projectile fired by an enemy.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyShot;

/// Fixed half-extents of an entity's axis-aligned bounding box.
/// The box is always derivable from the current position plus this extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub half_w: f64,
    pub half_h: f64,
}

/// Sprite rotation in degrees (0 = the asset's default orientation).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Heading {
    pub degrees: f64,
}

/// Finite explosion animation. Advances one frame per tick and is
/// removed once the frame sequence completes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Explosion {
    pub frame: u32,
}

impl Extent {
    /// Bounding box centered on `position`.
    pub fn bounds(&self, position: &Position) -> Bounds {
        Bounds {
            left: position.x - self.half_w,
            right: position.x + self.half_w,
            bottom: position.y - self.half_h,
            top: position.y + self.half_h,
        }
    }
}
