//! Simulation constants and tuning parameters.

use crate::components::Extent;

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Screen bounds ---

/// Visible playfield width in units.
pub const SCREEN_WIDTH: f64 = 1366.0;

/// Visible playfield height in units.
pub const SCREEN_HEIGHT: f64 = 768.0;

// --- Spawning ---

/// One enemy per second of sim time.
pub const ENEMY_SPAWN_INTERVAL_TICKS: u64 = TICK_RATE as u64;

/// One cloud every three seconds of sim time.
pub const CLOUD_SPAWN_INTERVAL_TICKS: u64 = 3 * TICK_RATE as u64;

/// New entities appear up to this far past the right screen edge.
pub const SPAWN_EDGE_JITTER: f64 = 80.0;

/// Vertical band for enemy spawns (range of the bottom edge).
pub const ENEMY_BAND_LOW: f64 = 40.0;
pub const ENEMY_BAND_HIGH: f64 = SCREEN_HEIGHT - 80.0;

/// Vertical range for cloud spawns (range of the top edge).
pub const CLOUD_BAND_LOW: f64 = 10.0;
pub const CLOUD_BAND_HIGH: f64 = SCREEN_HEIGHT - 10.0;

/// Enemy horizontal speed, inclusive integer range (units/tick, leftward).
pub const ENEMY_SPEED_MIN: i32 = -4;
pub const ENEMY_SPEED_MAX: i32 = -2;

/// Cloud horizontal speed, inclusive integer range (units/tick, leftward).
pub const CLOUD_SPEED_MIN: i32 = -2;
pub const CLOUD_SPEED_MAX: i32 = -1;

// --- Player ---

/// Held-key steering magnitude on each axis (units/tick).
pub const PLAYER_SPEED: f64 = 5.0;

/// Player shot forward speed (units/tick).
pub const PLAYER_SHOT_SPEED: f64 = 20.0;

/// Distance ahead of the player's right edge where shots appear.
pub const PLAYER_SHOT_SPAWN_OFFSET: f64 = 37.0;

/// Player shots point right given the asset's default orientation.
pub const PLAYER_SHOT_HEADING_DEGREES: f64 = -90.0;

// --- Enemy fire ---

/// Every live enemy fires on the same tick — the synchronized volley is
/// the intended arcade pacing. Tunable.
pub const ENEMY_VOLLEY_INTERVAL_TICKS: u64 = 300;

/// Enemy shot speed (units/tick).
pub const ENEMY_SHOT_SPEED: f64 = 3.0;

/// Sprite art faces up; subtract this so the front faces the target.
pub const SPRITE_FACING_OFFSET_DEGREES: f64 = 90.0;

// --- Explosions ---

/// Number of animation frames, advanced one per tick.
pub const EXPLOSION_FRAME_COUNT: u32 = 60;

// --- Scoring ---

/// Score reward per destroyed enemy.
pub const ENEMY_SCORE: u32 = 10;

// --- Bounding extents (half sizes per kind) ---

pub const PLAYER_EXTENT: Extent = Extent {
    half_w: 33.0,
    half_h: 25.0,
};

pub const ENEMY_EXTENT: Extent = Extent {
    half_w: 24.0,
    half_h: 24.0,
};

pub const CLOUD_EXTENT: Extent = Extent {
    half_w: 30.0,
    half_h: 18.0,
};

pub const PLAYER_SHOT_EXTENT: Extent = Extent {
    half_w: 27.0,
    half_h: 4.5,
};

pub const ENEMY_SHOT_EXTENT: Extent = Extent {
    half_w: 13.5,
    half_h: 4.5,
};

pub const EXPLOSION_EXTENT: Extent = Extent {
    half_w: 42.0,
    half_h: 42.0,
};

// --- Asset keys ---

/// Session background texture key, resolved by the render collaborator.
pub const BACKGROUND_KEY: &str = "backdrop";

/// Background music track key.
pub const MUSIC_KEY: &str = "music-loop";

/// Player weapon sound key.
pub const SHOT_SOUND_KEY: &str = "laser";

/// Enemy destruction sound key.
pub const ZAP_SOUND_KEY: &str = "zap";

// --- Audio levels ---

pub const MUSIC_VOLUME: f64 = 0.09;
pub const SHOT_SOUND_VOLUME: f64 = 0.04;
pub const ZAP_SOUND_VOLUME: f64 = 0.03;
pub const ZAP_SOUND_PAN: f64 = 0.0;
