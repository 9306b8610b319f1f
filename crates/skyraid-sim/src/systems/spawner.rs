//! Interval spawning system — emits enemies and clouds on fixed timers.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use crate::world_setup;

/// A stoppable countdown timer driven by the tick source.
///
/// Restarting resets the phase: the next firing is always a full
/// interval away, so stopping and resuming cannot drift the cadence.
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ticks: u64,
    remaining: u64,
    running: bool,
}

impl SpawnTimer {
    /// Create a stopped timer. `restart` arms it.
    pub fn new(interval_ticks: u64) -> Self {
        Self {
            interval_ticks,
            remaining: interval_ticks,
            running: false,
        }
    }

    /// Arm the timer with a fresh full interval.
    pub fn restart(&mut self) {
        self.remaining = self.interval_ticks;
        self.running = true;
    }

    /// Suspend the timer without losing its configuration.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one tick. Returns true on the tick the timer fires,
    /// after which it rewinds to a full interval.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.remaining = self.interval_ticks;
            true
        } else {
            false
        }
    }
}

/// Check both timers and spawn any due entities, one per firing.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    enemy_timer: &mut SpawnTimer,
    cloud_timer: &mut SpawnTimer,
) {
    if enemy_timer.advance() {
        world_setup::spawn_enemy(world, rng);
    }
    if cloud_timer.advance() {
        world_setup::spawn_cloud(world, rng);
    }
}
