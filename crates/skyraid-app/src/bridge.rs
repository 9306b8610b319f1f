//! Host-side collaborators the core reports into.
//!
//! The simulation only emits data: snapshots for the renderer, audio
//! triggers, and screen transitions. `HostBridge` is the seam a real
//! frontend implements; `LogBridge` is the headless default that
//! narrates the session through the log facade.

use log::{debug, info};

use skyraid_core::events::AudioEvent;
use skyraid_core::state::{GameOverView, WorldSnapshot};

/// Render, audio, and screen-transition collaborators behind one seam.
pub trait HostBridge: Send {
    /// Consume the per-frame read-only snapshot.
    fn present(&mut self, snapshot: &WorldSnapshot);
    /// Fire-and-forget audio trigger.
    fn play_audio(&mut self, event: &AudioEvent);
    /// Show or hide the pause overlay.
    fn set_pause_overlay(&mut self, visible: bool);
    /// Display the results view.
    fn show_game_over(&mut self, view: &GameOverView);
}

/// Headless bridge that logs instead of drawing.
#[derive(Debug, Default)]
pub struct LogBridge {
    frames: u64,
}

impl HostBridge for LogBridge {
    fn present(&mut self, snapshot: &WorldSnapshot) {
        self.frames += 1;
        // One status line per second is plenty at 60Hz.
        if self.frames % 60 == 0 {
            debug!(
                "tick {} score {} enemies {} clouds {} shots {}/{} explosions {}",
                snapshot.time.tick,
                snapshot.score,
                snapshot.enemies.len(),
                snapshot.clouds.len(),
                snapshot.player_shots.len(),
                snapshot.enemy_shots.len(),
                snapshot.explosions.len(),
            );
        }
    }

    fn play_audio(&mut self, event: &AudioEvent) {
        debug!("audio: {event:?}");
    }

    fn set_pause_overlay(&mut self, visible: bool) {
        info!("pause overlay {}", if visible { "shown" } else { "hidden" });
    }

    fn show_game_over(&mut self, view: &GameOverView) {
        info!(
            "game over: score {} after {:.1}s",
            view.score, view.elapsed_secs
        );
    }
}
