//! Game loop thread — runs the simulation engine at 60Hz and routes
//! snapshots and events to the host bridge.
//!
//! The engine is created inside this thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel. The latest snapshot
//! is stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use log::info;

use skyraid_core::constants::TICK_RATE;
use skyraid_core::enums::GamePhase;
use skyraid_core::state::WorldSnapshot;
use skyraid_sim::engine::{GameEngine, SimConfig};

use crate::bridge::HostBridge;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer to use.
pub fn spawn_game_loop(
    bridge: Box<dyn HostBridge>,
    latest_snapshot: Arc<Mutex<Option<WorldSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skyraid-game-loop".into())
        .spawn(move || {
            run_game_loop(bridge, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut bridge: Box<dyn HostBridge>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<WorldSnapshot>>,
) {
    info!("game loop running at {TICK_RATE}Hz");

    let mut engine = GameEngine::new(SimConfig::default());
    let mut next_tick_time = Instant::now();
    let mut last_phase = GamePhase::Setup;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Route audio events and screen transitions to the host
        for event in &snapshot.audio_events {
            bridge.play_audio(event);
        }
        if snapshot.phase != last_phase {
            match snapshot.phase {
                GamePhase::Paused => bridge.set_pause_overlay(true),
                GamePhase::Playing if last_phase == GamePhase::Paused => {
                    bridge.set_pause_overlay(false);
                }
                GamePhase::GameOver => {
                    if let Some(view) = &snapshot.game_over {
                        bridge.show_game_over(view);
                    }
                }
                _ => {}
            }
            last_phase = snapshot.phase;
        }
        bridge.present(&snapshot);

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}
