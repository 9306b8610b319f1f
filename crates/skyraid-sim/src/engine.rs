//! Simulation engine — the core of the game.
//!
//! `GameEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `WorldSnapshot`s. Completely headless
//! (no windowing or audio dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::constants::*;
use skyraid_core::enums::GamePhase;
use skyraid_core::events::AudioEvent;
use skyraid_core::state::{GameOverView, WorldSnapshot};
use skyraid_core::types::SimTime;

use crate::input::InputState;
use crate::systems;
use crate::systems::spawner::SpawnTimer;
use crate::transitions::{self, TransitionAction};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Collapse duplicate explosions when one enemy is struck by
    /// several shots in the same tick. Off by default for parity with
    /// the original double-trigger behavior.
    pub dedupe_explosions: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            dedupe_explosions: false,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct GameEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    input: InputState,
    enemy_timer: SpawnTimer,
    cloud_timer: SpawnTimer,
    score: u32,
    background: Option<&'static str>,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    game_over: Option<GameOverView>,
    dedupe_explosions: bool,
}

impl GameEngine {
    /// Create a new engine with the given config. The world stays empty
    /// until a `StartSession` command arrives.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            input: InputState::default(),
            enemy_timer: SpawnTimer::new(ENEMY_SPAWN_INTERVAL_TICKS),
            cloud_timer: SpawnTimer::new(CLOUD_SPAWN_INTERVAL_TICKS),
            score: 0,
            background: None,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            game_over: None,
            dedupe_explosions: config.dedupe_explosions,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Outside Playing the world is frozen and only commands
    /// are processed.
    pub fn tick(&mut self) -> WorldSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.time.advance();
            self.run_systems();
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            self.background,
            audio_events,
            self.game_over,
        )
    }

    /// Get the current session phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at an exact position/velocity (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_at(
        &mut self,
        position: skyraid_core::types::Position,
        velocity: skyraid_core::types::Velocity,
    ) -> hecs::Entity {
        use skyraid_core::components::{Enemy, Heading};
        self.world
            .spawn((Enemy, position, velocity, Heading::default(), ENEMY_EXTENT))
    }

    /// Spawn a player shot at an exact position (for testing).
    #[cfg(test)]
    pub fn spawn_player_shot_at(
        &mut self,
        position: skyraid_core::types::Position,
    ) -> hecs::Entity {
        use skyraid_core::components::{Heading, PlayerShot};
        self.world.spawn((
            PlayerShot,
            position,
            skyraid_core::types::Velocity::new(PLAYER_SHOT_SPEED, 0.0),
            Heading {
                degrees: PLAYER_SHOT_HEADING_DEGREES,
            },
            PLAYER_SHOT_EXTENT,
        ))
    }

    /// Spawn an enemy shot at an exact position/velocity (for testing).
    #[cfg(test)]
    pub fn spawn_enemy_shot_at(
        &mut self,
        position: skyraid_core::types::Position,
        velocity: skyraid_core::types::Velocity,
    ) -> hecs::Entity {
        use skyraid_core::components::{EnemyShot, Heading};
        self.world.spawn((
            EnemyShot,
            position,
            velocity,
            Heading::default(),
            ENEMY_SHOT_EXTENT,
        ))
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => {
                if self.phase == GamePhase::Setup {
                    world_setup::setup_session(&mut self.world, &mut self.audio_events);
                    self.background = Some(BACKGROUND_KEY);
                    self.time = SimTime::default();
                    self.score = 0;
                    self.set_phase(GamePhase::Playing);
                }
            }
            PlayerCommand::TogglePause => match self.phase {
                GamePhase::Playing => self.set_phase(GamePhase::Paused),
                GamePhase::Paused => self.set_phase(GamePhase::Playing),
                _ => {}
            },
            PlayerCommand::Fire => {
                if self.phase == GamePhase::Playing {
                    world_setup::fire_player_shot(&mut self.world);
                    self.audio_events.push(AudioEvent::WeaponFired {
                        key: SHOT_SOUND_KEY.to_string(),
                        volume: SHOT_SOUND_VOLUME,
                    });
                }
            }
            PlayerCommand::Steer { direction, pressed } => {
                self.input.apply(direction, pressed);
            }
        }
    }

    /// Transition to `to`, running the actions the transition table
    /// declares for the pair.
    fn set_phase(&mut self, to: GamePhase) {
        for action in transitions::actions_for(self.phase, to) {
            match action {
                TransitionAction::StopSpawnTimers => {
                    self.enemy_timer.stop();
                    self.cloud_timer.stop();
                }
                TransitionAction::RestartSpawnTimers => {
                    self.enemy_timer.restart();
                    self.cloud_timer.restart();
                }
                TransitionAction::FirePlayerShot => {
                    world_setup::fire_player_shot(&mut self.world);
                }
            }
        }
        self.phase = to;
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Held-key input -> player velocity
        systems::movement::apply_input(&mut self.world, &self.input);
        // 2. Interval spawning
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.enemy_timer,
            &mut self.cloud_timer,
        );
        // 3. Enemy steering + synchronized volley
        systems::steering::run(&mut self.world, self.time.tick);
        // 4. Kinematic integration
        systems::movement::run(&mut self.world);
        // 5. Explosion animation
        systems::animation::run(&mut self.world);
        // 6. Collision resolution
        let outcome = systems::collision::run(
            &mut self.world,
            &mut self.score,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            self.dedupe_explosions,
        );
        if outcome.player_destroyed {
            self.game_over = Some(GameOverView {
                elapsed_secs: self.time.elapsed_secs,
                score: self.score,
            });
            self.set_phase(GamePhase::GameOver);
            return;
        }
        // 7. Off-screen / finished-animation pruning
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
        // 8. Keep the player on screen
        systems::movement::clamp_player(&mut self.world);
    }
}
