//! Simulation engine for SKYRAID.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces WorldSnapshots for the host.

pub mod engine;
pub mod input;
pub mod systems;
pub mod transitions;
pub mod world_setup;

pub use engine::GameEngine;
pub use skyraid_core as core;

#[cfg(test)]
mod tests;
