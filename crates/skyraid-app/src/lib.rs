//! SKYRAID host: the game-loop thread, key-event mapping, and the
//! logging host bridge standing in for the render/audio/screen
//! collaborators.

pub mod bridge;
pub mod game_loop;
pub mod input;
pub mod state;
