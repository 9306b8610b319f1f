//! Systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for
//! read-only). They do not own state — session scalars live on the
//! engine and are passed in explicitly.

pub mod animation;
pub mod cleanup;
pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod steering;
