//! Phase-transition side effects.
//!
//! Transition side effects are declared as a table rather than buried
//! in the command handler, so oddities like the fire-on-pause shot stay
//! visible and testable.

use skyraid_core::enums::GamePhase;

/// An action the engine performs when a given transition occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionAction {
    StopSpawnTimers,
    RestartSpawnTimers,
    FirePlayerShot,
}

/// Actions for a phase transition, in execution order.
///
/// Entering Paused fires one player shot. Long-standing behavior, kept
/// for parity with the original game; the shot skips the weapon sound.
pub fn actions_for(from: GamePhase, to: GamePhase) -> &'static [TransitionAction] {
    use GamePhase::*;
    use TransitionAction::*;

    match (from, to) {
        (Setup, Playing) => &[RestartSpawnTimers],
        (Playing, Paused) => &[StopSpawnTimers, FirePlayerShot],
        (Paused, Playing) => &[RestartSpawnTimers],
        _ => &[],
    }
}
