//! Raw key events mapped to game commands.
//!
//! Key-state notifications are the only input abstraction the core
//! sees: presses and releases of the steering keys become `Steer`
//! commands; everything else is edge-triggered on the press.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use skyraid_core::commands::PlayerCommand;
use skyraid_core::enums::SteerDirection;

use crate::state::GameLoopCommand;

/// Map one key event to a loop command, if the key is bound.
pub fn map_key_event(event: &KeyEvent) -> Option<GameLoopCommand> {
    let pressed = match event.kind {
        KeyEventKind::Press => true,
        KeyEventKind::Release => false,
        KeyEventKind::Repeat => return None,
    };

    let steer = |direction| {
        Some(GameLoopCommand::PlayerCommand(PlayerCommand::Steer {
            direction,
            pressed,
        }))
    };

    match event.code {
        KeyCode::Up | KeyCode::Char('w') => steer(SteerDirection::Up),
        KeyCode::Down | KeyCode::Char('s') => steer(SteerDirection::Down),
        KeyCode::Left | KeyCode::Char('a') => steer(SteerDirection::Left),
        KeyCode::Right | KeyCode::Char('d') => steer(SteerDirection::Right),
        KeyCode::Char(' ') if pressed => {
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::Fire))
        }
        KeyCode::Char('p') if pressed => {
            Some(GameLoopCommand::PlayerCommand(PlayerCommand::TogglePause))
        }
        KeyCode::Esc | KeyCode::Char('q') if pressed => Some(GameLoopCommand::Shutdown),
        _ => None,
    }
}
