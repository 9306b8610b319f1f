use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::{terminal, ExecutableCommand};
use log::info;

use skyraid_app::bridge::LogBridge;
use skyraid_app::game_loop;
use skyraid_app::input;
use skyraid_app::state::GameLoopCommand;
use skyraid_core::commands::PlayerCommand;

fn main() -> io::Result<()> {
    env_logger::init();

    // Raw mode plus key-release reporting so held steering keys behave.
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        stdout.execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let latest_snapshot = Arc::new(Mutex::new(None));
    let cmd_tx = game_loop::spawn_game_loop(
        Box::new(LogBridge::default()),
        Arc::clone(&latest_snapshot),
    );

    info!("arrows/WASD steer, space fires, p pauses, q or esc quits");
    let _ = cmd_tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartSession));

    // Event pump: forward key events until quit or loop exit.
    loop {
        if event::poll(Duration::from_millis(33))? {
            if let Event::Key(key) = event::read()? {
                match input::map_key_event(&key) {
                    Some(GameLoopCommand::Shutdown) => {
                        let _ = cmd_tx.send(GameLoopCommand::Shutdown);
                        break;
                    }
                    Some(command) => {
                        if cmd_tx.send(command).is_err() {
                            break;
                        }
                    }
                    None => {}
                }
            }
        }
    }

    if enhanced {
        stdout.execute(PopKeyboardEnhancementFlags)?;
    }
    terminal::disable_raw_mode()?;
    Ok(())
}
