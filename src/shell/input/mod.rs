//! Input handling for the terminal shell.
//!
//! Dispatches keyboard, mouse and resize events and returns control
//! flow signals.

mod keyboard;
mod mouse;

use std::io::Write;

use crossterm::event::Event;

pub use keyboard::{handle_key_event, SEEK_STEP_FRACTION, SEEK_STEP_SECS};
pub use mouse::{click_fraction, handle_mouse_event};

use super::state::{InputResult, ShellState};
use super::ShellPlayer;

/// Handle any input event, dispatching to the appropriate handler.
pub fn handle_event(
    event: Event,
    state: &mut ShellState,
    player: &mut ShellPlayer,
    out: &mut impl Write,
) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, state, player, out),
        Event::Mouse(mouse) => handle_mouse_event(mouse, state, player),
        Event::Resize(cols, rows) => {
            state.handle_resize(cols, rows);
            InputResult::Continue
        }
        _ => InputResult::Continue,
    }
}
