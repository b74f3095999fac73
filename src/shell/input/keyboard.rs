//! Keyboard input handling for the terminal shell.
//!
//! Handles playback controls, seeking, output toggles and overlays.

use std::io::Write;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::shell::state::{InputResult, ShellState};
use crate::shell::window;
use crate::shell::ShellPlayer;

/// Seconds moved by a plain arrow key.
pub const SEEK_STEP_SECS: f64 = 5.0;
/// Fraction moved by Shift+arrow.
pub const SEEK_STEP_FRACTION: f64 = 0.05;

/// Handle a keyboard event.
///
/// `out` receives host window requests (fullscreen).
pub fn handle_key_event(
    key: KeyEvent,
    state: &mut ShellState,
    player: &mut ShellPlayer,
    out: &mut impl Write,
) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }
    state.touch(Instant::now());

    // If help is showing, any key closes it
    if state.show_help {
        state.toggle_help();
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => return InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return InputResult::Quit
        }

        // === Overlays and output ===
        KeyCode::Char('?') => state.toggle_help(),
        KeyCode::Char('f') => window::toggle_fullscreen_best_effort(out),
        KeyCode::Char('m') => player.toggle_mute(),
        KeyCode::Char('h') => {
            player.toggle_haptics();
            tracing::info!(enabled = player.sync().haptics_enabled(), "haptics toggled");
        }

        // === Playback ===
        KeyCode::Char(' ') => {
            if let Some(transition) = player.toggle_play_pause() {
                state.on_transition(&transition);
            }
        }

        // === Seeking ===
        KeyCode::Left => seek_step(player, key.modifiers, -1.0),
        KeyCode::Right => seek_step(player, key.modifiers, 1.0),
        KeyCode::Home => {
            player.seek(0.0);
        }
        KeyCode::End => {
            player.seek(1.0);
        }
        KeyCode::Char(c @ '0'..='9') => {
            let tenths = c.to_digit(10).unwrap_or(0) as f64;
            player.seek(tenths / 10.0);
        }

        _ => {}
    }

    InputResult::Continue
}

fn seek_step(player: &mut ShellPlayer, modifiers: KeyModifiers, direction: f64) {
    if modifiers.contains(KeyModifiers::SHIFT) {
        let ratio = player.snapshot().progress_ratio;
        player.seek(ratio + direction * SEEK_STEP_FRACTION);
    } else {
        player.seek_by(direction * SEEK_STEP_SECS);
    }
}
