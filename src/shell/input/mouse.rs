//! Mouse input handling for the terminal shell.
//!
//! Left click on the progress bar seeks; any movement shows the controls.

use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::shell::render::progress_bar_width;
use crate::shell::state::{InputResult, ShellState};
use crate::shell::ShellPlayer;

/// First column of the bar (after one column of padding).
const BAR_START: u16 = 1;

/// Map a click column to a media fraction, if it hit the bar.
pub fn click_fraction(column: u16, term_cols: u16) -> Option<f64> {
    let bar_width = progress_bar_width(term_cols);
    if bar_width == 0 || column < BAR_START || column >= BAR_START + bar_width as u16 {
        return None;
    }
    Some((column - BAR_START) as f64 / bar_width as f64)
}

/// Handle a mouse event.
pub fn handle_mouse_event(
    mouse: MouseEvent,
    state: &mut ShellState,
    player: &mut ShellPlayer,
) -> InputResult {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            state.touch(Instant::now());
            let on_bar = state.controls_visible && !state.show_help;
            if on_bar && mouse.row == state.progress_row() {
                if let Some(fraction) = click_fraction(mouse.column, state.term_cols) {
                    player.seek(fraction);
                }
            }
        }
        MouseEventKind::Moved => state.touch(Instant::now()),
        _ => {}
    }

    InputResult::Continue
}
