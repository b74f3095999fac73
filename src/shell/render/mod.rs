//! Rendering components for the terminal shell.
//!
//! This module contains the drawing functions for the shell: the video
//! panel, progress bar, status bar and help overlay.

mod help;
mod progress;
mod screen;
mod status;

use std::io::{self, Write};

use anyhow::Result;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    build_progress_bar_chars, format_precise_time, intensity_color, progress_bar_width,
    render_progress_bar, PROGRESS_CHROME, UNKNOWN_TIME,
};
pub use screen::{panel_lines, pattern_summary, render_screen, rumble_offset};
pub use status::{haptics_label, render_separator_line, render_status_bar, status_parts};

use super::state::ShellState;
use crate::player::PlayerSnapshot;
use crate::timeline::SegmentTable;

/// Draw one full frame.
pub fn render_frame(
    stdout: &mut io::Stdout,
    state: &ShellState,
    snapshot: &PlayerSnapshot,
    table: &SegmentTable,
) -> Result<()> {
    if state.show_help {
        render_help(stdout, state.term_cols, state.term_rows)?;
        stdout.flush()?;
        return Ok(());
    }

    render_screen(
        stdout,
        state.term_cols,
        state.view_rows(),
        snapshot,
        state.rumble_frame(),
    )?;

    if state.controls_visible {
        render_separator_line(stdout, state.term_cols, state.separator_row())?;
        render_progress_bar(
            stdout,
            state.term_cols,
            state.progress_row(),
            snapshot.current_time,
            snapshot.progress_ratio,
            snapshot.duration,
            table,
        )?;
        render_status_bar(stdout, state.term_cols, state.status_row(), snapshot)?;
    } else {
        for row in [state.separator_row(), state.progress_row(), state.status_row()] {
            status::clear_row(stdout, row)?;
        }
    }

    stdout.flush()?;
    Ok(())
}
