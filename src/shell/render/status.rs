//! Status bar rendering for the terminal shell.
//!
//! Displays play state, mute, the 4D haptics toggle, the active segment,
//! and keyboard shortcuts.

use std::io::{self, Write};

use anyhow::Result;

use super::progress::intensity_color;
use crate::player::PlayerSnapshot;

const WHITE: &str = "\x1b[97m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const DARK_GREY: &str = "\x1b[90m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Label for the haptics toggle.
pub fn haptics_label(snapshot: &PlayerSnapshot) -> &'static str {
    match (snapshot.haptics_enabled, snapshot.has_actuator_capability) {
        (false, _) => "4D OFF",
        (true, true) => "4D ON",
        (true, false) => "4D ON (visual)",
    }
}

/// Colored pieces of the status line, in display order.
pub fn status_parts(snapshot: &PlayerSnapshot) -> Vec<(&'static str, String)> {
    let mut parts = Vec::with_capacity(8);

    let state = if snapshot.is_playing { "⏸ " } else { "▶ " };
    parts.push((WHITE, format!(" {} ", state)));

    let volume = if snapshot.is_muted { "MUTE " } else { "VOL " };
    parts.push((if snapshot.is_muted { RED } else { DARK_GREY }, volume.to_string()));

    let haptics_color = if snapshot.haptics_enabled { GREEN } else { DARK_GREY };
    parts.push((haptics_color, format!("{} ", haptics_label(snapshot))));

    if let Some(segment) = &snapshot.active_segment {
        parts.push((
            intensity_color(segment.intensity),
            format!("◉ {} [{}] ", segment.name, segment.intensity.label()),
        ));
    }

    let play_action = if snapshot.is_playing { ":pause " } else { ":play " };
    parts.push((DARK_GREY, "│ ".to_string()));
    for (key, action) in [
        ("space", play_action),
        ("m", ":mute "),
        ("h", ":4d "),
        ("f", ":full "),
        ("?", ":help "),
        ("q", ":quit"),
    ] {
        parts.push((CYAN, key.to_string()));
        parts.push((DARK_GREY, action.to_string()));
    }

    parts
}

/// Render a separator line.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width in columns
/// * `row` - Zero-based row the line is drawn on
pub fn render_separator_line(stdout: &mut io::Stdout, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    output.extend(std::iter::repeat('─').take(width as usize));
    output.push_str(RESET);
    write!(stdout, "{}", output)?;
    Ok(())
}

/// Render the status/controls bar.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width in columns
/// * `row` - Zero-based row the bar is drawn on
/// * `snapshot` - Player state to describe
pub fn render_status_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    snapshot: &PlayerSnapshot,
) -> Result<()> {
    let mut output = String::with_capacity(256);
    // The play/pause icon renders double-width
    let mut visible_len: usize = 1;

    output.push_str(&format!("\x1b[{};1H", row + 1));
    for (color, text) in status_parts(snapshot) {
        output.push_str(color);
        visible_len += text.chars().count();
        output.push_str(&text);
    }

    // Pad to full width to overwrite any leftover content
    let padding = (width as usize).saturating_sub(visible_len);
    output.extend(std::iter::repeat(' ').take(padding));

    output.push_str(RESET);
    write!(stdout, "{}", output)?;

    Ok(())
}

/// Blank a row (used while the controls are hidden).
pub fn clear_row(stdout: &mut io::Stdout, row: u16) -> Result<()> {
    write!(stdout, "\x1b[{};1H\x1b[2K", row + 1)?;
    Ok(())
}
