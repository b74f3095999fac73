//! Progress bar rendering for the terminal shell.
//!
//! Displays playback progress with the vibration segments drawn on the
//! track, colored by intensity.

use std::io::{self, Write};

use anyhow::Result;

use crate::timeline::{Intensity, SegmentTable};

/// Columns taken by padding and the time display around the bar.
pub const PROGRESS_CHROME: usize = 20;

/// Placeholder shown while the duration is unknown.
pub const UNKNOWN_TIME: &str = "--:--.--";

const PLAYHEAD: char = '⏺';
const SEGMENT: char = '▬';

/// Width of the bar itself for a terminal `width` columns wide.
///
/// # Arguments
/// * `width` - Terminal width in columns
///
/// # Returns
/// The number of cells available to the bar (0 on very narrow terminals)
pub fn progress_bar_width(width: u16) -> usize {
    (width as usize).saturating_sub(PROGRESS_CHROME)
}

/// Format seconds as `MM:SS.cc` (centiseconds).
///
/// Non-finite or negative input renders as `00:00.00`.
pub fn format_precise_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "00:00.00".to_string();
    }
    let total_cs = (seconds * 100.0).floor() as u64;
    let mins = total_cs / 6000;
    let secs = (total_cs / 100) % 60;
    let cs = total_cs % 100;
    format!("{:02}:{:02}.{:02}", mins, secs, cs)
}

/// ANSI foreground color for an intensity.
pub fn intensity_color(intensity: Intensity) -> &'static str {
    match intensity {
        Intensity::High => "\x1b[91m",
        Intensity::Medium => "\x1b[93m",
        Intensity::Low => "\x1b[94m",
    }
}

/// Build the progress bar character array.
///
/// Segments cover every cell their time range touches (at least one), and
/// the playhead is drawn on top of them.
///
/// # Arguments
/// * `bar_width` - Number of cells in the bar
/// * `progress_ratio` - Position as a fraction of the duration
/// * `duration` - Media duration, `None` while unknown
/// * `table` - Segments to draw on the track
///
/// # Returns
/// A tuple of (bar_chars, filled_count, segment_cells) where segment_cells
/// holds the intensity of the segment drawn in each cell, if any.
pub fn build_progress_bar_chars(
    bar_width: usize,
    progress_ratio: f64,
    duration: Option<f64>,
    table: &SegmentTable,
) -> (Vec<char>, usize, Vec<Option<Intensity>>) {
    let progress = if progress_ratio.is_finite() {
        progress_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    let mut cells: Vec<Option<Intensity>> = vec![None; bar_width];

    if let Some(duration) = duration.filter(|d| *d > 0.0) {
        let to_cell = |t: f64| ((t / duration) * bar_width as f64) as usize;
        // Reverse so earlier segments win shared cells, like lookup order
        for segment in table.iter().rev() {
            let first = to_cell(segment.start);
            if first >= bar_width {
                continue;
            }
            let last = to_cell(segment.end).clamp(first, bar_width - 1);
            for cell in first..=last {
                bar[cell] = SEGMENT;
                cells[cell] = Some(segment.intensity);
            }
        }
    }

    if filled < bar_width {
        bar[filled] = PLAYHEAD;
    }

    (bar, filled, cells)
}

/// Render the progress bar with segment markers.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width in columns
/// * `row` - Zero-based row the bar is drawn on
/// * `current_time` - Playback position in seconds
/// * `progress_ratio` - Position as a fraction of the duration
/// * `duration` - Media duration, `None` while unknown
/// * `table` - Segments to draw on the track
pub fn render_progress_bar(
    stdout: &mut io::Stdout,
    width: u16,
    row: u16,
    current_time: f64,
    progress_ratio: f64,
    duration: Option<f64>,
    table: &SegmentTable,
) -> Result<()> {
    let bar_width = progress_bar_width(width);
    let (bar, filled, cells) = build_progress_bar_chars(bar_width, progress_ratio, duration, table);

    let total_str = duration
        .map(format_precise_time)
        .unwrap_or_else(|| UNKNOWN_TIME.to_string());
    let time_display = format!(" {}/{}", format_precise_time(current_time), total_str);

    let mut output = String::with_capacity(width as usize * 6);
    output.push_str(&format!("\x1b[{};1H", row + 1));
    output.push_str("\x1b[48;5;236m ");

    const GREEN: &str = "\x1b[32m";
    const WHITE: &str = "\x1b[97m";
    const DARK_GREY: &str = "\x1b[90m";
    const GREY: &str = "\x1b[37m";

    for (i, &c) in bar.iter().enumerate() {
        if i == filled && c == PLAYHEAD {
            output.push_str(WHITE);
            output.push(c);
        } else if let Some(intensity) = cells[i] {
            output.push_str(intensity_color(intensity));
            output.push(c);
        } else if i < filled {
            output.push_str(GREEN);
            output.push('━');
        } else {
            output.push_str(DARK_GREY);
            output.push(c);
        }
    }

    output.push_str(GREY);
    output.push_str(&time_display);

    let used_width = 1 + bar_width + time_display.chars().count();
    let remaining = (width as usize).saturating_sub(used_width);
    output.extend(std::iter::repeat(' ').take(remaining));

    output.push_str("\x1b[0m");
    write!(stdout, "{}", output)?;

    Ok(())
}
