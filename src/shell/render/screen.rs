//! Video panel rendering for the terminal shell.
//!
//! Stands in for the video surface: shows the product title, the active
//! mode and its pattern, and shakes plus glows while a segment is active.

use std::io::{self, Write};

use anyhow::Result;

use super::progress::intensity_color;
use crate::player::PlayerSnapshot;
use crate::timeline::{Intensity, VibrationPattern};

const TITLE: &str = "S O N I C   E X P E R T";
const GLOW: &str = "\x1b[96m";
const DIM: &str = "\x1b[90m";
const RESET: &str = "\x1b[0m";

/// Horizontal jitter (columns) for the rumble effect.
///
/// High intensity moves every frame; lower intensities every other frame.
pub fn rumble_offset(intensity: Option<Intensity>, frame: u64) -> u16 {
    match intensity {
        None => 0,
        Some(Intensity::High) => [0, 2, 1, 2][(frame % 4) as usize],
        Some(_) => {
            if (frame / 2) % 2 == 0 {
                0
            } else {
                1
            }
        }
    }
}

/// Short human summary of a pattern.
pub fn pattern_summary(pattern: &VibrationPattern) -> String {
    match pattern {
        VibrationPattern::Sustained(ms) => format!("{} ms", ms),
        VibrationPattern::Sequence(steps) => {
            let pulses = steps.iter().step_by(2).filter(|&&ms| ms > 0).count();
            format!("{} pulses / {} ms", pulses, pattern.total_millis())
        }
    }
}

/// Text lines of the panel, centered vertically by the caller.
pub fn panel_lines(snapshot: &PlayerSnapshot) -> Vec<String> {
    let mut lines = vec![TITLE.to_string(), String::new()];
    match &snapshot.active_segment {
        Some(segment) => {
            lines.push(format!("◉ {}", segment.name));
            lines.push(format!(
                "{} · {}",
                segment.intensity.label(),
                pattern_summary(&segment.pattern)
            ));
        }
        None if snapshot.is_playing => {
            lines.push("cleaning...".to_string());
            lines.push(String::new());
        }
        None => {
            lines.push("▶ PAUSED".to_string());
            lines.push("press space to play".to_string());
        }
    }
    lines
}

fn centered_col(width: u16, text: &str) -> u16 {
    let len = text.chars().count() as u16;
    width.saturating_sub(len) / 2
}

/// Render the video panel into rows `0..rows`.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width in columns
/// * `rows` - Number of rows the panel occupies
/// * `snapshot` - Player state shown in the panel
/// * `rumble_frame` - Frame counter driving the rumble jitter
pub fn render_screen(
    stdout: &mut io::Stdout,
    width: u16,
    rows: u16,
    snapshot: &PlayerSnapshot,
    rumble_frame: u64,
) -> Result<()> {
    let intensity = snapshot.active_segment.as_ref().map(|s| s.intensity);
    let offset = rumble_offset(intensity, rumble_frame);
    let lines = panel_lines(snapshot);
    let first_line = rows.saturating_sub(lines.len() as u16) / 2;

    let mut output = String::with_capacity(width as usize * rows as usize);
    for row in 0..rows {
        output.push_str(&format!("\x1b[{};1H\x1b[2K", row + 1));

        let is_edge = row == 0 || row + 1 == rows;
        if is_edge && intensity.is_some() {
            output.push_str(GLOW);
            output.extend(std::iter::repeat('░').take(width as usize));
            output.push_str(RESET);
            continue;
        }

        let Some(line) = row
            .checked_sub(first_line)
            .and_then(|i| lines.get(i as usize))
        else {
            continue;
        };
        if line.is_empty() {
            continue;
        }
        let col = centered_col(width, line).saturating_add(offset);
        output.push_str(&format!("\x1b[{};{}H", row + 1, col + 1));
        let color = match (row - first_line, intensity) {
            (0, _) => "\x1b[1;97m",
            (_, Some(intensity)) => intensity_color(intensity),
            (_, None) => DIM,
        };
        output.push_str(color);
        output.push_str(line);
        output.push_str(RESET);
    }
    write!(stdout, "{}", output)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::LoopState;
    use crate::timeline::VibrationSegment;

    fn snapshot(active: Option<VibrationSegment>, is_playing: bool) -> PlayerSnapshot {
        PlayerSnapshot {
            is_playing,
            current_time: 0.0,
            duration: Some(40.0),
            progress_ratio: 0.0,
            is_muted: false,
            active_segment: active,
            haptics_enabled: true,
            has_actuator_capability: false,
            loop_state: LoopState::Stopped,
        }
    }

    #[test]
    fn no_rumble_without_segment() {
        assert!((0..8).all(|f| rumble_offset(None, f) == 0));
    }

    #[test]
    fn high_rumbles_every_frame() {
        let offsets: Vec<u16> = (0..4).map(|f| rumble_offset(Some(Intensity::High), f)).collect();
        for pair in offsets.windows(2) {
            assert_ne!(pair[0], pair[1]);
        }
    }

    #[test]
    fn lower_intensities_rumble_every_other_frame() {
        let offsets: Vec<u16> = (0..4).map(|f| rumble_offset(Some(Intensity::Low), f)).collect();
        assert_eq!(offsets, vec![0, 0, 1, 1]);
        assert_eq!(rumble_offset(Some(Intensity::Medium), 2), 1);
    }

    #[test]
    fn pattern_summaries() {
        assert_eq!(pattern_summary(&VibrationPattern::Sustained(1500)), "1500 ms");
        assert_eq!(
            pattern_summary(&VibrationPattern::Sequence(vec![1500, 150, 1500, 150, 1500])),
            "3 pulses / 4800 ms"
        );
    }

    #[test]
    fn panel_shows_active_segment() {
        let seg = VibrationSegment::new("a", 6.0, 6.1, 1200, "Activation", Intensity::Low);
        let lines = panel_lines(&snapshot(Some(seg), true));
        assert_eq!(lines[0], TITLE);
        assert_eq!(lines[2], "◉ Activation");
        assert_eq!(lines[3], "LOW · 1200 ms");
    }

    #[test]
    fn panel_shows_paused_prompt() {
        let lines = panel_lines(&snapshot(None, false));
        assert!(lines.iter().any(|l| l.contains("PAUSED")));
    }

    #[test]
    fn centering() {
        assert_eq!(centered_col(20, "abcd"), 8);
        assert_eq!(centered_col(2, "abcd"), 0);
    }
}
