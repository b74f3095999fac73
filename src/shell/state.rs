//! Shell state management
//!
//! Contains the `ShellState` struct that holds all presentation state
//! (terminal geometry, overlays, control-bar visibility), plus the
//! `InputResult` signal returned by input handlers.

use std::time::{Duration, Instant};

use crate::player::SegmentTransition;

/// Result of processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Exit the shell
    Quit,
}

/// Presentation state for the terminal shell.
///
/// Player state lives in the core; this only tracks how it is shown.
#[derive(Debug)]
pub struct ShellState {
    // === Terminal geometry ===
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,

    // === Overlays ===
    /// Whether help overlay is visible
    pub show_help: bool,
    /// Whether the control bar (progress + status) is shown
    pub controls_visible: bool,
    /// Hide controls after this long without input while playing
    pub controls_hide_after: Option<Duration>,
    /// Last keyboard/mouse activity
    pub last_input: Instant,

    // === Animation ===
    /// Frames rendered so far (drives the rumble jitter)
    pub frame: u64,
    /// Frame on which the current segment was entered
    pub rumble_since: Option<u64>,

    // === Rendering flags ===
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl ShellState {
    /// Number of chrome lines under the video panel (separator + progress + status)
    pub const STATUS_LINES: u16 = 3;

    pub fn new(term_cols: u16, term_rows: u16, controls_hide_after: Option<Duration>) -> Self {
        Self {
            term_cols,
            term_rows,
            show_help: false,
            controls_visible: true,
            controls_hide_after,
            last_input: Instant::now(),
            frame: 0,
            rumble_since: None,
            needs_render: true,
        }
    }

    /// Rows available to the video panel.
    pub fn view_rows(&self) -> u16 {
        self.term_rows.saturating_sub(Self::STATUS_LINES)
    }

    pub fn separator_row(&self) -> u16 {
        self.term_rows.saturating_sub(3)
    }

    pub fn progress_row(&self) -> u16 {
        self.term_rows.saturating_sub(2)
    }

    pub fn status_row(&self) -> u16 {
        self.term_rows.saturating_sub(1)
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.term_cols = cols;
        self.term_rows = rows;
        self.needs_render = true;
    }

    /// Register user activity; brings the controls back.
    pub fn touch(&mut self, now: Instant) {
        self.last_input = now;
        if !self.controls_visible {
            self.controls_visible = true;
        }
        self.needs_render = true;
    }

    /// Hide controls after the idle timeout while playing; always show
    /// them while paused.
    pub fn update_controls(&mut self, now: Instant, is_playing: bool) {
        let visible = match (is_playing, self.controls_hide_after) {
            (false, _) | (true, None) => true,
            (true, Some(after)) => now.saturating_duration_since(self.last_input) < after,
        };
        if visible != self.controls_visible {
            self.controls_visible = visible;
            self.needs_render = true;
        }
    }

    /// Toggle help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// React to a segment edge from the core.
    pub fn on_transition(&mut self, transition: &SegmentTransition) {
        self.rumble_since = transition.active_id().map(|_| self.frame);
        self.needs_render = true;
    }

    /// Frames since the active segment was entered.
    pub fn rumble_frame(&self) -> u64 {
        self.rumble_since
            .map(|since| self.frame.saturating_sub(since))
            .unwrap_or(0)
    }

    pub fn advance_frame(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }
}
