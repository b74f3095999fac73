//! Player state types
//!
//! Contains the derived playback state, the loop state machine enum, and
//! the immutable snapshot handed to the presentation layer after each tick.

use crate::timeline::VibrationSegment;

/// Sync loop state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    /// No ticks scheduled; actuator output cancelled
    #[default]
    Stopped,
    /// One tick per host frame
    Running,
}

/// Why the sync loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// User paused or host confirmed a pause
    Paused,
    /// Playback reached the end of the media
    Ended,
    /// Host refused to start playback
    PlayRejected,
    /// Player is being torn down
    Teardown,
}

/// Edge produced when the resolved segment changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentTransition {
    /// Entered `id`, coming from another segment or from none
    Entered { id: String, previous: Option<String> },
    /// Left `id` with no segment covering the new position
    Exited { id: String },
}

impl SegmentTransition {
    /// Id of the segment active after this transition.
    pub fn active_id(&self) -> Option<&str> {
        match self {
            Self::Entered { id, .. } => Some(id),
            Self::Exited { .. } => None,
        }
    }
}

/// Derived playback position. Owned by the sync loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackPosition {
    /// Last observed decode position in seconds
    pub current_time: f64,
    /// Media duration, once known
    pub duration: Option<f64>,
    /// `current_time / duration` clamped to `[0, 1]`; 0 while duration is unknown
    pub progress_ratio: f64,
}

impl PlaybackPosition {
    /// Record a new observation.
    pub fn observe(&mut self, current_time: f64, duration: Option<f64>) {
        self.current_time = if current_time.is_finite() {
            current_time.max(0.0)
        } else {
            0.0
        };
        if duration.is_some() {
            self.duration = duration;
        }
        self.progress_ratio = match self.duration {
            Some(d) => (self.current_time / d).clamp(0.0, 1.0),
            None => 0.0,
        };
    }
}

/// Read-only view of the player for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    /// Intended playback state (optimistic)
    pub is_playing: bool,
    pub current_time: f64,
    pub duration: Option<f64>,
    pub progress_ratio: f64,
    pub is_muted: bool,
    /// Segment covering the current position, if any
    pub active_segment: Option<VibrationSegment>,
    pub haptics_enabled: bool,
    /// Whether the host can vibrate (drives the haptics toggle)
    pub has_actuator_capability: bool,
    pub loop_state: LoopState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_computes_progress() {
        let mut pos = PlaybackPosition::default();
        pos.observe(10.0, Some(40.0));
        assert_eq!(pos.current_time, 10.0);
        assert_eq!(pos.progress_ratio, 0.25);
    }

    #[test]
    fn observe_without_duration_reports_zero_progress() {
        let mut pos = PlaybackPosition::default();
        pos.observe(10.0, None);
        assert_eq!(pos.duration, None);
        assert_eq!(pos.progress_ratio, 0.0);
    }

    #[test]
    fn observe_keeps_last_known_duration() {
        let mut pos = PlaybackPosition::default();
        pos.observe(1.0, Some(20.0));
        pos.observe(5.0, None);
        assert_eq!(pos.duration, Some(20.0));
        assert_eq!(pos.progress_ratio, 0.25);
    }

    #[test]
    fn observe_clamps_progress_and_sanitizes_time() {
        let mut pos = PlaybackPosition::default();
        pos.observe(50.0, Some(40.0));
        assert_eq!(pos.progress_ratio, 1.0);

        pos.observe(f64::NAN, Some(40.0));
        assert_eq!(pos.current_time, 0.0);
        assert_eq!(pos.progress_ratio, 0.0);
    }

    #[test]
    fn transition_active_id() {
        let entered = SegmentTransition::Entered {
            id: "a".to_string(),
            previous: None,
        };
        let exited = SegmentTransition::Exited { id: "a".to_string() };
        assert_eq!(entered.active_id(), Some("a"));
        assert_eq!(exited.active_id(), None);
    }

    #[test]
    fn loop_state_defaults_to_stopped() {
        assert_eq!(LoopState::default(), LoopState::Stopped);
    }
}
