//! Shared fixtures for integration tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use tempfile::TempDir;

use sonic_sync::error::{ActuatorError, PlaybackError};
use sonic_sync::player::{
    ActuatorDriver, FrameQueue, MediaElement, MediaEvent, PlayerOptions, SegmentTransition,
    SonicPlayer, Vibrator,
};
use sonic_sync::timeline::{BoundaryRule, Intensity, SegmentTable, VibrationSegment};

/// Video whose position only moves when a test sets it.
#[derive(Debug)]
pub struct ScriptedVideo {
    pub time: f64,
    pub duration: f64,
    pub muted: bool,
    pub refuse_play: bool,
    pub events: VecDeque<MediaEvent>,
}

impl ScriptedVideo {
    pub fn new(duration: f64) -> Self {
        Self {
            time: 0.0,
            duration,
            muted: false,
            refuse_play: false,
            events: VecDeque::new(),
        }
    }
}

impl MediaElement for ScriptedVideo {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if self.refuse_play {
            return Err(PlaybackError::Rejected {
                reason: "autoplay blocked".to_string(),
            });
        }
        Ok(())
    }

    fn pause(&mut self) {}

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }
}

/// Shared log of every request a [`RecordingVibrator`] received.
pub type CallLog = Rc<RefCell<Vec<Vec<u32>>>>;

/// Vibrator that records requests instead of vibrating.
pub struct RecordingVibrator {
    calls: CallLog,
}

impl Vibrator for RecordingVibrator {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn vibrate(&mut self, pattern_ms: &[u32]) -> Result<(), ActuatorError> {
        self.calls.borrow_mut().push(pattern_ms.to_vec());
        Ok(())
    }
}

pub type TestPlayer = SonicPlayer<ScriptedVideo, FrameQueue>;

/// Two-segment timeline used throughout the scenarios.
pub fn two_segment_table() -> SegmentTable {
    SegmentTable::new(
        vec![
            VibrationSegment::new("a", 6.0, 6.1, 1200, "Activation", Intensity::Low),
            VibrationSegment::new("b", 10.5, 12.0, 1500, "Intense Clean", Intensity::High),
        ],
        BoundaryRule::Inclusive,
    )
    .expect("valid table")
}

/// Player over `table` with a recording vibrator.
pub fn recording_player(table: SegmentTable, options: PlayerOptions) -> (TestPlayer, CallLog) {
    let calls = CallLog::default();
    let vibrator = RecordingVibrator {
        calls: Rc::clone(&calls),
    };
    let player = SonicPlayer::new(
        ScriptedVideo::new(40.0),
        FrameQueue::new(),
        table,
        ActuatorDriver::new(Some(Box::new(vibrator))),
        options,
    );
    (player, calls)
}

/// Move the video to `time` and deliver every due frame.
pub fn tick_at(player: &mut TestPlayer, time: f64) -> Vec<SegmentTransition> {
    player.clock_mut().media_mut().time = time;
    let mut transitions = Vec::new();
    for handle in player.scheduler_mut().take_due() {
        if let Some(t) = player.on_frame(handle) {
            transitions.push(t);
        }
    }
    transitions
}

/// Write `content` to a file inside a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (dir, path)
}
