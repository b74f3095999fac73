//! Built-in cleaning-mode timeline for the bundled product video.

use super::{BoundaryRule, Intensity, SegmentTable, VibrationPattern, VibrationSegment};

/// Length of the bundled product video in seconds.
pub const DEFAULT_MEDIA_DURATION: f64 = 40.0;

/// Segments for the bundled video, in playback order.
pub fn default_segments() -> Vec<VibrationSegment> {
    vec![
        VibrationSegment::new("activation", 6.0, 6.1, 1200, "Activation", Intensity::Low),
        VibrationSegment::new(
            "intense-clean",
            10.5,
            12.0,
            1500,
            "Intense Clean",
            Intensity::High,
        ),
        VibrationSegment::new(
            "pulse-mode",
            15.5,
            17.0,
            VibrationPattern::Sequence(vec![1200, 100, 1200, 100, 1200, 100, 1200, 100, 1200]),
            "Pulse Mode",
            Intensity::Medium,
        ),
        VibrationSegment::new(
            "whitening-pulse",
            21.0,
            22.2,
            VibrationPattern::Sequence(vec![1500, 150, 1500, 150, 1500, 150]),
            "Whitening Pulse",
            Intensity::High,
        ),
        VibrationSegment::new("deep-scrub", 28.0, 30.0, 2000, "Deep Scrub", Intensity::High),
        VibrationSegment::new("closing-burst", 38.0, 38.1, 200, "Closing Burst", Intensity::Low),
    ]
}

/// The default segment table with inclusive boundaries.
pub fn default_table() -> SegmentTable {
    SegmentTable::new(default_segments(), BoundaryRule::Inclusive)
        .expect("Default timeline should be valid")
}
