//! Vibration segment definitions.
//!
//! A segment pairs a time range of the video with a vibration pattern and
//! display metadata. Segments are authored as configuration and never
//! change once a table has been built from them.

use serde::{Deserialize, Serialize};

use super::BoundaryRule;

/// Display intensity of a segment.
///
/// Drives presentation styling only; the actuator receives the same
/// pattern regardless of intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    #[serde(alias = "LOW")]
    Low,
    #[default]
    #[serde(alias = "MEDIUM")]
    Medium,
    #[serde(alias = "HIGH")]
    High,
}

impl Intensity {
    /// Short label for status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MED",
            Self::High => "HIGH",
        }
    }
}

/// Vibration pattern in milliseconds.
///
/// Deserializes from either a bare integer (`pattern = 1200`) or an
/// alternating on/off list (`pattern = [1200, 100, 1200]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VibrationPattern {
    /// One continuous pulse
    Sustained(u32),
    /// Alternating on/off durations, starting with "on"
    Sequence(Vec<u32>),
}

impl VibrationPattern {
    /// Raw durations as handed to the host vibration call.
    pub fn as_millis(&self) -> &[u32] {
        match self {
            Self::Sustained(ms) => std::slice::from_ref(ms),
            Self::Sequence(steps) => steps,
        }
    }

    /// Whether at least one step would produce output.
    pub fn has_output(&self) -> bool {
        self.as_millis().iter().any(|&ms| ms > 0)
    }

    /// Total length of the pattern (on and off steps) in milliseconds.
    pub fn total_millis(&self) -> u64 {
        self.as_millis().iter().map(|&ms| ms as u64).sum()
    }

    /// Whether this is a rhythmic (multi-step) pattern.
    pub fn is_rhythmic(&self) -> bool {
        matches!(self, Self::Sequence(steps) if steps.len() > 1)
    }
}

impl From<u32> for VibrationPattern {
    fn from(ms: u32) -> Self {
        Self::Sustained(ms)
    }
}

impl From<Vec<u32>> for VibrationPattern {
    fn from(steps: Vec<u32>) -> Self {
        Self::Sequence(steps)
    }
}

/// One time-ranged haptic cue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VibrationSegment {
    /// Stable unique identifier, used for change detection
    pub id: String,
    /// Start of the range in seconds
    pub start: f64,
    /// End of the range in seconds
    pub end: f64,
    /// Pattern sent to the actuator on entry
    pub pattern: VibrationPattern,
    /// Human-readable mode name
    pub name: String,
    /// Presentation intensity
    #[serde(default)]
    pub intensity: Intensity,
}

impl VibrationSegment {
    pub fn new(
        id: impl Into<String>,
        start: f64,
        end: f64,
        pattern: impl Into<VibrationPattern>,
        name: impl Into<String>,
        intensity: Intensity,
    ) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            pattern: pattern.into(),
            name: name.into(),
            intensity,
        }
    }

    /// Whether `time` falls inside this segment under `rule`.
    ///
    /// Non-finite times never match.
    pub fn contains(&self, time: f64, rule: BoundaryRule) -> bool {
        if !time.is_finite() || time < self.start {
            return false;
        }
        match rule {
            BoundaryRule::Inclusive => time <= self.end,
            BoundaryRule::HalfOpen => time < self.end,
        }
    }

    /// Length of the range in seconds.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Whether the two ranges share any point.
    pub fn overlaps(&self, other: &VibrationSegment) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
