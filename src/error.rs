//! Error types shared across the crate.
//!
//! None of these are fatal to a running player: the sync core degrades to a
//! reduced-feature state and logs. They surface as hard errors only when
//! loading configuration or a timeline from disk.

use std::path::PathBuf;

/// Errors raised while building a segment table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TimelineError {
    #[error("Segment at index {index} has an empty id")]
    EmptyId { index: usize },

    #[error("Duplicate segment id '{id}'")]
    DuplicateId { id: String },

    #[error("Segment '{id}' has an invalid range {start}..{end} (need 0 <= start < end)")]
    InvalidRange { id: String, start: f64, end: f64 },

    #[error("Segment '{id}' has a pattern with no positive duration")]
    EmptyPattern { id: String },
}

/// Errors reported by the host media primitive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Playback request rejected: {reason}")]
    Rejected { reason: String },

    #[error("Media element is not available")]
    Unavailable,
}

/// Errors reported by a host vibration capability.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActuatorError {
    #[error("Vibration request refused by host: {0}")]
    Refused(String),

    #[error("Vibration output failed: {0}")]
    Io(String),
}

/// Errors that can occur while loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid timeline: {0}")]
    Timeline(#[from] TimelineError),
}
