//! Configuration for Sonic Sync
//!
//! Loaded from `<config_dir>/sonic-sync/config.toml`. Every field has a
//! default, so a missing file or a partial file both load cleanly.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::player::PlayerOptions;
use crate::timeline::{
    default_segments, BoundaryRule, SegmentTable, VibrationSegment, DEFAULT_MEDIA_DURATION,
};

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub timeline: TimelineConfig,
}

/// Playback and presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Length of the simulated video in seconds
    pub media_duration: f64,
    /// Restart from the beginning when the video ends
    pub loop_playback: bool,
    /// Whether haptics start enabled
    pub haptics_enabled: bool,
    /// Target frames per second for the render loop
    pub frame_rate: u32,
    /// Hide the control bar after this long without input (0 = never)
    pub controls_hide_ms: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            media_duration: DEFAULT_MEDIA_DURATION,
            loop_playback: true,
            haptics_enabled: true,
            frame_rate: 60,
            controls_hide_ms: 2500,
        }
    }
}

impl PlayerConfig {
    /// Options for a player instance.
    pub fn player_options(&self) -> PlayerOptions {
        PlayerOptions {
            haptics_enabled: self.haptics_enabled,
            loop_playback: self.loop_playback,
        }
    }

    /// Frame rate clamped to something a terminal can keep up with.
    pub fn effective_frame_rate(&self) -> u32 {
        self.frame_rate.clamp(1, 240)
    }
}

/// Timeline definition.
///
/// The same schema is used for standalone timeline files passed with
/// `--timeline` (top-level `boundary` and `[[segments]]`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineConfig {
    /// Containment rule for segment ends
    pub boundary: BoundaryRule,
    /// Segments in priority order; empty means the built-in timeline
    pub segments: Vec<VibrationSegment>,
}

impl TimelineConfig {
    /// Load a standalone timeline file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = read(path)?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Whether the built-in timeline will be used.
    pub fn uses_defaults(&self) -> bool {
        self.segments.is_empty()
    }

    /// Build the validated segment table.
    pub fn build_table(&self) -> Result<SegmentTable, ConfigError> {
        let segments = if self.segments.is_empty() {
            default_segments()
        } else {
            self.segments.clone()
        };
        Ok(SegmentTable::new(segments, self.boundary)?)
    }
}

impl Config {
    /// Load configuration from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Self::default());
        }
        let content = read(path)?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    /// Save configuration as pretty TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Path of the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("sonic-sync").join("config.toml"))
    }

    /// Default log file location.
    pub fn log_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::cache_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("sonic-sync").join("sonic.log"))
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}
