//! Subcommand handlers for the `sonic` binary.

pub mod config;
pub mod play;
pub mod timeline;

use std::path::Path;

use anyhow::Result;

use sonic_sync::config::TimelineConfig;
use sonic_sync::timeline::SegmentTable;
use sonic_sync::Config;

/// Resolve the timeline: a standalone file wins over the config's section.
pub fn resolve_table(timeline_file: Option<&Path>, config: &Config) -> Result<SegmentTable> {
    let timeline = match timeline_file {
        Some(path) => TimelineConfig::load_file(path)?,
        None => config.timeline.clone(),
    };
    Ok(timeline.build_table()?)
}
