//! Command-line interface definitions.
//!
//! Kept in the library so the argument model can be tested without
//! spawning the binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Long version string: crate version plus build metadata.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("SONIC_BUILD_DATE"),
    ")"
);

/// Long version string: crate version plus build date.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("SONIC_BUILD_DATE"),
    ")"
);

/// Sonic Sync - product video player with timeline-synced haptics.
#[derive(Debug, Parser)]
#[command(name = "sonic", version, long_version = LONG_VERSION, about)]
pub struct Cli {
    /// Write logs to this file instead of the default cache location
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play the video timeline in the terminal with synced haptics
    Play(PlayArgs),

    /// Print the resolved vibration timeline
    Timeline(TimelineArgs),

    /// Inspect or create the configuration file
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Load segments from a standalone timeline file
    #[arg(long, value_name = "FILE")]
    pub timeline: Option<PathBuf>,

    /// Override the simulated video length in seconds
    #[arg(long, value_name = "SECS")]
    pub duration: Option<f64>,

    /// Start with haptics disabled
    #[arg(long)]
    pub no_haptics: bool,

    /// Vibration host to drive
    #[arg(long, value_enum, default_value_t = HapticsHost::Log)]
    pub haptics: HapticsHost,

    /// Stop at the end instead of looping
    #[arg(long)]
    pub no_loop: bool,

    /// Open paused instead of starting playback immediately
    #[arg(long)]
    pub paused: bool,
}

#[derive(Debug, Args)]
pub struct TimelineArgs {
    /// Load segments from a standalone timeline file
    #[arg(long, value_name = "FILE")]
    pub timeline: Option<PathBuf>,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a config file with defaults (and the built-in timeline)
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Which vibration capability the terminal host exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HapticsHost {
    /// Record each pattern in the log
    Log,
    /// Ring the terminal bell on each entry
    Bell,
    /// No vibration capability (visual feedback only)
    None,
}
