//! Sonic Sync - keeps a vibration actuator in step with a product video.
//!
//! The crate is split into a host-agnostic core and a terminal shell:
//!
//! - `timeline`: vibration segments and the lookup table
//! - `player`: the sync engine (`SonicPlayer`, `SyncLoop`) and host traits
//! - `config`: TOML configuration and timeline files
//! - `shell`: crossterm host with a simulated video and vibration hosts
//! - `cli`: command-line definitions for the `sonic` binary

pub mod cli;
pub mod config;
pub mod error;
pub mod player;
pub mod shell;
pub mod timeline;

pub use config::Config;
