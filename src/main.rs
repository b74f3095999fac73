//! `sonic` binary entry point.

mod commands;

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sonic_sync::cli::{Cli, Commands, ConfigCommands};
use sonic_sync::Config;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SONIC_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        // The player owns the terminal, so its logs go to a file
        Commands::Play(_) => init_file_logging(&log_file(&cli)?)?,
        _ => init_stderr_logging(),
    }

    let config_path = config_file(&cli)?;

    match cli.command {
        Commands::Play(args) => {
            let config = Config::load_from(&config_path)?;
            commands::play::handle(args, &config)
        }
        Commands::Timeline(args) => {
            let config = Config::load_from(&config_path)?;
            commands::timeline::handle(args, &config)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config_path),
            ConfigCommands::Path => commands::config::handle_path(&config_path),
            ConfigCommands::Init { force } => commands::config::handle_init(&config_path, force),
        },
    }
}

fn config_file(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::config_path()?),
    }
}

fn log_file(cli: &Cli) -> Result<PathBuf> {
    match &cli.log_file {
        Some(path) => Ok(path.clone()),
        None => Ok(Config::log_path()?),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

fn init_file_logging(log_path: &Path) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("open log file {}", log_path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .try_init();
}
