//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use sonic_sync::timeline::default_segments;
use sonic_sync::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: &Path) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{}", toml_str);
    Ok(())
}

/// Print the config file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: &Path) -> Result<()> {
    println!("{}", config_path.display());
    Ok(())
}

/// Write a config file with defaults and the built-in timeline spelled out.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            config_path.display()
        );
    }

    let mut config = Config::default();
    config.timeline.segments = default_segments();
    config.save_to(config_path)?;
    println!("Wrote {}", config_path.display());
    Ok(())
}
