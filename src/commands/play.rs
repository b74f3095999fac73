//! Play command handler

use std::time::Duration;

use anyhow::{bail, Result};

use sonic_sync::cli::PlayArgs;
use sonic_sync::shell::{self, ShellOptions};
use sonic_sync::Config;

use super::resolve_table;

/// Open the terminal player.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs, config: &Config) -> Result<()> {
    let table = resolve_table(args.timeline.as_deref(), config)?;

    let media_duration = args.duration.unwrap_or(config.player.media_duration);
    if !media_duration.is_finite() || media_duration <= 0.0 {
        bail!("Video length must be a positive number of seconds, got {media_duration}");
    }
    if table.last_end() > media_duration {
        tracing::warn!(
            media_duration,
            last_end = table.last_end(),
            "timeline runs past the end of the video"
        );
    }

    let mut player = config.player.player_options();
    if args.no_haptics {
        player.haptics_enabled = false;
    }
    if args.no_loop {
        player.loop_playback = false;
    }

    let controls_hide_after = match config.player.controls_hide_ms {
        0 => None,
        ms => Some(Duration::from_millis(ms)),
    };

    shell::run(
        table,
        ShellOptions {
            media_duration,
            frame_rate: config.player.effective_frame_rate(),
            controls_hide_after,
            player,
            haptics: args.haptics,
            autoplay: !args.paused,
        },
    )
}
