//! Terminal shell for the sync engine.
//!
//! Hosts a `SonicPlayer` in the terminal: a simulated video clock, a frame
//! queue drained once per redraw, and crossterm for drawing and input.
//!
//! - `state`: presentation state (geometry, overlays, control visibility)
//! - `media`: wall-clock driven `MediaElement`
//! - `vibrator`: log/bell vibration hosts
//! - `input`: keyboard and mouse handling
//! - `render`: video panel, progress bar, status bar, help
//! - `window`: fullscreen requests

pub mod input;
pub mod media;
pub mod render;
pub mod state;
pub mod vibrator;
pub mod window;

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, terminal,
};

use crate::cli::HapticsHost;
use crate::player::{ActuatorDriver, FrameQueue, PlayerOptions, SonicPlayer};
use crate::timeline::SegmentTable;

pub use media::SimulatedVideo;
pub use state::{InputResult, ShellState};

/// The player as hosted by the terminal shell.
pub type ShellPlayer = SonicPlayer<SimulatedVideo, FrameQueue>;

/// Everything `run` needs besides the timeline.
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub media_duration: f64,
    pub frame_rate: u32,
    pub controls_hide_after: Option<Duration>,
    pub player: PlayerOptions,
    pub haptics: HapticsHost,
    pub autoplay: bool,
}

/// Puts the terminal into player mode and restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut io::Stdout) -> Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(
            io::stdout(),
            DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Build the player the shell drives.
pub fn build_player(table: SegmentTable, options: &ShellOptions) -> ShellPlayer {
    let actuator = ActuatorDriver::new(vibrator::vibrator_for(options.haptics));
    ShellPlayer::new(
        SimulatedVideo::new(options.media_duration),
        FrameQueue::new(),
        table,
        actuator,
        options.player,
    )
}

/// Run the shell until the user quits.
#[cfg(not(tarpaulin_include))]
pub fn run(table: SegmentTable, options: ShellOptions) -> Result<()> {
    let mut stdout = io::stdout();
    let (cols, rows) = terminal::size()?;
    let frame_interval = Duration::from_secs_f64(1.0 / options.frame_rate.max(1) as f64);

    let mut player = build_player(table, &options);
    let mut state = ShellState::new(cols, rows, options.controls_hide_after);

    let guard = TerminalGuard::enter(&mut stdout)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    // First poll delivers metadata
    player.pump_media_events();
    if options.autoplay {
        player.play();
    }
    tracing::info!(
        duration = options.media_duration,
        segments = player.table().len(),
        haptics = ?options.haptics,
        "player started"
    );

    let result = run_loop(&mut stdout, &mut state, &mut player, frame_interval);

    player.teardown();
    drop(guard);
    tracing::info!("player closed");
    result
}

#[cfg(not(tarpaulin_include))]
fn run_loop(
    stdout: &mut io::Stdout,
    state: &mut ShellState,
    player: &mut ShellPlayer,
    frame_interval: Duration,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        for transition in player.pump_media_events() {
            state.on_transition(&transition);
        }
        for handle in player.scheduler_mut().take_due() {
            if let Some(transition) = player.on_frame(handle) {
                tracing::debug!(?transition, "segment transition");
                state.on_transition(&transition);
            }
        }

        let snapshot = player.snapshot();
        state.update_controls(Instant::now(), snapshot.is_playing);
        if snapshot.is_playing || state.needs_render {
            render::render_frame(stdout, state, &snapshot, player.table())?;
            state.needs_render = false;
        }
        state.advance_frame();

        let mut timeout = frame_interval.saturating_sub(frame_start.elapsed());
        while event::poll(timeout)? {
            let event = event::read()?;
            if input::handle_event(event, state, player, stdout) == InputResult::Quit {
                stdout.flush()?;
                return Ok(());
            }
            timeout = Duration::ZERO;
        }
    }
}
