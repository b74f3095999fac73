//! Haptic sync core
//!
//! Keeps a vibration actuator in lock-step with a video timeline:
//!
//! - `clock`: `MediaElement` host trait and the `PlaybackClock` wrapper
//! - `frame`: per-frame tick scheduling (`FrameScheduler`, `FrameQueue`)
//! - `actuator`: `Vibrator` host trait and the no-op-safe `ActuatorDriver`
//! - `sync`: the `SyncLoop` state machine (segment resolution + edges)
//! - `state`: derived playback state, transitions, and render snapshots
//! - `controller`: `SonicPlayer`, the surface the presentation layer uses
//!
//! # Usage
//!
//! ```no_run
//! use sonic_sync::player::{ActuatorDriver, FrameQueue, PlayerOptions, SonicPlayer};
//! # use sonic_sync::player::{MediaElement, MediaEvent};
//! # use sonic_sync::error::PlaybackError;
//! # struct Video;
//! # impl MediaElement for Video {
//! #     fn play(&mut self) -> Result<(), PlaybackError> { Ok(()) }
//! #     fn pause(&mut self) {}
//! #     fn current_time(&self) -> f64 { 0.0 }
//! #     fn set_current_time(&mut self, _: f64) {}
//! #     fn duration(&self) -> f64 { 40.0 }
//! #     fn is_muted(&self) -> bool { false }
//! #     fn set_muted(&mut self, _: bool) {}
//! #     fn poll_event(&mut self) -> Option<MediaEvent> { None }
//! # }
//! use sonic_sync::timeline::default_table;
//!
//! let mut player = SonicPlayer::new(
//!     Video,
//!     FrameQueue::new(),
//!     default_table(),
//!     ActuatorDriver::none(),
//!     PlayerOptions::default(),
//! );
//! player.play();
//! loop {
//!     player.pump_media_events();
//!     for frame in player.scheduler_mut().take_due() {
//!         player.on_frame(frame);
//!     }
//!     let snapshot = player.snapshot();
//!     // render snapshot...
//! #   let _ = snapshot;
//! #   break;
//! }
//! ```

pub mod actuator;
pub mod clock;
mod controller;
pub mod frame;
pub mod state;
pub mod sync;

pub use actuator::{ActuatorDriver, Vibrator};
pub use clock::{known_duration, MediaElement, MediaEvent, PlaybackClock};
pub use controller::{PlayerOptions, SonicPlayer};
pub use frame::{FrameHandle, FrameQueue, FrameScheduler};
pub use state::{
    LoopState, PlaybackPosition, PlayerSnapshot, SegmentTransition, StopReason,
};
pub use sync::{SyncLoop, TickOutcome};
