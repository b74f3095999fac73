//! `SonicPlayer`: the surface the presentation layer talks to.
//!
//! Pairs a playback clock with a sync loop, tracks the intended play state
//! optimistically and reconciles it with host notifications.

use crate::player::actuator::ActuatorDriver;
use crate::player::clock::{MediaElement, MediaEvent, PlaybackClock};
use crate::player::frame::{FrameHandle, FrameScheduler};
use crate::player::state::{PlayerSnapshot, SegmentTransition, StopReason};
use crate::player::sync::{SyncLoop, TickOutcome};
use crate::timeline::SegmentTable;

/// Startup options for a player instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerOptions {
    /// Whether actuator output starts enabled
    pub haptics_enabled: bool,
    /// Restart from the beginning when playback ends
    pub loop_playback: bool,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            haptics_enabled: true,
            loop_playback: false,
        }
    }
}

/// One embedded player: media clock, frame scheduler and sync loop.
///
/// Lifecycle is `new -> play/pause/seek... -> teardown`. Dropping the
/// player tears it down, so actuator output never outlives it.
pub struct SonicPlayer<M: MediaElement, S: FrameScheduler> {
    clock: PlaybackClock<M>,
    scheduler: S,
    sync: SyncLoop,
    is_playing: bool,
    loop_playback: bool,
    torn_down: bool,
}

impl<M: MediaElement, S: FrameScheduler> SonicPlayer<M, S> {
    pub fn new(
        media: M,
        scheduler: S,
        table: SegmentTable,
        actuator: ActuatorDriver,
        options: PlayerOptions,
    ) -> Self {
        Self {
            clock: PlaybackClock::new(media),
            scheduler,
            sync: SyncLoop::new(table, actuator, options.haptics_enabled),
            is_playing: false,
            loop_playback: options.loop_playback,
            torn_down: false,
        }
    }

    /// Play if paused, pause if playing.
    pub fn toggle_play_pause(&mut self) -> Option<SegmentTransition> {
        if self.is_playing {
            self.pause()
        } else {
            self.play();
            None
        }
    }

    /// Request playback and start the sync loop.
    ///
    /// A refusal reverts the optimistic state and is logged, never raised.
    pub fn play(&mut self) {
        if self.is_playing || self.torn_down {
            return;
        }
        self.is_playing = true;
        match self.clock.play() {
            Ok(()) => self.sync.start(&mut self.scheduler),
            Err(e) => {
                tracing::warn!(error = %e, "play request refused; staying paused");
                self.is_playing = false;
            }
        }
    }

    /// Request a pause and stop the sync loop.
    pub fn pause(&mut self) -> Option<SegmentTransition> {
        if !self.is_playing {
            return None;
        }
        self.is_playing = false;
        self.clock.pause();
        self.sync.stop(&mut self.scheduler, StopReason::Paused)
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.clock.is_muted();
        self.clock.set_muted(muted);
    }

    /// Seek to `fraction` of the media.
    ///
    /// Ignored until the duration is known. The displayed position updates
    /// at once; segment resolution happens on the next tick.
    pub fn seek(&mut self, fraction: f64) -> bool {
        match self.clock.seek(fraction) {
            Some(time) => {
                self.sync.observe_position(time, self.clock.duration());
                tracing::debug!(fraction, time, "seek");
                true
            }
            None => {
                tracing::debug!(fraction, "seek ignored; duration unknown");
                false
            }
        }
    }

    /// Seek by `delta` seconds relative to the current position.
    pub fn seek_by(&mut self, delta: f64) -> bool {
        if self.clock.duration().is_none() {
            return false;
        }
        let time = self.clock.seek_to(self.clock.current_time() + delta);
        self.sync.observe_position(time, self.clock.duration());
        true
    }

    pub fn toggle_haptics(&mut self) {
        let enabled = !self.sync.haptics_enabled();
        self.sync.set_haptics_enabled(enabled);
    }

    pub fn set_haptics_enabled(&mut self, enabled: bool) {
        self.sync.set_haptics_enabled(enabled);
    }

    /// Deliver a host frame to the sync loop.
    pub fn on_frame(&mut self, handle: FrameHandle) -> Option<SegmentTransition> {
        if self.torn_down {
            return None;
        }
        match self.sync.tick(handle, &self.clock, &mut self.scheduler) {
            TickOutcome::Ticked(transition) => transition,
            TickOutcome::Stale => None,
        }
    }

    /// Apply one host notification.
    pub fn handle_media_event(&mut self, event: MediaEvent) -> Option<SegmentTransition> {
        if self.torn_down {
            return None;
        }
        match event {
            MediaEvent::MetadataLoaded { duration } => {
                tracing::debug!(duration, "metadata loaded");
                let now = self.clock.current_time();
                self.sync.observe_position(now, self.clock.duration());
                None
            }
            MediaEvent::Playing => {
                if !self.is_playing {
                    // Host started on its own (e.g. autoplay)
                    self.is_playing = true;
                    self.sync.start(&mut self.scheduler);
                }
                None
            }
            MediaEvent::Paused => {
                if !self.is_playing {
                    return None;
                }
                self.is_playing = false;
                self.sync.stop(&mut self.scheduler, StopReason::Paused)
            }
            MediaEvent::PlayRejected { reason } => {
                tracing::warn!(%reason, "host rejected playback");
                self.is_playing = false;
                self.sync.stop(&mut self.scheduler, StopReason::PlayRejected)
            }
            MediaEvent::Ended => {
                self.is_playing = false;
                let exited = self.sync.stop(&mut self.scheduler, StopReason::Ended);
                if self.loop_playback {
                    self.clock.seek_to(0.0);
                    self.sync
                        .observe_position(self.clock.current_time(), self.clock.duration());
                    self.play();
                }
                exited
            }
        }
    }

    /// Drain and apply every pending host notification.
    pub fn pump_media_events(&mut self) -> Vec<SegmentTransition> {
        let mut transitions = Vec::new();
        while let Some(event) = self.clock.poll_event() {
            if let Some(t) = self.handle_media_event(event) {
                transitions.push(t);
            }
        }
        transitions
    }

    /// Current state for rendering.
    pub fn snapshot(&self) -> PlayerSnapshot {
        let position = self.sync.position();
        PlayerSnapshot {
            is_playing: self.is_playing,
            current_time: position.current_time,
            duration: position.duration.or_else(|| self.clock.duration()),
            progress_ratio: position.progress_ratio,
            is_muted: self.clock.is_muted(),
            active_segment: self.sync.active_segment().cloned(),
            haptics_enabled: self.sync.haptics_enabled(),
            has_actuator_capability: self.sync.has_actuator_capability(),
            loop_state: self.sync.state(),
        }
    }

    /// Stop everything. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if self.is_playing {
            self.clock.pause();
            self.is_playing = false;
        }
        self.sync.stop(&mut self.scheduler, StopReason::Teardown);
        self.torn_down = true;
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn table(&self) -> &SegmentTable {
        self.sync.table()
    }

    pub fn sync(&self) -> &SyncLoop {
        &self.sync
    }

    pub fn clock(&self) -> &PlaybackClock<M> {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut PlaybackClock<M> {
        &mut self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

impl<M: MediaElement, S: FrameScheduler> Drop for SonicPlayer<M, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
