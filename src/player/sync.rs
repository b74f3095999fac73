//! The sync loop: maps playback position to vibration segments.
//!
//! While running, the loop ticks once per host frame. Each tick reads the
//! decode position from the playback clock, resolves the covering segment
//! and fires actuator output only on the edges where that resolution
//! changes. Polling the real decode position (rather than counting wall
//! time) keeps the loop aligned across pauses, seeks and stalls.

use crate::player::actuator::ActuatorDriver;
use crate::player::clock::{MediaElement, PlaybackClock};
use crate::player::frame::{FrameHandle, FrameScheduler};
use crate::player::state::{LoopState, PlaybackPosition, SegmentTransition, StopReason};
use crate::timeline::{SegmentTable, VibrationSegment};

/// Result of delivering a frame to the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame was cancelled or the loop is stopped; nothing ran
    Stale,
    /// Tick ran, possibly crossing a segment edge
    Ticked(Option<SegmentTransition>),
}

/// Frame-driven segment resolver and actuator sequencer.
///
/// Owns the active segment, the derived playback position and the pending
/// frame handle. Each player instance owns its own loop.
#[derive(Debug)]
pub struct SyncLoop {
    table: SegmentTable,
    actuator: ActuatorDriver,
    state: LoopState,
    /// Index into `table` of the active segment
    active: Option<usize>,
    haptics_enabled: bool,
    /// Whether a start request is in flight that has not been cancelled
    output_running: bool,
    pending_frame: Option<FrameHandle>,
    position: PlaybackPosition,
}

impl SyncLoop {
    pub fn new(table: SegmentTable, actuator: ActuatorDriver, haptics_enabled: bool) -> Self {
        Self {
            table,
            actuator,
            state: LoopState::Stopped,
            active: None,
            haptics_enabled,
            output_running: false,
            pending_frame: None,
            position: PlaybackPosition::default(),
        }
    }

    /// `Stopped -> Running`: schedule the first tick.
    pub fn start(&mut self, scheduler: &mut dyn FrameScheduler) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        self.pending_frame = Some(scheduler.request_frame());
        tracing::debug!(at = self.position.current_time, "sync loop running");
    }

    /// `Running -> Stopped` (or a repeated stop).
    ///
    /// Always cancels the pending tick, cancels actuator output and clears
    /// the active segment, even if nothing was active.
    pub fn stop(
        &mut self,
        scheduler: &mut dyn FrameScheduler,
        reason: StopReason,
    ) -> Option<SegmentTransition> {
        if let Some(handle) = self.pending_frame.take() {
            scheduler.cancel_frame(handle);
        }
        self.state = LoopState::Stopped;
        self.actuator.stop();
        self.output_running = false;

        let exited = self.active.take().map(|index| SegmentTransition::Exited {
            id: self.table.segments()[index].id.clone(),
        });
        tracing::debug!(?reason, at = self.position.current_time, "sync loop stopped");
        exited
    }

    /// Deliver a host frame.
    ///
    /// Only the most recently requested handle is honoured; anything else is
    /// a stray frame from before a stop and is ignored.
    pub fn tick<M: MediaElement>(
        &mut self,
        handle: FrameHandle,
        clock: &PlaybackClock<M>,
        scheduler: &mut dyn FrameScheduler,
    ) -> TickOutcome {
        if self.state != LoopState::Running || self.pending_frame != Some(handle) {
            tracing::trace!(frame = handle.id(), "ignoring stale frame");
            return TickOutcome::Stale;
        }
        self.pending_frame = None;

        self.position.observe(clock.current_time(), clock.duration());
        let transition = self.resolve(self.position.current_time);

        self.pending_frame = Some(scheduler.request_frame());
        TickOutcome::Ticked(transition)
    }

    /// Resolve the segment at `now` and run entry/exit actions on change.
    ///
    /// Repeated calls with an unchanged resolution do nothing, so output is
    /// started once per entry rather than once per tick.
    pub fn resolve(&mut self, now: f64) -> Option<SegmentTransition> {
        let candidate = self.table.lookup_index(now);

        // Ids are unique within a table, so index equality is id equality
        match (self.active, candidate) {
            (active, candidate) if active == candidate => None,
            (previous, Some(index)) => Some(self.enter(index, previous, now)),
            (Some(previous), None) => Some(self.exit(previous, now)),
            (None, None) => None,
        }
    }

    fn enter(&mut self, index: usize, previous: Option<usize>, now: f64) -> SegmentTransition {
        self.active = Some(index);
        let segment = &self.table.segments()[index];

        self.output_running = if self.haptics_enabled {
            self.actuator.start(&segment.pattern)
        } else {
            false
        };
        tracing::debug!(
            segment = %segment.id,
            name = %segment.name,
            at = now,
            haptics = self.output_running,
            "entered segment"
        );

        SegmentTransition::Entered {
            id: segment.id.clone(),
            previous: previous.map(|i| self.table.segments()[i].id.clone()),
        }
    }

    fn exit(&mut self, previous: usize, now: f64) -> SegmentTransition {
        self.active = None;
        if self.haptics_enabled {
            self.actuator.stop();
        }
        self.output_running = false;

        let id = self.table.segments()[previous].id.clone();
        tracing::debug!(segment = %id, at = now, "exited segment");
        SegmentTransition::Exited { id }
    }

    /// Record a position observed outside a tick (e.g. right after a seek).
    ///
    /// Updates the displayed time only; segment resolution waits for the
    /// next tick.
    pub fn observe_position(&mut self, current_time: f64, duration: Option<f64>) {
        self.position.observe(current_time, duration);
    }

    /// Enable or disable actuator output.
    ///
    /// Disabling cancels running output at once. Enabling never restarts a
    /// segment already in progress; it takes effect on the next entry.
    pub fn set_haptics_enabled(&mut self, enabled: bool) {
        if self.haptics_enabled == enabled {
            return;
        }
        self.haptics_enabled = enabled;
        if !enabled && self.output_running {
            self.actuator.stop();
            self.output_running = false;
        }
        tracing::debug!(enabled, "haptics toggled");
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn active_segment(&self) -> Option<&VibrationSegment> {
        self.active.and_then(|index| self.table.segment(index))
    }

    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    pub fn has_actuator_capability(&self) -> bool {
        self.actuator.has_capability()
    }

    pub fn output_running(&self) -> bool {
        self.output_running
    }

    pub fn position(&self) -> PlaybackPosition {
        self.position
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    pub fn table(&self) -> &SegmentTable {
        &self.table
    }
}
