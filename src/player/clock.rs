//! Playback clock: a thin wrapper over the host media primitive.
//!
//! Play and pause are requests; the host decides when (and whether) they
//! take effect and reports back through [`MediaEvent`]s.

use crate::error::PlaybackError;

/// Lifecycle notifications from the media primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Duration became known
    MetadataLoaded { duration: f64 },
    /// Host confirmed playback started
    Playing,
    /// Host confirmed playback paused
    Paused,
    /// Playback reached the terminal position
    Ended,
    /// Host declined an earlier play request
    PlayRejected { reason: String },
}

/// Host media primitive (a video element, decoder, or simulation).
pub trait MediaElement {
    /// Request playback. An immediate `Err` means the host refused outright;
    /// a later refusal arrives as [`MediaEvent::PlayRejected`].
    fn play(&mut self) -> Result<(), PlaybackError>;

    fn pause(&mut self);

    /// Current decode position in seconds.
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, seconds: f64);

    /// Total length in seconds; NaN or infinite until metadata loads.
    fn duration(&self) -> f64;

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Next pending lifecycle notification, if any.
    fn poll_event(&mut self) -> Option<MediaEvent>;
}

/// A duration is usable only when finite and positive.
pub fn known_duration(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then_some(raw)
}

/// Best-effort position and duration reads plus control requests.
#[derive(Debug)]
pub struct PlaybackClock<M> {
    media: M,
}

impl<M: MediaElement> PlaybackClock<M> {
    pub fn new(media: M) -> Self {
        Self { media }
    }

    pub fn play(&mut self) -> Result<(), PlaybackError> {
        self.media.play()
    }

    pub fn pause(&mut self) {
        self.media.pause();
    }

    /// Seek to `fraction` of the duration.
    ///
    /// Returns the new position, or `None` when the duration is not known
    /// yet (the request is dropped).
    pub fn seek(&mut self, fraction: f64) -> Option<f64> {
        let duration = self.duration()?;
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        let target = fraction * duration;
        self.media.set_current_time(target);
        Some(target)
    }

    /// Seek to an absolute time, clamped to the known duration.
    pub fn seek_to(&mut self, seconds: f64) -> f64 {
        let mut target = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        if let Some(duration) = self.duration() {
            target = target.min(duration);
        }
        self.media.set_current_time(target);
        target
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.media.set_muted(muted);
    }

    pub fn is_muted(&self) -> bool {
        self.media.is_muted()
    }

    pub fn current_time(&self) -> f64 {
        self.media.current_time()
    }

    /// Duration, when known.
    pub fn duration(&self) -> Option<f64> {
        known_duration(self.media.duration())
    }

    pub fn poll_event(&mut self) -> Option<MediaEvent> {
        self.media.poll_event()
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }
}
