//! Simulated video for the terminal shell.
//!
//! Advances its position from the wall clock while playing, so it behaves
//! like a decoding video element: metadata arrives after the first poll,
//! play and pause are confirmed through the event queue, seeks jump the
//! position, and reaching the end raises `Ended` once.

use std::collections::VecDeque;
use std::time::Instant;

use crate::error::PlaybackError;
use crate::player::{known_duration, MediaElement, MediaEvent};

/// Wall-clock driven stand-in for a video element.
#[derive(Debug)]
pub struct SimulatedVideo {
    duration: f64,
    metadata_loaded: bool,
    /// Position when playback last (re)started or was frozen
    base_time: f64,
    playing_since: Option<Instant>,
    muted: bool,
    ended: bool,
    /// Confirmations waiting for the next poll
    events: VecDeque<MediaEvent>,
}

impl SimulatedVideo {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            metadata_loaded: false,
            base_time: 0.0,
            playing_since: None,
            muted: false,
            ended: false,
            events: VecDeque::new(),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.playing_since.is_some()
    }

    fn position_at(&self, now: Instant) -> f64 {
        let elapsed = self
            .playing_since
            .map(|since| now.saturating_duration_since(since).as_secs_f64())
            .unwrap_or(0.0);
        (self.base_time + elapsed).min(self.duration)
    }

    fn freeze(&mut self, at: f64) {
        self.base_time = at;
        if self.playing_since.is_some() {
            self.playing_since = Some(Instant::now());
        }
    }
}

impl MediaElement for SimulatedVideo {
    fn play(&mut self) -> Result<(), PlaybackError> {
        if known_duration(self.duration).is_none() {
            return Err(PlaybackError::Unavailable);
        }
        if self.playing_since.is_some() {
            return Ok(());
        }
        if self.ended || self.base_time >= self.duration {
            // Playing a finished video starts it over
            self.base_time = 0.0;
        }
        self.ended = false;
        self.playing_since = Some(Instant::now());
        self.events.push_back(MediaEvent::Playing);
        Ok(())
    }

    fn pause(&mut self) {
        if self.playing_since.is_none() {
            return;
        }
        self.base_time = self.position_at(Instant::now());
        self.playing_since = None;
        self.events.push_back(MediaEvent::Paused);
    }

    fn current_time(&self) -> f64 {
        self.position_at(Instant::now())
    }

    fn set_current_time(&mut self, seconds: f64) {
        let target = if seconds.is_finite() {
            seconds.clamp(0.0, self.duration.max(0.0))
        } else {
            0.0
        };
        self.ended = false;
        self.freeze(target);
    }

    fn duration(&self) -> f64 {
        if self.metadata_loaded {
            self.duration
        } else {
            f64::NAN
        }
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn poll_event(&mut self) -> Option<MediaEvent> {
        if !self.metadata_loaded {
            self.metadata_loaded = true;
            return Some(MediaEvent::MetadataLoaded {
                duration: self.duration,
            });
        }
        if let Some(event) = self.events.pop_front() {
            return Some(event);
        }
        if !self.ended && self.is_playing() && self.current_time() >= self.duration {
            self.ended = true;
            self.base_time = self.duration;
            self.playing_since = None;
            return Some(MediaEvent::Ended);
        }
        None
    }
}
