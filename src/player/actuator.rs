//! Actuator driver: translates segment patterns into host vibration calls.
//!
//! The host capability is optional. Without one, every call is a silent
//! no-op so callers never branch on capability presence beyond the
//! feature-detection flag exposed to the UI.

use crate::error::ActuatorError;
use crate::timeline::VibrationPattern;

/// A host vibration capability.
///
/// Mirrors a platform "vibrate" call: a slice of alternating on/off
/// durations in milliseconds, where `[0]` cancels any in-flight pattern.
pub trait Vibrator {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Issue a vibration request. Returns as soon as the request is handed
    /// to the host; completion is never awaited.
    fn vibrate(&mut self, pattern_ms: &[u32]) -> Result<(), ActuatorError>;
}

/// Fire-and-forget adapter around an optional [`Vibrator`].
pub struct ActuatorDriver {
    vibrator: Option<Box<dyn Vibrator>>,
}

impl ActuatorDriver {
    /// Request that cancels whatever pattern is playing.
    pub const CANCEL: [u32; 1] = [0];

    pub fn new(vibrator: Option<Box<dyn Vibrator>>) -> Self {
        if let Some(v) = &vibrator {
            tracing::debug!(vibrator = v.name(), "actuator capability detected");
        } else {
            tracing::debug!("no actuator capability; haptics are visual-only");
        }
        Self { vibrator }
    }

    /// A driver with no capability.
    pub fn none() -> Self {
        Self { vibrator: None }
    }

    /// Whether the host can vibrate at all.
    pub fn has_capability(&self) -> bool {
        self.vibrator.is_some()
    }

    /// Start `pattern`. Returns whether a request was issued to the host.
    pub fn start(&mut self, pattern: &VibrationPattern) -> bool {
        self.send(pattern.as_millis())
    }

    /// Cancel any in-flight pattern.
    pub fn stop(&mut self) {
        self.send(&Self::CANCEL);
    }

    fn send(&mut self, pattern_ms: &[u32]) -> bool {
        let Some(vibrator) = self.vibrator.as_mut() else {
            return false;
        };
        if let Err(e) = vibrator.vibrate(pattern_ms) {
            tracing::debug!(vibrator = vibrator.name(), error = %e, "vibration request failed");
        }
        true
    }
}

impl std::fmt::Debug for ActuatorDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActuatorDriver")
            .field("vibrator", &self.vibrator.as_ref().map(|v| v.name()))
            .finish()
    }
}
