//! Vibration hosts available to the terminal shell.
//!
//! A terminal has no actuator, so these stand in for one: `LogVibrator`
//! records every request in the log, `BellVibrator` rings the bell.

use std::io::{self, Write};

use crate::cli::HapticsHost;
use crate::error::ActuatorError;
use crate::player::Vibrator;

/// Records each vibration request with `tracing`.
#[derive(Debug, Default)]
pub struct LogVibrator {
    requests: u64,
}

impl LogVibrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests received so far (including cancels).
    pub fn requests(&self) -> u64 {
        self.requests
    }
}

impl Vibrator for LogVibrator {
    fn name(&self) -> &'static str {
        "log"
    }

    fn vibrate(&mut self, pattern_ms: &[u32]) -> Result<(), ActuatorError> {
        self.requests += 1;
        if is_cancel(pattern_ms) {
            tracing::info!("vibration cancelled");
        } else {
            let total_ms: u64 = pattern_ms.iter().map(|&ms| ms as u64).sum();
            tracing::info!(pattern = ?pattern_ms, total_ms, "vibrate");
        }
        Ok(())
    }
}

/// Rings the terminal bell when a pattern starts.
#[derive(Debug)]
pub struct BellVibrator<W: Write> {
    out: W,
}

impl<W: Write> BellVibrator<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Vibrator for BellVibrator<W> {
    fn name(&self) -> &'static str {
        "bell"
    }

    fn vibrate(&mut self, pattern_ms: &[u32]) -> Result<(), ActuatorError> {
        if is_cancel(pattern_ms) {
            return Ok(());
        }
        self.out
            .write_all(b"\x07")
            .and_then(|_| self.out.flush())
            .map_err(|e| ActuatorError::Io(e.to_string()))
    }
}

/// A request made only of zero durations cancels output.
fn is_cancel(pattern_ms: &[u32]) -> bool {
    pattern_ms.iter().all(|&ms| ms == 0)
}

/// Vibration capability for the chosen host, or `None` for visual-only.
pub fn vibrator_for(host: HapticsHost) -> Option<Box<dyn Vibrator>> {
    match host {
        HapticsHost::Log => Some(Box::new(LogVibrator::new())),
        HapticsHost::Bell => Some(Box::new(BellVibrator::new(io::stdout()))),
        HapticsHost::None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_vibrator_counts_requests() {
        let mut v = LogVibrator::new();
        v.vibrate(&[1200]).unwrap();
        v.vibrate(&[0]).unwrap();
        assert_eq!(v.requests(), 2);
    }

    #[test]
    fn bell_rings_on_start_only() {
        let mut v = BellVibrator::new(Vec::new());
        v.vibrate(&[1200, 100, 1200]).unwrap();
        v.vibrate(&[0]).unwrap();
        assert_eq!(v.into_inner(), b"\x07".to_vec());
    }

    #[test]
    fn cancel_detection() {
        assert!(is_cancel(&[0]));
        assert!(!is_cancel(&[0, 100]));
    }

    #[test]
    fn host_selection() {
        assert_eq!(vibrator_for(HapticsHost::Log).map(|v| v.name()), Some("log"));
        assert_eq!(vibrator_for(HapticsHost::Bell).map(|v| v.name()), Some("bell"));
        assert!(vibrator_for(HapticsHost::None).is_none());
    }
}
