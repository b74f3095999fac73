//! Host window requests (fullscreen).
//!
//! Uses the xterm window-manipulation sequence, which only works on
//! xterm-compatible terminals. Terminals that ignore it simply stay as
//! they are; failures are logged and never surfaced.

use std::io::{self, Write};

/// xterm "toggle fullscreen" (CSI 10 ; 2 t)
pub const TOGGLE_FULLSCREEN: &str = "\x1b[10;2t";

/// Ask the terminal to toggle fullscreen.
pub fn request_fullscreen(out: &mut impl Write) -> io::Result<()> {
    out.write_all(TOGGLE_FULLSCREEN.as_bytes())?;
    out.flush()
}

/// Same as [`request_fullscreen`] but logs instead of failing.
pub fn toggle_fullscreen_best_effort(out: &mut impl Write) {
    if let Err(e) = request_fullscreen(out) {
        tracing::debug!(error = %e, "fullscreen request failed");
    }
}
