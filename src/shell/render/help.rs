//! Help overlay rendering for the terminal shell.
//!
//! Displays a centered help overlay with all available keyboard shortcuts.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  ╔═══════════════════════════════════════════╗",
    "  ║           Sonic Sync Player Help          ║",
    "  ╠═══════════════════════════════════════════╣",
    "  ║                                           ║",
    "  ║  Playback                                 ║",
    "  ║    Space      Play / Pause                ║",
    "  ║    <-/->      Seek -/+5s                  ║",
    "  ║    Shift+<-/->  Seek -/+5%                ║",
    "  ║    0-9        Jump to 0%..90%             ║",
    "  ║    Home/End   Go to start / end           ║",
    "  ║    Click      Seek on the progress bar    ║",
    "  ║                                           ║",
    "  ║  Output                                   ║",
    "  ║    h          Toggle 4D haptics           ║",
    "  ║    m          Mute / unmute               ║",
    "  ║    f          Toggle fullscreen           ║",
    "  ║                                           ║",
    "  ║  General                                  ║",
    "  ║    ?          Show this help              ║",
    "  ║    q / Esc    Quit player                 ║",
    "  ║                                           ║",
    "  ║         Press any key to close            ║",
    "  ╚═══════════════════════════════════════════╝",
    "",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 47;

/// Calculate the starting row for centering the help box.
///
/// # Arguments
/// * `term_height` - Terminal height in rows
///
/// # Returns
/// The row number to start rendering the help box at
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
///
/// # Arguments
/// * `term_width` - Terminal width in columns
///
/// # Returns
/// The column number to start rendering the help box at
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay.
///
/// Clears the screen and draws a centered help box with all shortcuts.
///
/// # Arguments
/// * `stdout` - The stdout handle to write to
/// * `width` - Terminal width in columns
/// * `height` - Terminal height in rows
pub fn render_help(stdout: &mut io::Stdout, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    execute!(stdout, Clear(ClearType::All))?;

    for (i, line) in HELP_LINES.iter().enumerate() {
        let row = start_row + i as u16;
        execute!(
            stdout,
            MoveTo(col, row),
            SetForegroundColor(Color::Cyan),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}
