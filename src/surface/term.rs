//! Terminal presenter: Flushes a [`CellBuffer`] to the real terminal.
//!
//! Output is accumulated into one pre-allocated byte buffer and written in
//! a single syscall per frame to prevent flickering. Terminal state (raw
//! mode, alternate screen, mouse capture) is restored on drop.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::buffer::CellBuffer;
use super::cell::{Cell, Modifiers, Rgb};

/// A terminal prepared for wheel rendering.
///
/// Construction switches the terminal into raw mode with the alternate
/// screen and mouse capture enabled; dropping the value restores it.
pub struct Terminal {
    width: u16,
    height: u16,
    out: Vec<u8>,
}

impl Terminal {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or screen setup fails.
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        Ok(Self {
            width,
            height,
            out: Vec::with_capacity(usize::from(width) * usize::from(height) * 8),
        })
    }

    /// Current terminal size in columns and rows.
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Record a terminal resize.
    pub const fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Write the full buffer contents to the terminal in one syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying write fails.
    pub fn present(&mut self, buffer: &CellBuffer) -> io::Result<()> {
        self.out.clear();
        self.out.extend_from_slice(b"\x1b[H");

        let rows = buffer.height().min(self.height);
        let cols = buffer.width().min(self.width);
        let mut brush: Option<(Rgb, Rgb, Modifiers)> = None;

        for y in 0..rows {
            write!(self.out, "\x1b[{};1H", y + 1)?;
            for cell in &buffer.row(y)[..usize::from(cols)] {
                self.apply_style(cell, &mut brush)?;
                let mut utf8 = [0u8; 4];
                self.out
                    .extend_from_slice(cell.ch.encode_utf8(&mut utf8).as_bytes());
            }
        }
        self.out.extend_from_slice(b"\x1b[0m");

        let mut stdout = io::stdout();
        stdout.write_all(&self.out)?;
        stdout.flush()
    }

    /// Emit color/style codes only when they differ from the active brush.
    fn apply_style(
        &mut self,
        cell: &Cell,
        brush: &mut Option<(Rgb, Rgb, Modifiers)>,
    ) -> io::Result<()> {
        let next = (cell.fg, cell.bg, cell.mods);
        if *brush == Some(next) {
            return Ok(());
        }
        self.out.extend_from_slice(b"\x1b[0m");
        if cell.mods.contains(Modifiers::BOLD) {
            self.out.extend_from_slice(b"\x1b[1m");
        }
        if cell.mods.contains(Modifiers::DIM) {
            self.out.extend_from_slice(b"\x1b[2m");
        }
        if cell.mods.contains(Modifiers::UNDERLINE) {
            self.out.extend_from_slice(b"\x1b[4m");
        }
        if cell.mods.contains(Modifiers::REVERSED) {
            self.out.extend_from_slice(b"\x1b[7m");
        }
        write!(
            self.out,
            "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m",
            cell.fg.r, cell.fg.g, cell.fg.b, cell.bg.r, cell.bg.g, cell.bg.b
        )?;
        *brush = Some(next);
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
