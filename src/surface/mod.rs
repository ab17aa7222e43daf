//! Surface module: The drawing abstraction the wheel renders through.
//!
//! Widgets never talk to the terminal. They paint onto a [`Surface`] - a
//! minimal fill-rectangle / draw-text capability - and a presenter decides
//! how the result reaches the screen. [`CellBuffer`] is the in-memory
//! implementation; [`Terminal`] flushes a buffer to a real terminal.

mod buffer;
mod cell;
mod term;

pub use buffer::CellBuffer;
pub use cell::{Cell, Modifiers, Rgb};
pub use term::Terminal;

use crate::layout::Rect;

/// A surface widgets can draw onto.
pub trait Surface {
    /// Size of the drawable area in columns and rows.
    fn size(&self) -> (u16, u16);

    /// Fill a rectangle with a solid color. Clipped to the surface.
    fn fill_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw a line of text starting at `(x, y)`, preserving whatever
    /// background is already there. Clipped to the surface.
    fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgb, mods: Modifiers);
}
