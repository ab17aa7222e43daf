//! `CellBuffer`: An in-memory cell grid implementing [`Surface`].

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::cell::{Cell, Modifiers, Rgb};
use super::Surface;
use crate::layout::Rect;

/// A row-major grid of display cells.
///
/// This is the drawing surface the wheel renders into; a presenter then
/// flushes it to the terminal. Out-of-bounds writes are clipped silently.
#[derive(Clone, Debug)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    /// Create a buffer of blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    /// Buffer width in columns.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in rows.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get a cell, or `None` out of bounds.
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(usize::from(y) * usize::from(self.width) + usize::from(x))
    }

    /// Set a cell. Returns `false` if the position was out of bounds.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = usize::from(y) * usize::from(self.width) + usize::from(x);
        self.cells[idx] = cell;
        true
    }

    /// Reset every cell to a blank over the given background.
    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(Cell::blank(bg));
    }

    /// Resize the buffer, discarding all contents.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    /// One row of cells, for presenters.
    pub fn row(&self, y: u16) -> &[Cell] {
        let start = usize::from(y) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }
}

impl Surface for CellBuffer {
    fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let right = rect.right().min(self.width);
        let bottom = rect.bottom().min(self.height);
        for y in rect.y..bottom {
            for x in rect.x..right {
                self.set(x, y, Cell::blank(color));
            }
        }
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str, fg: Rgb, mods: Modifiers) {
        let mut col = x;
        for grapheme in text.graphemes(true) {
            if col >= self.width {
                break;
            }
            // Single-char cells: the first scalar of the grapheme stands in
            // for the whole cluster. Labels here are ASCII anyway.
            let ch = grapheme.chars().next().unwrap_or(' ');
            let bg = self.get(col, y).map_or(Rgb::BLACK, |c| c.bg);
            self.set(col, y, Cell::new(ch).with_fg(fg).with_bg(bg).with_mods(mods));
            let advance = grapheme.width().max(1);
            col = col.saturating_add(u16::try_from(advance).unwrap_or(1));
        }
    }
}
