//! Ring grid: The nine-cell wheel layout engine.
//!
//! Eight ring cells traverse the perimeter of a `3S x 3S` square clockwise,
//! where `S = floor(min(width, height) / 3)`; the ninth cell is the interior
//! action cell. The layout is a pure function of the widget size: it is
//! recomputed wholesale on every resize and carries no memory of previous
//! layouts.
//!
//! Cell order is part of the contract - consumers index cells by position:
//!
//! ```text
//! ┌───┬───┬───┐
//! │ 0 │ 1 │ 2 │   0..=2  top row, left to right
//! ├───┼───┼───┤   3      right column, middle slot
//! │ 7 │ 8 │ 3 │   4..=6  bottom row, right to left
//! ├───┼───┼───┤   7      left column, middle slot
//! │ 6 │ 5 │ 4 │   8      center action cell
//! └───┴───┴───┘
//! ```
//!
//! On non-square widgets the right column and bottom row hug the right edge
//! of the widget; the top row and left column stay left-aligned.

use super::rect::Rect;

/// Total number of cells in the wheel (ring plus action cell).
pub const CELL_COUNT: usize = 9;

/// Number of ring cells the highlight can stop on.
pub const RING_CELLS: u8 = 8;

/// Index of the central action cell.
pub const ACTION_CELL: usize = 8;

/// Fixed label of the action cell.
pub const ACTION_LABEL: &str = "GO";

/// One cell of the wheel: its rectangle in widget-local coordinates and
/// its display label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    /// Position and size, widget-local.
    pub rect: Rect,
    /// Display label (`"1".."8"` for ring cells, [`ACTION_LABEL`] for the
    /// action cell).
    pub label: String,
}

/// The computed nine-cell layout for one widget size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelGrid {
    cells: Vec<GridCell>,
    width: u16,
    height: u16,
}

impl WheelGrid {
    /// Compute the layout for a widget of the given size.
    ///
    /// Sizes below `3` produce zero-area cells; the layout is still nine
    /// cells long and every query below stays valid.
    pub fn compute(width: u16, height: u16) -> Self {
        let s = width.min(height) / 3;
        let mut cells = Vec::with_capacity(CELL_COUNT);

        // Top row, left to right.
        for i in 0..3u16 {
            cells.push(Rect::new(i * s, 0, s, s));
        }
        // Right column, middle slot. `3 * s <= width` always holds, so the
        // right-aligned arithmetic cannot underflow.
        cells.push(Rect::from_corners(width - s, s, width, 2 * s));
        // Bottom row, right to left.
        for i in 0..3u16 {
            cells.push(Rect::from_corners(width - (i + 1) * s, 2 * s, width - i * s, 3 * s));
        }
        // Left column, middle slot.
        cells.push(Rect::new(0, s, s, s));
        // Center action cell, always last.
        cells.push(Rect::new(s, s, s, s));

        let cells = cells
            .into_iter()
            .enumerate()
            .map(|(i, rect)| GridCell {
                rect,
                label: if i == ACTION_CELL {
                    ACTION_LABEL.to_string()
                } else {
                    (i + 1).to_string()
                },
            })
            .collect();

        Self { cells, width, height }
    }

    /// The widget size this layout was computed for.
    pub const fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    /// Side length `S` of each cell.
    pub fn cell_size(&self) -> u16 {
        self.width.min(self.height) / 3
    }

    /// All nine cells, ring first, action cell last.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// A cell by index, or `None` past the end.
    pub fn cell(&self, index: usize) -> Option<&GridCell> {
        self.cells.get(index)
    }

    /// The eight ring cells in clockwise traversal order.
    pub fn ring(&self) -> &[GridCell] {
        &self.cells[..ACTION_CELL]
    }

    /// The central action cell.
    pub fn action(&self) -> &GridCell {
        &self.cells[ACTION_CELL]
    }
}
