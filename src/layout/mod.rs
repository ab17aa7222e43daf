//! Layout module: The wheel's cell geometry.
//!
//! The layout is computed once per widget size and replaced wholesale on
//! resize. There is no incremental patching - just a flat list of nine
//! rectangles in a fixed traversal order.

mod grid;
mod rect;

pub use grid::{GridCell, WheelGrid, ACTION_CELL, ACTION_LABEL, CELL_COUNT, RING_CELLS};
pub use rect::Rect;
