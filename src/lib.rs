//! # Luckywheel
//!
//! A nine-cell lucky-wheel spinner widget for terminal UIs.
//!
//! Eight cells form a clockwise ring around a central GO cell. Pressing
//! and releasing inside the GO cell spins the wheel: a highlight races
//! around the ring for three full laps and stops on a uniformly random
//! cell after six seconds.
//!
//! ## Core Concepts
//!
//! - **Ring layout**: nine rectangles computed from the widget size, ring
//!   first, action cell last
//! - **Spin machine**: thread-free state machine driven by interpolation
//!   frames from a tween thread
//! - **Tap confirmation**: a spin triggers only when press *and* release
//!   both land on the GO cell
//! - **Surface abstraction**: the widget paints fill-rectangle/draw-text
//!   onto any surface; a terminal presenter flushes frames in one write
//!
//! ## Example
//!
//! ```rust,ignore
//! use luckywheel::{LuckyWheel, Rect, Widget};
//!
//! let mut wheel = LuckyWheel::new(Rect::new(0, 0, 30, 30));
//!
//! // Feed it mouse events; press + release on GO starts the spin.
//! wheel.handle_input(&event);
//!
//! // Drain animation frames from the event loop.
//! wheel.pump();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod layout;
pub mod spin;
pub mod surface;
pub mod widget;

// Re-exports for convenience
pub use actor::{
    InputActor, InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, TweenActor, TweenEvent,
};
pub use layout::{GridCell, Rect, WheelGrid, ACTION_CELL, CELL_COUNT, RING_CELLS};
pub use spin::{SpinMachine, SpinPlan, SPIN_DURATION, SPIN_LAPS};
pub use surface::{Cell, CellBuffer, Modifiers, Rgb, Surface, Terminal};
pub use widget::{LuckyWheel, TapTracker, WheelConfig, Widget};
