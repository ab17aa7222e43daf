//! Actor Model: Message-passing threads around the wheel.
//!
//! Two worker threads feed the owning event loop over crossbeam channels:
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │              │
//! └──────────────┘                     │  Owner Loop  │
//!                                      │  (widget)    │
//! ┌──────────────┐     TweenEvent      │              │
//! │ Tween Thread │ ─────────────────▶  │              │
//! └──────────────┘                     └──────────────┘
//! ```
//!
//! The input thread lives as long as the application; a tween thread lives
//! for one spin and ends after its single `Complete` event. Nothing here
//! blocks the owner: both channels are drained with non-blocking reads.

mod input;
mod messages;
mod tween;

pub use input::InputActor;
pub use messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent, TweenEvent};
pub use tween::{TweenActor, TWEEN_FRAME_INTERVAL};
