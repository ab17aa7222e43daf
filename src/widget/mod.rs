//! Widget module: The `Widget` seam and the lucky wheel itself.

mod gesture;
mod wheel;

pub use gesture::TapTracker;
pub use wheel::{LuckyWheel, WheelConfig};

use crate::actor::InputEvent;
use crate::layout::Rect;
use crate::surface::Surface;

/// A UI component that renders to a surface and handles input.
pub trait Widget {
    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this widget.
    ///
    /// Called when the layout changes (e.g., terminal resize).
    fn set_bounds(&mut self, bounds: Rect);

    /// Render this widget onto the given surface.
    ///
    /// The widget only writes within its bounds.
    fn render(&self, surface: &mut dyn Surface);

    /// Handle an input event.
    ///
    /// Returns `true` if the event was consumed by this widget,
    /// `false` if it should propagate.
    fn handle_input(&mut self, event: &InputEvent) -> bool;

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after rendering.
    fn clear_redraw(&mut self);
}
