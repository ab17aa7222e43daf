//! Lucky Wheel Widget: Nine cells, a spinning highlight, and a GO button.
//!
//! The widget owns one layout, one spin machine, and one gesture tracker;
//! all three are mutated only through its own handlers. Pressing and
//! releasing inside the central action cell starts a spin: the highlight
//! races clockwise around the eight ring cells for three full laps and
//! stops on a uniformly random cell after six seconds.

use unicode_width::UnicodeWidthStr;

use super::gesture::TapTracker;
use super::Widget;
use crate::actor::{InputEvent, TweenActor, TweenEvent};
use crate::layout::{Rect, WheelGrid, ACTION_CELL};
use crate::spin::SpinMachine;
use crate::surface::{Modifiers, Rgb, Surface};

/// Configuration for the lucky wheel widget.
///
/// The two classic variants (plain colored ring versus numbered cells)
/// are both expressed here via `draw_labels` and `palette`.
#[derive(Debug, Clone)]
pub struct WheelConfig {
    /// Whether to draw cell labels.
    pub draw_labels: bool,
    /// Alternating ring cell colors; cell `i` uses `palette[i % 2]` so
    /// adjacent cells always differ.
    pub palette: [Rgb; 2],
    /// Color of the highlighted ring cell.
    pub highlight: Rgb,
    /// Background of the central action cell.
    pub action_bg: Rgb,
    /// Color of the action cell label.
    pub action_fg: Rgb,
    /// Color of ring cell labels.
    pub label_fg: Rgb,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            draw_labels: true,
            palette: [Rgb::new(0, 255, 0), Rgb::new(255, 0, 0)],
            highlight: Rgb::new(0, 0, 255),
            action_bg: Rgb::WHITE,
            action_fg: Rgb::new(255, 0, 0),
            label_fg: Rgb::BLACK,
        }
    }
}

/// The lucky wheel widget.
pub struct LuckyWheel {
    /// Widget bounds in screen coordinates.
    bounds: Rect,
    /// Cell layout, widget-local, rebuilt on every bounds change.
    grid: WheelGrid,
    /// Spin state.
    machine: SpinMachine,
    /// Press/release confirmation for the action cell.
    tap: TapTracker,
    /// The tween driving the spin in progress, if any.
    tween: Option<TweenActor>,
    /// Configuration.
    config: WheelConfig,
    /// Needs redraw flag.
    dirty: bool,
}

impl LuckyWheel {
    /// Create a wheel with the given bounds and default configuration.
    pub fn new(bounds: Rect) -> Self {
        Self::with_config(bounds, WheelConfig::default())
    }

    /// Create a wheel with custom configuration.
    pub fn with_config(bounds: Rect, config: WheelConfig) -> Self {
        Self {
            bounds,
            grid: WheelGrid::compute(bounds.width, bounds.height),
            machine: SpinMachine::new(),
            tap: TapTracker::new(),
            tween: None,
            config,
            dirty: true,
        }
    }

    /// The current cell layout, for renderers.
    pub const fn grid(&self) -> &WheelGrid {
        &self.grid
    }

    /// The currently highlighted ring cell, for renderers.
    pub const fn highlighted(&self) -> Option<u8> {
        self.machine.highlighted()
    }

    /// Whether a spin is in progress.
    pub const fn is_spinning(&self) -> bool {
        self.machine.is_spinning()
    }

    /// The active configuration.
    pub const fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Start a spin directly, bypassing the gesture.
    ///
    /// Returns `false` if a spin is already in progress (the request is
    /// ignored).
    pub fn start_spin(&mut self) -> bool {
        let Some(plan) = self.machine.start_spin() else {
            return false;
        };
        self.tween = Some(TweenActor::spawn(plan.from, plan.to, plan.duration));
        self.dirty = true;
        true
    }

    /// Apply one interpolation frame to the spin in progress.
    ///
    /// Normally fed by [`pump`](Self::pump); exposed for owners driving
    /// the animation from their own interpolation source.
    pub fn on_frame(&mut self, value: i64) {
        if self.machine.on_frame(value) {
            self.dirty = true;
        }
    }

    /// Drain pending tween events into the spin machine.
    ///
    /// Call this regularly (e.g., on an event-loop timeout) while a spin
    /// is running. Returns `true` if visible state advanced.
    pub fn pump(&mut self) -> bool {
        let Some(tween) = &self.tween else {
            return false;
        };

        let mut advanced = false;
        let mut finished = false;
        while let Ok(event) = tween.receiver().try_recv() {
            match event {
                TweenEvent::Frame(value) => advanced |= self.machine.on_frame(value),
                TweenEvent::Complete => {
                    self.machine.on_complete();
                    finished = true;
                    advanced = true;
                }
            }
        }

        if finished {
            self.tween = None;
        }
        if advanced {
            self.dirty = true;
        }
        advanced
    }

    /// Whether a screen-coordinate point lands on the action cell.
    fn action_hit(&self, x: u16, y: u16) -> bool {
        if x < self.bounds.x || y < self.bounds.y {
            return false;
        }
        self.grid
            .action()
            .rect
            .contains(x - self.bounds.x, y - self.bounds.y)
    }

    fn draw_label(&self, surface: &mut dyn Surface, rect: Rect, label: &str, fg: Rgb, mods: Modifiers) {
        let text_width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        if rect.width < text_width {
            return;
        }
        let (cx, cy) = rect.center();
        surface.draw_text(cx - text_width / 2, cy, label, fg, mods);
    }
}

impl Widget for LuckyWheel {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        // The previous layout is discarded wholesale. A spin in progress
        // is untouched: ring indices stay valid against any layout.
        self.grid = WheelGrid::compute(bounds.width, bounds.height);
        self.dirty = true;
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, surface: &mut dyn Surface) {
        for (i, cell) in self.grid.cells().iter().enumerate() {
            let bg = if i == ACTION_CELL {
                self.config.action_bg
            } else if self.machine.highlighted() == Some(i as u8) {
                self.config.highlight
            } else {
                self.config.palette[i % 2]
            };

            let rect = cell.rect.translate(self.bounds.x, self.bounds.y);
            surface.fill_rect(rect, bg);

            if self.config.draw_labels && !rect.is_empty() {
                let (fg, mods) = if i == ACTION_CELL {
                    (self.config.action_fg, Modifiers::BOLD)
                } else {
                    (self.config.label_fg, Modifiers::empty())
                };
                self.draw_label(surface, rect, &cell.label, fg, mods);
            }
        }
    }

    fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::MouseDown(mouse) => {
                self.tap.press(self.action_hit(mouse.x, mouse.y));
                true
            }
            InputEvent::MouseUp(mouse) => {
                if self.tap.release(self.action_hit(mouse.x, mouse.y)) {
                    self.start_spin();
                }
                true
            }
            _ => false,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::{KeyModifiers, MouseButton, MouseEvent};
    use crate::surface::CellBuffer;

    fn mouse(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            x,
            y,
            button: MouseButton::Left,
            modifiers: KeyModifiers::default(),
        }
    }

    #[test]
    fn test_press_and_release_inside_action_cell_spins() {
        // 300x300: action cell spans (100,100)-(200,200).
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 300, 300));
        assert!(wheel.handle_input(&InputEvent::MouseDown(mouse(150, 150))));
        assert!(!wheel.is_spinning());
        assert!(wheel.handle_input(&InputEvent::MouseUp(mouse(199, 101))));
        assert!(wheel.is_spinning());
    }

    #[test]
    fn test_release_outside_does_not_spin() {
        let mut wheel = LuckyWheel::new(Rect::from_size(300, 300));
        wheel.handle_input(&InputEvent::MouseDown(mouse(150, 150)));
        wheel.handle_input(&InputEvent::MouseUp(mouse(50, 50)));
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn test_press_outside_does_not_spin() {
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 300, 300));
        assert!(wheel.handle_input(&InputEvent::MouseDown(mouse(50, 50))));
        assert!(wheel.handle_input(&InputEvent::MouseUp(mouse(150, 150))));
        assert!(!wheel.is_spinning());
    }

    #[test]
    fn test_hit_test_respects_widget_offset() {
        let mut wheel = LuckyWheel::new(Rect::new(10, 5, 300, 300));
        // (150, 150) on screen is ring territory now; the action cell
        // sits at (110,105)-(210,205).
        wheel.handle_input(&InputEvent::MouseDown(mouse(150, 150)));
        wheel.handle_input(&InputEvent::MouseUp(mouse(150, 150)));
        assert!(wheel.is_spinning());

        let mut other = LuckyWheel::new(Rect::new(200, 200, 300, 300));
        other.handle_input(&InputEvent::MouseDown(mouse(150, 150)));
        other.handle_input(&InputEvent::MouseUp(mouse(150, 150)));
        assert!(!other.is_spinning());
    }

    #[test]
    fn test_start_spin_while_spinning_ignored() {
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 30, 30));
        assert!(wheel.start_spin());
        assert!(!wheel.start_spin());
        assert!(wheel.is_spinning());
    }

    #[test]
    fn test_key_events_not_consumed() {
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 30, 30));
        let consumed = wheel.handle_input(&InputEvent::Key {
            code: crate::actor::KeyCode::Enter,
            modifiers: KeyModifiers::default(),
        });
        assert!(!consumed);
    }

    #[test]
    fn test_render_colors_and_labels() {
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 9, 9));
        wheel.start_spin();
        wheel.on_frame(2);

        let mut buf = CellBuffer::new(9, 9);
        wheel.render(&mut buf);

        let config = WheelConfig::default();
        // Ring cells alternate palette colors.
        assert_eq!(buf.get(0, 0).unwrap().bg, config.palette[0]);
        assert_eq!(buf.get(4, 0).unwrap().bg, config.palette[1]);
        // Cell 2 is highlighted.
        assert_eq!(buf.get(7, 1).unwrap().bg, config.highlight);
        // Action cell background and bold label.
        assert_eq!(buf.get(5, 5).unwrap().bg, config.action_bg);
        let g = buf.get(3, 4).unwrap();
        assert_eq!(g.ch, 'G');
        assert!(g.mods.contains(Modifiers::BOLD));
        assert_eq!(buf.get(4, 4).unwrap().ch, 'O');
    }

    #[test]
    fn test_resize_during_spin_keeps_spinning() {
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 300, 300));
        wheel.start_spin();
        wheel.on_frame(13);
        wheel.set_bounds(Rect::new(0, 0, 90, 60));
        assert!(wheel.is_spinning());
        assert_eq!(wheel.highlighted(), Some(5));
        assert_eq!(wheel.grid().cell_size(), 20);
    }

    #[test]
    fn test_frame_marks_dirty() {
        let mut wheel = LuckyWheel::new(Rect::new(0, 0, 30, 30));
        wheel.start_spin();
        wheel.clear_redraw();
        wheel.on_frame(1);
        assert!(wheel.needs_redraw());
        wheel.clear_redraw();
        // Same cell again: no redraw needed.
        wheel.on_frame(9);
        assert!(!wheel.needs_redraw());
    }
}
