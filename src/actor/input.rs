//! Input Actor: Dedicated thread polling terminal events.
//!
//! Runs crossterm's event polling off the main thread and forwards the
//! subset of events the wheel understands - mouse presses and releases,
//! a few keys, and resizes - over a channel.

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyEventKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::messages::{InputEvent, KeyCode, KeyModifiers, MouseButton, MouseEvent};

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// re-checking the shutdown flag.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the input thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("luckywheel-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(converted) = Self::convert_event(&event) {
                            if sender.send(converted).is_err() {
                                // Receiver dropped, exit.
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown).
                }
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Convert a crossterm event; unknown events map to `None` and are
    /// dropped here rather than forwarded.
    fn convert_event(event: &Event) -> Option<InputEvent> {
        match event {
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                let code = match key.code {
                    event::KeyCode::Char(c) => KeyCode::Char(c),
                    event::KeyCode::Enter => KeyCode::Enter,
                    event::KeyCode::Esc => KeyCode::Esc,
                    _ => return None,
                };
                Some(InputEvent::Key {
                    code,
                    modifiers: Self::convert_modifiers(key.modifiers),
                })
            }

            Event::Mouse(mouse) => {
                let modifiers = Self::convert_modifiers(mouse.modifiers);
                match mouse.kind {
                    event::MouseEventKind::Down(button) => Some(InputEvent::MouseDown(MouseEvent {
                        x: mouse.column,
                        y: mouse.row,
                        button: Self::convert_button(button),
                        modifiers,
                    })),
                    event::MouseEventKind::Up(button) => Some(InputEvent::MouseUp(MouseEvent {
                        x: mouse.column,
                        y: mouse.row,
                        button: Self::convert_button(button),
                        modifiers,
                    })),
                    _ => None,
                }
            }

            Event::Resize(width, height) => Some(InputEvent::Resize {
                width: *width,
                height: *height,
            }),

            _ => None,
        }
    }

    fn convert_modifiers(mods: event::KeyModifiers) -> KeyModifiers {
        KeyModifiers {
            shift: mods.contains(event::KeyModifiers::SHIFT),
            control: mods.contains(event::KeyModifiers::CONTROL),
            alt: mods.contains(event::KeyModifiers::ALT),
        }
    }

    const fn convert_button(button: event::MouseButton) -> MouseButton {
        match button {
            event::MouseButton::Left => MouseButton::Left,
            event::MouseButton::Right => MouseButton::Right,
            event::MouseButton::Middle => MouseButton::Middle,
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
