//! Spin demo: A playable lucky wheel in the terminal.
//!
//! Click (press and release) the GO cell to spin. The highlight races
//! around the ring for three laps and stops on a random cell six seconds
//! later. ESC or `q` quits.

use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use luckywheel::{
    CellBuffer, InputActor, InputEvent, KeyCode, LuckyWheel, Modifiers, Rect, Rgb, Surface,
    Terminal, Widget,
};

const BACKDROP: Rgb = Rgb::new(24, 24, 24);

/// Center the wheel, twice as wide as tall so it reads square in
/// typical terminal cell metrics.
fn wheel_bounds(width: u16, height: u16) -> Rect {
    let side = height.saturating_sub(2).min(width / 2);
    let w = side * 2;
    Rect::new((width - w) / 2, (height.saturating_sub(2) - side) / 2, w, side)
}

fn redraw(screen: &mut CellBuffer, wheel: &LuckyWheel) {
    let (width, height) = screen.size();
    screen.clear(BACKDROP);
    wheel.render(screen);

    let status = if wheel.is_spinning() {
        "Spinning...".to_string()
    } else if let Some(cell) = wheel.highlighted() {
        format!("Stopped on {} - click GO to spin again", cell + 1)
    } else {
        "Click GO to spin - ESC quits".to_string()
    };
    let x = (width / 2).saturating_sub(u16::try_from(status.len() / 2).unwrap_or(0));
    screen.draw_text(x, height.saturating_sub(1), &status, Rgb::WHITE, Modifiers::DIM);
}

fn main() -> std::io::Result<()> {
    let mut term = Terminal::new()?;
    let (width, height) = term.size();
    let mut screen = CellBuffer::new(width, height);
    let mut wheel = LuckyWheel::new(wheel_bounds(width, height));

    let (input_tx, input_rx) = bounded(64);
    let input = InputActor::spawn(input_tx, Duration::from_millis(10));

    redraw(&mut screen, &wheel);
    term.present(&screen)?;
    wheel.clear_redraw();

    let mut running = true;
    while running {
        match input_rx.recv_timeout(Duration::from_millis(16)) {
            Ok(event) => match &event {
                InputEvent::Key { code, modifiers } => match code {
                    KeyCode::Esc | KeyCode::Char('q') => running = false,
                    KeyCode::Char('c') if modifiers.control => running = false,
                    _ => {}
                },
                InputEvent::Resize { width, height } => {
                    term.resize(*width, *height);
                    screen.resize(*width, *height);
                    wheel.set_bounds(wheel_bounds(*width, *height));
                }
                InputEvent::Shutdown => running = false,
                _ => {
                    wheel.handle_input(&event);
                }
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => running = false,
        }

        wheel.pump();
        if wheel.needs_redraw() {
            redraw(&mut screen, &wheel);
            term.present(&screen)?;
            wheel.clear_redraw();
        }
    }

    input.join();
    Ok(())
}
