//! Tween Actor: Dedicated thread running one linear interpolation.
//!
//! This is the animation primitive behind a spin: interpolate a value from
//! `from` to `to` over a fixed duration, delivering per-frame values and a
//! single completion event over a channel. The consumer owns pacing of its
//! own reads; values are derived from elapsed wall-clock time, so a slow
//! reader skips frames rather than lagging behind.

use crossbeam_channel::{bounded, Receiver, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::messages::TweenEvent;

/// Interval between frame deliveries (~60 FPS).
pub const TWEEN_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// A running tween on its own thread.
pub struct TweenActor {
    /// Handle to the tween thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Receiver for tween events.
    rx: Receiver<TweenEvent>,
}

impl TweenActor {
    /// Spawn a tween interpolating `from -> to` linearly over `duration`.
    ///
    /// The final event sequence is guaranteed to be `Frame(to)` followed by
    /// `Complete`, so consumers always observe the exact end value.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the tween thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(from: i64, to: i64, duration: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Dropped frames are fine; the terminal pair below uses blocking
        // sends so completion is never lost to a full buffer.
        let (tx, rx) = bounded(64);

        let handle = thread::Builder::new()
            .name("luckywheel-tween".to_string())
            .spawn(move || {
                Self::run_loop(&tx, &shutdown_clone, from, to, duration);
            })
            .expect("Failed to spawn tween thread");

        Self {
            handle: Some(handle),
            shutdown,
            rx,
        }
    }

    /// Get a reference to the event receiver.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<TweenEvent> {
        &self.rx
    }

    /// Signal the tween to shutdown without completing.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the tween thread to finish.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main interpolation loop.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    fn run_loop(
        tx: &Sender<TweenEvent>,
        shutdown: &Arc<AtomicBool>,
        from: i64,
        to: i64,
        duration: Duration,
    ) {
        let start = Instant::now();

        loop {
            if shutdown.load(Ordering::Relaxed) {
                // Torn down mid-run: no completion event.
                return;
            }

            let elapsed = start.elapsed();
            if elapsed >= duration {
                break;
            }

            let frac = elapsed.as_secs_f64() / duration.as_secs_f64();
            let value = from + ((to - from) as f64 * frac).floor() as i64;
            // Non-blocking: if the receiver is behind, skip this frame.
            let _ = tx.try_send(TweenEvent::Frame(value));

            let remaining = duration - elapsed;
            thread::sleep(TWEEN_FRAME_INTERVAL.min(remaining));
        }

        let _ = tx.send(TweenEvent::Frame(to));
        let _ = tx.send(TweenEvent::Complete);
    }
}

impl Drop for TweenActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_run(from: i64, to: i64, duration: Duration) -> Vec<TweenEvent> {
        let tween = TweenActor::spawn(from, to, duration);
        let mut events = Vec::new();
        while let Ok(event) = tween.rx.recv_timeout(Duration::from_secs(2)) {
            let done = event == TweenEvent::Complete;
            events.push(event);
            if done {
                break;
            }
        }
        tween.join();
        events
    }

    #[test]
    fn test_completes_with_final_value_last() {
        let events = collect_run(0, 29, Duration::from_millis(120));
        assert!(events.len() >= 2);
        assert_eq!(events[events.len() - 1], TweenEvent::Complete);
        assert_eq!(events[events.len() - 2], TweenEvent::Frame(29));
        // Exactly one completion event.
        let completions = events.iter().filter(|e| **e == TweenEvent::Complete).count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_frames_nondecreasing() {
        let events = collect_run(5, 32, Duration::from_millis(150));
        let values: Vec<i64> = events
            .iter()
            .filter_map(|e| match e {
                TweenEvent::Frame(v) => Some(*v),
                TweenEvent::Complete => None,
            })
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]), "{values:?}");
        assert!(*values.first().unwrap() >= 5);
        assert_eq!(*values.last().unwrap(), 32);
    }

    #[test]
    fn test_zero_duration_still_completes() {
        let events = collect_run(0, 10, Duration::ZERO);
        assert_eq!(events, vec![TweenEvent::Frame(10), TweenEvent::Complete]);
    }

    #[test]
    fn test_shutdown_stops_without_completion() {
        let tween = TweenActor::spawn(0, 100, Duration::from_secs(60));
        tween.shutdown();
        thread::sleep(Duration::from_millis(50));
        // Drain whatever was buffered; completion must not be among it.
        while let Ok(event) = tween.rx.try_recv() {
            assert_ne!(event, TweenEvent::Complete);
        }
        tween.join();
    }
}
