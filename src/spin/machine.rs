//! Spin machine: Owns the highlighted cell and the progress of a spin.
//!
//! A spin walks the highlight clockwise around the eight ring cells for a
//! fixed number of full laps and stops on a uniformly random cell. The
//! machine itself is thread-free and time-free: it hands out an
//! interpolation request ([`SpinPlan`]) when a spin starts, and is driven
//! by `on_frame`/`on_complete` callbacks while the interpolation runs.

use std::time::Duration;

use log::{debug, trace};
use rand::Rng;

use crate::layout::RING_CELLS;

/// Full laps every spin visibly completes before stopping.
pub const SPIN_LAPS: i64 = 3;

/// Fixed duration of one spin.
pub const SPIN_DURATION: Duration = Duration::from_millis(6000);

/// An interpolation request: run linearly `from -> to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinPlan {
    /// Starting value (the ring position the spin resumes from).
    pub from: i64,
    /// Final value (lap-adjusted stop position).
    pub to: i64,
    /// How long the run takes.
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Spinning { target: i64, lucky: u8 },
}

/// State machine for the wheel's spin animation.
///
/// One machine per widget; all mutation happens through the owning
/// widget's event handlers on a single thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinMachine {
    /// Ring position the next spin resumes counting laps from.
    start_position: u8,
    /// Currently highlighted ring cell, if any.
    highlighted: Option<u8>,
    phase: Phase,
}

impl SpinMachine {
    /// A fresh machine: idle, nothing highlighted, starting at ring cell 0.
    pub const fn new() -> Self {
        Self {
            start_position: 0,
            highlighted: None,
            phase: Phase::Idle,
        }
    }

    /// Whether a spin is in progress.
    pub const fn is_spinning(&self) -> bool {
        matches!(self.phase, Phase::Spinning { .. })
    }

    /// The currently highlighted ring cell (0..8), or `None`.
    pub const fn highlighted(&self) -> Option<u8> {
        self.highlighted
    }

    /// Ring position the next spin will resume from.
    pub const fn start_position(&self) -> u8 {
        self.start_position
    }

    /// Lap-adjusted stop value of the spin in progress, if any.
    pub const fn pending_target(&self) -> Option<i64> {
        match self.phase {
            Phase::Spinning { target, .. } => Some(target),
            Phase::Idle => None,
        }
    }

    /// Start a spin using the process-wide random generator.
    ///
    /// Returns the interpolation request to hand to a tween, or `None` if
    /// a spin is already in progress (the request is ignored, state is
    /// untouched).
    pub fn start_spin(&mut self) -> Option<SpinPlan> {
        self.start_spin_with(&mut rand::rng())
    }

    /// Start a spin drawing the stop cell from the given source.
    ///
    /// Every one of the eight ring cells is equally likely; the spin never
    /// stops on the action cell.
    pub fn start_spin_with<R: Rng>(&mut self, rng: &mut R) -> Option<SpinPlan> {
        if self.is_spinning() {
            trace!("spin requested while spinning, ignored");
            return None;
        }
        let lucky = rng.random_range(0..RING_CELLS);
        Some(self.begin(lucky))
    }

    /// Arm the spinning phase toward a known stop cell.
    fn begin(&mut self, lucky: u8) -> SpinPlan {
        let from = i64::from(self.start_position);
        let target = from + SPIN_LAPS * i64::from(RING_CELLS) + i64::from(lucky);
        self.phase = Phase::Spinning { target, lucky };
        debug!("spin started: from={from} target={target} lucky={lucky}");
        SpinPlan {
            from,
            to: target,
            duration: SPIN_DURATION,
        }
    }

    /// Apply one interpolation frame.
    ///
    /// Maps the interpolated value onto the ring and moves the highlight
    /// there. This is the only path that moves the highlight during a
    /// spin. Returns `true` if the highlight changed cell, `false` if it
    /// stayed put or no spin is in progress.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn on_frame(&mut self, value: i64) -> bool {
        if !self.is_spinning() {
            return false;
        }
        let cell = value.rem_euclid(i64::from(RING_CELLS)) as u8;
        if self.highlighted == Some(cell) {
            return false;
        }
        self.highlighted = Some(cell);
        true
    }

    /// Finish the spin in progress.
    ///
    /// The next spin resumes counting laps from the cell that just won,
    /// with no snap back to 0. Returns the winning ring cell, or `None`
    /// if no spin was in progress.
    pub fn on_complete(&mut self) -> Option<u8> {
        let Phase::Spinning { lucky, .. } = self.phase else {
            return None;
        };
        self.start_position = lucky;
        self.phase = Phase::Idle;
        debug!("spin complete: stopped on {lucky}");
        Some(lucky)
    }
}

impl Default for SpinMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_spin_from_zero() {
        let mut machine = SpinMachine::new();
        let plan = machine.begin(5);
        assert_eq!(plan.from, 0);
        assert_eq!(plan.to, 29);
        assert_eq!(plan.duration, SPIN_DURATION);
        assert_eq!(machine.pending_target(), Some(29));

        // Walk a few frames, ending on the target value.
        assert!(machine.on_frame(0));
        assert_eq!(machine.highlighted(), Some(0));
        machine.on_frame(13);
        assert_eq!(machine.highlighted(), Some(5));
        machine.on_frame(29);
        assert_eq!(machine.highlighted(), Some(5));

        assert_eq!(machine.on_complete(), Some(5));
        assert!(!machine.is_spinning());
        assert_eq!(machine.start_position(), 5);
        assert_eq!(machine.pending_target(), None);
        // Highlight stays on the winner after completion.
        assert_eq!(machine.highlighted(), Some(5));
    }

    #[test]
    fn test_target_carries_over_previous_winner() {
        let mut machine = SpinMachine::new();
        machine.begin(5);
        machine.on_complete();

        let plan = machine.begin(3);
        assert_eq!(plan.from, 5);
        assert_eq!(plan.to, 5 + 24 + 3);
        machine.on_complete();
        assert_eq!(machine.start_position(), 3);
        // Start position never accumulates past the ring.
        assert!(machine.start_position() < 8);
    }

    #[test]
    fn test_start_spin_while_spinning_is_noop() {
        let mut machine = SpinMachine::new();
        let mut rng = StdRng::seed_from_u64(7);
        let plan = machine.start_spin_with(&mut rng).unwrap();
        let snapshot = machine.clone();

        assert!(machine.start_spin_with(&mut rng).is_none());
        assert_eq!(machine, snapshot);
        assert_eq!(machine.pending_target(), Some(plan.to));
    }

    #[test]
    fn test_frame_ignored_while_idle() {
        let mut machine = SpinMachine::new();
        assert!(!machine.on_frame(3));
        assert_eq!(machine.highlighted(), None);
        assert_eq!(machine.on_complete(), None);
    }

    #[test]
    fn test_unchanged_frame_reports_clean() {
        let mut machine = SpinMachine::new();
        machine.begin(2);
        assert!(machine.on_frame(9));
        // Same ring cell again: nothing to redraw.
        assert!(!machine.on_frame(9));
        assert!(!machine.on_frame(17));
    }

    #[test]
    fn test_lucky_offsets_uniform() {
        let mut machine = SpinMachine::new();
        let mut rng = StdRng::seed_from_u64(0x1acc7);
        let mut counts = [0u32; 8];

        for _ in 0..10_000 {
            let plan = machine.start_spin_with(&mut rng).unwrap();
            let lucky = plan.to - plan.from - SPIN_LAPS * 8;
            counts[usize::try_from(lucky).unwrap()] += 1;
            machine.on_complete();
        }

        // Expected 1250 per cell; allow a generous band around it.
        for (cell, count) in counts.iter().enumerate() {
            assert!(
                (1100..=1400).contains(count),
                "cell {cell} chosen {count} times"
            );
        }
    }

    #[test]
    fn test_spin_never_stops_on_action_cell() {
        let mut machine = SpinMachine::new();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1000 {
            machine.start_spin_with(&mut rng).unwrap();
            let winner = machine.on_complete().unwrap();
            assert!(winner < 8);
        }
    }
}
