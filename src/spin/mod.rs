//! Spin module: The wheel's animation state machine.

mod machine;

pub use machine::{SpinMachine, SpinPlan, SPIN_DURATION, SPIN_LAPS};
