//! Voice profile calibration
//!
//! Measures each reference sample and averages the results into a single
//! profile. Callers decide how many samples they require; calibration itself
//! works from a single valid sample upward.

mod collector;

pub use collector::{build, build_at};
