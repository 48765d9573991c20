//! Core utilities: math, randomness, timing and logging setup.

pub mod logging;
pub mod math;
pub mod random;
pub mod timer;
