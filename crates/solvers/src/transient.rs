//! Solvers that advance a system through time with a fixed step.
//!
//! # Solvers
//!
//! - [`euler`] — explicit (forward) Euler

pub mod euler;
