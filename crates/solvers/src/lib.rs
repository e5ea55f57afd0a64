//! Fixed-step integrators for attractor systems.
//!
//! Solvers take a [`DynamicalSystem`] and produce a [`Trajectory`]. They never
//! fail: out-of-domain input (a non-positive step, a negative duration) simply
//! yields an empty trajectory, and divergent systems are integrated as-is.
//!
//! # Modules
//!
//! - [`transient`] — time-stepping integrators
//!
//! [`DynamicalSystem`]: attractor_core::DynamicalSystem
//! [`Trajectory`]: attractor_core::Trajectory

pub mod transient;
