//! Core traits and types for integrating three-dimensional chaotic systems.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! renderers build on:
//!
//! - [`Point3`], [`Velocity`], [`Axis`] — a sample of system state, its time
//!   derivative, and a way to address individual coordinates
//! - [`Trajectory`] — the time-ordered sequence of points produced by a solve
//! - [`StepIntegrable`] — types that can be stepped using their derivative
//! - [`DynamicalSystem`] — an equation system that knows its initial state,
//!   step size, and derivative
//! - [`Observer`] — receives solver events and optionally returns control actions
//! - [`SystemParameters`], [`RosslerParameters`] — validated configuration
//!   records for the bundled [`Lorenz`] and [`Rossler`] systems
//!
//! # Features
//!
//! - `serde` (default) — derives `Deserialize` for the parameter records and
//!   enables loading them from TOML.

mod observer;
mod params;
mod point;
mod step;
mod system;
mod trajectory;

pub mod systems;

pub use observer::Observer;
pub use params::{ParameterError, RosslerParameters, SystemParameters};
pub use point::{Axis, Point3, Velocity};
pub use step::{DerivativeOf, StepIntegrable};
pub use system::DynamicalSystem;
pub use systems::{Lorenz, Rossler};
pub use trajectory::Trajectory;
