//! Reusable observers and trajectory renderers for attractor systems.
//!
//! This crate provides [`Observer`] implementations, capability traits that
//! let observers work across solvers, and the rendering side of the pipeline:
//! solvers produce a [`Trajectory`], renderers consume it.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasPoint`], [`CanStopEarly`])
//! - [`guard`] — [`DivergenceGuard`], an observer that stops runaway runs
//! - [`render`] — Display modes, the pure projection from trajectory to plot
//!   coordinates, and the [`Renderer`] trait
//!
//! # Features
//!
//! - `plot` — Enables [`PlotObserver`] and [`TrajectoryPlot`] for viewing
//!   results via egui. This feature adds dependencies on `eframe` and
//!   `egui_plot`.
//!
//! [`Observer`]: attractor_core::Observer
//! [`Trajectory`]: attractor_core::Trajectory
//! [`HasPoint`]: traits::HasPoint
//! [`CanStopEarly`]: traits::CanStopEarly
//! [`DivergenceGuard`]: guard::DivergenceGuard
//! [`Renderer`]: render::Renderer

pub mod guard;
pub mod render;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
mod trajectory_plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};

#[cfg(feature = "plot")]
pub use trajectory_plot::TrajectoryPlot;
