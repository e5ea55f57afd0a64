//! Bundled equation systems.
//!
//! Each system pairs a validated parameter record with its derivative and
//! implements [`DynamicalSystem`](crate::DynamicalSystem).
//!
//! - [`Lorenz`] — the Lorenz convection model
//! - [`Rossler`] — the Rössler attractor

mod lorenz;
mod rossler;

pub use lorenz::Lorenz;
pub use rossler::Rossler;
