//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasPoint`] — events that carry the state reached at a point in time
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use attractor_core::Observer;
//! use attractor_observers::traits::{CanStopEarly, HasPoint};
//!
//! struct StopAfter {
//!     time: f64,
//! }
//!
//! impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for StopAfter {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.time() >= self.time).then(A::stop_early)
//!     }
//! }
//! ```

use attractor_core::Point3;
use attractor_solvers::transient::euler;

/// An event that carries the state reached at some simulated time.
pub trait HasPoint {
    /// Returns the state carried by this event.
    fn point(&self) -> Point3;

    /// Returns the simulated time of this event.
    fn time(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasPoint for euler::Event ---

impl HasPoint for euler::Event {
    fn point(&self) -> Point3 {
        self.point
    }

    fn time(&self) -> f64 {
        self.time
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for euler::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
