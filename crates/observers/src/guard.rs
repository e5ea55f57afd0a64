//! An observer that stops integrations which run away.
//!
//! Solvers integrate divergent systems without complaint. When a caller would
//! rather keep only the bounded part of a run, pass a [`DivergenceGuard`] as
//! the observer.

use attractor_core::Observer;

use crate::traits::{CanStopEarly, HasPoint};

/// Stops the solver at the first non-finite state, or the first state with a
/// coordinate whose magnitude exceeds `limit`.
///
/// The offending state is still part of the returned trajectory, since the
/// solver records a point before it is observed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergenceGuard {
    limit: f64,
    tripped_at: Option<f64>,
}

impl DivergenceGuard {
    /// Creates a guard that trips on non-finite states only.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(f64::INFINITY)
    }

    /// Creates a guard that also trips when any `|coordinate| > limit`.
    #[must_use]
    pub fn with_limit(limit: f64) -> Self {
        Self {
            limit,
            tripped_at: None,
        }
    }

    /// Simulated time at which the guard tripped, if it has.
    #[must_use]
    pub fn tripped_at(&self) -> Option<f64> {
        self.tripped_at
    }
}

impl Default for DivergenceGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for DivergenceGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        let p = event.point();
        let escaped = !p.is_finite() || p.to_array().iter().any(|c| c.abs() > self.limit);
        if escaped {
            self.tripped_at = Some(event.time());
            return Some(A::stop_early());
        }
        None
    }
}

/// Allows `&mut DivergenceGuard` to be passed to solvers that take an
/// observer by value, so the guard can be inspected after the solve.
impl<E: HasPoint, A: CanStopEarly> Observer<E, A> for &mut DivergenceGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use attractor_core::{Lorenz, Point3, SystemParameters};
    use attractor_solvers::transient::euler::{self, Status};

    #[test]
    fn bounded_run_is_untouched() {
        let lorenz = Lorenz::new(SystemParameters::classic());
        let mut guard = DivergenceGuard::with_limit(1e3);

        let solution = euler::solve(&lorenz, 2_000, &mut guard);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.trajectory.len(), 2_000);
        assert_eq!(guard.tripped_at(), None);
    }

    #[test]
    fn stops_when_limit_is_exceeded() {
        let lorenz = Lorenz::new(SystemParameters::classic());
        let mut guard = DivergenceGuard::with_limit(10.0);

        let solution = euler::solve(&lorenz, 10_000, &mut guard);

        assert_eq!(solution.status, Status::StoppedByObserver);
        let last = solution.trajectory.last().expect("at least one point");
        assert!(last.to_array().iter().any(|c| c.abs() > 10.0));
        assert!(guard.tripped_at().is_some());
    }

    #[test]
    fn stops_on_non_finite_state() {
        let mut guard = DivergenceGuard::new();
        let event = euler::Event {
            step: 7,
            time: 0.7,
            point: Point3::new(f64::NAN, 0.0, 0.0),
        };

        let action: Option<euler::Action> = guard.observe(&event);

        assert_eq!(action, Some(euler::Action::StopEarly));
        assert_eq!(guard.tripped_at(), Some(0.7));
    }
}
