//! Forward Euler solver for attractor systems.
//!
//! This module steps a [`DynamicalSystem`] forward in time using explicit
//! Euler with the system's fixed step size:
//!
//! ```text
//! state_{n+1} = state_n + derivative(state_n) * dt
//! ```
//!
//! The initial state is not part of the output, so integrating for `N` steps
//! yields exactly `N` points.
//!
//! # Example
//!
//! ```
//! use attractor_core::{Lorenz, SystemParameters};
//! use attractor_solvers::transient::euler;
//!
//! let lorenz = Lorenz::new(SystemParameters::classic());
//! let trajectory = euler::solve_for(&lorenz, 1.0);
//!
//! assert_eq!(trajectory.len(), 100);
//! ```

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use attractor_core::{DynamicalSystem, Observer, StepIntegrable, Trajectory};

/// Upper bound on the points reserved before integration starts.
///
/// Step counts can be arbitrarily large (up to `usize::MAX`), and an observer
/// may stop long before the end, so longer runs grow the buffer as they go.
const MAX_PREALLOCATED_STEPS: usize = 1 << 16;

/// Returns the number of whole steps of size `dt` that fit in `duration`.
///
/// This is `floor(duration / dt)`, or zero when that ratio is not a finite
/// positive number (for example when `dt <= 0` or either value is NaN).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn steps_for(duration: f64, dt: f64) -> usize {
    let ratio = (duration / dt).floor();
    if ratio.is_finite() && ratio > 0.0 {
        ratio as usize
    } else {
        0
    }
}

/// Integrates a system for `steps` forward Euler steps.
///
/// # Algorithm
///
/// 1. Start from `system.initial()`.
/// 2. For each step:
///    - Evaluate the derivative at the current state.
///    - Step the state forward: `state + derivative * dt`.
///    - Append the new state to the trajectory.
///    - Emit an [`Event`] to the observer.
///    - If the observer returns `StopEarly`, terminate.
/// 3. Return the solution with the full trajectory.
///
/// Non-finite states are not treated specially. A diverging system keeps
/// stepping, and the first non-finite state is logged as a warning.
///
/// # Observer
///
/// The observer receives an [`Event`] after each integration step and may
/// return [`Action::StopEarly`] to terminate the integration early.
pub fn solve<S, Obs>(system: &S, steps: usize, mut observer: Obs) -> Solution
where
    S: DynamicalSystem + ?Sized,
    Obs: Observer<Event, Action>,
{
    let dt = system.dt();
    log::debug!("integrating {}: {steps} steps with dt = {dt}", system.name());

    let mut points = Vec::with_capacity(steps.min(MAX_PREALLOCATED_STEPS));
    let mut state = system.initial();
    let mut diverged = !state.is_finite();

    for step in 1..=steps {
        let derivative = system.derivative(&state);
        state = state.step(derivative, dt);
        points.push(state);

        if !diverged && !state.is_finite() {
            diverged = true;
            log::warn!("{} became non-finite at step {step}: {state:?}", system.name());
        }

        let event = Event {
            step,
            time: time_at(step, dt),
            point: state,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("{} stopped by observer at step {step}", system.name());
            return Solution {
                status: Status::StoppedByObserver,
                trajectory: Trajectory::new(points),
                steps: step,
            };
        }
    }

    log::debug!("{} completed {steps} steps", system.name());
    Solution {
        status: Status::Complete,
        trajectory: Trajectory::new(points),
        steps,
    }
}

/// Integrates a system for `steps` forward Euler steps without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
pub fn solve_unobserved<S>(system: &S, steps: usize) -> Solution
where
    S: DynamicalSystem + ?Sized,
{
    solve(system, steps, ())
}

/// Integrates a system over `duration` units of simulated time.
///
/// Runs [`steps_for`]`(duration, system.dt())` steps and returns the
/// resulting trajectory. A zero or negative duration yields an empty
/// trajectory.
pub fn solve_for<S>(system: &S, duration: f64) -> Trajectory
where
    S: DynamicalSystem + ?Sized,
{
    solve_unobserved(system, steps_for(duration, system.dt())).trajectory
}

#[allow(clippy::cast_precision_loss)]
fn time_at(step: usize, dt: f64) -> f64 {
    step as f64 * dt
}
