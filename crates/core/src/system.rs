use crate::{Point3, Velocity};

/// A three-dimensional equation system that can be integrated in time.
///
/// A system carries everything a fixed-step solver needs to produce a
/// [`Trajectory`](crate::Trajectory): where to start, how large a step to
/// take, and the derivative at any state. Each equation system (Lorenz,
/// Rössler, ...) is its own type implementing this trait.
///
/// The derivative must be a pure function of the state.
pub trait DynamicalSystem {
    /// Display name, used for window titles and log messages.
    fn name(&self) -> &str;

    /// The state the integration starts from.
    fn initial(&self) -> Point3;

    /// The fixed integration step size.
    fn dt(&self) -> f64;

    /// Returns the time derivative at `state`.
    fn derivative(&self, state: &Point3) -> Velocity;
}

impl<S: DynamicalSystem + ?Sized> DynamicalSystem for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn initial(&self) -> Point3 {
        (**self).initial()
    }

    fn dt(&self) -> f64 {
        (**self).dt()
    }

    fn derivative(&self, state: &Point3) -> Velocity {
        (**self).derivative(state)
    }
}
