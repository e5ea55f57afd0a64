use crate::{DynamicalSystem, Point3, SystemParameters, Velocity};

/// The Lorenz system:
///
/// ```text
/// ẋ = σ (y − x)
/// ẏ = x (r − z) − y
/// ż = x y − b z
/// ```
///
/// Each component of the derivative is exposed on its own so it can be
/// checked independently of any stepping loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Lorenz {
    params: SystemParameters,
}

impl Lorenz {
    #[must_use]
    pub fn new(params: SystemParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &SystemParameters {
        &self.params
    }

    /// ẋ = σ (y − x)
    #[must_use]
    pub fn dx(&self, state: &Point3) -> f64 {
        self.params.sigma() * (state.y - state.x)
    }

    /// ẏ = x (r − z) − y
    #[must_use]
    pub fn dy(&self, state: &Point3) -> f64 {
        state.x * (self.params.r() - state.z) - state.y
    }

    /// ż = x y − b z
    #[must_use]
    pub fn dz(&self, state: &Point3) -> f64 {
        state.x * state.y - self.params.b() * state.z
    }
}

impl From<SystemParameters> for Lorenz {
    fn from(params: SystemParameters) -> Self {
        Self::new(params)
    }
}

impl DynamicalSystem for Lorenz {
    fn name(&self) -> &str {
        self.params.name()
    }

    fn initial(&self) -> Point3 {
        self.params.initial()
    }

    fn dt(&self) -> f64 {
        self.params.dt()
    }

    fn derivative(&self, state: &Point3) -> Velocity {
        Velocity::new(self.dx(state), self.dy(state), self.dz(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn classic() -> Lorenz {
        Lorenz::new(SystemParameters::classic())
    }

    #[test]
    fn derivative_at_unit_point() {
        let lorenz = classic();
        let p = Point3::new(1.0, 1.0, 1.0);

        assert_relative_eq!(lorenz.dx(&p), 0.0);
        assert_relative_eq!(lorenz.dy(&p), 26.0);
        assert_relative_eq!(lorenz.dz(&p), -5.0 / 3.0);
    }

    #[test]
    fn derivative_combines_components() {
        let lorenz = classic();
        let p = Point3::new(-3.5, 2.0, 20.0);

        let v = lorenz.derivative(&p);

        assert_eq!(v, Velocity::new(lorenz.dx(&p), lorenz.dy(&p), lorenz.dz(&p)));
        assert_relative_eq!(v.dx, 55.0);
        assert_relative_eq!(v.dy, -3.5 * 8.0 - 2.0);
        assert_relative_eq!(v.dz, -7.0 - 8.0 / 3.0 * 20.0);
    }

    #[test]
    fn origin_is_a_fixed_point() {
        let v = classic().derivative(&Point3::new(0.0, 0.0, 0.0));

        assert_eq!(v, Velocity::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn derivatives_are_pure() {
        let lorenz = classic();
        let before = lorenz.clone();
        let p = Point3::new(0.3, -7.1, 12.9);

        let first = lorenz.derivative(&p);
        for _ in 0..10 {
            assert_eq!(lorenz.dx(&p).to_bits(), first.dx.to_bits());
            assert_eq!(lorenz.dy(&p).to_bits(), first.dy.to_bits());
            assert_eq!(lorenz.dz(&p).to_bits(), first.dz.to_bits());
        }

        assert_eq!(lorenz, before);
    }

    #[test]
    fn exposes_configuration() {
        let lorenz = classic();

        assert_eq!(lorenz.name(), "Lorenz");
        assert_eq!(lorenz.initial(), Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(lorenz.dt(), 0.01);
    }
}
