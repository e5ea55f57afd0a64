use crate::{DynamicalSystem, Point3, RosslerParameters, Velocity};

/// The Rössler system:
///
/// ```text
/// ẋ = −y − z
/// ẏ = x + a y
/// ż = b + z (x − c)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rossler {
    params: RosslerParameters,
}

impl Rossler {
    #[must_use]
    pub fn new(params: RosslerParameters) -> Self {
        Self { params }
    }

    #[must_use]
    pub fn params(&self) -> &RosslerParameters {
        &self.params
    }

    #[must_use]
    pub fn dx(&self, state: &Point3) -> f64 {
        -state.y - state.z
    }

    #[must_use]
    pub fn dy(&self, state: &Point3) -> f64 {
        state.x + self.params.a() * state.y
    }

    #[must_use]
    pub fn dz(&self, state: &Point3) -> f64 {
        self.params.b() + state.z * (state.x - self.params.c())
    }
}

impl From<RosslerParameters> for Rossler {
    fn from(params: RosslerParameters) -> Self {
        Self::new(params)
    }
}

impl DynamicalSystem for Rossler {
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

    #[test]
    fn derivative_matches_equations() {
        let rossler = Rossler::new(RosslerParameters::classic());
        let p = Point3::new(1.0, 2.0, 3.0);

        let v = rossler.derivative(&p);

        assert_relative_eq!(v.dx, -5.0);
        assert_relative_eq!(v.dy, 1.4);
        assert_relative_eq!(v.dz, 0.2 + 3.0 * (1.0 - 5.7));
    }

    #[test]
    fn usable_as_trait_object() {
        let systems: Vec<Box<dyn DynamicalSystem>> = vec![
            Box::new(Rossler::new(RosslerParameters::classic())),
            Box::new(crate::Lorenz::new(crate::SystemParameters::classic())),
        ];

        let names: Vec<&str> = systems.iter().map(|s| s.name()).collect();

        assert_eq!(names, vec!["Rössler", "Lorenz"]);
    }
}
