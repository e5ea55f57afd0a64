use thiserror::Error;

use crate::Point3;

/// Errors that can occur when validating system parameters.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("dt must be positive, got {dt}")]
    NonPositiveStep { dt: f64 },

    #[cfg(feature = "serde")]
    #[error("invalid parameter file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Initial condition, physical constants, and step size for the Lorenz system.
///
/// Created once at configuration time and read-only thereafter. The
/// constructor is the validation boundary: once a `SystemParameters` exists,
/// its values are finite and `dt` is positive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "raw::Lorenz")
)]
pub struct SystemParameters {
    name: String,
    initial: Point3,
    sigma: f64,
    r: f64,
    b: f64,
    dt: f64,
}

impl SystemParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or `dt` is not positive.
    pub fn new(
        name: impl Into<String>,
        initial: Point3,
        sigma: f64,
        r: f64,
        b: f64,
        dt: f64,
    ) -> Result<Self, ParameterError> {
        check_initial(&initial)?;
        finite("sigma", sigma)?;
        finite("r", r)?;
        finite("b", b)?;
        check_dt(dt)?;

        Ok(Self {
            name: name.into(),
            initial,
            sigma,
            r,
            b,
            dt,
        })
    }

    /// The classic chaotic configuration: σ = 10, r = 28, b = 8/3, started
    /// from (1, 1, 1) with dt = 0.01.
    #[must_use]
    pub fn classic() -> Self {
        // Known-good values, unwrap is safe
        Self::new("Lorenz", Point3::new(1.0, 1.0, 1.0), 10.0, 28.0, 8.0 / 3.0, 0.01).unwrap()
    }

    /// Parses and validates parameters from a TOML document.
    ///
    /// Expected keys: `name`, `x0`, `y0`, `z0`, `sigma`, `r`, `b`, `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Parse`] for malformed TOML or missing keys,
    /// and the usual validation errors otherwise.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self, ParameterError> {
        let raw: raw::Lorenz = toml::from_str(source)?;
        Self::try_from(raw)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn initial(&self) -> Point3 {
        self.initial
    }

    /// Prandtl number.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Rayleigh number.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }
}

/// Initial condition, constants, and step size for the Rössler system.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "raw::Rossler")
)]
pub struct RosslerParameters {
    name: String,
    initial: Point3,
    a: f64,
    b: f64,
    c: f64,
    dt: f64,
}

impl RosslerParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or `dt` is not positive.
    pub fn new(
        name: impl Into<String>,
        initial: Point3,
        a: f64,
        b: f64,
        c: f64,
        dt: f64,
    ) -> Result<Self, ParameterError> {
        check_initial(&initial)?;
        finite("a", a)?;
        finite("b", b)?;
        finite("c", c)?;
        check_dt(dt)?;

        Ok(Self {
            name: name.into(),
            initial,
            a,
            b,
            c,
            dt,
        })
    }

    /// The standard chaotic configuration: a = 0.2, b = 0.2, c = 5.7.
    #[must_use]
    pub fn classic() -> Self {
        // Known-good values, unwrap is safe
        Self::new("Rössler", Point3::new(1.0, 1.0, 1.0), 0.2, 0.2, 5.7, 0.01).unwrap()
    }

    /// Parses and validates parameters from a TOML document.
    ///
    /// Expected keys: `name`, `x0`, `y0`, `z0`, `a`, `b`, `c`, `dt`.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Parse`] for malformed TOML or missing keys,
    /// and the usual validation errors otherwise.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self, ParameterError> {
        let raw: raw::Rossler = toml::from_str(source)?;
        Self::try_from(raw)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn initial(&self) -> Point3 {
        self.initial
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[must_use]
    pub fn dt(&self) -> f64 {
        self.dt
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ParameterError::NonFinite { field })
    }
}

fn check_initial(initial: &Point3) -> Result<(), ParameterError> {
    finite("x0", initial.x)?;
    finite("y0", initial.y)?;
    finite("z0", initial.z)
}

fn check_dt(dt: f64) -> Result<(), ParameterError> {
    finite("dt", dt)?;
    if dt <= 0.0 {
        return Err(ParameterError::NonPositiveStep { dt });
    }
    Ok(())
}

/// Flat on-disk layouts, validated through `TryFrom` on the way in.
#[cfg(feature = "serde")]
mod raw {
    use serde::Deserialize;

    use super::{ParameterError, RosslerParameters, SystemParameters};
    use crate::Point3;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct Lorenz {
        name: String,
        x0: f64,
        y0: f64,
        z0: f64,
        sigma: f64,
        r: f64,
        b: f64,
        dt: f64,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub(super) struct Rossler {
        name: String,
        x0: f64,
        y0: f64,
        z0: f64,
        a: f64,
        b: f64,
        c: f64,
        dt: f64,
    }

    impl TryFrom<Lorenz> for SystemParameters {
        type Error = ParameterError;

        fn try_from(raw: Lorenz) -> Result<Self, Self::Error> {
            let initial = Point3::new(raw.x0, raw.y0, raw.z0);
            Self::new(raw.name, initial, raw.sigma, raw.r, raw.b, raw.dt)
        }
    }

    impl TryFrom<Rossler> for RosslerParameters {
        type Error = ParameterError;

        fn try_from(raw: Rossler) -> Result<Self, Self::Error> {
            let initial = Point3::new(raw.x0, raw.y0, raw.z0);
            Self::new(raw.name, initial, raw.a, raw.b, raw.c, raw.dt)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn classic_lorenz_values() {
        let params = SystemParameters::classic();

        assert_eq!(params.name(), "Lorenz");
        assert_eq!(params.initial(), Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(params.sigma(), 10.0);
        assert_relative_eq!(params.r(), 28.0);
        assert_relative_eq!(params.b(), 8.0 / 3.0);
        assert_relative_eq!(params.dt(), 0.01);
    }

    #[test]
    fn rejects_non_positive_dt() {
        let origin = Point3::new(0.0, 0.0, 0.0);

        for dt in [0.0, -0.01] {
            let err = SystemParameters::new("bad", origin, 10.0, 28.0, 1.0, dt).unwrap_err();
            assert!(matches!(err, ParameterError::NonPositiveStep { .. }));
        }
    }

    #[test]
    fn rejects_non_finite_values() {
        let origin = Point3::new(0.0, 0.0, 0.0);

        let err = SystemParameters::new("bad", origin, f64::NAN, 28.0, 1.0, 0.01).unwrap_err();
        assert!(matches!(err, ParameterError::NonFinite { field: "sigma" }));

        let err = SystemParameters::new("bad", origin, 10.0, 28.0, 1.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, ParameterError::NonFinite { field: "dt" }));

        let start = Point3::new(0.0, f64::NEG_INFINITY, 0.0);
        let err = RosslerParameters::new("bad", start, 0.2, 0.2, 5.7, 0.01).unwrap_err();
        assert!(matches!(err, ParameterError::NonFinite { field: "y0" }));
    }

    #[test]
    fn error_messages_name_the_field() {
        let err = ParameterError::NonFinite { field: "r" };
        assert_eq!(err.to_string(), "r must be finite");

        let err = ParameterError::NonPositiveStep { dt: -1.0 };
        assert_eq!(err.to_string(), "dt must be positive, got -1");
    }

    #[cfg(feature = "serde")]
    mod toml_files {
        use super::*;

        const LORENZ: &str = r#"
            name = "Lorenz (rho = 99.96)"
            x0 = 0.0
            y0 = 1.0
            z0 = 0.0
            sigma = 10.0
            r = 99.96
            b = 2.6666666666666665
            dt = 0.005
        "#;

        #[test]
        fn loads_lorenz_parameters() {
            let params = SystemParameters::from_toml_str(LORENZ).expect("should parse");

            assert_eq!(params.name(), "Lorenz (rho = 99.96)");
            assert_eq!(params.initial(), Point3::new(0.0, 1.0, 0.0));
            assert_relative_eq!(params.r(), 99.96);
            assert_relative_eq!(params.dt(), 0.005);
        }

        #[test]
        fn loads_rossler_parameters() {
            let source = r#"
                name = "Rössler"
                x0 = 1.0
                y0 = 1.0
                z0 = 1.0
                a = 0.1
                b = 0.1
                c = 14.0
                dt = 0.02
            "#;

            let params = RosslerParameters::from_toml_str(source).expect("should parse");

            assert_relative_eq!(params.a(), 0.1);
            assert_relative_eq!(params.c(), 14.0);
        }

        #[test]
        fn validates_after_parsing() {
            let source = LORENZ.replace("dt = 0.005", "dt = -0.005");

            let err = SystemParameters::from_toml_str(&source).unwrap_err();

            assert!(matches!(err, ParameterError::NonPositiveStep { .. }));
        }

        #[test]
        fn missing_key_is_a_parse_error() {
            let source = LORENZ.replace("sigma = 10.0", "");

            let err = SystemParameters::from_toml_str(&source).unwrap_err();

            assert!(matches!(err, ParameterError::Parse(_)));
        }

        #[test]
        fn unknown_key_is_a_parse_error() {
            let source = format!("{LORENZ}\nrho = 28.0\n");

            let err = SystemParameters::from_toml_str(&source).unwrap_err();

            assert!(matches!(err, ParameterError::Parse(_)));
        }

        #[test]
        fn deserializes_when_embedded() {
            #[derive(serde::Deserialize)]
            struct Sweep {
                runs: Vec<SystemParameters>,
            }

            let source = format!("[[runs]]\n{LORENZ}\n[[runs]]\n{LORENZ}");
            let sweep: Sweep = toml::from_str(&source).expect("should parse");

            assert_eq!(sweep.runs.len(), 2);
            assert_eq!(sweep.runs[0], sweep.runs[1]);
        }
    }
}
