//! Rendering interface for trajectories.
//!
//! Rendering is one-way: a solver produces a [`Trajectory`], and a
//! [`Renderer`] draws it in one or more [`DisplayMode`]s. The mapping from
//! trajectory to plot coordinates lives in [`project`], a pure function, so
//! it can be checked without a display.

use attractor_core::{Axis, Point3, Trajectory};

/// How a trajectory should be drawn.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayMode {
    /// A 2D projection onto a pair of axes.
    Projection {
        horizontal: Axis,
        vertical: Axis,
        label: String,
    },

    /// An orthographic view of the full 3D point cloud.
    ///
    /// The cloud is rotated by `yaw` about the z axis, then by `pitch` about
    /// the x axis (both in radians), and viewed along the rotated y axis.
    Scatter3d { yaw: f64, pitch: f64 },
}

impl DisplayMode {
    /// A projection labeled with its axis names, e.g. `"x–z"`.
    #[must_use]
    pub fn projection(horizontal: Axis, vertical: Axis) -> Self {
        Self::Projection {
            horizontal,
            vertical,
            label: format!("{}–{}", horizontal.name(), vertical.name()),
        }
    }

    /// A 3D view from the given angles.
    #[must_use]
    pub fn scatter(yaw: f64, pitch: f64) -> Self {
        Self::Scatter3d { yaw, pitch }
    }

    /// The three axis-pair projections followed by a 3D view.
    #[must_use]
    pub fn overview() -> Vec<Self> {
        vec![
            Self::projection(Axis::X, Axis::Y),
            Self::projection(Axis::X, Axis::Z),
            Self::projection(Axis::Y, Axis::Z),
            Self::scatter(-std::f64::consts::FRAC_PI_4, 0.35),
        ]
    }

    /// Short title for a panel showing this mode.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Projection { label, .. } => label.clone(),
            Self::Scatter3d { yaw, pitch } => {
                format!("3D (yaw {:.0}°, pitch {:.0}°)", yaw.to_degrees(), pitch.to_degrees())
            }
        }
    }

    /// Labels for the horizontal and vertical plot axes.
    #[must_use]
    pub fn axis_labels(&self) -> (&'static str, &'static str) {
        match self {
            Self::Projection {
                horizontal,
                vertical,
                ..
            } => (horizontal.name(), vertical.name()),
            Self::Scatter3d { .. } => ("", ""),
        }
    }
}

/// Maps every point of `trajectory` to 2D plot coordinates for `mode`.
///
/// The result has one entry per point, in time order.
#[must_use]
pub fn project(trajectory: &Trajectory, mode: &DisplayMode) -> Vec<[f64; 2]> {
    match mode {
        DisplayMode::Projection {
            horizontal,
            vertical,
            ..
        } => trajectory.projection(*horizontal, *vertical),
        DisplayMode::Scatter3d { yaw, pitch } => {
            let view = View::new(*yaw, *pitch);
            trajectory.iter().map(|p| view.apply(p)).collect()
        }
    }
}

/// Draws trajectories.
///
/// Implementations own every presentation concern, including their failure
/// modes (for example, a missing display).
pub trait Renderer {
    type Error;

    /// Draws `trajectory` once per entry in `modes`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the trajectory cannot be presented.
    fn render(
        &mut self,
        name: &str,
        trajectory: &Trajectory,
        modes: &[DisplayMode],
    ) -> Result<(), Self::Error>;
}

/// Precomputed rotation for a 3D view.
struct View {
    cos_yaw: f64,
    sin_yaw: f64,
    cos_pitch: f64,
    sin_pitch: f64,
}

impl View {
    fn new(yaw: f64, pitch: f64) -> Self {
        let (sin_yaw, cos_yaw) = yaw.sin_cos();
        let (sin_pitch, cos_pitch) = pitch.sin_cos();
        Self {
            cos_yaw,
            sin_yaw,
            cos_pitch,
            sin_pitch,
        }
    }

    fn apply(&self, p: &Point3) -> [f64; 2] {
        // Yaw about z.
        let x = p.x * self.cos_yaw - p.y * self.sin_yaw;
        let y = p.x * self.sin_yaw + p.y * self.cos_yaw;

        // Pitch about x; only the screen-vertical component is needed.
        let z = y * self.sin_pitch + p.z * self.cos_pitch;

        [x, z]
    }
}
