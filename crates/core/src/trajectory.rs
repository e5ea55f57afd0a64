use std::slice;

use crate::{Axis, Point3};

/// A time-ordered sequence of points produced by a single solve.
///
/// Insertion order is time order. A `Trajectory` exposes no mutators; once a
/// solver hands it back, the caller owns it exclusively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<Point3>,
}

impl Trajectory {
    /// Wraps an ordered list of points.
    #[must_use]
    pub fn new(points: Vec<Point3>) -> Self {
        Self { points }
    }

    /// Returns the points in time order.
    #[must_use]
    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the trajectory has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns an iterator over the points in time order.
    pub fn iter(&self) -> slice::Iter<'_, Point3> {
        self.points.iter()
    }

    /// Returns the earliest point, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Point3> {
        self.points.first()
    }

    /// Returns the latest point, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Point3> {
        self.points.last()
    }

    /// Flattens the trajectory into `[x0, y0, z0, x1, y1, z1, ...]`.
    ///
    /// The result always has a length of `3 * self.len()`.
    #[must_use]
    pub fn flatten(&self) -> Vec<f64> {
        self.points.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Projects every point onto the plane spanned by two axes.
    ///
    /// Each entry is `[horizontal, vertical]`, ready to hand to a 2D chart.
    #[must_use]
    pub fn projection(&self, horizontal: Axis, vertical: Axis) -> Vec<[f64; 2]> {
        self.points
            .iter()
            .map(|p| [p.component(horizontal), p.component(vertical)])
            .collect()
    }

    /// Consumes the trajectory and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3> {
        self.points
    }
}

impl From<Vec<Point3>> for Trajectory {
    fn from(points: Vec<Point3>) -> Self {
        Self::new(points)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point3;
    type IntoIter = slice::Iter<'a, Point3>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trajectory {
        Trajectory::new(vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(4.0, 5.0, 6.0),
        ])
    }

    #[test]
    fn flatten_uses_stride_of_three() {
        let flat = sample().flatten();

        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(flat.len(), 3 * sample().len());
    }

    #[test]
    fn projection_picks_requested_axes() {
        let xz = sample().projection(Axis::X, Axis::Z);
        let zy = sample().projection(Axis::Z, Axis::Y);

        assert_eq!(xz, vec![[1.0, 3.0], [4.0, 6.0]]);
        assert_eq!(zy, vec![[3.0, 2.0], [6.0, 5.0]]);
    }

    #[test]
    fn first_and_last_follow_time_order() {
        let trajectory = sample();

        assert_eq!(trajectory.first(), Some(&Point3::new(1.0, 2.0, 3.0)));
        assert_eq!(trajectory.last(), Some(&Point3::new(4.0, 5.0, 6.0)));
    }

    #[test]
    fn empty_trajectory() {
        let trajectory = Trajectory::default();

        assert!(trajectory.is_empty());
        assert!(trajectory.flatten().is_empty());
        assert!(trajectory.projection(Axis::X, Axis::Y).is_empty());
        assert_eq!(trajectory.first(), None);
    }

    #[test]
    fn iterates_by_reference() {
        let trajectory = sample();

        let xs: Vec<f64> = (&trajectory).into_iter().map(|p| p.x).collect();

        assert_eq!(xs, vec![1.0, 4.0]);
    }
}
