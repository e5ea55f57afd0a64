use attractor_core::Point3;

/// Event emitted by the Euler solver after each integration step.
///
/// The initial state is not part of the output and produces no event, so
/// the first event has `step == 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step number, starting at 1.
    pub step: usize,

    /// Simulated time at this step, `step * dt`.
    pub time: f64,

    /// The state reached by this step.
    pub point: Point3,
}
