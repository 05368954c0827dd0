/// Indicates how the solver produced its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An exact value was returned without iterating.
    Exact,

    /// The final step met the tolerance.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Lambert W solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The value of W on the requested branch.
    pub w: f64,

    /// Number of Halley steps taken.
    pub iters: usize,
}

impl Solution {
    pub(crate) fn exact(w: f64) -> Self {
        Self {
            status: Status::Exact,
            w,
            iters: 0,
        }
    }
}
