use crate::Branch;

/// Event emitted after each Halley step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Branch being solved.
    pub branch: Branch,

    /// Argument of `w·e^w = x`.
    pub x: f64,

    /// Iteration counter (1-based).
    pub iter: usize,

    /// The iterate after this step.
    pub w: f64,

    /// Size of this step, `|w_{n+1} - w_n|`.
    pub step: f64,
}
