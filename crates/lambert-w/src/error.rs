use thiserror::Error;

use crate::{Branch, config::ConfigError};

/// Errors that can occur while solving for W.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The argument has no real solution on the requested branch.
    #[error("{branch} argument x = {x} is out of bounds (limit {bound}): {violation}")]
    OutOfBounds {
        branch: Branch,
        x: f64,
        bound: f64,
        violation: Violation,
    },

    /// Refinement hit the iteration limit before the step met the tolerance.
    #[error(
        "{branch} failed to converge for x = {x} after {iters} iterations: \
         last step {step:e} exceeds tolerance {tolerance:e}"
    )]
    ConvergenceFailure {
        branch: Branch,
        x: f64,
        iters: usize,
        step: f64,
        tolerance: f64,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
}

/// The reason an argument lies outside a branch's domain.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    #[error("no real solution exists below the branch point -1/e")]
    BelowBranchPoint,

    #[error("argument exceeds the overflow ceiling of the principal branch")]
    AboveOverflowCeiling,

    #[error("the secondary branch is undefined for non-negative arguments")]
    NonNegative,

    #[error("argument is NaN")]
    NotANumber,
}

impl Error {
    /// Returns true if this is an [`Error::OutOfBounds`] error.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, Error::OutOfBounds { .. })
    }

    /// Returns true if this is an [`Error::ConvergenceFailure`] error.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Error::ConvergenceFailure { .. })
    }
}
