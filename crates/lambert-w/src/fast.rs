//! Fixed-cost evaluation for hot loops.
//!
//! These skip the convergence test and take exactly [`FAST_STEPS`] Halley
//! steps from the initial approximation. Halley's method roughly triples the
//! correct digits per step, so two steps reach a relative error below `1e-9`
//! everywhere in the domain.

use tracing::trace;

use crate::{
    Branch, Error, domain,
    halley::{self, BranchOffset, Direct},
    initial::{self, Start},
    shortcut,
};

/// Halley steps taken by the fast solvers.
const FAST_STEPS: usize = 2;

/// Returns an approximation of the principal branch W0 at `x` at fixed cost.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x < -1/e` or `x > PRINCIPAL_MAX`.
///
/// [`PRINCIPAL_MAX`]: crate::PRINCIPAL_MAX
pub fn fast_solve_w0(x: f64) -> Result<f64, Error> {
    fast_solve(Branch::Principal, x)
}

/// Returns an approximation of the secondary branch W1 at `x` at fixed cost.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x < -1/e` or `x >= 0`.
pub fn fast_solve_w1(x: f64) -> Result<f64, Error> {
    fast_solve(Branch::Secondary, x)
}

fn fast_solve(branch: Branch, x: f64) -> Result<f64, Error> {
    domain::validate(branch, x)?;

    if let Some(w) = shortcut::exact(branch, x) {
        return Ok(w);
    }

    let w = match initial::select(branch, x) {
        Start::BranchOffset {
            scaled_offset,
            delta,
        } => halley::polish(&BranchOffset::new(scaled_offset), delta, FAST_STEPS),
        Start::Direct { w } => halley::polish(&Direct::new(x), w, FAST_STEPS),
    };
    trace!(%branch, x, w, "fast solve");
    Ok(w)
}
