//! Real branches of the Lambert W function.
//!
//! The Lambert W function is the multivalued inverse of `f(w) = w·e^w`. For
//! real arguments it has two real branches:
//!
//! - the principal branch, [`solve_w0`], with `w >= -1` for `x >= -1/e`
//! - the secondary branch, [`solve_w1`], with `w <= -1` for `-1/e <= x < 0`
//!
//! # Algorithm
//!
//! Each solve runs the same five stages:
//!
//! 1. Validate that `x` has a real solution on the branch.
//! 2. Return exact values where they are known: `-1` at the branch point `-1/e`,
//!    and `x` itself for principal-branch arguments too small to tell apart
//!    from their W.
//! 3. Pick an initial approximation for the region of `x`: a series about the
//!    branch point, a Padé approximant about zero, or a logarithmic asymptote.
//! 4. Refine with Halley's method until a step is within the tolerance.
//! 5. Take one more step with the residual in double-double arithmetic, so the
//!    result is the double nearest to W and adjacent arguments keep the
//!    branch's ordering.
//!
//! Every supported argument, from `1e-300` to `1e300` in magnitude, converges
//! within a handful of steps.
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per Halley step. Observers can return
//! [`Action::StopEarly`] to take the current iterate as the answer.
//!
//! # Example
//!
//! ```
//! use lambert_w::{solve_w0, solve_w1};
//!
//! let w = solve_w0(1.0, 1e-14)?;
//! assert!((w - 0.567_143_290_409_783_8).abs() <= 1e-14);
//!
//! let w = solve_w1(-0.1, 1e-14)?;
//! assert!((w - -3.577_152_063_957_297).abs() <= 1e-14);
//!
//! assert!(solve_w1(0.0, 1e-14).unwrap_err().is_out_of_bounds());
//! # Ok::<(), lambert_w::Error>(())
//! ```

mod action;
mod branch;
mod compensated;
mod config;
mod domain;
mod error;
mod event;
mod fast;
mod halley;
mod initial;
mod observer;
mod shortcut;
mod solution;


pub use action::Action;
pub use branch::Branch;
pub use config::{Config, ConfigError};
pub use domain::{BRANCH_POINT, PRINCIPAL_MAX};
pub use error::{Error, Violation};
pub use event::Event;
pub use fast::{fast_solve_w0, fast_solve_w1};
pub use observer::Observer;
pub use solution::{Solution, Status};

use tracing::{debug, trace};

use halley::{BranchOffset, Direct};
use initial::Start;

/// Returns the principal branch W0 at `x`.
///
/// `tol` bounds the final step `|w_{n+1} - w_n|`. A tolerance of zero asks
/// for full double precision.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x < -1/e` or `x > PRINCIPAL_MAX`,
/// [`Error::InvalidConfig`] if `tol` is negative or non-finite, and
/// [`Error::ConvergenceFailure`] if refinement does not converge.
pub fn solve_w0(x: f64, tol: f64) -> Result<f64, Error> {
    solve_branch(Branch::Principal, x, tol)
}

/// Returns the secondary branch W1 at `x`.
///
/// `tol` bounds the final step `|w_{n+1} - w_n|`. A tolerance of zero asks
/// for full double precision.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x < -1/e` or `x >= 0`,
/// [`Error::InvalidConfig`] if `tol` is negative or non-finite, and
/// [`Error::ConvergenceFailure`] if refinement does not converge.
pub fn solve_w1(x: f64, tol: f64) -> Result<f64, Error> {
    solve_branch(Branch::Secondary, x, tol)
}

/// Solves `w·e^w = x` on `branch`.
///
/// The observer receives an [`Event`] after each Halley step. Exact values
/// are returned without iterating and produce no events.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x` is outside the branch's domain, and
/// [`Error::ConvergenceFailure`] if the step does not meet the tolerance
/// within the configured iteration limit.
pub fn solve<Obs>(
    branch: Branch,
    x: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    domain::validate(branch, x)?;
    evaluate(branch, x, config, &mut observer)
}

/// Solves `w·e^w = x` on `branch` without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x` is outside the branch's domain, and
/// [`Error::ConvergenceFailure`] if refinement does not converge.
pub fn solve_unobserved(branch: Branch, x: f64, config: &Config) -> Result<Solution, Error> {
    solve(branch, x, config, ())
}

fn solve_branch(branch: Branch, x: f64, tol: f64) -> Result<f64, Error> {
    domain::validate(branch, x)?;
    let config = Config::with_tolerance(tol)?;
    evaluate(branch, x, &config, &mut ()).map(|solution| solution.w)
}

/// Solves a validated argument: shortcut, initial approximation, refinement.
fn evaluate<Obs>(
    branch: Branch,
    x: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    if let Some(w) = shortcut::exact(branch, x) {
        debug!(%branch, x, w, "exact value");
        return Ok(Solution::exact(w));
    }

    let start = initial::select(branch, x);
    trace!(%branch, x, w = start.w(), "initial approximation");

    match start {
        Start::BranchOffset {
            scaled_offset,
            delta,
        } => {
            let form = BranchOffset::new(scaled_offset);
            halley::refine(&form, delta, branch, x, config, observer)
        }
        Start::Direct { w } => halley::refine(&Direct::new(x), w, branch, x, config, observer),
    }
}
