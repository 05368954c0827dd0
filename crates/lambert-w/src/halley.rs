//! Halley refinement of `w·e^w = x`.
//!
//! The update is the classic Halley step for `f(w) = w·e^w - x`:
//!
//! ```text
//! w_{n+1} = w_n - f / (f' - f·f'' / (2·f'))
//! f'  = e^w·(w + 1)
//! f'' = e^w·(w + 2)
//! ```
//!
//! It is evaluated in one of two equivalent forms chosen to keep every term
//! finite and well conditioned:
//!
//! - [`Direct`] divides `f`, `f'` and `f''` by `e^w`, leaving the residual
//!   `w - x·e^{-w}`. This stays finite across `[1e-300, 1e300]` and down to
//!   the smallest subnormal on the secondary branch.
//! - [`BranchOffset`] iterates on `δ = w + 1` against `δ·e^δ - expm1(δ) =
//!   e·x + 1`. Near `-1/e` this avoids the cancellation in `w·e^w - x`, where
//!   `f'` vanishes and the direct residual loses most of its digits.
//!
//! Both forms leave a few ulps of rounding error in the converged iterate.
//! [`Direct::correct`] takes one last step with the residual evaluated in
//! double-double arithmetic, which lands on the nearest double to W.

use tracing::{debug, trace};

use crate::{
    Action, Branch, Config, Error, Event, Observer, Solution, Status,
    compensated::{self, Double},
};

/// Tolerance floor, in units of `|w|`.
///
/// Steps this small are at the resolution of doubles near `w`.
const ROUNDING_FLOOR: f64 = 4.0 * f64::EPSILON;

/// A residual form that Halley's method can be applied to.
pub(crate) trait Form {
    /// Returns the Halley step at the iteration variable `v`.
    fn step(&self, v: f64) -> f64;

    /// Maps the iteration variable back to `w`.
    fn w(&self, v: f64) -> f64;
}

/// Iterates on `w` with the residual scaled by `e^{-w}`.
pub(crate) struct Direct {
    x: f64,
}

impl Direct {
    pub(crate) fn new(x: f64) -> Self {
        Self { x }
    }

    /// Returns `x·e^{-w}`, falling back to logarithms when `e^{-w}` overflows.
    fn scaled_argument(&self, w: f64) -> f64 {
        let decay = (-w).exp();
        if decay.is_finite() {
            self.x * decay
        } else {
            (self.x.abs().ln() - w).exp().copysign(self.x)
        }
    }

    /// Returns `w - x·e^{-w}` with about 106 bits of precision.
    fn compensated_residual(&self, w: f64) -> f64 {
        let (k, mantissa) = compensated::exp_scaled(-w);
        let scaled = mantissa * compensated::scale_by_pow2(self.x, k);
        (Double::from(w) - scaled).to_f64()
    }

    /// Takes one Halley step from `w` using the compensated residual.
    ///
    /// From a converged iterate the step is a few ulps at most, and the
    /// result is the double nearest to the root.
    pub(crate) fn correct(&self, w: f64) -> f64 {
        w - halley_step(self.compensated_residual(w), w + 1.0, w + 2.0)
    }
}

impl Form for Direct {
    fn step(&self, w: f64) -> f64 {
        let residual = w - self.scaled_argument(w);
        halley_step(residual, w + 1.0, w + 2.0)
    }

    fn w(&self, w: f64) -> f64 {
        w
    }
}

/// Iterates on `δ = w + 1` near the branch point.
pub(crate) struct BranchOffset {
    scaled_offset: f64,
}

impl BranchOffset {
    /// Creates the form for `scaled_offset = e·x + 1`.
    pub(crate) fn new(scaled_offset: f64) -> Self {
        Self { scaled_offset }
    }
}

impl Form for BranchOffset {
    fn step(&self, delta: f64) -> f64 {
        let growth = delta.exp();
        let residual = delta * growth - delta.exp_m1() - self.scaled_offset;
        halley_step(residual, delta * growth, (1.0 + delta) * growth)
    }

    fn w(&self, delta: f64) -> f64 {
        delta - 1.0
    }
}

/// Returns the Halley step `2·f·f' / (2·f'² - f·f'')`.
///
/// A vanishing denominator only occurs exactly at the branch point, where the
/// root has already been reached.
fn halley_step(f: f64, df: f64, d2f: f64) -> f64 {
    let denominator = 2.0 * df * df - f * d2f;
    if denominator == 0.0 {
        0.0
    } else {
        2.0 * f * df / denominator
    }
}

/// Refines `start` until a step meets the configured tolerance.
///
/// The observer sees one [`Event`] per step and may stop the iteration early.
///
/// # Errors
///
/// Returns [`Error::ConvergenceFailure`] if the iteration limit is reached
/// first, or if an iterate is not finite.
pub(crate) fn refine<F, Obs>(
    form: &F,
    start: f64,
    branch: Branch,
    x: f64,
    config: &Config,
    observer: &mut Obs,
) -> Result<Solution, Error>
where
    F: Form,
    Obs: Observer<Event, Action>,
{
    let failure = |iters: usize, step: f64| {
        debug!(
            %branch,
            x,
            iters,
            step,
            tolerance = config.tolerance(),
            "refinement did not converge"
        );
        Error::ConvergenceFailure {
            branch,
            x,
            iters,
            step,
            tolerance: config.tolerance(),
        }
    };

    let mut v = start;
    let mut step = f64::INFINITY;

    for iter in 1..=config.max_iters() {
        let next = v - form.step(v);
        step = (next - v).abs();
        v = next;

        let w = form.w(v);
        trace!(%branch, x, iter, w, step, "halley step");

        if !w.is_finite() {
            return Err(failure(iter, step));
        }

        let event = Event {
            branch,
            x,
            iter,
            w,
            step,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                w,
                iters: iter,
            });
        }

        if step <= config.tolerance().max(ROUNDING_FLOOR * w.abs()) {
            let w = Direct::new(x).correct(w);
            trace!(%branch, x, w, "rounding correction");
            return Ok(Solution {
                status: Status::Converged,
                w,
                iters: iter,
            });
        }
    }

    Err(failure(config.max_iters(), step))
}

/// Applies a fixed number of Halley steps without a convergence test.
pub(crate) fn polish<F: Form>(form: &F, start: f64, steps: usize) -> f64 {
    let v = (0..steps).fold(start, |v, _| v - form.step(v));
    form.w(v)
}
