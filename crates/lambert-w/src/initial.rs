//! Initial approximations for Halley refinement.
//!
//! The domain is split into three regions:
//!
//! - Below [`NEAR_BRANCH_POINT`], on either branch, W has a square-root
//!   singularity at `-1/e` and is approximated by its series in
//!   `p = ±sqrt(2·(e·x + 1))`. Refinement there runs on `δ = w + 1`.
//! - On the principal branch up to `e`, W is small and smooth and a Padé
//!   approximant about zero is enough.
//! - Above `e` on the principal branch, and toward zero on the secondary
//!   branch, W follows the logarithmic asymptote `L1 - L2 + L2/L1`.

use std::f64::consts::E;

use crate::{Branch, domain::branch_point_offset};

/// Arguments below this use the branch-point series on either branch.
pub(crate) const NEAR_BRANCH_POINT: f64 = -0.25;

/// Coefficients of `w + 1` as a power series in `p`, starting at `p¹`.
const BRANCH_SERIES: [f64; 6] = [
    1.0,
    -1.0 / 3.0,
    11.0 / 72.0,
    -43.0 / 540.0,
    769.0 / 17280.0,
    -221.0 / 8505.0,
];

/// Where refinement starts, and in which variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Start {
    /// Refine `δ = w + 1` against `scaled_offset = e·x + 1`.
    BranchOffset { scaled_offset: f64, delta: f64 },

    /// Refine `w` directly.
    Direct { w: f64 },
}

/// Selects the initial approximation for `x` on `branch`.
///
/// Assumes `x` has passed domain validation and has no exact shortcut.
pub(crate) fn select(branch: Branch, x: f64) -> Start {
    if x < NEAR_BRANCH_POINT {
        let scaled_offset = (E * branch_point_offset(x)).max(0.0);
        let p = branch.sign() * (2.0 * scaled_offset).sqrt();
        return Start::BranchOffset {
            scaled_offset,
            delta: branch_series(p),
        };
    }

    let w = match branch {
        Branch::Principal if x <= E => pade(x),
        Branch::Principal => {
            let l1 = x.ln();
            asymptotic(l1, l1.ln())
        }
        Branch::Secondary => {
            let l1 = (-x).ln();
            asymptotic(l1, (-l1).ln())
        }
    };
    Start::Direct { w }
}

fn branch_series(p: f64) -> f64 {
    BRANCH_SERIES.iter().rev().fold(0.0, |acc, c| acc * p + c) * p
}

/// The [2/2] Padé approximant of W0 about zero.
fn pade(x: f64) -> f64 {
    x * (1.0 + 4.0 / 3.0 * x) / (1.0 + 7.0 / 3.0 * x + 5.0 / 6.0 * x * x)
}

fn asymptotic(l1: f64, l2: f64) -> f64 {
    l1 - l2 + l2 / l1
}

impl Start {
    /// Returns the approximation of W this start represents.
    pub(crate) fn w(&self) -> f64 {
        match *self {
            Start::BranchOffset { delta, .. } => delta - 1.0,
            Start::Direct { w } => w,
        }
    }
}
