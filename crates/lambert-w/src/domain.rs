use std::f64::consts::E;

use crate::{Branch, Error, Violation};

/// The branch point `-1/e`, the smallest argument with a real solution.
///
/// Both branches meet here at `w = -1`.
pub const BRANCH_POINT: f64 = -1.0 / E;

/// Low-order part of `-1/e`, such that `BRANCH_POINT + BRANCH_POINT_LO`
/// carries the branch point to about twice double precision.
pub(crate) const BRANCH_POINT_LO: f64 = 1.242_875_367_278_836_3e-17;

/// The largest argument accepted on the principal branch.
///
/// Keeps `w·e^w` and its derivatives finite throughout refinement.
pub const PRINCIPAL_MAX: f64 = 1.0e300;

/// Checks that `x` has a real solution on `branch`.
///
/// # Errors
///
/// Returns [`Error::OutOfBounds`] if `x` is NaN, lies below the branch point,
/// exceeds [`PRINCIPAL_MAX`] on the principal branch, or is non-negative on
/// the secondary branch.
pub(crate) fn validate(branch: Branch, x: f64) -> Result<(), Error> {
    let out_of_bounds = |bound: f64, violation: Violation| Error::OutOfBounds {
        branch,
        x,
        bound,
        violation,
    };

    if x.is_nan() {
        return Err(out_of_bounds(f64::NAN, Violation::NotANumber));
    }
    if x < BRANCH_POINT {
        return Err(out_of_bounds(BRANCH_POINT, Violation::BelowBranchPoint));
    }

    match branch {
        Branch::Principal if x > PRINCIPAL_MAX => Err(out_of_bounds(
            PRINCIPAL_MAX,
            Violation::AboveOverflowCeiling,
        )),
        Branch::Secondary if x >= 0.0 => Err(out_of_bounds(0.0, Violation::NonNegative)),
        _ => Ok(()),
    }
}

/// Returns `x + 1/e` without the cancellation of the naive sum.
///
/// The subtraction of the high part is exact for arguments within a factor of
/// two of the branch point, which covers every argument this is used for.
pub(crate) fn branch_point_offset(x: f64) -> f64 {
    (x - BRANCH_POINT) - BRANCH_POINT_LO
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(result: Result<(), Error>) -> Violation {
        match result {
            Err(Error::OutOfBounds { violation, .. }) => violation,
            other => panic!("expected out of bounds, got {other:?}"),
        }
    }

    #[test]
    fn accepts_principal_domain() {
        for x in [BRANCH_POINT, -0.2, 0.0, 1.0, E, 1.0e300] {
            assert!(validate(Branch::Principal, x).is_ok(), "x = {x}");
        }
    }

    #[test]
    fn accepts_secondary_domain() {
        for x in [BRANCH_POINT, -0.3, -0.008, -1.0e-300, -f64::MIN_POSITIVE] {
            assert!(validate(Branch::Secondary, x).is_ok(), "x = {x}");
        }
    }

    #[test]
    fn rejects_below_branch_point() {
        let x = BRANCH_POINT - 1.0e-10;
        for branch in [Branch::Principal, Branch::Secondary] {
            assert_eq!(violation(validate(branch, x)), Violation::BelowBranchPoint);
        }
        assert_eq!(
            violation(validate(Branch::Principal, f64::NEG_INFINITY)),
            Violation::BelowBranchPoint
        );
    }

    #[test]
    fn rejects_principal_overflow() {
        for x in [1.01e300, f64::MAX, f64::INFINITY] {
            assert_eq!(
                violation(validate(Branch::Principal, x)),
                Violation::AboveOverflowCeiling
            );
        }
    }

    #[test]
    fn rejects_non_negative_secondary() {
        for x in [0.0, -0.0, 1.0e-300, 2.0] {
            assert_eq!(
                violation(validate(Branch::Secondary, x)),
                Violation::NonNegative
            );
        }
    }

    #[test]
    fn rejects_nan() {
        for branch in [Branch::Principal, Branch::Secondary] {
            assert_eq!(violation(validate(branch, f64::NAN)), Violation::NotANumber);
        }
    }

    #[test]
    fn reports_violated_bound() {
        let Err(Error::OutOfBounds { bound, x, .. }) = validate(Branch::Principal, 2.0e300)
        else {
            panic!("expected out of bounds");
        };
        assert_eq!(bound, PRINCIPAL_MAX);
        assert_eq!(x, 2.0e300);
    }

    #[test]
    fn branch_point_offset_is_small_and_positive_above_branch_point() {
        let offset = branch_point_offset(BRANCH_POINT + 1.0e-10);
        assert!((offset - 1.0e-10).abs() < 1.0e-16);

        // The rounded branch point sits just below the true one.
        assert!(branch_point_offset(BRANCH_POINT) < 0.0);
    }
}
