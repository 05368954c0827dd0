use crate::{Branch, domain::BRANCH_POINT};

/// Principal-branch arguments at or below this magnitude are their own W.
///
/// `W0(x) = x - x² + O(x³)`, and here `x²` is below half an ulp of `x`.
pub(crate) const SMALL_ARGUMENT: f64 = f64::EPSILON / 2.0;

/// Returns the exact value of W at arguments that need no iteration.
///
/// - `x = -1/e` on either branch gives `-1`, where the branches meet.
/// - `x = 0` on the principal branch gives `0`.
/// - `|x| <= SMALL_ARGUMENT` on the principal branch gives `x`.
///
/// Assumes `x` has already passed domain validation.
#[allow(clippy::float_cmp)]
pub(crate) fn exact(branch: Branch, x: f64) -> Option<f64> {
    if x == BRANCH_POINT {
        return Some(-1.0);
    }

    match branch {
        Branch::Principal if x.abs() <= SMALL_ARGUMENT => Some(x),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_point_is_minus_one_on_both_branches() {
        assert_eq!(exact(Branch::Principal, BRANCH_POINT), Some(-1.0));
        assert_eq!(exact(Branch::Secondary, BRANCH_POINT), Some(-1.0));
    }

    #[test]
    fn zero_and_tiny_arguments_are_their_own_value() {
        assert_eq!(exact(Branch::Principal, 0.0), Some(0.0));
        assert_eq!(exact(Branch::Principal, 1.0e-20), Some(1.0e-20));
        assert_eq!(exact(Branch::Principal, -1.0e-20), Some(-1.0e-20));
        assert_eq!(exact(Branch::Principal, SMALL_ARGUMENT), Some(SMALL_ARGUMENT));
    }

    #[test]
    fn ordinary_arguments_need_iteration() {
        assert_eq!(exact(Branch::Principal, 1.0e-10), None);
        assert_eq!(exact(Branch::Principal, 1.0), None);
        assert_eq!(exact(Branch::Secondary, -1.0e-20), None);
        assert_eq!(exact(Branch::Secondary, -0.3), None);
    }
}
