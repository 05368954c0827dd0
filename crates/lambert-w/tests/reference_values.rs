//! Reference values for both branches.
//!
//! Each case is `(x, expected, tolerance)`. The tolerance is both the solver's
//! convergence tolerance and the allowed distance from the expected value. A
//! zero tolerance demands the exact value.

use std::f64::consts::E;

use lambert_w::{BRANCH_POINT, Error, Violation, solve_w0, solve_w1};

const W0_CASES: [(f64, f64, f64); 12] = [
    (BRANCH_POINT, -1.0, 0.0),
    (BRANCH_POINT + 1.0e-10, -0.999_976_683_741_885_2, 1.0e-14),
    (-0.2, -0.259_171_101_819_074, 1.0e-14),
    (-1.0e-20, -1.0e-20, 0.0),
    (0.0, 0.0, 0.0),
    (1.0e-20, 1.0e-20, 0.0),
    (0.2, 0.168_915_973_499_11, 1.0e-14),
    (E - 1.0e-10, 0.999_999_999_981_606, 1.0e-14),
    (E, 1.0, 0.0),
    (E + 1.0e-10, 1.000_000_000_018_39, 1.0e-14),
    (100.0, 3.385_630_140_290_05, 1.0e-6),
    (1.0e300, 684.247_208_629_761, 1.0e-12),
];

const W1_CASES: [(f64, f64, f64); 8] = [
    (BRANCH_POINT, -1.0, 0.0),
    (BRANCH_POINT + 1.0e-10, -1.000_023_316_620_552_3, 1.0e-13),
    (-0.3, -1.781_337_023_421_63, 1.0e-13),
    (-0.008 - 1.0e-10, -6.735_741_646_928_48, 1.0e-13),
    (-0.008, -6.735_741_661_607_79, 1.0e-13),
    (-0.008 + 1.0e-10, -6.735_741_676_287_11, 1.0e-13),
    (-1.0e-5, -14.163_600_815_810_2, 1.0e-12),
    (-1.0e-300, -697.322_776_295_46, 1.0e-11),
];

fn assert_within(branch: &str, x: f64, result: f64, expected: f64, tolerance: f64) {
    assert!(
        (result - expected).abs() <= tolerance,
        "{branch}({x:e}) = {result:e}, expected {expected:e} within {tolerance:e}"
    );
}

#[test]
fn w0_nominal() {
    for (x, expected, tolerance) in W0_CASES {
        let result = solve_w0(x, tolerance).expect("should solve");
        assert_within("W0", x, result, expected, tolerance);
    }
}

#[test]
fn w1_nominal() {
    for (x, expected, tolerance) in W1_CASES {
        let result = solve_w1(x, tolerance).expect("should solve");
        assert_within("W1", x, result, expected, tolerance);
    }
}

fn violation(result: Result<f64, Error>) -> Violation {
    match result {
        Err(Error::OutOfBounds { violation, .. }) => violation,
        other => panic!("expected out of bounds, got {other:?}"),
    }
}

#[test]
fn w0_errors() {
    assert_eq!(
        violation(solve_w0(BRANCH_POINT - 1.0e-10, 0.0)),
        Violation::BelowBranchPoint
    );
    assert_eq!(
        violation(solve_w0(1.01e300, 0.0)),
        Violation::AboveOverflowCeiling
    );
}

#[test]
fn w1_errors() {
    assert_eq!(
        violation(solve_w1(BRANCH_POINT - 1.0e-10, 0.0)),
        Violation::BelowBranchPoint
    );
    assert_eq!(violation(solve_w1(0.0, 0.0)), Violation::NonNegative);
}

#[test]
fn branches_coincide_at_the_branch_point() {
    let w0 = solve_w0(BRANCH_POINT, 0.0).unwrap();
    let w1 = solve_w1(BRANCH_POINT, 0.0).unwrap();
    assert_eq!(w0, -1.0);
    assert_eq!(w1, -1.0);
}

#[test]
fn branches_separate_just_above_the_branch_point() {
    let x = BRANCH_POINT + 1.0e-12;
    let w0 = solve_w0(x, 1.0e-15).unwrap();
    let w1 = solve_w1(x, 1.0e-15).unwrap();

    assert!(w0 > -1.0 && w1 < -1.0);
    // Both sit about sqrt(2·e·1e-12) from -1.
    assert!(((w0 + 1.0) - (-1.0 - w1)).abs() < 1.0e-10);
}
